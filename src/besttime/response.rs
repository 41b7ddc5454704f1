//! `BestTime` API response structures and conversion utilities

use serde::Deserialize;

use crate::models::{DayAnalysis, ForecastResult, HourAnalysis, QuietHoursResult};

/// Minimal view of any response, used to spot provider error envelopes
#[derive(Debug, Deserialize)]
pub struct StatusEnvelope {
    pub status: Option<String>,
    pub message: Option<String>,
}

impl StatusEnvelope {
    /// Provider message if the envelope reports an error
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        match self.status.as_deref() {
            Some(status) if status.eq_ignore_ascii_case("error") => Some(
                self.message
                    .clone()
                    .unwrap_or_else(|| "unspecified provider error".to_string()),
            ),
            _ => None,
        }
    }
}

/// Response of the "new forecast" endpoint
#[derive(Debug, Deserialize)]
pub struct NewForecastResponse {
    pub status: Option<String>,
    pub venue_info: VenueInfo,
    pub analysis: Vec<DayForecast>,
}

#[derive(Debug, Deserialize)]
pub struct VenueInfo {
    pub venue_id: String,
    pub venue_name: String,
    pub venue_address: String,
}

/// One day of the forecast; days arrive in `day_int` order starting Monday
#[derive(Debug, Deserialize)]
pub struct DayForecast {
    pub hour_analysis: Vec<HourForecast>,
}

#[derive(Debug, Deserialize)]
pub struct HourForecast {
    #[serde(rename = "intensity_txt")]
    pub intensity: String,
}

/// Response of the "quiet hours" endpoint
#[derive(Debug, Deserialize)]
pub struct QuietHoursResponse {
    pub status: Option<String>,
    pub analysis: QuietHourAnalysis,
}

#[derive(Debug, Deserialize)]
pub struct QuietHourAnalysis {
    #[serde(rename = "quiet_hours_list_12h")]
    pub quiet_hours_list: Vec<String>,
}

impl From<NewForecastResponse> for ForecastResult {
    fn from(response: NewForecastResponse) -> Self {
        Self {
            venue_id: response.venue_info.venue_id,
            venue_name: response.venue_info.venue_name,
            venue_address: response.venue_info.venue_address,
            day_analyses: response
                .analysis
                .into_iter()
                .map(|day| DayAnalysis {
                    hour_analyses: day
                        .hour_analysis
                        .into_iter()
                        .map(|hour| HourAnalysis {
                            intensity_label: hour.intensity,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

impl From<QuietHoursResponse> for QuietHoursResult {
    fn from(response: QuietHoursResponse) -> Self {
        Self {
            quiet_hours: response.analysis.quiet_hours_list,
        }
    }
}
