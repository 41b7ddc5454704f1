//! Weekly crowd forecast and quiet-hours models

use serde::{Deserialize, Serialize};

use crate::{Result, SkillError};

/// Weekly crowd forecast for a single venue
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ForecastResult {
    /// Opaque identifier issued by the provider
    pub venue_id: String,
    /// Venue name as known by the provider
    pub venue_name: String,
    /// Venue address as known by the provider
    pub venue_address: String,
    /// One entry per weekday, index 0 is the provider's week start
    pub day_analyses: Vec<DayAnalysis>,
}

/// Crowd forecast for one day
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct DayAnalysis {
    /// One entry per hour of the day (0-23)
    pub hour_analyses: Vec<HourAnalysis>,
}

/// Crowd forecast for one hour
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HourAnalysis {
    /// Human-readable density descriptor, e.g. "Low" or "Above average"
    pub intensity_label: String,
}

/// Position inside the weekly forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastSlot {
    pub weekday_index: usize,
    pub hour_index: usize,
}

/// Quiet hours of a venue in chronological order
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct QuietHoursResult {
    /// Spoken-style hour labels such as "8 AM"
    pub quiet_hours: Vec<String>,
}

impl ForecastSlot {
    #[must_use]
    pub fn new(weekday_index: usize, hour_index: usize) -> Self {
        Self {
            weekday_index,
            hour_index,
        }
    }
}

impl ForecastResult {
    /// Intensity label for the given slot.
    ///
    /// Both indices are checked against what the provider actually returned, so a
    /// partial week or a truncated day yields `IndexOutOfRange` instead of a panic.
    pub fn intensity_at(&self, slot: ForecastSlot) -> Result<&str> {
        let out_of_range = |hours: usize| SkillError::IndexOutOfRange {
            weekday_index: slot.weekday_index,
            hour_index: slot.hour_index,
            days: self.day_analyses.len(),
            hours,
        };

        let day = self
            .day_analyses
            .get(slot.weekday_index)
            .ok_or_else(|| out_of_range(0))?;

        day.hour_analyses
            .get(slot.hour_index)
            .map(|hour| hour.intensity_label.as_str())
            .ok_or_else(|| out_of_range(day.hour_analyses.len()))
    }
}

impl DayAnalysis {
    /// Build a day from its hourly labels, hour 0 first
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            hour_analyses: labels
                .into_iter()
                .map(|label| HourAnalysis {
                    intensity_label: label.into(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forecast_with_days(days: usize) -> ForecastResult {
        ForecastResult {
            venue_id: "ven_123".to_string(),
            venue_name: "Central Park".to_string(),
            venue_address: "NYC".to_string(),
            day_analyses: (0..days)
                .map(|day| DayAnalysis::from_labels((0..24).map(|hour| format!("d{day}h{hour}"))))
                .collect(),
        }
    }

    #[test]
    fn test_intensity_at_within_bounds() {
        let forecast = forecast_with_days(7);
        assert_eq!(forecast.intensity_at(ForecastSlot::new(0, 0)).unwrap(), "d0h0");
        assert_eq!(forecast.intensity_at(ForecastSlot::new(6, 23)).unwrap(), "d6h23");
    }

    #[test]
    fn test_intensity_at_missing_day() {
        let forecast = forecast_with_days(3);
        let err = forecast.intensity_at(ForecastSlot::new(5, 10)).unwrap_err();
        assert!(matches!(
            err,
            SkillError::IndexOutOfRange {
                weekday_index: 5,
                hour_index: 10,
                days: 3,
                hours: 0
            }
        ));
    }

    #[test]
    fn test_intensity_at_missing_hour() {
        let mut forecast = forecast_with_days(7);
        forecast.day_analyses[2] = DayAnalysis::from_labels(["Low", "Low"]);
        let err = forecast.intensity_at(ForecastSlot::new(2, 14)).unwrap_err();
        assert!(matches!(
            err,
            SkillError::IndexOutOfRange {
                days: 7,
                hours: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_intensity_at_empty_forecast() {
        let forecast = forecast_with_days(0);
        assert!(forecast.intensity_at(ForecastSlot::new(0, 0)).is_err());
    }
}
