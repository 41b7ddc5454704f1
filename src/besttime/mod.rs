//! `BestTime` API client
//!
//! This module provides the HTTP client for the venue-analytics provider: the
//! "new forecast" endpoint (weekly crowd forecast, also the source of the venue
//! identifier) and the "quiet hours" endpoint. Each call issues exactly one
//! request; there is no retry and no caching.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, Method, Url};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument, warn};

use crate::config::BestTimeConfig;
use crate::models::{ForecastResult, QuietHoursResult, VenueQuery};
use crate::{Result, SkillError};

pub mod response;

use response::{NewForecastResponse, QuietHoursResponse, StatusEnvelope};

const SLOW_RESPONSE_SECS: u64 = 5;

/// Source of venue forecasts
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Weekly forecast for a venue, including its identifier
    async fn fetch_new_forecast(&self, query: &VenueQuery) -> Result<ForecastResult>;

    /// Quiet hours for a previously resolved venue
    async fn fetch_quiet_hours(&self, venue_id: &str) -> Result<QuietHoursResult>;
}

/// Client for the `BestTime` REST API
pub struct BestTimeClient {
    /// HTTP client
    client: Client,
    /// API configuration
    config: BestTimeConfig,
}

impl BestTimeClient {
    /// Create a new `BestTime` client
    pub fn new(config: BestTimeConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("CanWeGoYet/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SkillError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url> {
        let base = self.config.base_url.trim_end_matches('/');
        Url::parse_with_params(&format!("{base}/{path}"), params)
            .map_err(|e| SkillError::config(format!("Invalid BestTime URL: {e}")))
    }

    /// Send one request and decode the JSON body into `T`, returning it with the elapsed time
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
    ) -> Result<(T, Duration)> {
        let start_time = Instant::now();
        let endpoint = url.path().to_string();

        debug!("BestTime request: {} {}", method, endpoint);

        let response = self
            .client
            .request(method, url)
            .send()
            .await
            .map_err(|e| {
                warn!("Network error calling {}: {}", endpoint, e);
                SkillError::from(e.without_url())
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            warn!("Failed to read body from {}: {}", endpoint, e);
            SkillError::transport(format!("failed to read response body: {}", e.without_url()))
        })?;

        let elapsed = start_time.elapsed();
        debug!(
            "BestTime response: {} in {:.3}s ({} bytes)",
            status,
            elapsed.as_secs_f64(),
            body.len()
        );

        if let Some(message) = serde_json::from_str::<StatusEnvelope>(&body)
            .ok()
            .and_then(|envelope| envelope.error_message())
        {
            warn!("BestTime rejected request to {} ({}): {}", endpoint, status, message);
            return Err(SkillError::provider(message));
        }

        if !status.is_success() {
            warn!("BestTime request to {} failed with {}", endpoint, status);
            return Err(SkillError::transport(format!(
                "API request failed with status: {} - {}",
                status,
                status.canonical_reason().unwrap_or("Unknown error")
            )));
        }

        let decoded = serde_json::from_str::<T>(&body).map_err(|e| {
            error!("Failed to parse response from {}: {}", endpoint, e);
            SkillError::decode(format!("unexpected response from {endpoint}: {e}"))
        })?;

        if elapsed.as_secs() > SLOW_RESPONSE_SECS {
            warn!("Slow BestTime response: {:.3}s", elapsed.as_secs_f64());
        }

        Ok((decoded, elapsed))
    }
}

#[async_trait]
impl ForecastProvider for BestTimeClient {
    #[instrument(skip(self), fields(venue = %query.name))]
    async fn fetch_new_forecast(&self, query: &VenueQuery) -> Result<ForecastResult> {
        let url = self.endpoint(
            "forecasts",
            &[
                ("venue_name", query.name.as_str()),
                ("venue_address", query.address.as_str()),
                (
                    "api_key_private",
                    self.config.api_key_private.expose_secret(),
                ),
            ],
        )?;

        let (response, elapsed): (NewForecastResponse, _) =
            self.request(Method::POST, url).await?;
        let forecast = ForecastResult::from(response);

        info!(
            "Retrieved forecast for '{}' ({} days, venue id {}) in {:.3}s",
            forecast.venue_name,
            forecast.day_analyses.len(),
            forecast.venue_id,
            elapsed.as_secs_f64()
        );

        Ok(forecast)
    }

    #[instrument(skip(self))]
    async fn fetch_quiet_hours(&self, venue_id: &str) -> Result<QuietHoursResult> {
        let url = self.endpoint(
            "forecasts/quiet",
            &[
                ("venue_id", venue_id),
                ("api_key_public", self.config.api_key_public.expose_secret()),
            ],
        )?;

        let (response, elapsed): (QuietHoursResponse, _) =
            self.request(Method::GET, url).await?;
        let quiet_hours = QuietHoursResult::from(response);

        info!(
            "Retrieved {} quiet hours for venue {} in {:.3}s",
            quiet_hours.quiet_hours.len(),
            venue_id,
            elapsed.as_secs_f64()
        );

        Ok(quiet_hours)
    }
}

#[cfg(test)]
pub(crate) mod stub {
    //! In-memory provider for exercising the query flows

    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Replays canned results; `None` behaves like a refused connection
    #[derive(Default)]
    pub struct StubForecastProvider {
        pub forecast: Option<ForecastResult>,
        pub quiet_hours: Option<QuietHoursResult>,
        pub forecast_calls: AtomicUsize,
        pub quiet_hours_calls: AtomicUsize,
        pub last_venue_id: Mutex<Option<String>>,
    }

    impl StubForecastProvider {
        pub fn with_forecast(forecast: ForecastResult) -> Self {
            Self {
                forecast: Some(forecast),
                ..Self::default()
            }
        }

        pub fn forecast_calls(&self) -> usize {
            self.forecast_calls.load(Ordering::SeqCst)
        }

        pub fn quiet_hours_calls(&self) -> usize {
            self.quiet_hours_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ForecastProvider for StubForecastProvider {
        async fn fetch_new_forecast(&self, _query: &VenueQuery) -> Result<ForecastResult> {
            self.forecast_calls.fetch_add(1, Ordering::SeqCst);
            self.forecast
                .clone()
                .ok_or_else(|| SkillError::transport("connection refused"))
        }

        async fn fetch_quiet_hours(&self, venue_id: &str) -> Result<QuietHoursResult> {
            self.quiet_hours_calls.fetch_add(1, Ordering::SeqCst);
            if let Ok(mut last) = self.last_venue_id.lock() {
                *last = Some(venue_id.to_string());
            }
            self.quiet_hours
                .clone()
                .ok_or_else(|| SkillError::transport("connection refused"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn client() -> BestTimeClient {
        BestTimeClient::new(BestTimeConfig {
            base_url: "https://besttime.app/api/v1/".to_string(),
            api_key_private: SecretString::from("pri_key".to_string()),
            api_key_public: SecretString::from("pub_key".to_string()),
            timeout_seconds: 5,
        })
        .unwrap()
    }

    #[test]
    fn test_endpoint_encodes_parameters() {
        let url = client()
            .endpoint(
                "forecasts",
                &[("venue_name", "Barnes & Noble"), ("venue_address", "5th Ave, NYC")],
            )
            .unwrap();

        assert_eq!(url.path(), "/api/v1/forecasts");
        assert_eq!(
            url.query(),
            Some("venue_name=Barnes+%26+Noble&venue_address=5th+Ave%2C+NYC")
        );
    }

    #[tokio::test]
    async fn test_request_reports_elapsed_time() {
        let app = axum::Router::new().route(
            "/api/v1/forecasts/quiet",
            axum::routing::get(|| async {
                tokio::time::sleep(Duration::from_millis(50)).await;
                r#"{"status": "OK", "analysis": {"quiet_hours_list_12h": ["8 AM"]}}"#
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

        let client = BestTimeClient::new(BestTimeConfig {
            base_url: format!("http://{addr}/api/v1"),
            ..client().config
        })
        .unwrap();
        let url = client.endpoint("forecasts/quiet", &[("venue_id", "ven_1")]).unwrap();

        let (response, elapsed): (QuietHoursResponse, _) =
            client.request(Method::GET, url).await.unwrap();

        assert_eq!(response.analysis.quiet_hours_list, vec!["8 AM"]);
        assert!(elapsed >= Duration::from_millis(50));
        assert!(elapsed < client.config.timeout());
    }
}
