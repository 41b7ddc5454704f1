//! Venue Resolution Module
//!
//! The quiet-hours endpoint only accepts the provider's opaque venue identifier,
//! so a venue name and address have to be turned into one first. The provider
//! hands out identifiers as part of a forecast response.

use tracing::{debug, warn};

use crate::besttime::ForecastProvider;
use crate::error::ResolutionError;
use crate::models::VenueQuery;
use crate::Result;

/// Service for resolving venue queries into provider identifiers
pub struct VenueResolver;

impl VenueResolver {
    /// Resolve a venue name and address into the provider's venue identifier.
    ///
    /// A failed forecast call becomes `ResolutionError::Lookup`; an empty
    /// identifier in an otherwise valid response becomes `ResolutionError::NotFound`.
    pub async fn resolve_venue_id<P: ForecastProvider + ?Sized>(
        provider: &P,
        query: &VenueQuery,
    ) -> Result<String> {
        debug!("Resolving venue id for '{}' at '{}'", query.name, query.address);

        let forecast = provider
            .fetch_new_forecast(query)
            .await
            .map_err(|e| ResolutionError::Lookup {
                venue_name: query.name.clone(),
                source: Box::new(e),
            })?;

        if forecast.venue_id.trim().is_empty() {
            warn!("Provider returned no venue id for '{}'", query.name);
            return Err(ResolutionError::NotFound {
                venue_name: query.name.clone(),
            }
            .into());
        }

        debug!("Resolved '{}' to venue id {}", query.name, forecast.venue_id);
        Ok(forecast.venue_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::besttime::stub::StubForecastProvider;
    use crate::models::ForecastResult;
    use crate::SkillError;

    fn forecast_with_id(venue_id: &str) -> ForecastResult {
        ForecastResult {
            venue_id: venue_id.to_string(),
            venue_name: "Central Park".to_string(),
            venue_address: "New York, NY".to_string(),
            day_analyses: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_resolve_returns_identifier() {
        let provider = StubForecastProvider::with_forecast(forecast_with_id("ven_abc123"));
        let query = VenueQuery::new("Central Park", "NYC");

        let venue_id = VenueResolver::resolve_venue_id(&provider, &query).await.unwrap();

        assert_eq!(venue_id, "ven_abc123");
        assert_eq!(provider.forecast_calls(), 1);
    }

    #[tokio::test]
    async fn test_resolve_wraps_failed_call() {
        let provider = StubForecastProvider::default();
        let query = VenueQuery::new("Central Park", "NYC");

        let err = VenueResolver::resolve_venue_id(&provider, &query)
            .await
            .unwrap_err();

        match err {
            SkillError::Resolution(ResolutionError::Lookup { venue_name, source }) => {
                assert_eq!(venue_name, "Central Park");
                assert!(matches!(*source, SkillError::Transport { .. }));
            }
            other => panic!("expected lookup failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_resolve_empty_identifier_is_not_found() {
        let provider = StubForecastProvider::with_forecast(forecast_with_id(""));
        let query = VenueQuery::new("Nowhere Diner", "Atlantis");

        let err = VenueResolver::resolve_venue_id(&provider, &query)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            SkillError::Resolution(ResolutionError::NotFound { .. })
        ));
    }
}
