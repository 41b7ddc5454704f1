//! Current crowd density for a venue

use tracing::debug;

use crate::besttime::ForecastProvider;
use crate::models::{ForecastSlot, VenueQuery};
use crate::Result;

/// Sentence describing how busy the venue is at `slot`.
///
/// The venue name in the sentence is the one the user asked about, not the
/// provider's normalized name.
pub async fn current_density<P: ForecastProvider + ?Sized>(
    provider: &P,
    query: &VenueQuery,
    slot: ForecastSlot,
) -> Result<String> {
    let forecast = provider.fetch_new_forecast(query).await?;
    let intensity = forecast.intensity_at(slot)?;

    debug!(
        "Intensity for '{}' at day {} hour {}: {}",
        query.name, slot.weekday_index, slot.hour_index, intensity
    );

    Ok(format!(
        "The current population density at {} is {}",
        query.name, intensity
    ))
}
