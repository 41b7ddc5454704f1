//! Quiet hours of a venue, rendered as a spoken sentence

use tracing::debug;

use crate::besttime::ForecastProvider;
use crate::{Result, SkillError};

/// Join items the way they are spoken: "A", "A and B", "A, B, and C".
///
/// Returns `None` for an empty slice.
#[must_use]
pub fn join_as_prose<S: AsRef<str>>(items: &[S]) -> Option<String> {
    match items {
        [] => None,
        [only] => Some(only.as_ref().to_string()),
        [first, second] => Some(format!("{} and {}", first.as_ref(), second.as_ref())),
        [init @ .., last] => {
            let mut prose = String::new();
            for item in init {
                prose.push_str(item.as_ref());
                prose.push_str(", ");
            }
            prose.push_str("and ");
            prose.push_str(last.as_ref());
            Some(prose)
        }
    }
}

/// Sentence listing the quiet hours of an already resolved venue
pub async fn quiet_hours_sentence<P: ForecastProvider + ?Sized>(
    provider: &P,
    venue_id: &str,
) -> Result<String> {
    let result = provider.fetch_quiet_hours(venue_id).await?;
    debug!("Venue {} has {} quiet hours", venue_id, result.quiet_hours.len());

    let hours = join_as_prose(&result.quiet_hours).ok_or_else(|| SkillError::NoData {
        venue_id: venue_id.to_string(),
    })?;

    Ok(format!("The quiet hours are {hours}"))
}
