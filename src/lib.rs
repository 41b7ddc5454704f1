//! `CanWeGoYet` - voice skill backend for venue crowd levels
//!
//! This library answers two questions about a named venue, "how crowded is it
//! right now?" and "when are its quiet hours?", by querying the `BestTime`
//! venue-analytics API and phrasing the answer as speech.

pub mod alexa;
pub mod api;
pub mod besttime;
pub mod clock;
pub mod config;
pub mod density;
pub mod dispatcher;
pub mod error;
pub mod logging;
pub mod models;
pub mod quiet_hours;
pub mod venue_resolver;
pub mod web;

// Re-export core types for public API
pub use alexa::{IntentRequest, SkillRequest, SkillResponse, SpokenResponse};
pub use besttime::{BestTimeClient, ForecastProvider};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::SkillConfig;
pub use dispatcher::{Intent, IntentDispatcher};
pub use error::{ResolutionError, SkillError};
pub use models::{ForecastResult, ForecastSlot, QuietHoursResult, VenueQuery};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, SkillError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
