//! Data models for the CanWeGoYet skill
//!
//! This module contains the core domain models organized by concern:
//! - Venue: the user-supplied venue name and address
//! - Forecast: weekly crowd forecast and quiet hours returned by the analytics provider

pub mod forecast;
pub mod venue;

// Re-export all public types for convenient access
pub use forecast::{DayAnalysis, ForecastResult, ForecastSlot, HourAnalysis, QuietHoursResult};
pub use venue::VenueQuery;
