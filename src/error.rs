//! Error types and handling for the `CanWeGoYet` skill

use thiserror::Error;

/// Main error type for the skill backend
#[derive(Error, Debug)]
pub enum SkillError {
    /// Network or connection failure talking to the analytics provider
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// Response body was not the JSON shape we expect
    #[error("Decode error: {message}")]
    Decode { message: String },

    /// Provider answered with its own error envelope
    #[error("Provider error: {message}")]
    Provider { message: String },

    /// Venue identifier lookup failed
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    /// Requested weekday/hour is not covered by the returned forecast
    #[error(
        "Forecast slot out of range: day {weekday_index} of {days}, hour {hour_index} of {hours}"
    )]
    IndexOutOfRange {
        weekday_index: usize,
        hour_index: usize,
        days: usize,
        hours: usize,
    },

    /// Provider returned no quiet hours for the venue
    #[error("No quiet hours available for venue {venue_id}")]
    NoData { venue_id: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Why a venue identifier could not be obtained
#[derive(Error, Debug)]
pub enum ResolutionError {
    #[error("Venue lookup failed for '{venue_name}': {source}")]
    Lookup {
        venue_name: String,
        #[source]
        source: Box<SkillError>,
    },

    #[error("Venue not found: '{venue_name}'")]
    NotFound { venue_name: String },
}

impl SkillError {
    /// Create a new transport error
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a new decode error
    pub fn decode<S: Into<String>>(message: S) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a new provider error
    pub fn provider<S: Into<String>>(message: S) -> Self {
        Self::Provider {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Stable name of the error kind, used as a log field
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            SkillError::Transport { .. } => "transport",
            SkillError::Decode { .. } => "decode",
            SkillError::Provider { .. } => "provider",
            SkillError::Resolution(ResolutionError::Lookup { .. }) => "resolution_lookup",
            SkillError::Resolution(ResolutionError::NotFound { .. }) => "resolution_not_found",
            SkillError::IndexOutOfRange { .. } => "index_out_of_range",
            SkillError::NoData { .. } => "no_data",
            SkillError::Validation { .. } => "validation",
            SkillError::Config { .. } => "config",
        }
    }
}

impl From<reqwest::Error> for SkillError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SkillError::transport(format!("request timed out: {err}"))
        } else if err.is_decode() {
            SkillError::decode(err.to_string())
        } else {
            SkillError::transport(err.to_string())
        }
    }
}
