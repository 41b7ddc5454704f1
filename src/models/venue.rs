//! Venue query model built from intent slots

use serde::{Deserialize, Serialize};

use crate::{Result, SkillError};

/// Venue the user asked about
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct VenueQuery {
    /// Venue name as spoken by the user
    pub name: String,
    /// Venue address as spoken by the user
    pub address: String,
}

impl VenueQuery {
    /// Create a venue query without validation
    #[must_use]
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }

    /// Create a venue query, rejecting blank name or address.
    ///
    /// Values are kept exactly as given; only the emptiness check trims.
    pub fn parse(name: &str, address: &str) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(SkillError::validation("venue name is empty"));
        }
        if address.trim().is_empty() {
            return Err(SkillError::validation(format!(
                "venue address is empty for '{name}'"
            )));
        }
        Ok(Self::new(name, address))
    }
}
