//! Alexa-style voice platform envelope
//!
//! Only the parts of the request/response JSON the skill actually reads or
//! writes are modelled; everything else is ignored on input.

pub mod request;
pub mod response;
pub mod ssml;

pub use request::{IntentRequest, SkillRequest};
pub use response::{SkillResponse, Speech, SpokenResponse};
pub use ssml::{Ssml, SsmlBuilder};

/// Built-in help intent name
pub const HELP_INTENT: &str = "AMAZON.HelpIntent";
