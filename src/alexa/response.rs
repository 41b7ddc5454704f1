//! Outbound spoken response

use serde::{Deserialize, Serialize};

use super::ssml::Ssml;

const ENVELOPE_VERSION: &str = "1.0";

/// What the skill says back, before it is put on the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpokenResponse {
    pub title: String,
    pub speech: Speech,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Speech {
    PlainText(String),
    Ssml(Ssml),
}

impl SpokenResponse {
    #[must_use]
    pub fn plain(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            speech: Speech::PlainText(text.into()),
        }
    }

    #[must_use]
    pub fn ssml(title: impl Into<String>, ssml: Ssml) -> Self {
        Self {
            title: title.into(),
            speech: Speech::Ssml(ssml),
        }
    }

    /// Spoken text without markup
    #[must_use]
    pub fn text(&self) -> String {
        match &self.speech {
            Speech::PlainText(text) => text.clone(),
            Speech::Ssml(ssml) => ssml.plain_text(),
        }
    }
}

/// Response envelope returned to the voice platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillResponse {
    pub version: String,
    pub response: ResponseBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    pub output_speech: OutputSpeech,
    pub card: Card,
    pub should_end_session: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    PlainText { text: String },
    #[serde(rename = "SSML")]
    Ssml { ssml: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum Card {
    Simple { title: String, content: String },
}

impl From<SpokenResponse> for SkillResponse {
    fn from(spoken: SpokenResponse) -> Self {
        let content = spoken.text();
        let output_speech = match spoken.speech {
            Speech::PlainText(text) => OutputSpeech::PlainText { text },
            Speech::Ssml(ssml) => OutputSpeech::Ssml {
                ssml: ssml.markup(),
            },
        };

        Self {
            version: ENVELOPE_VERSION.to_string(),
            response: ResponseBody {
                output_speech,
                card: Card::Simple {
                    title: spoken.title,
                    content,
                },
                should_end_session: true,
            },
        }
    }
}
