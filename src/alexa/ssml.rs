//! Minimal SSML builder for spoken responses

use quick_xml::escape::escape;

/// One piece of spoken output
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Say(String),
    Pause(u32),
}

/// Accumulates sentences and pauses
#[derive(Debug, Clone, Default)]
pub struct SsmlBuilder {
    segments: Vec<Segment>,
}

/// Finished spoken body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ssml {
    segments: Vec<Segment>,
}

impl SsmlBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn say(&mut self, text: impl Into<String>) -> &mut Self {
        self.segments.push(Segment::Say(text.into()));
        self
    }

    pub fn pause(&mut self, millis: u32) -> &mut Self {
        self.segments.push(Segment::Pause(millis));
        self
    }

    #[must_use]
    pub fn build(&self) -> Ssml {
        Ssml {
            segments: self.segments.clone(),
        }
    }
}

impl Ssml {
    /// Markup wrapped in `<speak>`, text XML-escaped
    #[must_use]
    pub fn markup(&self) -> String {
        let mut out = String::from("<speak>");
        for segment in &self.segments {
            match segment {
                Segment::Say(text) => out.push_str(&escape(text.as_str())),
                Segment::Pause(millis) => out.push_str(&format!("<break time=\"{millis}ms\"/>")),
            }
        }
        out.push_str("</speak>");
        out
    }

    /// What gets said, without markup or pauses
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Say(text) => Some(text.as_str()),
                Segment::Pause(_) => None,
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
