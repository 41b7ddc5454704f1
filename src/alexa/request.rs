//! Inbound intent request

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Request envelope as posted by the voice platform
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRequest {
    #[serde(default)]
    pub version: Option<String>,
    pub request: RequestBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestBody {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub intent: Option<IntentBody>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentBody {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, SlotBody>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotBody {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// Intent name plus the slot values that were actually filled
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IntentRequest {
    pub intent_name: String,
    pub slots: HashMap<String, String>,
}

impl IntentRequest {
    #[must_use]
    pub fn new(intent_name: impl Into<String>) -> Self {
        Self {
            intent_name: intent_name.into(),
            slots: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_slot(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.slots.insert(name.into(), value.into());
        self
    }

    /// Value of a slot, empty when the user did not fill it
    #[must_use]
    pub fn slot(&self, name: &str) -> &str {
        self.slots.get(name).map_or("", String::as_str)
    }
}

impl From<SkillRequest> for IntentRequest {
    fn from(request: SkillRequest) -> Self {
        // Launch and session-ended requests carry no intent
        let Some(intent) = request.request.intent else {
            return Self::default();
        };

        Self {
            intent_name: intent.name,
            slots: intent
                .slots
                .into_iter()
                .filter_map(|(name, slot)| slot.value.map(|value| (name, value)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_request_from_envelope() {
        let body = r#"{
            "version": "1.0",
            "session": {"new": true, "sessionId": "amzn1.echo-api.session.1"},
            "request": {
                "type": "IntentRequest",
                "requestId": "amzn1.echo-api.request.1",
                "timestamp": "2024-03-10T21:45:00Z",
                "locale": "en-US",
                "intent": {
                    "name": "CurrentTimeIntent",
                    "confirmationStatus": "NONE",
                    "slots": {
                        "VenueName": {"name": "VenueName", "value": "Central Park"},
                        "VenueAddress": {"name": "VenueAddress", "value": "NYC"},
                        "Unused": {"name": "Unused", "confirmationStatus": "NONE"}
                    }
                }
            }
        }"#;

        let request: SkillRequest = serde_json::from_str(body).unwrap();
        let intent = IntentRequest::from(request);

        assert_eq!(intent.intent_name, "CurrentTimeIntent");
        assert_eq!(intent.slot("VenueName"), "Central Park");
        assert_eq!(intent.slot("VenueAddress"), "NYC");
        assert_eq!(intent.slot("Unused"), "");
        assert_eq!(intent.slots.len(), 2);
    }

    #[test]
    fn test_launch_request_has_no_intent() {
        let body = r#"{"request": {"type": "LaunchRequest", "requestId": "r1"}}"#;
        let intent = IntentRequest::from(serde_json::from_str::<SkillRequest>(body).unwrap());
        assert!(intent.intent_name.is_empty());
        assert!(intent.slots.is_empty());
    }
}
