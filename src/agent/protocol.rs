//! The JSON protocol spoken between the agent loop and the model.

use serde::{Deserialize, Serialize};

/// A structured message exchanged with the model.
///
/// Every completion must parse as exactly one of these variants; anything
/// else is a protocol violation handled by the agent loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProtocolMessage {
    /// A raw user request entering the loop.
    User { user: String },
    /// The model's stated intent before acting.
    Plan { plan: String },
    /// A request to invoke a registered tool with one string argument.
    Action { function: String, input: String },
    /// A tool result fed back to the model.
    Observation { observation: String },
    /// The final answer for the current turn.
    Output { output: String },
}

impl ProtocolMessage {
    /// Parse a model completion. Errors here are protocol violations.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Serialize for embedding in a chat message.
    pub fn to_json(&self) -> String {
        // Serialization of a field-complete enum cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::ProtocolMessage;

    #[test]
    fn parses_every_variant() {
        let cases = [
            (
                r#"{"type": "user", "user": "weather in Oslo?"}"#,
                ProtocolMessage::User {
                    user: "weather in Oslo?".into(),
                },
            ),
            (
                r#"{"type": "plan", "plan": "I will call getWeatherInfo for Oslo"}"#,
                ProtocolMessage::Plan {
                    plan: "I will call getWeatherInfo for Oslo".into(),
                },
            ),
            (
                r#"{"type": "action", "function": "getWeatherInfo", "input": "Oslo"}"#,
                ProtocolMessage::Action {
                    function: "getWeatherInfo".into(),
                    input: "Oslo".into(),
                },
            ),
            (
                r#"{"type": "observation", "observation": "cold, 2°C"}"#,
                ProtocolMessage::Observation {
                    observation: "cold, 2°C".into(),
                },
            ),
            (
                r#"{"type": "output", "output": "It is cold in Oslo."}"#,
                ProtocolMessage::Output {
                    output: "It is cold in Oslo.".into(),
                },
            ),
        ];

        for (raw, expected) in cases {
            assert_eq!(ProtocolMessage::parse(raw).unwrap(), expected);
        }
    }

    #[test]
    fn rejects_unknown_discriminator() {
        assert!(ProtocolMessage::parse(r#"{"type": "thought", "thought": "hmm"}"#).is_err());
    }

    #[test]
    fn rejects_missing_fields() {
        assert!(ProtocolMessage::parse(r#"{"type": "action", "function": "f"}"#).is_err());
        assert!(ProtocolMessage::parse(r#"{"type": "output"}"#).is_err());
    }

    #[test]
    fn rejects_non_json_text() {
        assert!(ProtocolMessage::parse("Sure! Here is the weather:").is_err());
    }

    #[test]
    fn serializes_with_type_tag() {
        let msg = ProtocolMessage::Observation {
            observation: "rainy".into(),
        };
        let json: serde_json::Value = serde_json::from_str(&msg.to_json()).unwrap();
        assert_eq!(json["type"], "observation");
        assert_eq!(json["observation"], "rainy");
    }
}
