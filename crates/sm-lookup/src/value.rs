//! Decoded secret values

use serde_json::Value;

use crate::store::SecretPayload;

/// A secret as handed back to the host.
#[derive(Debug, Clone, PartialEq)]
pub enum SecretValue {
    /// Raw bytes, returned verbatim and never text-decoded
    Binary(Vec<u8>),

    /// The textual payload parsed as JSON
    Structured(Value),

    /// The textual payload unchanged, when it is not valid JSON
    Plain(String),
}

impl SecretValue {
    /// Decode a store payload.
    ///
    /// Binary wins over text. A textual payload is parsed as JSON; parse
    /// failure is the expected path for plain-string secrets, not an error.
    /// `None` means the payload carried neither field. Decoding itself never
    /// fails.
    pub fn decode(payload: SecretPayload) -> Option<Self> {
        if let Some(bytes) = payload.secret_binary {
            return Some(SecretValue::Binary(bytes));
        }

        let text = payload.secret_string?;
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => Some(SecretValue::Structured(value)),
            Err(_) => Some(SecretValue::Plain(text)),
        }
    }

    /// The plain-text payload, if this is one
    pub fn as_plain(&self) -> Option<&str> {
        match self {
            SecretValue::Plain(text) => Some(text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_binary_wins_over_text() {
        let value = SecretValue::decode(SecretPayload {
            secret_string: Some("{\"ignored\": true}".to_string()),
            secret_binary: Some(vec![0xde, 0xad]),
        });
        assert_eq!(value, Some(SecretValue::Binary(vec![0xde, 0xad])));
    }

    #[test]
    fn test_json_payload_decodes_structured() {
        let value = SecretValue::decode(SecretPayload {
            secret_string: Some("{\"key1\": \"value1\", \"key2\": \"value2\"}".to_string()),
            secret_binary: None,
        });
        assert_eq!(
            value,
            Some(SecretValue::Structured(json!({
                "key1": "value1",
                "key2": "value2",
            })))
        );
    }

    #[test]
    fn test_plain_string_survives_unchanged() {
        let value = SecretValue::decode(SecretPayload {
            secret_string: Some("password1".to_string()),
            secret_binary: None,
        });
        assert_eq!(value, Some(SecretValue::Plain("password1".to_string())));
    }

    #[test]
    fn test_plain_decode_is_idempotent() {
        let first = SecretValue::decode(SecretPayload {
            secret_string: Some("not json".to_string()),
            secret_binary: None,
        })
        .unwrap();
        let second = SecretValue::decode(SecretPayload {
            secret_string: first.as_plain().map(str::to_string),
            secret_binary: None,
        })
        .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_payload_is_absent() {
        assert_eq!(SecretValue::decode(SecretPayload::default()), None);
    }
}
