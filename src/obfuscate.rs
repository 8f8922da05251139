use serde_json::{Map, Value};
use std::fmt;

/// Key-name substrings treated as secret-bearing, matched case-insensitively.
const SENSITIVE_KEYS: [&str; 8] = [
    "apiKey",
    "api_key",
    "private_key",
    "privateKey",
    "password",
    "secret",
    "token",
    "authToken",
];

const MASK: char = 'X';

#[derive(Debug)]
pub enum ObfuscateError {
    NotAnObject,
}

impl fmt::Display for ObfuscateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObfuscateError::NotAnObject => write!(f, "top-level JSON value is not an object"),
        }
    }
}

impl std::error::Error for ObfuscateError {}

/// Obfuscate sensitive values in a parsed JSON document.
///
/// Rejects anything whose top-level value is not an object; see
/// [`obfuscate_sensitive_data`] for the masking rules.
pub fn obfuscate_value(value: &Value) -> Result<Value, ObfuscateError> {
    match value {
        Value::Object(map) => Ok(Value::Object(obfuscate_sensitive_data(map))),
        _ => Err(ObfuscateError::NotAnObject),
    }
}

/// Return a copy of `data` with the values of sensitive keys masked.
///
/// Nested objects are processed recursively. A string value is masked when its
/// key contains one of [`SENSITIVE_KEYS`], ignoring case: every alphanumeric,
/// underscore or whitespace character becomes `X`, other punctuation is kept.
/// Non-string values pass through untouched, including arrays (objects inside
/// arrays are not descended into). The input is never mutated.
pub fn obfuscate_sensitive_data(data: &Map<String, Value>) -> Map<String, Value> {
    let mut obfuscated = Map::new();

    for (key, value) in data {
        let masked = match value {
            Value::Object(inner) => Value::Object(obfuscate_sensitive_data(inner)),
            Value::String(s) if is_sensitive_key(key) => Value::String(mask(s)),
            other => other.clone(),
        };
        obfuscated.insert(key.clone(), masked);
    }

    obfuscated
}

fn is_sensitive_key(key: &str) -> bool {
    let key = key.to_lowercase();
    SENSITIVE_KEYS
        .iter()
        .any(|sensitive| key.contains(&sensitive.to_lowercase()))
}

fn mask(value: &str) -> String {
    value
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c.is_whitespace() {
                MASK
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {:?}", other),
        }
    }

    #[test]
    fn masks_sensitive_string_values() {
        let data = as_map(json!({"api_key": "abc123", "name": "ok"}));
        let masked = obfuscate_sensitive_data(&data);

        assert_eq!(masked["api_key"], json!("XXXXXX"));
        assert_eq!(masked["name"], json!("ok"));
    }

    #[test]
    fn punctuation_survives_masking() {
        let data = as_map(json!({
            "password": "p@ss-word!",
            "token": "user:pass@host",
            "apiKey": "sk-1234",
        }));
        let masked = obfuscate_sensitive_data(&data);

        assert_eq!(masked["password"], json!("X@XX-XXXX!"));
        assert_eq!(masked["token"], json!("XXXX:XXXX@XXXX"));
        assert_eq!(masked["apiKey"], json!("XX-XXXX"));
    }

    #[test]
    fn key_match_is_case_insensitive_substring() {
        let data = as_map(json!({
            "MyPassword": "hunter2",
            "AUTHTOKEN": "tok",
            "passwordless": "also masked",
        }));
        let masked = obfuscate_sensitive_data(&data);

        assert_eq!(masked["MyPassword"], json!("XXXXXXX"));
        assert_eq!(masked["AUTHTOKEN"], json!("XXX"));
        assert_eq!(masked["passwordless"], json!("XXXXXXXXXXX"));
    }

    #[test]
    fn recurses_into_nested_objects() {
        let data = as_map(json!({
            "reddit": {"client_secret": "shh", "username": "bot"},
        }));
        let masked = obfuscate_sensitive_data(&data);

        assert_eq!(masked["reddit"]["client_secret"], json!("XXX"));
        assert_eq!(masked["reddit"]["username"], json!("bot"));
    }

    #[test]
    fn non_string_values_pass_through() {
        let data = as_map(json!({
            "token": 42,
            "secret": true,
            "password": null,
            "api_key": ["still", "visible"],
        }));
        let masked = obfuscate_sensitive_data(&data);

        assert_eq!(masked["token"], json!(42));
        assert_eq!(masked["secret"], json!(true));
        assert_eq!(masked["password"], json!(null));
        assert_eq!(masked["api_key"], json!(["still", "visible"]));
    }

    #[test]
    fn objects_inside_arrays_are_not_descended_into() {
        let data = as_map(json!({
            "accounts": [{"password": "visible"}],
        }));
        let masked = obfuscate_sensitive_data(&data);

        assert_eq!(masked["accounts"], json!([{"password": "visible"}]));
    }

    #[test]
    fn obfuscation_is_idempotent() {
        let data = as_map(json!({
            "api_key": "abc-123",
            "nested": {"secret": "s3cr3t!"},
            "name": "ok",
        }));
        let once = obfuscate_sensitive_data(&data);
        let twice = obfuscate_sensitive_data(&once);

        assert_eq!(once, twice);
    }

    #[test]
    fn input_is_left_untouched() {
        let data = as_map(json!({"password": "hunter2"}));
        let _ = obfuscate_sensitive_data(&data);

        assert_eq!(data["password"], json!("hunter2"));
    }

    #[test]
    fn top_level_must_be_an_object() {
        assert!(matches!(
            obfuscate_value(&json!(["not", "an", "object"])),
            Err(ObfuscateError::NotAnObject)
        ));
        assert!(matches!(
            obfuscate_value(&json!("scalar")),
            Err(ObfuscateError::NotAnObject)
        ));

        let ok = obfuscate_value(&json!({"token": "t"})).unwrap();
        assert_eq!(ok, json!({"token": "X"}));
    }
}
