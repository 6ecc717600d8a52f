use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use thiserror::Error;

use super::model::Payload;

// ---------------------------------------------------------------------------
// Input validation
// ---------------------------------------------------------------------------

/// Reasons the text box contents cannot be submitted.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Invalid JSON format")]
    InvalidJson(#[source] serde_json::Error),

    /// Literal `null` parses, but has no fields to look into.
    #[error("Invalid JSON format")]
    NullInput,

    #[error("JSON input must contain a \"data\" array")]
    MissingDataArray,
}

/// Parse the raw text box contents into a submittable [`Payload`].
///
/// The text must be JSON whose top level is an object with a `data` array.
/// Nothing else about the shape is checked.
pub fn parse_input(text: &str) -> Result<Payload, InputError> {
    let value: Value = serde_json::from_str(text).map_err(InputError::InvalidJson)?;

    match value {
        Value::Object(obj) if obj.get("data").is_some_and(Value::is_array) => {
            Ok(Payload::from_object(obj))
        }
        Value::Null => Err(InputError::NullInput),
        _ => Err(InputError::MissingDataArray),
    }
}

// ---------------------------------------------------------------------------
// File IO
// ---------------------------------------------------------------------------

/// Read a file to paste into the text box. No validation happens here;
/// that waits for submit, same as typed input.
pub fn load_input_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

/// Write `value` to `path` as two-space indented JSON.
pub fn save_json_file(path: &Path, value: &Value) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("serializing response")?;
    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_object_with_data_array() {
        let payload = parse_input(r#"{ "data": ["M", "1", "33", "4", "B", "z", "A"] }"#)
            .expect("valid payload");
        assert_eq!(payload.data_len(), 7);
    }

    #[test]
    fn keeps_extra_fields() {
        let payload = parse_input(r#"{"data": [], "roll": 7}"#).expect("valid payload");
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"data": [], "roll": 7})
        );
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_input("{ data: [1, 2] ").unwrap_err();
        assert!(matches!(err, InputError::InvalidJson(_)));
        assert_eq!(err.to_string(), "Invalid JSON format");
    }

    #[test]
    fn rejects_empty_text() {
        assert!(matches!(parse_input(""), Err(InputError::InvalidJson(_))));
    }

    #[test]
    fn rejects_missing_or_non_array_data() {
        for text in [r#"{"items": []}"#, r#"{"data": "abc"}"#, r#"{"data": null}"#] {
            let err = parse_input(text).unwrap_err();
            assert!(matches!(err, InputError::MissingDataArray), "{text}");
        }
        assert_eq!(
            InputError::MissingDataArray.to_string(),
            r#"JSON input must contain a "data" array"#
        );
    }

    #[test]
    fn null_top_level_is_invalid_json() {
        for text in ["null", "  null\n"] {
            let err = parse_input(text).unwrap_err();
            assert!(matches!(err, InputError::NullInput), "{text}");
            assert_eq!(err.to_string(), "Invalid JSON format");
        }
    }

    #[test]
    fn rejects_non_object_top_level() {
        for text in ["[1, 2, 3]", "42", "\"data\""] {
            assert!(
                matches!(parse_input(text), Err(InputError::MissingDataArray)),
                "{text}"
            );
        }
    }

    #[test]
    fn save_then_load_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("response.json");
        save_json_file(&path, &json!({"is_success": true}))?;

        let text = load_input_file(&path)?;
        assert_eq!(text, "{\n  \"is_success\": true\n}");
        Ok(())
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = load_input_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/here.json"));
    }
}
