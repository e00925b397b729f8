use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::StyleError;

/// One utterance to style, as received from a loosely typed boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatRequest {
    pub text: String,
    #[serde(default)]
    pub context: Option<String>,
}

impl FormatRequest {
    pub fn new(text: impl Into<String>, context: Option<String>) -> Self {
        Self {
            text: text.into(),
            context,
        }
    }

    /// Validate a JSON object field by field, failing fast with the name of
    /// the offending field instead of coercing it.
    pub fn from_value(value: &Value) -> Result<Self, StyleError> {
        let object = value
            .as_object()
            .ok_or_else(|| StyleError::malformed("request", "must be a JSON object"))?;

        let text = required_string(object, "text")?;
        let context = optional_string(object, "context")?;
        Ok(Self { text, context })
    }
}

pub(crate) fn required_string(
    object: &serde_json::Map<String, Value>,
    field: &str,
) -> Result<String, StyleError> {
    match object.get(field) {
        None | Some(Value::Null) => Err(StyleError::malformed(field, "is missing")),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(StyleError::malformed(
            field,
            format!("must be a string, got {}", json_kind(other)),
        )),
    }
}

pub(crate) fn optional_string(
    object: &serde_json::Map<String, Value>,
    field: &str,
) -> Result<Option<String>, StyleError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(StyleError::malformed(
            field,
            format!("must be a string, got {}", json_kind(other)),
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_text_and_context() {
        let req = FormatRequest::from_value(&json!({"text": "了解", "context": "いい？"})).unwrap();
        assert_eq!(req, FormatRequest::new("了解", Some("いい？".into())));
    }

    #[test]
    fn context_is_optional() {
        let req = FormatRequest::from_value(&json!({"text": ""})).unwrap();
        assert!(req.context.is_none());
        assert!(req.text.is_empty());
    }

    #[test]
    fn missing_text_is_malformed() {
        let err = FormatRequest::from_value(&json!({"context": "x"})).unwrap_err();
        assert_eq!(err, StyleError::malformed("text", "is missing"));
    }

    #[test]
    fn non_string_text_is_malformed() {
        let err = FormatRequest::from_value(&json!({"text": 42})).unwrap_err();
        assert_eq!(err.to_string(), "malformed input: field `text` must be a string, got number");
    }

    #[test]
    fn non_object_is_malformed() {
        let err = FormatRequest::from_value(&json!(["text"])).unwrap_err();
        assert!(matches!(err, StyleError::MalformedInput { field, .. } if field == "request"));
    }
}
