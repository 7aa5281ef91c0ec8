//! Summaries of server-side form validation payloads
//!
//! Expected shape:
//!
//! ```json
//! {
//!   "message": "The given data was invalid.",
//!   "errors": {
//!     "title": ["The title field is required."],
//!     "photos": { "0": { "caption": ["Caption is too long."] } }
//!   }
//! }
//! ```
//!
//! Anything else is tolerated. Junk entries are skipped rather than rejected.

use crate::classify::{default_classifier, Classifier};
use crate::error::ValidationError;
use serde::Serialize;
use serde_json::Value;

/// Messages attached to one field, nested keys joined with `.`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub path: String,
    pub messages: Vec<String>,
}

/// Decoded validation payload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrorPayload {
    pub message: Option<String>,
    pub fields: Vec<FieldError>,
}

impl ValidationErrorPayload {
    /// Read a payload out of a JSON value, `None` if it is not an object
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;

        let message = object
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_owned);

        let mut fields = Vec::new();
        if let Some(Value::Object(errors)) = object.get("errors") {
            for (name, entry) in errors {
                collect_field_errors(name, entry, &mut fields);
            }
        }

        Some(Self { message, fields })
    }

    /// Parse a raw response body
    ///
    /// Fails only on malformed JSON; valid JSON of the wrong shape yields an
    /// empty payload.
    pub fn from_json(body: &str) -> Result<Self, ValidationError> {
        let value: Value = serde_json::from_str(body)?;
        Ok(Self::from_value(&value).unwrap_or_default())
    }

    /// One line built from the first message of each field, `None` when
    /// there is nothing field-specific to say
    pub fn summary(&self) -> Option<String> {
        let mut firsts: Vec<&str> = Vec::new();
        for field in &self.fields {
            if let Some(first) = field.messages.first() {
                if !firsts.contains(&first.as_str()) {
                    firsts.push(first);
                }
            }
        }

        if firsts.is_empty() {
            None
        } else {
            Some(firsts.join(" "))
        }
    }
}

fn join_path(parent: &str, child: &str) -> String {
    if parent.is_empty() {
        child.to_string()
    } else {
        format!("{parent}.{child}")
    }
}

fn push_message(path: &str, message: &str, out: &mut Vec<FieldError>) {
    let message = message.trim();
    if message.is_empty() {
        return;
    }

    match out.iter_mut().find(|field| field.path == path) {
        Some(field) => field.messages.push(message.to_string()),
        None => out.push(FieldError {
            path: path.to_string(),
            messages: vec![message.to_string()],
        }),
    }
}

fn collect_field_errors(path: &str, value: &Value, out: &mut Vec<FieldError>) {
    match value {
        Value::String(message) => push_message(path, message, out),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                match item {
                    Value::String(message) => push_message(path, message, out),
                    Value::Array(_) | Value::Object(_) => {
                        collect_field_errors(&join_path(path, &index.to_string()), item, out)
                    }
                    _ => {}
                }
            }
        }
        Value::Object(children) => {
            for (key, child) in children {
                collect_field_errors(&join_path(path, key), child, out);
            }
        }
        _ => {}
    }
}

impl Classifier {
    /// Single line for a validation payload, falling back to the catalog's
    /// "check your input" copy
    pub fn format_validation_error(&self, payload: &Value) -> String {
        match ValidationErrorPayload::from_value(payload) {
            Some(payload) => self.summarize(&payload),
            None => self.catalog().validation_fallback.clone(),
        }
    }

    pub fn summarize(&self, payload: &ValidationErrorPayload) -> String {
        payload
            .summary()
            .unwrap_or_else(|| self.catalog().validation_fallback.clone())
    }
}

/// Summarize a validation payload into one non-empty line
pub fn format_validation_error(payload: &Value) -> String {
    default_classifier().format_validation_error(payload)
}

/// Every field path with its messages, for inline form errors
pub fn field_errors(payload: &Value) -> Vec<FieldError> {
    ValidationErrorPayload::from_value(payload)
        .map(|payload| payload.fields)
        .unwrap_or_default()
}
