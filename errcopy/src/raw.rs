//! Input model for the classifier
//!
//! Call sites hand over whatever they caught: an error object, a bare string,
//! a status number, or a decoded JSON body. `RawError` is the tagged union of
//! those shapes. The rules only ever ask one question of it, "is there a
//! string message", which is answered by [`RawError::message`].

use serde_json::Value;
use std::error::Error as StdError;

/// Any value a caller may want to turn into user-facing copy
#[derive(Debug, Clone, PartialEq)]
pub enum RawError {
    /// Exception-like value exposing a string message
    Exception {
        kind: Option<String>,
        message: String,
    },
    /// A plain string that was thrown or rejected as-is
    Text(String),
    Number(f64),
    Bool(bool),
    Null,
    /// Anything else, including objects whose `message` is missing or not a string
    Other(Value),
}

impl RawError {
    /// Exception with a message and no kind tag
    pub fn exception<M: Into<String>>(message: M) -> Self {
        Self::Exception {
            kind: None,
            message: message.into(),
        }
    }

    /// Exception with a kind tag such as `TypeError` or `TimeoutError`
    pub fn with_kind<K: Into<String>, M: Into<String>>(kind: K, message: M) -> Self {
        Self::Exception {
            kind: Some(kind.into()),
            message: message.into(),
        }
    }

    /// Wrap a Rust error, using its `Display` output as the message
    pub fn from_error<E: StdError + ?Sized>(err: &E) -> Self {
        Self::Exception {
            kind: Some(short_type_name::<E>().to_string()),
            message: err.to_string(),
        }
    }

    /// The string message, if this value carries one
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Exception { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn kind(&self) -> Option<&str> {
        match self {
            Self::Exception { kind, .. } => kind.as_deref(),
            _ => None,
        }
    }

    /// Short name of the input shape, for diagnostics
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Exception { .. } => "exception",
            Self::Text(_) => "text",
            Self::Number(_) => "number",
            Self::Bool(_) => "bool",
            Self::Null => "null",
            Self::Other(_) => "other",
        }
    }
}

fn short_type_name<E: ?Sized>() -> &'static str {
    let full = std::any::type_name::<E>();
    let without_generics = full.split('<').next().unwrap_or(full);
    without_generics
        .rsplit("::")
        .next()
        .unwrap_or(without_generics)
}

impl From<Value> for RawError {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => match n.as_f64() {
                Some(f) => Self::Number(f),
                None => Self::Other(Value::Number(n)),
            },
            Value::String(s) => Self::Text(s),
            Value::Object(map) => {
                let message = map.get("message").and_then(Value::as_str).map(str::to_owned);
                match message {
                    Some(message) => Self::Exception {
                        kind: map.get("name").and_then(Value::as_str).map(str::to_owned),
                        message,
                    },
                    None => Self::Other(Value::Object(map)),
                }
            }
            other => Self::Other(other),
        }
    }
}

impl From<&Value> for RawError {
    fn from(value: &Value) -> Self {
        Self::from(value.clone())
    }
}

impl From<&str> for RawError {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for RawError {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<bool> for RawError {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for RawError {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for RawError {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<i32> for RawError {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<u16> for RawError {
    fn from(n: u16) -> Self {
        Self::Number(f64::from(n))
    }
}

impl<T: Into<RawError>> From<Option<T>> for RawError {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
