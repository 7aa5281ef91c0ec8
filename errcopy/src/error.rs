use std::result;
use thiserror::Error;

/// Errors raised while loading or checking a message catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid catalog entry '{key}': {reason}")]
    InvalidEntry { key: String, reason: String },

    #[error("{0}: {1}")]
    WithContext(String, Box<CatalogError>),
}

impl CatalogError {
    pub fn invalid_entry<K: Into<String>, R: Into<String>>(key: K, reason: R) -> Self {
        Self::InvalidEntry {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Add context to an error
    #[must_use]
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    /// Get a user-friendly message for command line display
    pub fn user_message(&self) -> String {
        match self {
            Self::Io(e) => format!("Could not read message catalog: {e}"),
            Self::Parse(e) => format!("Message catalog is not valid TOML: {e}"),
            Self::InvalidEntry { key, reason } => {
                format!("Message catalog entry '{key}' rejected: {reason}")
            }
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}

/// Errors raised while decoding a validation payload from a response body
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Failed to parse validation payload: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ValidationError {
    pub fn user_message(&self) -> String {
        match self {
            Self::Parse(e) => format!("Response body is not valid JSON: {e}"),
        }
    }
}

pub type Result<T> = result::Result<T, CatalogError>;
