//! User-facing copy emitted by the classifiers
//!
//! The rules decide *which* message applies; the catalog decides *what it
//! says*. Product copy can be swapped through a TOML file without touching
//! rule order.
//!
//! ```toml
//! network = "No connection. Check your Wi-Fi and try again."
//!
//! [status]
//! 401 = "Please sign in again."
//! ```

use crate::error::{CatalogError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Status codes that have dedicated copy
pub const STATUS_CODES: [u16; 11] = [400, 401, 403, 404, 409, 422, 429, 500, 502, 503, 504];

pub const DEFAULT_UNEXPECTED: &str = "An unexpected error occurred. Please try again.";
pub const DEFAULT_TIMEOUT: &str = "Request timed out. Please try again.";
pub const DEFAULT_NETWORK: &str = "Unable to connect. Please check your internet connection.";
pub const DEFAULT_VALIDATION_FALLBACK: &str = "Please check your input and try again.";

/// Built-in copy for a status code
pub fn default_status_message(code: u16) -> Option<&'static str> {
    let message = match code {
        400 => "Invalid request. Please check your input and try again.",
        401 => "Session expired. Please log in again.",
        403 => "You don't have permission to perform this action.",
        404 => "The requested resource was not found.",
        409 => "This action conflicts with existing data.",
        422 => "Invalid data provided. Please check your input.",
        429 => "Too many requests. Please wait a moment and try again.",
        500 => "Server error. Please try again later.",
        502 | 503 => "Service temporarily unavailable. Please try again later.",
        504 => "Server took too long to respond. Please try again.",
        _ => return None,
    };
    Some(message)
}

/// Every string the classifiers can produce on their own
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCatalog {
    pub unexpected: String,
    pub timeout: String,
    pub network: String,
    pub validation_fallback: String,
    status: BTreeMap<u16, String>,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        let status = STATUS_CODES
            .iter()
            .filter_map(|&code| default_status_message(code).map(|m| (code, m.to_string())))
            .collect();

        Self {
            unexpected: DEFAULT_UNEXPECTED.to_string(),
            timeout: DEFAULT_TIMEOUT.to_string(),
            network: DEFAULT_NETWORK.to_string(),
            validation_fallback: DEFAULT_VALIDATION_FALLBACK.to_string(),
            status,
        }
    }
}

/// On-disk shape: every key optional, missing keys keep the built-in copy
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    unexpected: Option<String>,
    timeout: Option<String>,
    network: Option<String>,
    validation_fallback: Option<String>,
    #[serde(default)]
    status: BTreeMap<String, String>,
}

impl MessageCatalog {
    /// Copy for a status code, `None` when the code has no dedicated entry
    pub fn status_message(&self, code: u16) -> Option<&str> {
        self.status.get(&code).map(String::as_str)
    }

    /// Parse overrides from TOML and apply them on top of the defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        let mut catalog = Self::default();

        if let Some(unexpected) = file.unexpected {
            catalog.unexpected = unexpected;
        }
        if let Some(timeout) = file.timeout {
            catalog.timeout = timeout;
        }
        if let Some(network) = file.network {
            catalog.network = network;
        }
        if let Some(fallback) = file.validation_fallback {
            catalog.validation_fallback = fallback;
        }

        for (key, message) in file.status {
            let code = key
                .trim()
                .parse::<u16>()
                .ok()
                .filter(|code| STATUS_CODES.contains(code))
                .ok_or_else(|| {
                    CatalogError::invalid_entry(
                        format!("status.{key}"),
                        "not a status code with dedicated copy",
                    )
                })?;
            catalog.status.insert(code, message);
        }

        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog file from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CatalogError::from(e).with_context(format!("Failed to read {}", path.display()))
        })?;

        Self::from_toml_str(&content)
            .map_err(|e| e.with_context(format!("Failed to load {}", path.display())))
    }

    /// Reject overrides that would break what callers rely on
    fn validate(&self) -> Result<()> {
        if !self.unexpected.contains("unexpected") {
            return Err(CatalogError::invalid_entry(
                "unexpected",
                "must mention that the error was unexpected",
            ));
        }
        if !self.validation_fallback.contains("check") {
            return Err(CatalogError::invalid_entry(
                "validation_fallback",
                "must ask the user to check their input",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_covers_status_table() {
        let catalog = MessageCatalog::default();
        for code in STATUS_CODES {
            assert!(catalog.status_message(code).is_some(), "missing copy for {code}");
        }
        assert_eq!(catalog.status_message(405), None);
        assert_eq!(catalog.status_message(502), catalog.status_message(503));
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let catalog = MessageCatalog::from_toml_str(
            r#"
network = "No connection."

[status]
401 = "Please sign in again."
"#,
        )
        .unwrap();

        assert_eq!(catalog.network, "No connection.");
        assert_eq!(catalog.status_message(401), Some("Please sign in again."));
        assert_eq!(catalog.timeout, DEFAULT_TIMEOUT);
        assert_eq!(
            catalog.status_message(404),
            Some("The requested resource was not found.")
        );
    }

    #[test]
    fn test_rejects_unknown_status_code() {
        let err = MessageCatalog::from_toml_str("[status]\n418 = \"teapot\"\n").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidEntry { .. }));
        assert!(err.user_message().contains("status.418"));
    }

    #[test]
    fn test_rejects_fallbacks_that_lose_meaning() {
        assert!(MessageCatalog::from_toml_str("unexpected = \"\"\n").is_err());
        assert!(MessageCatalog::from_toml_str("validation_fallback = \"Oops\"\n").is_err());
        assert!(MessageCatalog::from_toml_str(
            "unexpected = \"Something unexpected happened.\"\n"
        )
        .is_ok());
    }

    #[test]
    fn test_rejects_capitalized_only_keywords() {
        let err = MessageCatalog::from_toml_str("unexpected = \"Unexpected problem. Try again.\"\n")
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidEntry { ref key, .. } if key == "unexpected"));

        let err = MessageCatalog::from_toml_str("validation_fallback = \"Check the form.\"\n")
            .unwrap_err();
        assert!(
            matches!(err, CatalogError::InvalidEntry { ref key, .. } if key == "validation_fallback")
        );
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let err = MessageCatalog::from_toml_str("offline = \"x\"\n").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file_has_context() {
        let err = MessageCatalog::load("/definitely/not/here.toml").unwrap_err();
        assert!(err.user_message().contains("/definitely/not/here.toml"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("errcopy.toml");
        std::fs::write(&path, "timeout = \"Still waiting. Try again.\"\n").unwrap();

        let catalog = MessageCatalog::load(&path).unwrap();
        assert_eq!(catalog.timeout, "Still waiting. Try again.");
    }
}
