//! Turn caught errors into copy a user can read

use crate::catalog::MessageCatalog;
use crate::raw::RawError;
use crate::rules;
use once_cell::sync::Lazy;
use std::fmt;

static DEFAULT_CLASSIFIER: Lazy<Classifier> = Lazy::new(Classifier::default);

/// Which branch of the cascade produced a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Timeout,
    /// HTTP status code with dedicated copy
    Status(u16),
    Network,
    /// Low-level code deliberately left as-is
    Verbatim,
    /// Message with no matching rule, returned unchanged
    PassThrough,
    /// Input without a string message
    Unexpected,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => write!(f, "timeout"),
            Self::Status(code) => write!(f, "status {code}"),
            Self::Network => write!(f, "network"),
            Self::Verbatim => write!(f, "verbatim"),
            Self::PassThrough => write!(f, "pass-through"),
            Self::Unexpected => write!(f, "unexpected"),
        }
    }
}

/// Classifier output: the copy to show and why it was chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: ErrorCategory,
    pub message: String,
}

/// Rule cascade bound to a message catalog
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    catalog: MessageCatalog,
}

impl Classifier {
    pub fn new(catalog: MessageCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    pub fn classify(&self, error: &RawError) -> Classification {
        let Some(message) = error.message() else {
            return Classification {
                category: ErrorCategory::Unexpected,
                message: self.catalog.unexpected.clone(),
            };
        };

        let category = rules::first_match(message)
            .map_or(ErrorCategory::PassThrough, |(_, category)| category);

        let text = match category {
            ErrorCategory::Timeout => self.catalog.timeout.clone(),
            ErrorCategory::Network => self.catalog.network.clone(),
            ErrorCategory::Status(code) => self
                .catalog
                .status_message(code)
                .unwrap_or(message)
                .to_string(),
            ErrorCategory::Verbatim | ErrorCategory::PassThrough | ErrorCategory::Unexpected => {
                message.to_string()
            }
        };

        Classification {
            category,
            message: text,
        }
    }

    pub fn format_error_message(&self, error: &RawError) -> String {
        self.classify(error).message
    }
}

pub(crate) fn default_classifier() -> &'static Classifier {
    &DEFAULT_CLASSIFIER
}

/// Classify with the built-in copy
pub fn classify<E: Into<RawError>>(error: E) -> Classification {
    default_classifier().classify(&error.into())
}

/// Short, user-presentable message for any caught error
///
/// Recognized timeouts, status codes and network failures get curated copy.
/// Any other message is returned unchanged, including an empty one. Values
/// without a string message get a generic "unexpected error" line.
pub fn format_error_message<E: Into<RawError>>(error: E) -> String {
    classify(error).message
}
