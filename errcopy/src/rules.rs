//! Ordered rule table for exception messages
//!
//! Rules are evaluated top to bottom and the first match wins. The order is
//! part of the contract: timeout detection sits above the status table, so
//! `408 Request Timeout` and `504 Gateway Timeout` get the timeout copy.

use crate::catalog::STATUS_CODES;
use crate::classify::ErrorCategory;
use once_cell::sync::Lazy;
use regex::Regex;

/// Low-level strings that are already diagnostic and stay untouched
pub const VERBATIM_MESSAGES: [&str; 4] = [
    "Connection refused",
    "getaddrinfo ENOTFOUND",
    "ETIMEDOUT",
    "ECONNREFUSED",
];

static STATUS_PREFIX_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{3})(?:\D|$)").expect("Failed to compile status prefix regex")
});

/// A single `(predicate, category)` entry of the cascade
#[derive(Debug)]
pub struct Rule {
    pub name: &'static str,
    pub description: &'static str,
    matcher: fn(&str) -> Option<ErrorCategory>,
}

impl Rule {
    pub fn apply(&self, message: &str) -> Option<ErrorCategory> {
        (self.matcher)(message)
    }
}

pub static RULES: &[Rule] = &[
    Rule {
        name: "verbatim",
        description: "Exact low-level network codes pass through unchanged",
        matcher: match_verbatim,
    },
    Rule {
        name: "timeout",
        description: "Contains 'timeout' or 'timed out' (any case)",
        matcher: match_timeout,
    },
    Rule {
        name: "status",
        description: "Starts with a known 3-digit HTTP status code",
        matcher: match_status,
    },
    Rule {
        name: "network",
        description: "Fetch or network failure wording",
        matcher: match_network,
    },
];

/// First rule that recognizes the message, with the category it assigned
pub fn first_match(message: &str) -> Option<(&'static Rule, ErrorCategory)> {
    RULES
        .iter()
        .find_map(|rule| rule.apply(message).map(|category| (rule, category)))
}

/// Leading status code of a message, whether or not it has dedicated copy
pub fn status_prefix(message: &str) -> Option<u16> {
    STATUS_PREFIX_PATTERN
        .captures(message)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

fn match_verbatim(message: &str) -> Option<ErrorCategory> {
    VERBATIM_MESSAGES
        .contains(&message.trim())
        .then_some(ErrorCategory::Verbatim)
}

fn match_timeout(message: &str) -> Option<ErrorCategory> {
    let lower = message.to_lowercase();
    (lower.contains("timeout") || lower.contains("timed out")).then_some(ErrorCategory::Timeout)
}

fn match_status(message: &str) -> Option<ErrorCategory> {
    status_prefix(message)
        .filter(|code| STATUS_CODES.contains(code))
        .map(ErrorCategory::Status)
}

fn match_network(message: &str) -> Option<ErrorCategory> {
    let lower = message.to_lowercase();
    let known_phrase = ["failed to fetch", "network request failed", "networkerror"]
        .iter()
        .any(|phrase| lower.contains(phrase));
    let failed_fetch = lower.starts_with("fetch") && lower.contains("failed");

    (known_phrase || message.contains("network") || failed_fetch).then_some(ErrorCategory::Network)
}
