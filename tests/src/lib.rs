//! Shared fixtures for the integration tests

use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Typical payload from the job posting endpoint
pub fn job_post_payload() -> Value {
    json!({
        "message": "The given data was invalid.",
        "errors": {
            "budget": ["The budget must be at least 10."],
            "description": ["The description field is required."],
            "photos": {
                "1": { "uri": ["The photo must be a file of type: jpeg, png."] }
            }
        }
    })
}

/// Write a catalog file into `dir` and return its path
pub fn write_catalog(dir: &Path, content: &str) -> std::io::Result<PathBuf> {
    let path = dir.join("errcopy.toml");
    fs::write(&path, content)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use errcopy::{Classifier, MessageCatalog, RawError};
    use tempfile::TempDir;

    #[test]
    fn test_catalog_file_round_trip_through_classifier() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_catalog(
            temp_dir.path(),
            r#"
timeout = "This is taking a while. Try again."

[status]
403 = "Only the job owner can do that."
"#,
        )
        .unwrap();

        let classifier = Classifier::new(MessageCatalog::load(&path).unwrap());

        assert_eq!(
            classifier.format_error_message(&RawError::exception("403 Forbidden")),
            "Only the job owner can do that."
        );
        assert_eq!(
            classifier.format_error_message(&RawError::exception("504 Gateway Timeout")),
            "This is taking a while. Try again."
        );
    }

    #[test]
    fn test_broken_catalog_file_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_catalog(temp_dir.path(), "timeout = [").unwrap();

        let err = MessageCatalog::load(&path).unwrap_err();
        assert!(err.user_message().contains("errcopy.toml"));
    }
}
