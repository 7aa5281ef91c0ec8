use crate::catalog::load_classifier;
use crate::error::{Result, ResultExt};
use crate::ui;
use colored::Colorize;
use errcopy::ValidationErrorPayload;
use std::io;
use tracing::debug;

pub fn execute(
    file: Option<String>,
    fields: bool,
    json: bool,
    config: Option<String>,
    verbose: bool,
) -> Result<()> {
    let classifier = load_classifier(config.as_deref())?;

    let body = read_body(file.as_deref())?;
    let payload = ValidationErrorPayload::from_json(&body)
        .with_context(|| "Could not read validation payload")?;
    debug!(fields = payload.fields.len(), "Parsed validation payload");

    if verbose {
        if let Some(message) = payload.message.as_deref().filter(|m| !m.is_empty()) {
            ui::info_message(&format!("Server message: {message}"));
        }
        if payload.fields.is_empty() {
            ui::warning_message("No field errors in payload, showing fallback copy");
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&payload.fields)?);
    } else if fields && !payload.fields.is_empty() {
        for field in &payload.fields {
            println!("{}: {}", field.path.bold(), field.messages.join("; "));
        }
    } else {
        println!("{}", classifier.summarize(&payload));
    }

    Ok(())
}

fn read_body(file: Option<&str>) -> Result<String> {
    match file {
        Some(path) => {
            debug!(path, "Reading payload file");
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))
        }
        None => {
            debug!("Reading payload from stdin");
            io::read_to_string(io::stdin()).with_context(|| "Failed to read stdin")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_body_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("payload.json");
        std::fs::write(&path, r#"{"errors":{}}"#).unwrap();

        let body = read_body(path.to_str()).unwrap();
        assert_eq!(body, r#"{"errors":{}}"#);
    }

    #[test]
    fn test_read_body_missing_file_has_context() {
        let err = read_body(Some("/no/such/payload.json")).unwrap_err();
        assert!(err.user_message().contains("/no/such/payload.json"));
    }
}
