use crate::catalog::load_classifier;
use crate::error::{Result, ResultExt};
use crate::ui;
use errcopy::RawError;
use serde_json::Value;
use tracing::debug;

/// How the command line input should be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Exception,
    Plain,
    Json,
}

pub fn execute(
    message: Vec<String>,
    kind: Option<String>,
    plain: bool,
    json: bool,
    config: Option<String>,
    verbose: bool,
) -> Result<()> {
    let classifier = load_classifier(config.as_deref())?;

    let mode = if json {
        InputMode::Json
    } else if plain {
        InputMode::Plain
    } else {
        InputMode::Exception
    };
    let raw = build_input(&message.join(" "), kind, mode)?;
    debug!(shape = raw.shape(), kind = ?raw.kind(), "Classifying input");

    let classification = classifier.classify(&raw);
    debug!(category = %classification.category, "Classified input");

    if verbose {
        ui::info_message(&format!("Category: {}", classification.category));
    }
    println!("{}", classification.message);

    Ok(())
}

fn build_input(input: &str, kind: Option<String>, mode: InputMode) -> Result<RawError> {
    let raw = match mode {
        InputMode::Json => {
            let value: Value = serde_json::from_str(input)
                .with_context(|| "Input passed with --json is not valid JSON")?;
            RawError::from(value)
        }
        InputMode::Plain => RawError::from(input),
        InputMode::Exception => match kind {
            Some(kind) => RawError::with_kind(kind, input),
            None => RawError::exception(input),
        },
    };
    Ok(raw)
}
