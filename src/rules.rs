use crate::catalog::load_classifier;
use crate::error::Result;
use crate::ui;
use colored::Colorize;
use errcopy::catalog::STATUS_CODES;
use errcopy::rules::{RULES, VERBATIM_MESSAGES};

pub fn execute(config: Option<String>) -> Result<()> {
    let classifier = load_classifier(config.as_deref())?;
    let catalog = classifier.catalog();

    ui::section_header("Rules (first match wins)");
    for (index, rule) in RULES.iter().enumerate() {
        ui::step_message(index + 1, &format!("{} - {}", rule.name.bold(), rule.description));
    }
    println!("     otherwise the message is returned unchanged");

    ui::section_header("Verbatim codes");
    for code in VERBATIM_MESSAGES {
        println!("  {code}");
    }

    ui::section_header("Copy");
    println!("  {:<10} {}", "timeout".cyan(), catalog.timeout);
    println!("  {:<10} {}", "network".cyan(), catalog.network);
    for code in STATUS_CODES {
        if let Some(message) = catalog.status_message(code) {
            println!("  {:<10} {}", code.to_string().cyan(), message);
        }
    }
    println!("  {:<10} {}", "no message".cyan(), catalog.unexpected);
    println!("  {:<10} {}", "validation".cyan(), catalog.validation_fallback);

    Ok(())
}
