use chrono::format::{Item, StrftimeItems};

use crate::error::{AppError, Result};
use crate::utils::text::ILLEGAL_FILENAME_CHARS;
use crate::workbook::OutputFormat;

use super::AppConfig;

/// Validate a loaded configuration and surface every problem at once.
pub fn validate_config(config: &AppConfig) -> Result<()> {
    let mut issues = Vec::new();

    validate_directories(config, &mut issues);
    validate_extension(&config.output_extension, &mut issues);
    validate_date_format(&config.date_format, &mut issues);

    if issues.is_empty() {
        Ok(())
    } else {
        Err(AppError::message(format!(
            "configuration invalid:\n  - {}",
            issues.join("\n  - ")
        )))
    }
}

fn validate_directories(config: &AppConfig, issues: &mut Vec<String>) {
    if config.input_dir.as_os_str().is_empty() {
        issues.push("input_dir must not be empty".to_string());
    }
    if config.output_dir.as_os_str().is_empty() {
        issues.push("output_dir must not be empty".to_string());
    }
}

fn validate_extension(extension: &str, issues: &mut Vec<String>) {
    let trimmed = extension.trim();
    if trimmed.is_empty() {
        issues.push("output_extension must not be empty".to_string());
        return;
    }
    if trimmed.contains('.') {
        issues.push(format!(
            "output_extension `{extension}` must be given without a dot"
        ));
    }
    if trimmed.contains(ILLEGAL_FILENAME_CHARS) {
        issues.push(format!(
            "output_extension `{extension}` contains characters not allowed in file names"
        ));
    }
    if OutputFormat::from_extension(trimmed).is_none() {
        issues.push(format!(
            "output_extension `{extension}` is not supported (expected one of: {})",
            OutputFormat::SUPPORTED.join(", ")
        ));
    }
}

fn validate_date_format(format: &str, issues: &mut Vec<String>) {
    if format.trim().is_empty() {
        issues.push("date_format must not be empty".to_string());
        return;
    }
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        issues.push(format!("date_format `{format}` is not a valid chrono format"));
    }
}
