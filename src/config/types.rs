use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::catalog::DEFAULT_LANGUAGE;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "defaultLanguage")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Formats validation errors as a numbered list
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogSettings {
    /// Keyword catalog to load instead of the bundled `gherkin-languages.json`.
    /// Relative paths are resolved against the workspace root.
    pub keyword_source: Option<PathBuf>,

    /// Language used when a document has no `# language:` directive on its first line.
    pub default_language: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self { keyword_source: None, default_language: DEFAULT_LANGUAGE.to_string() }
    }
}

impl CatalogSettings {
    /// # Errors
    /// - Empty or malformed default language
    /// - Empty keyword source path
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.default_language.is_empty() {
            errors.push(ValidationError::new(
                "defaultLanguage",
                "The language code cannot be empty. Example: \"en\"",
            ));
        } else if self.default_language.chars().any(char::is_whitespace) {
            errors.push(ValidationError::new(
                "defaultLanguage",
                format!("Invalid language code '{}': must not contain whitespace", self.default_language),
            ));
        }

        if let Some(path) = &self.keyword_source
            && path.as_os_str().is_empty()
        {
            errors.push(ValidationError::new(
                "keywordSource",
                "The path cannot be empty. Please specify a JSON file, or remove this field",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
