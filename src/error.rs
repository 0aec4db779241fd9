//! Custom error types for the dossier generator
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for dossier generation
#[derive(Error, Debug)]
pub enum DossierError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Spreadsheet could not be opened or parsed
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    /// Template registration or rendering errors
    #[error("Template error: {0}")]
    Template(String),

    /// Artifact writing errors
    #[error("Output error: {0}")]
    Output(String),
}

impl DossierError {
    /// Check if this is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this error came from reading a spreadsheet
    pub fn is_spreadsheet(&self) -> bool {
        matches!(self, Self::Spreadsheet(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for DossierError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DossierError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for DossierError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<calamine::Error> for DossierError {
    fn from(err: calamine::Error) -> Self {
        Self::Spreadsheet(err.to_string())
    }
}

impl From<csv::Error> for DossierError {
    fn from(err: csv::Error) -> Self {
        Self::Spreadsheet(err.to_string())
    }
}

impl From<handlebars::TemplateError> for DossierError {
    fn from(err: handlebars::TemplateError) -> Self {
        Self::Template(err.to_string())
    }
}

impl From<handlebars::RenderError> for DossierError {
    fn from(err: handlebars::RenderError) -> Self {
        Self::Template(err.to_string())
    }
}

/// Result type alias for dossier operations
pub type DossierResult<T> = Result<T, DossierError>;
