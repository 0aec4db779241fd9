//! Configuration module for the dossier generator
//!
//! This module provides:
//! - Run settings (input spreadsheet, output directory, presentation knobs)
//! - Artifact path resolution

pub mod paths;
pub mod settings;

pub use paths::OutputPaths;
pub use settings::Settings;
