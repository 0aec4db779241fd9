//! Artifact paths
//!
//! Resolves where each generated file lands inside the output directory.

use std::path::{Path, PathBuf};

use crate::error::DossierError;

/// Manages all paths the generator writes to
#[derive(Debug, Clone)]
pub struct OutputPaths {
    /// Directory holding the generated site
    base_dir: PathBuf,
}

impl OutputPaths {
    /// Create OutputPaths rooted at `base_dir`
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Get the output directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the dossier document
    pub fn document_file(&self) -> PathBuf {
        self.base_dir.join("index.html")
    }

    /// Get the path to the screen stylesheet
    pub fn stylesheet_file(&self) -> PathBuf {
        self.base_dir.join("styles.css")
    }

    /// Get the path to the chart script
    pub fn script_file(&self) -> PathBuf {
        self.base_dir.join("script.js")
    }

    /// Get the path to the print stylesheet
    pub fn print_stylesheet_file(&self) -> PathBuf {
        self.base_dir.join("print.css")
    }

    /// Background image the stylesheet expects; supplied by the user
    pub fn background_image(&self) -> PathBuf {
        self.base_dir.join("assets").join("fondo.png")
    }

    /// Ensure the output directory exists
    pub fn ensure_directories(&self) -> Result<(), DossierError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            DossierError::Output(format!(
                "Failed to create output directory {}: {}",
                self.base_dir.display(),
                e
            ))
        })
    }
}
