//! Artifact writing with atomic file replacement
//!
//! Each artifact is written to a temporary sibling and renamed into place, so
//! a reader never sees a half-written file.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::OutputPaths;
use crate::error::DossierError;
use crate::render::RenderedDossier;

/// Write all four artifacts into the output directory
///
/// Returns the written paths in write order. A failure part-way leaves the
/// artifacts already written in place.
pub fn write_artifacts(
    paths: &OutputPaths,
    dossier: &RenderedDossier,
) -> Result<Vec<PathBuf>, DossierError> {
    paths.ensure_directories()?;

    let artifacts = [
        (paths.document_file(), dossier.document.as_str()),
        (paths.stylesheet_file(), dossier.stylesheet),
        (paths.script_file(), dossier.script),
        (paths.print_stylesheet_file(), dossier.print_stylesheet),
    ];

    let mut written = Vec::with_capacity(artifacts.len());
    for (path, contents) in artifacts {
        write_text_atomic(&path, contents)?;
        debug!(path = %path.display(), bytes = contents.len(), "artifact written");
        written.push(path);
    }

    Ok(written)
}

/// Write UTF-8 text to a file atomically (write to temp, then rename)
pub fn write_text_atomic<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), DossierError> {
    let path = path.as_ref();

    // Create temp file in same directory (important for atomic rename)
    let temp_path = temp_path_for(path);

    let file = File::create(&temp_path).map_err(|e| {
        DossierError::Output(format!(
            "Failed to create temp file {}: {}",
            temp_path.display(),
            e
        ))
    })?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .map_err(|e| DossierError::Output(format!("Failed to write {}: {}", path.display(), e)))?;

    writer
        .flush()
        .map_err(|e| DossierError::Output(format!("Failed to flush {}: {}", path.display(), e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| DossierError::Output(format!("Failed to sync {}: {}", path.display(), e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        // Try to clean up temp file if rename fails
        let _ = fs::remove_file(&temp_path);
        DossierError::Output(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::content::default_project;
    use crate::models::Budget;
    use crate::render::DossierRenderer;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn rendered() -> RenderedDossier {
        DossierRenderer::new(&Settings::default())
            .unwrap()
            .render(
                &default_project(),
                &Budget::defaults(),
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            )
            .unwrap()
    }

    #[test]
    fn test_write_artifacts() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OutputPaths::new(temp_dir.path().join("out"));
        let dossier = rendered();

        let written = write_artifacts(&paths, &dossier).unwrap();
        assert_eq!(
            written,
            vec![
                paths.document_file(),
                paths.stylesheet_file(),
                paths.script_file(),
                paths.print_stylesheet_file(),
            ]
        );
        assert_eq!(
            fs::read_to_string(paths.document_file()).unwrap(),
            dossier.document
        );
        assert_eq!(
            fs::read_to_string(paths.print_stylesheet_file()).unwrap(),
            dossier.print_stylesheet
        );
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("index.html");

        write_text_atomic(&path, "<p>hola</p>").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "<p>hola</p>");
        assert!(!temp_dir.path().join("index.html.tmp").exists());
    }

    #[test]
    fn test_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("styles.css");
        fs::write(&path, "old").unwrap();

        write_text_atomic(&path, "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_unwritable_destination_fails() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "a file, not a directory").unwrap();

        let paths = OutputPaths::new(blocker.join("out"));
        let err = write_artifacts(&paths, &rendered()).unwrap_err();
        assert!(matches!(err, DossierError::Output(_)));
    }
}
