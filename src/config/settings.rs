//! Run settings for the dossier generator
//!
//! Where the budget spreadsheet lives, where artifacts go, and the few
//! presentation knobs that vary between runs. Every field has a default, so
//! the generator works with no configuration at all.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::content::is_yaml;
use crate::error::DossierError;

/// Settings for one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Spreadsheet to read budget figures from
    #[serde(default = "default_budget_path")]
    pub budget_path: PathBuf,

    /// Directory the four artifacts are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Replacement project content (JSON or YAML); built-in content when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_path: Option<PathBuf>,

    /// Currency symbol shown in the budget table
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for the generation stamp (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Charting library loaded by the document
    #[serde(default = "default_chart_library_url")]
    pub chart_library_url: String,
}

fn default_budget_path() -> PathBuf {
    PathBuf::from("presupuesto_integrado_suenos_despiertos.xlsx")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_chart_library_url() -> String {
    "https://cdn.plot.ly/plotly-latest.min.js".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            budget_path: default_budget_path(),
            output_dir: default_output_dir(),
            content_path: None,
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            chart_library_url: default_chart_library_url(),
        }
    }
}

impl Settings {
    /// Load settings from `path`, or defaults when no path is given
    ///
    /// A path that was named explicitly must exist and parse.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, DossierError> {
        let Some(path) = path else {
            return Ok(Settings::default());
        };

        let file = File::open(path).map_err(|e| {
            DossierError::Config(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;
        let reader = BufReader::new(file);

        let settings = if is_yaml(path) {
            serde_yaml::from_reader(reader).map_err(|e| {
                DossierError::Config(format!("Failed to parse settings file: {}", e))
            })?
        } else {
            serde_json::from_reader(reader).map_err(|e| {
                DossierError::Config(format!("Failed to parse settings file: {}", e))
            })?
        };

        Ok(settings)
    }
}
