//! Dossier generation pipeline
//!
//! Extract the budget once, fall back to the defaults, render, write.

use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::info;

use crate::config::{OutputPaths, Settings};
use crate::content::load_project;
use crate::error::DossierResult;
use crate::extract::extract_budget;
use crate::models::Budget;
use crate::output::write_artifacts;
use crate::render::DossierRenderer;

/// Where the rendered budget came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetSource {
    /// Extracted from this spreadsheet
    Spreadsheet(PathBuf),
    /// Built-in default amounts
    Defaults,
}

/// Outcome of a generation run
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub budget: Budget,
    pub budget_source: BudgetSource,
    /// Artifacts written, in write order
    pub written: Vec<PathBuf>,
}

/// Service that runs the whole extract-render-write pipeline
pub struct GenerateService<'a> {
    settings: &'a Settings,
}

impl<'a> GenerateService<'a> {
    /// Create a new generate service
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Resolve the budget to render: the spreadsheet's if it yields one,
    /// otherwise the defaults
    pub fn resolve_budget(&self) -> (Budget, BudgetSource) {
        match extract_budget(&self.settings.budget_path) {
            Some(budget) => (
                budget,
                BudgetSource::Spreadsheet(self.settings.budget_path.clone()),
            ),
            None => (Budget::defaults(), BudgetSource::Defaults),
        }
    }

    /// Generate the dossier stamped with `generated_on`
    pub fn generate(&self, generated_on: NaiveDate) -> DossierResult<GenerationReport> {
        let project = load_project(self.settings.content_path.as_deref())?;
        let renderer = DossierRenderer::new(self.settings)?;
        let (budget, budget_source) = self.resolve_budget();

        let dossier = renderer.render(&project, &budget, generated_on)?;
        let paths = OutputPaths::new(&self.settings.output_dir);
        let written = write_artifacts(&paths, &dossier)?;

        info!(
            output_dir = %paths.base_dir().display(),
            total = %budget.total(),
            "dossier generated"
        );

        Ok(GenerationReport {
            budget,
            budget_source,
            written,
        })
    }
}
