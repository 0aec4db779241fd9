//! Document rendering
//!
//! Merges the project content and the active budget into the dossier template
//! and pairs the result with the static stylesheet, print stylesheet and chart
//! script.

pub mod assets;

use std::fmt::Write as _;

use chrono::NaiveDate;
use handlebars::Handlebars;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::config::Settings;
use crate::error::{DossierError, DossierResult};
use crate::models::{Budget, ContactInfo, Credit, Phase, Project, WeeklyEntry};

const DOCUMENT: &str = "dossier";

/// The four generated artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDossier {
    /// `index.html`
    pub document: String,
    /// `styles.css`
    pub stylesheet: &'static str,
    /// `script.js`
    pub script: &'static str,
    /// `print.css`
    pub print_stylesheet: &'static str,
}

/// Renders dossiers from a fixed template
pub struct DossierRenderer {
    registry: Handlebars<'static>,
    currency_symbol: String,
    date_format: String,
    chart_library_url: String,
}

impl DossierRenderer {
    /// Create a renderer using the presentation settings from `settings`
    pub fn new(settings: &Settings) -> DossierResult<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_template_string(DOCUMENT, assets::DOCUMENT_TEMPLATE)?;

        Ok(Self {
            registry,
            currency_symbol: settings.currency_symbol.clone(),
            date_format: settings.date_format.clone(),
            chart_library_url: settings.chart_library_url.clone(),
        })
    }

    /// Render the dossier for `project` with `budget`, stamped with `generated_on`
    pub fn render(
        &self,
        project: &Project,
        budget: &Budget,
        generated_on: NaiveDate,
    ) -> DossierResult<RenderedDossier> {
        let context = DocumentContext {
            title: &project.title,
            subtitle: &project.subtitle,
            director: project.director(),
            description: &project.description,
            general_objective: &project.general_objective,
            objectives: &project.objectives,
            phases: &project.phases,
            weekly: &project.weekly,
            budget_rows: budget
                .iter()
                .map(|(category, amount)| BudgetRow {
                    label: category.label(),
                    amount: amount.format_with_symbol(&self.currency_symbol),
                })
                .collect(),
            total: budget.total().format_with_symbol(&self.currency_symbol),
            audience_estimate: &project.audience_estimate,
            credits: &project.credits,
            contact: &project.contact,
            generated: format_date(generated_on, &self.date_format)?,
            chart_library_url: &self.chart_library_url,
            chart_data: chart_data_json(project, budget)?,
        };

        let document = self.registry.render(DOCUMENT, &context)?;

        Ok(RenderedDossier {
            document,
            stylesheet: assets::STYLESHEET,
            script: assets::SCRIPT,
            print_stylesheet: assets::PRINT_STYLESHEET,
        })
    }
}

#[derive(Serialize)]
struct DocumentContext<'a> {
    title: &'a str,
    subtitle: &'a str,
    director: Option<&'a str>,
    description: &'a str,
    general_objective: &'a str,
    objectives: &'a [String],
    phases: &'a [Phase],
    weekly: &'a [WeeklyEntry],
    budget_rows: Vec<BudgetRow>,
    total: String,
    audience_estimate: &'a str,
    credits: &'a [Credit],
    contact: &'a ContactInfo,
    generated: String,
    chart_library_url: &'a str,
    chart_data: String,
}

#[derive(Serialize)]
struct BudgetRow {
    label: &'static str,
    amount: String,
}

/// Payload read by `script.js` as `window.DOSSIER_DATA`
#[derive(Serialize)]
struct ChartData<'a> {
    presupuesto: OrderedMap<'a, f64>,
    total_general: f64,
    alcance: OrderedMap<'a, u32>,
}

/// Serializes as a JSON object while keeping entry order
struct OrderedMap<'a, V>(Vec<(&'a str, V)>);

impl<V: Serialize> Serialize for OrderedMap<'_, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

fn chart_data_json(project: &Project, budget: &Budget) -> DossierResult<String> {
    let data = ChartData {
        presupuesto: OrderedMap(
            budget
                .iter()
                .map(|(category, amount)| (category.label(), amount.as_f64()))
                .collect(),
        ),
        total_general: budget.total().as_f64(),
        alcance: OrderedMap(
            project
                .audience_reach
                .iter()
                .map(|s| (s.venue.as_str(), s.percent))
                .collect(),
        ),
    };

    // The payload sits inside a <script> element.
    Ok(serde_json::to_string(&data)?.replace("</", "<\\/"))
}

fn format_date(date: NaiveDate, format: &str) -> DossierResult<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(format))
        .map_err(|_| DossierError::Config(format!("Invalid date format: {}", format)))?;
    Ok(out)
}
