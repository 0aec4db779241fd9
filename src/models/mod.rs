//! Core data models for the dossier generator
//!
//! Budget amounts and categories, plus the static project content the
//! document is built from.

pub mod budget;
pub mod money;
pub mod project;

pub use budget::{Budget, BudgetCategory};
pub use money::Money;
pub use project::{AudienceShare, ContactInfo, Credit, Phase, Project, WeeklyEntry};
