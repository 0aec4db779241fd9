//! Service layer for the dossier generator

pub mod generate;

pub use generate::{BudgetSource, GenerateService, GenerationReport};
