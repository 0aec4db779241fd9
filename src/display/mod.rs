//! Display formatting for terminal output

pub mod budget;

pub use budget::format_budget_summary;
