//! Budget display formatting
//!
//! Formats the rendered budget as a terminal table.

use crate::models::Budget;
use crate::services::BudgetSource;

/// Format a budget with its source as a table
pub fn format_budget_summary(budget: &Budget, source: &BudgetSource, symbol: &str) -> String {
    let source_line = match source {
        BudgetSource::Spreadsheet(path) => format!("Budget source: {}", path.display()),
        BudgetSource::Defaults => "Budget source: built-in defaults".to_string(),
    };

    let rows: Vec<(&str, String)> = budget
        .iter()
        .map(|(category, amount)| (category.label(), amount.format_with_symbol(symbol)))
        .collect();
    let total = budget.total().format_with_symbol(symbol);

    // Labels carry accented characters, so width is counted in chars
    let label_width = rows
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0)
        .max("Category".len());
    let amount_width = rows
        .iter()
        .map(|(_, amount)| amount.chars().count())
        .chain(std::iter::once(total.chars().count()))
        .max()
        .unwrap_or(0)
        .max("Amount".len());

    let mut output = String::new();
    output.push_str(&source_line);
    output.push('\n');
    output.push_str(&format!(
        "{:<label_width$}  {:>amount_width$}\n",
        "Category", "Amount",
    ));
    output.push_str(&format!(
        "{:-<label_width$}  {:->amount_width$}\n",
        "", "",
    ));
    for (label, amount) in &rows {
        output.push_str(&format!(
            "{:<label_width$}  {:>amount_width$}\n",
            label, amount,
        ));
    }
    output.push_str(&format!(
        "{:-<label_width$}  {:->amount_width$}\n",
        "", "",
    ));
    output.push_str(&format!(
        "{:<label_width$}  {:>amount_width$}",
        "TOTAL", total,
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_summary() {
        let out = format_budget_summary(&Budget::defaults(), &BudgetSource::Defaults, "$");
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "Budget source: built-in defaults");
        assert_eq!(lines.len(), 9);
        assert!(lines[3].starts_with("Área Artística"));
        assert!(lines[3].ends_with("$7,140.00"));
        assert!(lines[8].starts_with("TOTAL"));
        assert!(lines[8].ends_with("$20,380.00"));
    }

    #[test]
    fn test_columns_align() {
        let out = format_budget_summary(&Budget::defaults(), &BudgetSource::Defaults, "$");
        let widths: Vec<usize> = out.lines().skip(1).map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_spreadsheet_source_line() {
        let source = BudgetSource::Spreadsheet(PathBuf::from("presupuesto.xlsx"));
        let out = format_budget_summary(&Budget::defaults(), &source, "$");
        assert!(out.starts_with("Budget source: presupuesto.xlsx\n"));
    }
}
