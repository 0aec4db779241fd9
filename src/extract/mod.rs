//! Budget extraction from spreadsheets
//!
//! Finds the totals sheet in a workbook and pulls category amounts out of it by
//! matching row labels against the known category names. Every failure mode
//! (missing file, unreadable workbook, nothing matched) collapses to `None`;
//! the caller's only recovery is to use the default budget.

pub mod workbook;

use std::collections::BTreeMap;
use std::path::Path;

use calamine::Data;
use tracing::{debug, info};

use crate::models::{Budget, BudgetCategory, Money};

pub use workbook::{load_sheets, Sheet};

/// Sheet-name fragment identifying the totals sheet (matched case-insensitively)
pub const TOTALS_SHEET_MARKER: &str = "totales";

/// Extract a budget from the spreadsheet at `path`
///
/// Returns `None` when the file is missing or unreadable, or when no row
/// matches a known category.
pub fn extract_budget(path: &Path) -> Option<Budget> {
    let sheets = match load_sheets(path) {
        Ok(sheets) => sheets,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "budget spreadsheet unavailable");
            return None;
        }
    };

    let budget = extract_from_sheets(&sheets);
    match &budget {
        Some(budget) => info!(
            path = %path.display(),
            categories = budget.len(),
            total = %budget.total(),
            "budget extracted from spreadsheet"
        ),
        None => debug!(path = %path.display(), "no budget rows matched"),
    }
    budget
}

/// Extract a budget from already-loaded sheets
pub fn extract_from_sheets(sheets: &[Sheet]) -> Option<Budget> {
    let sheet = select_sheet(sheets)?;
    debug!(sheet = %sheet.name, "scanning sheet for budget rows");
    scan_rows(&sheet.rows)
}

/// Pick the first sheet whose name contains "totales", else the first sheet
pub fn select_sheet(sheets: &[Sheet]) -> Option<&Sheet> {
    sheets
        .iter()
        .find(|s| s.name.to_lowercase().contains(TOTALS_SHEET_MARKER))
        .or_else(|| sheets.first())
}

/// Scan rows top to bottom, assigning amounts to every category whose name
/// appears in the row's first cell
///
/// A label containing several category names assigns the row's value to all
/// of them. When several rows match the same category the last one wins.
pub fn scan_rows(rows: &[Vec<Data>]) -> Option<Budget> {
    let mut amounts = BTreeMap::new();

    for row in rows {
        let Some(label) = row.first().and_then(cell_label) else {
            continue;
        };
        let label = label.to_lowercase();

        for category in BudgetCategory::ALL {
            if !label.contains(&category.label().to_lowercase()) {
                continue;
            }
            let amount = row
                .get(1)
                .and_then(cell_amount)
                .unwrap_or_else(|| category.default_amount());
            amounts.insert(category, amount);
        }
    }

    Budget::from_amounts(amounts)
}

/// Text of a label cell; `None` means the row has no label
fn cell_label(cell: &Data) -> Option<String> {
    match cell {
        Data::String(s) if !s.is_empty() => Some(s.clone()),
        Data::Int(v) => Some(v.to_string()),
        Data::Float(v) => Some(v.to_string()),
        Data::Bool(v) => Some(v.to_string()),
        Data::DateTimeIso(s) | Data::DurationIso(s) if !s.is_empty() => Some(s.clone()),
        Data::DateTime(v) => Some(v.as_f64().to_string()),
        _ => None,
    }
}

/// Amount held by a value cell, if it is numeric
fn cell_amount(cell: &Data) -> Option<Money> {
    let value = match cell {
        Data::Int(v) => *v as f64,
        Data::Float(v) => *v,
        Data::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    Money::from_amount(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn text(s: &str) -> Data {
        Data::String(s.to_string())
    }

    fn row(label: &str, value: Data) -> Vec<Data> {
        vec![text(label), value]
    }

    #[test]
    fn test_select_sheet_prefers_totales() {
        let sheets = vec![
            Sheet::new("Detalle", vec![]),
            Sheet::new("Totales Generales", vec![]),
            Sheet::new("Notas", vec![]),
        ];
        assert_eq!(select_sheet(&sheets).unwrap().name, "Totales Generales");
    }

    #[test]
    fn test_select_sheet_is_case_insensitive() {
        let sheets = vec![Sheet::new("Hoja", vec![]), Sheet::new("RESUMEN TOTALES", vec![])];
        assert_eq!(select_sheet(&sheets).unwrap().name, "RESUMEN TOTALES");
    }

    #[test]
    fn test_select_sheet_falls_back_to_first() {
        let sheets = vec![Sheet::new("Hoja1", vec![]), Sheet::new("Hoja2", vec![])];
        assert_eq!(select_sheet(&sheets).unwrap().name, "Hoja1");
        assert!(select_sheet(&[]).is_none());
    }

    #[test]
    fn test_only_selected_sheet_is_scanned() {
        let sheets = vec![
            Sheet::new("Detalle", vec![row("Equipamiento", Data::Float(1.0))]),
            Sheet::new("Totales", vec![row("Área Artística", Data::Float(2.0))]),
        ];
        let budget = extract_from_sheets(&sheets).unwrap();
        assert_eq!(budget.len(), 1);
        assert_eq!(
            budget.get(BudgetCategory::Artistic),
            Some(Money::from_units(2))
        );
    }

    #[test]
    fn test_no_matches_is_none() {
        let rows = vec![
            row("Concepto", text("Monto")),
            row("Viáticos", Data::Float(300.0)),
            vec![],
        ];
        assert!(scan_rows(&rows).is_none());
    }

    #[test]
    fn test_numeric_values_are_used() {
        let rows = vec![
            row("ÁREA ARTÍSTICA", Data::Float(7000.5)),
            row("Equipamiento", Data::Int(5000)),
            row("Producción y logística", text(" 1234.25 ")),
        ];
        let budget = scan_rows(&rows).unwrap();

        assert_eq!(
            budget.get(BudgetCategory::Artistic),
            Some(Money::from_cents(700_050))
        );
        assert_eq!(
            budget.get(BudgetCategory::Equipment),
            Some(Money::from_units(5000))
        );
        assert_eq!(
            budget.get(BudgetCategory::ProductionLogistics),
            Some(Money::from_cents(123_425))
        );
        assert_eq!(budget.total(), Money::from_cents(1_323_475));
    }

    #[test]
    fn test_non_numeric_or_missing_value_uses_default() {
        let rows = vec![
            row("Área Técnica", text("pendiente")),
            vec![text("Equipamiento")],
            row("Área Artística", Data::Empty),
            row("Producción y Logística", Data::Bool(true)),
        ];
        let budget = scan_rows(&rows).unwrap();

        assert_eq!(budget, Budget::defaults());
    }

    #[test]
    fn test_empty_label_rows_are_skipped() {
        let rows = vec![
            vec![Data::Empty, Data::Float(99.0)],
            row("", Data::Float(99.0)),
            vec![],
            row("Área Técnica", Data::Float(10.0)),
        ];
        let budget = scan_rows(&rows).unwrap();
        assert_eq!(budget.len(), 1);
        assert_eq!(
            budget.get(BudgetCategory::Technical),
            Some(Money::from_units(10))
        );
    }

    #[test]
    fn test_partial_match_is_not_merged_with_defaults() {
        let rows = vec![row("Área Técnica - detalle", Data::Int(6000))];
        let budget = scan_rows(&rows).unwrap();

        assert_eq!(budget.len(), 1);
        assert_eq!(
            budget.get(BudgetCategory::Technical),
            Some(Money::from_units(6000))
        );
        assert!(budget.get(BudgetCategory::Artistic).is_none());
        assert_eq!(budget.total(), Money::from_units(6000));
    }

    #[test]
    fn test_label_naming_two_categories_assigns_both() {
        let rows = vec![row("Área Técnica y Equipamiento", Data::Float(800.0))];
        let budget = scan_rows(&rows).unwrap();

        assert_eq!(
            budget.get(BudgetCategory::Technical),
            Some(Money::from_units(800))
        );
        assert_eq!(
            budget.get(BudgetCategory::Equipment),
            Some(Money::from_units(800))
        );
        assert_eq!(budget.total(), Money::from_units(1600));
    }

    #[test]
    fn test_huge_amount_keeps_its_value() {
        let rows = vec![row("Área Técnica", Data::Float(1e17))];
        let budget = scan_rows(&rows).unwrap();
        assert_eq!(budget.total().to_string(), "$100,000,000,000,000,000.00");
    }

    #[test]
    fn test_out_of_range_amount_uses_defaults() {
        let rows = vec![row("Área Técnica y Equipamiento", Data::Float(1e300))];
        let budget = scan_rows(&rows).unwrap();

        assert_eq!(
            budget.get(BudgetCategory::Technical),
            Some(BudgetCategory::Technical.default_amount())
        );
        assert_eq!(budget.total().to_string(), "$9,690.00");
    }

    #[test]
    fn test_last_matching_row_wins() {
        let rows = vec![
            row("Equipamiento (parcial)", Data::Float(100.0)),
            row("Equipamiento total", Data::Float(250.0)),
        ];
        let budget = scan_rows(&rows).unwrap();
        assert_eq!(
            budget.get(BudgetCategory::Equipment),
            Some(Money::from_units(250))
        );
    }

    #[test]
    fn test_missing_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        assert!(extract_budget(&temp_dir.path().join("presupuesto.xlsx")).is_none());
    }

    #[test]
    fn test_unreadable_workbook_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("presupuesto.xlsx");
        std::fs::write(&path, [0u8, 1, 2, 3, 4]).unwrap();
        assert!(extract_budget(&path).is_none());
    }

    #[test]
    fn test_extract_from_csv() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Totales.csv");
        std::fs::write(
            &path,
            "Área,Total\nÁrea Técnica - detalle,6000\nEquipamiento,n/a\n",
        )
        .unwrap();

        let budget = extract_budget(&path).unwrap();
        assert_eq!(budget.len(), 2);
        assert_eq!(
            budget.get(BudgetCategory::Technical),
            Some(Money::from_units(6000))
        );
        assert_eq!(
            budget.get(BudgetCategory::Equipment),
            Some(Money::from_units(5190))
        );
        assert_eq!(budget.total(), Money::from_units(11190));
    }
}
