//! Workbook loading
//!
//! Reads every sheet of a spreadsheet into an in-memory grid of calamine
//! cells. Workbook formats go through calamine; `.csv` files are read with the
//! csv crate as a single sheet named after the file stem.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use csv::ReaderBuilder;

use crate::error::DossierResult;

/// One named sheet as a grid of rows, anchored at column A
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<Data>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<Data>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }
}

/// Load all sheets from `path`, in workbook order
pub fn load_sheets(path: &Path) -> DossierResult<Vec<Sheet>> {
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if is_csv {
        load_csv(path).map(|sheet| vec![sheet])
    } else {
        load_workbook(path)
    }
}

fn load_workbook(path: &Path) -> DossierResult<Vec<Sheet>> {
    let mut workbook = open_workbook_auto(path)?;
    let sheet_names = workbook.sheet_names().to_owned();

    let mut sheets = Vec::with_capacity(sheet_names.len());
    for name in sheet_names {
        let range = workbook.worksheet_range(&name)?;

        // calamine trims leading empty rows and columns; re-pad the columns so
        // index 0 is always column A. Row offsets are irrelevant to a top-down scan.
        let col_offset = range.start().map(|(_, col)| col as usize).unwrap_or(0);
        let rows = range
            .rows()
            .map(|row| {
                let mut cells = vec![Data::Empty; col_offset];
                cells.extend_from_slice(row);
                cells
            })
            .collect();

        sheets.push(Sheet::new(name, rows));
    }

    Ok(sheets)
}

fn load_csv(path: &Path) -> DossierResult<Sheet> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let cells = record
            .iter()
            .map(|field| {
                if field.is_empty() {
                    Data::Empty
                } else {
                    Data::String(field.to_string())
                }
            })
            .collect();
        rows.push(cells);
    }

    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string();

    Ok(Sheet::new(name, rows))
}
