//! Excel importer - .xlsx worksheet → SheetTable

use crate::error::{LinkError, LinkResult};
use crate::types::{CellValue, SheetTable};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::path::{Path, PathBuf};

/// Name tried when no sheet is requested
const DEFAULT_SHEET: &str = "Sheet1";

/// Reads one worksheet of an .xlsx file into a row-major table
pub struct SheetImporter {
    path: PathBuf,
}

impl SheetImporter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Import the requested sheet, or `Sheet1` / the first sheet when none
    /// is named. Header row becomes `headers`, remaining rows become data.
    pub fn import(&self, sheet: Option<&str>) -> LinkResult<SheetTable> {
        let mut workbook: Xlsx<_> = open_workbook(&self.path).map_err(|e| {
            LinkError::Import(format!(
                "Failed to open Excel file '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        let sheet_names = workbook.sheet_names().to_vec();
        let sheet_name = self.resolve_sheet(sheet, &sheet_names)?;

        let range = workbook.worksheet_range(&sheet_name).map_err(|e| {
            LinkError::Import(format!("Failed to read sheet '{}': {}", sheet_name, e))
        })?;

        self.build_table(&sheet_name, &range)
    }

    fn resolve_sheet(&self, requested: Option<&str>, available: &[String]) -> LinkResult<String> {
        match requested {
            Some(name) => {
                if available.iter().any(|s| s == name) {
                    Ok(name.to_string())
                } else {
                    Err(LinkError::Import(format!(
                        "Sheet '{}' not found (available: {})",
                        name,
                        available.join(", ")
                    )))
                }
            }
            None => available
                .iter()
                .find(|s| s.as_str() == DEFAULT_SHEET)
                .or_else(|| available.first())
                .cloned()
                .ok_or_else(|| {
                    LinkError::Import(format!(
                        "Workbook '{}' has no sheets",
                        self.path.display()
                    ))
                }),
        }
    }

    fn build_table(&self, sheet_name: &str, range: &Range<Data>) -> LinkResult<SheetTable> {
        let (height, width) = range.get_size();
        if height == 0 || width == 0 {
            return Err(LinkError::Import(format!(
                "Sheet '{}' is empty",
                sheet_name
            )));
        }

        let mut table = SheetTable::new(sheet_name.to_string());

        // Header row (row 0)
        for col in 0..width {
            let name = match range.get((0, col)) {
                Some(Data::String(s)) => s.clone(),
                Some(Data::Int(i)) => i.to_string(),
                Some(Data::Float(f)) => f.to_string(),
                _ => format!("col_{}", col),
            };
            table.headers.push(name);
        }

        // Data rows
        for row in 1..height {
            let mut cells = Vec::with_capacity(width);
            for col in 0..width {
                let cell = range.get((row, col)).map_or(CellValue::Empty, convert_cell);
                cells.push(cell);
            }
            table.rows.push(cells);
        }

        Ok(table)
    }
}

/// Convert a calamine cell to our cell model
fn convert_cell(data: &Data) -> CellValue {
    match data {
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) | Data::Empty => CellValue::Empty,
    }
}
