//! Excel exporter - the two enriched views → one .xlsx workbook

use crate::error::{LinkError, LinkResult};
use crate::types::{CellValue, SheetTable};
use rust_xlsxwriter::{Workbook, Worksheet};
use std::path::Path;

/// Writes the full and reduced views as two worksheets of one workbook
pub struct WorkbookExporter {
    views: Vec<SheetTable>,
}

impl WorkbookExporter {
    /// The sheet order given here is the sheet order in the file
    pub fn new(views: Vec<SheetTable>) -> Self {
        Self { views }
    }

    pub fn export(&self, output_path: &Path) -> LinkResult<()> {
        let mut workbook = Workbook::new();

        for view in &self.views {
            self.write_view(&mut workbook, view)?;
        }

        workbook
            .save(output_path)
            .map_err(|e| LinkError::Export(format!("Failed to save Excel file: {}", e)))?;

        Ok(())
    }

    fn write_view(&self, workbook: &mut Workbook, view: &SheetTable) -> LinkResult<()> {
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(&view.name)
            .map_err(|e| LinkError::Export(format!("Failed to set worksheet name: {}", e)))?;

        // Header row (row 0)
        for (col_idx, header) in view.headers.iter().enumerate() {
            worksheet
                .write_string(0, col_idx as u16, header)
                .map_err(|e| LinkError::Export(format!("Failed to write header: {}", e)))?;
        }

        // Data rows (starting at row 1)
        for (row_idx, row) in view.rows.iter().enumerate() {
            for (col_idx, cell) in row.iter().enumerate() {
                write_cell(worksheet, (row_idx + 1) as u32, col_idx as u16, cell)?;
            }
        }

        Ok(())
    }
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &CellValue,
) -> LinkResult<()> {
    let result = match cell {
        CellValue::Number(n) => worksheet.write_number(row, col, *n),
        CellValue::Text(s) => worksheet.write_string(row, col, s),
        CellValue::Bool(b) => worksheet.write_boolean(row, col, *b),
        CellValue::Empty => return Ok(()),
    };
    result
        .map(|_| ())
        .map_err(|e| LinkError::Export(format!("Failed to write cell ({}, {}): {}", row, col, e)))
}
