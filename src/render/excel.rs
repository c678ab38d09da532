//! XLSX adapter
//!
//! Single "Report" worksheet: bold header row of column labels, then data
//! rows. Numeric cells are written as numbers so spreadsheet formulas work.

use rust_xlsxwriter::{Format, Workbook};
use serde_json::Value;

use crate::errors::ReportError;
use crate::report::ReportResult;

use super::{cell_text, ensure_columns};

/// Renders the result as an XLSX workbook.
pub fn render_xlsx(result: &ReportResult) -> Result<Vec<u8>, ReportError> {
    ensure_columns(result)?;

    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("Report")
        .map_err(|e| ReportError::Render(e.to_string()))?;

    for (col, descriptor) in result.columns.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, &descriptor.label, &bold)
            .map_err(|e| ReportError::Render(e.to_string()))?;
    }

    for (row_idx, row) in result.rows.iter().enumerate() {
        for (col, cell) in row.iter().enumerate() {
            let r = (row_idx + 1) as u32;
            let c = col as u16;
            match cell {
                Value::Number(n) => {
                    worksheet
                        .write_number(r, c, n.as_f64().unwrap_or(0.0))
                        .map_err(|e| ReportError::Render(e.to_string()))?;
                }
                other => {
                    worksheet
                        .write_string(r, c, cell_text(other))
                        .map_err(|e| ReportError::Render(e.to_string()))?;
                }
            }
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ReportError::Render(e.to_string()))
}
