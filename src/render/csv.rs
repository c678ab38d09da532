//! CSV adapter
//!
//! Header row of column labels followed by one delimited line per row, in
//! projection output order.

use crate::errors::ReportError;
use crate::report::ReportResult;

use super::{cell_text, ensure_columns};

/// Renders the result as CSV bytes.
pub fn render_csv(result: &ReportResult) -> Result<Vec<u8>, ReportError> {
    ensure_columns(result)?;

    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(result.labels())
        .map_err(|e| ReportError::Render(e.to_string()))?;

    for row in &result.rows {
        writer
            .write_record(row.iter().map(cell_text))
            .map_err(|e| ReportError::Render(e.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|e| ReportError::Render(e.to_string()))
}
