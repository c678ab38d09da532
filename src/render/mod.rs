//! Render adapters
//!
//! Four independent serializers consuming the same projected `ReportResult`:
//! JSON record list, paginated PDF, CSV, and XLSX. All are pure functions of
//! their input; none mutates the result. Every adapter rejects a zero-width
//! result (only unknown columns requested) with a `Render` error.

mod csv;
mod excel;
mod json;
mod pdf;

pub use self::csv::render_csv;
pub use excel::render_xlsx;
pub use json::{render_json, JsonReport};
pub use pdf::render_pdf;

use serde_json::Value;

use crate::errors::ReportError;
use crate::report::ReportResult;

/// Shared zero-column policy for all adapters
fn ensure_columns(result: &ReportResult) -> Result<(), ReportError> {
    if result.columns.is_empty() {
        return Err(ReportError::Render("no columns selected".to_string()));
    }
    Ok(())
}

/// Flat text rendering of one cell, shared by the CSV and PDF adapters
fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
