//! JSON record-list adapter
//!
//! Emits `{count, records}` with one object per row. Field order inside each
//! record follows the result's column order (serde_json `preserve_order`).

use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::ReportError;
use crate::report::ReportResult;

use super::ensure_columns;

/// The JSON report body
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub count: usize,
    pub records: Vec<Map<String, Value>>,
}

/// Renders the result as a record list.
pub fn render_json(result: &ReportResult) -> Result<JsonReport, ReportError> {
    ensure_columns(result)?;

    let records = result
        .rows
        .iter()
        .map(|row| {
            let mut record = Map::with_capacity(result.width());
            for (col, value) in result.columns.iter().zip(row) {
                record.insert(col.name.clone(), value.clone());
            }
            record
        })
        .collect::<Vec<_>>();

    Ok(JsonReport {
        count: records.len(),
        records,
    })
}
