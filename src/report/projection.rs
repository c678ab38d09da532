//! Column projection
//!
//! Reduces fetched rows to the requested column subset. The caller's order
//! wins over schema order; unknown names are silently dropped. Requesting
//! only unknown columns therefore yields a zero-width result, which the
//! render adapters reject.

use crate::schema::{ColumnDescriptor, ReportSchema};
use crate::store::Row;

/// The post-projection (columns, rows) pair consumed by all render adapters
///
/// Constructed per request, never persisted. Every row's arity equals the
/// resolved column count.
#[derive(Debug, Clone)]
pub struct ReportResult {
    pub columns: Vec<ColumnDescriptor>,
    pub rows: Vec<Row>,
}

impl ReportResult {
    /// Resolved column names, in output order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Resolved column labels, in output order
    pub fn labels(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.label.as_str()).collect()
    }

    /// Number of selected columns
    pub fn width(&self) -> usize {
        self.columns.len()
    }
}

/// Projects rows onto the requested columns.
///
/// An empty request selects the full schema in canonical order. Otherwise the
/// requested names are resolved in caller order; names absent from the schema
/// are dropped without error (documented policy, consistent across all
/// render paths).
pub fn project(rows: Vec<Row>, schema: &ReportSchema, requested: &[String]) -> ReportResult {
    let selected: Vec<usize> = if requested.is_empty() {
        (0..schema.describe().len()).collect()
    } else {
        requested
            .iter()
            .filter_map(|name| schema.index_of(name))
            .collect()
    };

    let columns: Vec<ColumnDescriptor> = selected
        .iter()
        .map(|&i| schema.describe()[i].clone())
        .collect();

    // Full-schema selection is the identity; skip the per-cell copy.
    let rows = if selected.len() == schema.describe().len()
        && selected.iter().enumerate().all(|(i, &s)| i == s)
    {
        rows
    } else {
        rows.into_iter()
            .map(|row| selected.iter().map(|&i| row[i].clone()).collect())
            .collect()
    };

    ReportResult { columns, rows }
}
