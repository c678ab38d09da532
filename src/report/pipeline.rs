//! Request pipeline
//!
//! Runs one report request to completion: compile the filter, fetch rows,
//! project columns. No shared mutable state; everything lives for the scope
//! of the request.

use serde::Deserialize;
use tracing::debug;

use crate::errors::ReportError;
use crate::filter::{self, FilterObject};
use crate::schema::ReportSchema;
use crate::store::ReportStore;

use super::projection::{project, ReportResult};
use super::summary::FilterSummary;

/// One inbound report request: an optional ordered column selection plus the
/// filter object (all remaining keys).
#[derive(Debug, Default, Deserialize)]
pub struct ReportRequest {
    /// Requested columns, in output order; empty means all schema columns
    #[serde(default)]
    pub columns: Vec<String>,

    /// Filter keys derived from column names
    #[serde(flatten)]
    pub filters: FilterObject,
}

/// Runs the full pipeline for one request.
pub fn run_report(
    store: &ReportStore,
    schema: &ReportSchema,
    request: &ReportRequest,
) -> Result<(ReportResult, FilterSummary), ReportError> {
    let predicate = filter::compile(&request.filters, schema)?;
    let summary = FilterSummary::new(schema, &predicate);

    let rows = store.fetch(&predicate, schema)?;
    debug!(
        clauses = predicate.clauses.len(),
        rows = rows.len(),
        "report query executed"
    );

    Ok((project(rows, schema, &request.columns), summary))
}
