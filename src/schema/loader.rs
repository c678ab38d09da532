//! Schema loader for loading a report schema from disk at startup
//!
//! The schema is configuration, not code: swapping the column set requires
//! only a different JSON file, no recompilation. A malformed or invalid
//! schema file fails startup.

use std::fs;
use std::path::Path;

use crate::errors::ReportError;

use super::types::ReportSchema;

/// Loads and validates a schema file.
///
/// The file is a JSON document of the same shape `ReportSchema` serializes
/// to: `{"table": ..., "columns": [{"name", "label", "kind", ...}]}`.
pub fn load_schema(path: &Path) -> Result<ReportSchema, ReportError> {
    let content = fs::read_to_string(path).map_err(|e| {
        ReportError::Schema(format!("failed to read '{}': {}", path.display(), e))
    })?;

    let schema: ReportSchema = serde_json::from_str(&content).map_err(|e| {
        ReportError::Schema(format!("invalid schema file '{}': {}", path.display(), e))
    })?;

    schema.validate().map_err(ReportError::Schema)?;

    Ok(schema)
}
