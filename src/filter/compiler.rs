//! Filter object compilation
//!
//! Walks the schema in column order, selecting one clause-builder strategy
//! per column kind. Absent and empty values contribute no clause; malformed
//! values (non-numeric bound, bad date) are `Validation` errors.

use chrono::NaiveDate;
use serde_json::Value;

use crate::errors::ReportError;
use crate::schema::{ColumnKind, ReportSchema};

use super::clause::{Clause, Predicate};
use super::FilterObject;

/// Compiles a filter object into a parameterized predicate.
///
/// Keys that reference no schema column are ignored. Enum comparison is
/// case-sensitive against the stored values (the store is seeded canonical);
/// values are whitespace-trimmed only.
pub fn compile(filters: &FilterObject, schema: &ReportSchema) -> Result<Predicate, ReportError> {
    let mut predicate = Predicate::new();

    for col in schema.describe() {
        match &col.kind {
            ColumnKind::Enum { .. } => {
                if let Some(value) = filters.get(&col.name) {
                    let values = enum_values(&col.name, value)?;
                    if !values.is_empty() {
                        predicate.clauses.push(Clause::Membership {
                            column: col.name.clone(),
                            values,
                        });
                    }
                }
            }
            ColumnKind::Text => {
                if let Some(value) = filters.get(&col.name) {
                    let terms = text_terms(&col.name, value)?;
                    if !terms.is_empty() {
                        predicate.clauses.push(Clause::Substring {
                            column: col.name.clone(),
                            terms,
                        });
                    }
                }
            }
            ColumnKind::Number => {
                if let Some(value) = filters.get(&format!("min_{}", col.name)) {
                    if let Some(bound) = number_bound(&col.name, value)? {
                        predicate.clauses.push(Clause::LowerBound {
                            column: col.name.clone(),
                            value: bound,
                        });
                    }
                }
                if let Some(value) = filters.get(&format!("max_{}", col.name)) {
                    if let Some(bound) = number_bound(&col.name, value)? {
                        predicate.clauses.push(Clause::UpperBound {
                            column: col.name.clone(),
                            value: bound,
                        });
                    }
                }
            }
            ColumnKind::Date => {
                if let Some(value) = filters.get(&format!("start_{}", col.name)) {
                    if let Some(date) = date_bound(&col.name, value)? {
                        predicate.clauses.push(Clause::DateStart {
                            column: col.name.clone(),
                            value: date,
                        });
                    }
                }
                if let Some(value) = filters.get(&format!("end_{}", col.name)) {
                    if let Some(date) = date_bound(&col.name, value)? {
                        predicate.clauses.push(Clause::DateEnd {
                            column: col.name.clone(),
                            value: date,
                        });
                    }
                }
            }
        }
    }

    Ok(predicate)
}

/// Enum filter values: a JSON array of strings, or a single string treated as
/// a one-element set. Entries are trimmed; empty entries are dropped.
fn enum_values(column: &str, value: &Value) -> Result<Vec<String>, ReportError> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Ok(Vec::new())
            } else {
                Ok(vec![trimmed.to_string()])
            }
        }
        Value::Array(items) => {
            let mut values = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(s) => {
                        let trimmed = s.trim();
                        if !trimmed.is_empty() {
                            values.push(trimmed.to_string());
                        }
                    }
                    other => {
                        return Err(ReportError::Validation(format!(
                            "filter '{}' expects strings, got {}",
                            column,
                            json_type_name(other)
                        )))
                    }
                }
            }
            Ok(values)
        }
        other => Err(ReportError::Validation(format!(
            "filter '{}' expects a string or list of strings, got {}",
            column,
            json_type_name(other)
        ))),
    }
}

/// Text filter terms: a comma-separated string compiles to the OR of per-term
/// substring matches. Terms are trimmed; empty terms are dropped.
fn text_terms(column: &str, value: &Value) -> Result<Vec<String>, ReportError> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::String(s) => Ok(s
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()),
        other => Err(ReportError::Validation(format!(
            "filter '{}' expects a string, got {}",
            column,
            json_type_name(other)
        ))),
    }
}

/// Numeric bound: a JSON number, or a string parseable as one. Null and empty
/// strings mean "no constraint".
fn number_bound(column: &str, value: &Value) -> Result<Option<f64>, ReportError> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n.as_f64().map(Some).ok_or_else(|| {
            ReportError::Validation(format!("filter bound on '{}' is not a finite number", column))
        }),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed.parse::<f64>().map(Some).map_err(|_| {
                ReportError::Validation(format!(
                    "filter bound on '{}' is not numeric: '{}'",
                    column, trimmed
                ))
            })
        }
        other => Err(ReportError::Validation(format!(
            "filter bound on '{}' expects a number, got {}",
            column,
            json_type_name(other)
        ))),
    }
}

/// Date bound: a YYYY-MM-DD string. Null and empty strings mean "no constraint".
fn date_bound(column: &str, value: &Value) -> Result<Option<String>, ReportError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| {
                ReportError::Validation(format!(
                    "filter bound on '{}' is not a YYYY-MM-DD date: '{}'",
                    column, trimmed
                ))
            })?;
            Ok(Some(trimmed.to_string()))
        }
        other => Err(ReportError::Validation(format!(
            "filter bound on '{}' expects a date string, got {}",
            column,
            json_type_name(other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
