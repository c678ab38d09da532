//! SQLite-backed row source
//!
//! One read-only connection per fetch: acquired at the top of the call and
//! dropped on every exit path. There are no concurrent writers in scope, so
//! no transactional semantics are needed.

use std::path::{Path, PathBuf};

use rusqlite::types::{ToSqlOutput, ValueRef};
use rusqlite::{Connection, OpenFlags, ToSql};
use serde_json::Value;

use crate::errors::ReportError;
use crate::filter::{Predicate, SqlParam};
use crate::schema::ReportSchema;

/// One fetched row: scalar values in schema column order
pub type Row = Vec<Value>;

impl ToSql for SqlParam {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            SqlParam::Text(s) => Ok(ToSqlOutput::from(s.as_str())),
            SqlParam::Real(f) => Ok(ToSqlOutput::from(*f)),
        }
    }
}

/// Read-only adapter over the report table
#[derive(Debug, Clone)]
pub struct ReportStore {
    path: PathBuf,
}

impl ReportStore {
    /// Create a store for the given database file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The database file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open_read_only(&self) -> Result<Connection, ReportError> {
        Connection::open_with_flags(&self.path, OpenFlags::SQLITE_OPEN_READ_ONLY).map_err(|e| {
            ReportError::Storage(format!("cannot open '{}': {}", self.path.display(), e))
        })
    }

    /// Executes the compiled predicate and returns all matching rows in
    /// schema column order. No pagination or limit.
    pub fn fetch(
        &self,
        predicate: &Predicate,
        schema: &ReportSchema,
    ) -> Result<Vec<Row>, ReportError> {
        let conn = self.open_read_only()?;
        let (where_sql, params) = predicate.to_sql();

        // Column and table names come from the validated schema, never from
        // the caller; every filter value is a bound parameter.
        let sql = format!(
            "SELECT {} FROM {} WHERE {}",
            schema.column_names().join(", "),
            schema.table,
            where_sql
        );

        let mut stmt = conn.prepare(&sql)?;
        let width = schema.describe().len();
        let rows = stmt
            .query_map(rusqlite::params_from_iter(params.iter()), |row| {
                let mut values = Vec::with_capacity(width);
                for i in 0..width {
                    values.push(value_ref_to_json(row.get_ref(i)?));
                }
                Ok(values)
            })?
            .collect::<Result<Vec<Row>, _>>()?;

        Ok(rows)
    }

    /// Total row count of the report table
    pub fn count(&self, schema: &ReportSchema) -> Result<u64, ReportError> {
        let conn = self.open_read_only()?;
        let count: u64 = conn.query_row(
            &format!("SELECT COUNT(*) FROM {}", schema.table),
            [],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}

fn value_ref_to_json(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::from(i),
        ValueRef::Real(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        ValueRef::Text(t) => Value::String(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(_) => Value::Null,
    }
}
