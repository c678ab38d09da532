//! Schema type definitions
//!
//! Column kinds:
//! - number: numeric column, filterable by inclusive min/max bounds
//! - text: free-text column, filterable by case-insensitive substring
//! - date: ISO-8601 date string, filterable by inclusive start/end bounds
//! - enum: closed value set, filterable by membership

use serde::{Deserialize, Serialize};

/// Semantic column kinds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ColumnKind {
    /// Numeric column (integer or real)
    Number,
    /// Free-text column
    Text,
    /// ISO-8601 date string (YYYY-MM-DD)
    Date,
    /// Closed set of permitted values
    Enum {
        /// Permitted values, as stored
        options: Vec<String>,
    },
}

impl ColumnKind {
    /// Returns the kind name for error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            ColumnKind::Number => "number",
            ColumnKind::Text => "text",
            ColumnKind::Date => "date",
            ColumnKind::Enum { .. } => "enum",
        }
    }
}

/// One column of the report table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Unique, stable column identifier (matches the table column)
    pub name: String,
    /// Human-readable heading used by the export adapters
    pub label: String,
    /// Semantic kind
    #[serde(flatten)]
    pub kind: ColumnKind,
}

impl ColumnDescriptor {
    pub fn number(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind: ColumnKind::Number,
        }
    }

    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind: ColumnKind::Text,
        }
    }

    pub fn date(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind: ColumnKind::Date,
        }
    }

    pub fn enumeration(
        name: impl Into<String>,
        label: impl Into<String>,
        options: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind: ColumnKind::Enum {
                options: options.iter().map(|s| s.to_string()).collect(),
            },
        }
    }
}

/// Ordered, immutable report schema
///
/// Column order defines the canonical column order of every row produced by
/// the row source and of every export with no explicit column request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSchema {
    /// Backing table name
    pub table: String,
    columns: Vec<ColumnDescriptor>,
}

impl ReportSchema {
    /// Create a new schema
    pub fn new(table: impl Into<String>, columns: Vec<ColumnDescriptor>) -> Self {
        Self {
            table: table.into(),
            columns,
        }
    }

    /// Returns the ordered column descriptors
    pub fn describe(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    /// Looks up a column by name
    pub fn column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Returns the schema-order index of a column
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Returns column names in schema order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Validates the schema structure itself
    ///
    /// Names are interpolated into SQL statements, so both the table name and
    /// every column name must be plain identifiers.
    pub fn validate(&self) -> Result<(), String> {
        if !is_identifier(&self.table) {
            return Err(format!(
                "table name '{}' is not a valid identifier",
                self.table
            ));
        }

        if self.columns.is_empty() {
            return Err("schema must declare at least one column".into());
        }

        for col in &self.columns {
            if !is_identifier(&col.name) {
                return Err(format!(
                    "column name '{}' is not a valid identifier",
                    col.name
                ));
            }
            if col.label.trim().is_empty() {
                return Err(format!("column '{}' has an empty label", col.name));
            }
            if let ColumnKind::Enum { options } = &col.kind {
                if options.is_empty() {
                    return Err(format!("enum column '{}' declares no options", col.name));
                }
            }
        }

        for (i, col) in self.columns.iter().enumerate() {
            if self.columns[..i].iter().any(|c| c.name == col.name) {
                return Err(format!("duplicate column name '{}'", col.name));
            }
        }

        Ok(())
    }

    /// The built-in employee report schema matching the seeded table
    pub fn employee_default() -> Self {
        Self::new(
            "employee_reports",
            vec![
                ColumnDescriptor::number("id", "ID"),
                ColumnDescriptor::text("employee_name", "Name"),
                ColumnDescriptor::enumeration(
                    "department",
                    "Dept",
                    &["HR", "Engineering", "Sales", "Marketing"],
                ),
                ColumnDescriptor::enumeration(
                    "status",
                    "Status",
                    &["Active", "On Leave", "Resigned"],
                ),
                ColumnDescriptor::date("report_date", "Date"),
                ColumnDescriptor::number("hours_worked", "Hours"),
                ColumnDescriptor::enumeration(
                    "performance",
                    "Performance",
                    &["Excellent", "Good", "Average", "Poor"],
                ),
            ],
        )
    }
}

/// Plain identifier check: letter or underscore, then letters, digits, underscores
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schema_is_valid() {
        let schema = ReportSchema::employee_default();
        assert!(schema.validate().is_ok());
        assert_eq!(schema.describe().len(), 7);
        assert_eq!(schema.table, "employee_reports");
    }

    #[test]
    fn test_canonical_column_order() {
        let schema = ReportSchema::employee_default();
        assert_eq!(
            schema.column_names(),
            vec![
                "id",
                "employee_name",
                "department",
                "status",
                "report_date",
                "hours_worked",
                "performance"
            ]
        );
    }

    #[test]
    fn test_column_lookup() {
        let schema = ReportSchema::employee_default();
        assert_eq!(schema.index_of("status"), Some(3));
        assert!(schema.column("department").is_some());
        assert!(schema.column("salary").is_none());
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let schema = ReportSchema::new(
            "t",
            vec![
                ColumnDescriptor::text("name", "Name"),
                ColumnDescriptor::text("name", "Name Again"),
            ],
        );
        let err = schema.validate().unwrap_err();
        assert!(err.contains("duplicate"));
    }

    #[test]
    fn test_bad_identifier_rejected() {
        let schema = ReportSchema::new(
            "t",
            vec![ColumnDescriptor::text("name; DROP TABLE t", "Name")],
        );
        assert!(schema.validate().is_err());

        let schema = ReportSchema::new(
            "employee reports",
            vec![ColumnDescriptor::text("name", "Name")],
        );
        assert!(schema.validate().is_err());
    }

    #[test]
    fn test_empty_enum_rejected() {
        let schema = ReportSchema::new(
            "t",
            vec![ColumnDescriptor {
                name: "status".into(),
                label: "Status".into(),
                kind: ColumnKind::Enum { options: vec![] },
            }],
        );
        let err = schema.validate().unwrap_err();
        assert!(err.contains("options"));
    }

    #[test]
    fn test_descriptor_serde_shape() {
        let col = ColumnDescriptor::enumeration("status", "Status", &["Active", "Resigned"]);
        let json = serde_json::to_value(&col).unwrap();
        assert_eq!(json["name"], "status");
        assert_eq!(json["kind"], "enum");
        assert_eq!(json["options"][0], "Active");

        let back: ColumnDescriptor = serde_json::from_value(json).unwrap();
        assert_eq!(back, col);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ColumnKind::Number.kind_name(), "number");
        assert_eq!(ColumnKind::Text.kind_name(), "text");
        assert_eq!(ColumnKind::Date.kind_name(), "date");
        assert_eq!(ColumnKind::Enum { options: vec![] }.kind_name(), "enum");
    }
}
