//! Human-readable filter summary
//!
//! One line per schema column describing its applied constraint, rendered
//! into the PDF header. Unconstrained columns show "Any" (text, enum) or
//! "All" (number, date).

use crate::filter::{Clause, Predicate};
use crate::schema::{ColumnKind, ReportSchema};

/// Per-column description of the applied filter
#[derive(Debug, Clone)]
pub struct FilterSummary {
    /// (column label, constraint description) in schema order
    pub entries: Vec<(String, String)>,
}

impl FilterSummary {
    /// Builds the summary from the compiled predicate, one entry per schema
    /// column regardless of whether it is constrained.
    pub fn new(schema: &ReportSchema, predicate: &Predicate) -> Self {
        let entries = schema
            .describe()
            .iter()
            .map(|col| {
                let clauses: Vec<&Clause> = predicate.clauses_for(&col.name).collect();
                let description = if clauses.is_empty() {
                    match col.kind {
                        ColumnKind::Text | ColumnKind::Enum { .. } => "Any".to_string(),
                        ColumnKind::Number | ColumnKind::Date => "All".to_string(),
                    }
                } else {
                    describe_clauses(&clauses)
                };
                (col.label.clone(), description)
            })
            .collect();

        Self { entries }
    }
}

fn describe_clauses(clauses: &[&Clause]) -> String {
    let mut min = None;
    let mut max = None;
    let mut start = None;
    let mut end = None;
    let mut parts = Vec::new();

    for clause in clauses {
        match clause {
            Clause::Membership { values, .. } => parts.push(values.join(", ")),
            Clause::Substring { terms, .. } => {
                let quoted: Vec<String> = terms.iter().map(|t| format!("\"{}\"", t)).collect();
                parts.push(format!("contains {}", quoted.join(" or ")));
            }
            Clause::LowerBound { value, .. } => min = Some(*value),
            Clause::UpperBound { value, .. } => max = Some(*value),
            Clause::DateStart { value, .. } => start = Some(value.clone()),
            Clause::DateEnd { value, .. } => end = Some(value.clone()),
        }
    }

    match (min, max) {
        (Some(lo), Some(hi)) => parts.push(format!("{} to {}", lo, hi)),
        (Some(lo), None) => parts.push(format!("at least {}", lo)),
        (None, Some(hi)) => parts.push(format!("at most {}", hi)),
        (None, None) => {}
    }

    match (start, end) {
        (Some(lo), Some(hi)) => parts.push(format!("{} to {}", lo, hi)),
        (Some(lo), None) => parts.push(format!("from {}", lo)),
        (None, Some(hi)) => parts.push(format!("through {}", hi)),
        (None, None) => {}
    }

    parts.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{compile, FilterObject};
    use crate::schema::ReportSchema;
    use serde_json::json;

    fn summary_for(filter: serde_json::Value) -> FilterSummary {
        let schema = ReportSchema::employee_default();
        let filters: FilterObject = filter.as_object().cloned().unwrap();
        let predicate = compile(&filters, &schema).unwrap();
        FilterSummary::new(&schema, &predicate)
    }

    fn entry<'a>(summary: &'a FilterSummary, label: &str) -> &'a str {
        summary
            .entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, d)| d.as_str())
            .unwrap()
    }

    #[test]
    fn test_unconstrained_columns() {
        let summary = summary_for(json!({}));
        assert_eq!(summary.entries.len(), 7);
        assert_eq!(entry(&summary, "Name"), "Any");
        assert_eq!(entry(&summary, "Dept"), "Any");
        assert_eq!(entry(&summary, "Hours"), "All");
        assert_eq!(entry(&summary, "Date"), "All");
    }

    #[test]
    fn test_membership_description() {
        let summary = summary_for(json!({"department": ["Engineering", "Sales"]}));
        assert_eq!(entry(&summary, "Dept"), "Engineering, Sales");
    }

    #[test]
    fn test_substring_description_keeps_casing() {
        let summary = summary_for(json!({"employee_name": "Alice, Bob"}));
        assert_eq!(entry(&summary, "Name"), "contains \"Alice\" or \"Bob\"");
    }

    #[test]
    fn test_range_descriptions() {
        let summary = summary_for(json!({"min_hours_worked": 4, "max_hours_worked": 8}));
        assert_eq!(entry(&summary, "Hours"), "4 to 8");

        let summary = summary_for(json!({"min_hours_worked": 4}));
        assert_eq!(entry(&summary, "Hours"), "at least 4");

        let summary = summary_for(json!({"end_report_date": "2024-03-31"}));
        assert_eq!(entry(&summary, "Date"), "through 2024-03-31");
    }
}
