//! Predicate clause strategies
//!
//! A closed set of clause builders, one per filterable column kind. Each
//! clause renders a SQL fragment with `?` placeholders and pushes its bound
//! parameters in placeholder order.

/// A bound SQL parameter
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Text(String),
    Real(f64),
}

/// One compiled predicate clause
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    /// Enum membership: `col IN (?, ...)`
    Membership { column: String, values: Vec<String> },
    /// Case-insensitive substring, OR-ed across terms:
    /// `(instr(lower(col), ?) > 0 OR ...)`
    Substring { column: String, terms: Vec<String> },
    /// Inclusive numeric lower bound: `col >= ?`
    LowerBound { column: String, value: f64 },
    /// Inclusive numeric upper bound: `col <= ?`
    UpperBound { column: String, value: f64 },
    /// Inclusive date lower bound (lexicographic ISO-8601): `col >= ?`
    DateStart { column: String, value: String },
    /// Inclusive date upper bound: `col <= ?`
    DateEnd { column: String, value: String },
}

impl Clause {
    /// The schema column this clause constrains
    pub fn column(&self) -> &str {
        match self {
            Clause::Membership { column, .. }
            | Clause::Substring { column, .. }
            | Clause::LowerBound { column, .. }
            | Clause::UpperBound { column, .. }
            | Clause::DateStart { column, .. }
            | Clause::DateEnd { column, .. } => column,
        }
    }

    /// Renders the SQL fragment, appending bound parameters in placeholder order.
    ///
    /// Substring terms are lowercased here so the stored display values keep
    /// their original casing for the filter summary.
    pub fn to_sql(&self, params: &mut Vec<SqlParam>) -> String {
        match self {
            Clause::Membership { column, values } => {
                let placeholders = vec!["?"; values.len()].join(", ");
                for v in values {
                    params.push(SqlParam::Text(v.clone()));
                }
                format!("{} IN ({})", column, placeholders)
            }
            Clause::Substring { column, terms } => {
                let parts: Vec<String> = terms
                    .iter()
                    .map(|t| {
                        params.push(SqlParam::Text(t.to_lowercase()));
                        format!("instr(lower({}), ?) > 0", column)
                    })
                    .collect();
                format!("({})", parts.join(" OR "))
            }
            Clause::LowerBound { column, value } => {
                params.push(SqlParam::Real(*value));
                format!("{} >= ?", column)
            }
            Clause::UpperBound { column, value } => {
                params.push(SqlParam::Real(*value));
                format!("{} <= ?", column)
            }
            Clause::DateStart { column, value } => {
                params.push(SqlParam::Text(value.clone()));
                format!("{} >= ?", column)
            }
            Clause::DateEnd { column, value } => {
                params.push(SqlParam::Text(value.clone()));
                format!("{} <= ?", column)
            }
        }
    }
}

/// The compiled, parameterized condition passed to the row source
///
/// Clauses are AND-conjoined; no clauses compiles to the unconditional
/// match-all predicate.
#[derive(Debug, Clone, Default)]
pub struct Predicate {
    pub clauses: Vec<Clause>,
}

impl Predicate {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no clause constrains any column
    pub fn is_unconstrained(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Clauses constraining the given column
    pub fn clauses_for<'a>(&'a self, column: &'a str) -> impl Iterator<Item = &'a Clause> {
        self.clauses.iter().filter(move |c| c.column() == column)
    }

    /// Renders the full WHERE expression and its ordered parameter list
    pub fn to_sql(&self) -> (String, Vec<SqlParam>) {
        if self.clauses.is_empty() {
            return ("1=1".to_string(), Vec::new());
        }

        let mut params = Vec::new();
        let fragments: Vec<String> = self.clauses.iter().map(|c| c.to_sql(&mut params)).collect();
        (fragments.join(" AND "), params)
    }
}
