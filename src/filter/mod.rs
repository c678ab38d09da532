//! Filter-to-predicate compiler
//!
//! Converts a loosely typed filter object into a safe, parameterized SQL
//! predicate against the report schema. Filter keys derive deterministically
//! from column descriptors:
//!
//! - `<name>`: substring match (text) or membership test (enum)
//! - `min_<name>` / `max_<name>`: inclusive numeric bounds
//! - `start_<name>` / `end_<name>`: inclusive ISO-8601 date bounds
//!
//! Unknown keys are ignored, never errors. Every value becomes a bound
//! parameter; no caller input is ever interpolated into predicate text.

mod clause;
mod compiler;

pub use clause::{Clause, Predicate, SqlParam};
pub use compiler::compile;

/// Caller-supplied partial constraint set, keyed by column-derived convention
pub type FilterObject = serde_json::Map<String, serde_json::Value>;
