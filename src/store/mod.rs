//! Row source adapter
//!
//! Executes compiled predicates against the backing SQLite table and returns
//! rows in schema column order. The serving core treats the table as
//! read-only; seeding is a separate one-time setup concern exposed through
//! the CLI.

mod seed;
mod sqlite;

pub use seed::seed;
pub use sqlite::{ReportStore, Row};
