//! Report schema registry
//!
//! The single source of truth for column names, semantic kinds, and enum value
//! sets. Loaded once at startup and immutable thereafter; every other component
//! (filter compiler, row source, projection, render adapters) consumes it.
//!
//! # Design Principles
//!
//! - Schema order defines the canonical column order
//! - Column names are validated identifiers (they are spliced into SQL)
//! - Swappable without recompilation via a JSON schema file

mod loader;
mod types;

pub use loader::load_schema;
pub use types::{ColumnDescriptor, ColumnKind, ReportSchema};
