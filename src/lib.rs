//! reportd - a schema-driven employee report API
//!
//! Pipeline: filter object -> compiled predicate -> row fetch -> column
//! projection -> one of four render adapters (JSON, PDF, CSV, XLSX).

pub mod cli;
pub mod errors;
pub mod filter;
pub mod http_server;
pub mod render;
pub mod report;
pub mod schema;
pub mod store;
