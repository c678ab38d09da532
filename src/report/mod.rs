//! Report pipeline
//!
//! Ties the filter compiler, row source and projection engine together:
//! inbound request -> compiled predicate -> fetched rows -> projected
//! `ReportResult`, plus the human-readable filter summary consumed by the
//! PDF header.

mod pipeline;
mod projection;
mod summary;

pub use pipeline::{run_report, ReportRequest};
pub use projection::{project, ReportResult};
pub use summary::FilterSummary;
