//! # HTTP Server
//!
//! Axum HTTP surface for the report pipeline: liveness, column discovery,
//! and the four export endpoints.

mod config;
mod report_routes;
mod server;

pub use config::HttpServerConfig;
pub use report_routes::{report_routes, ReportState};
pub use server::HttpServer;
