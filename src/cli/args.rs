//! CLI argument definitions using clap
//!
//! Commands:
//! - reportd serve [--host] [--port] [--db] [--schema] [--cors-origin ...]
//! - reportd seed [--db] [--rows]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// reportd - schema-driven employee report API
#[derive(Parser, Debug)]
#[command(name = "reportd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the report API server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value_t = 5000)]
        port: u16,

        /// Path to the SQLite database file
        #[arg(long, default_value = "employee_reports.db")]
        db: PathBuf,

        /// Path to a JSON schema file (defaults to the built-in employee schema)
        #[arg(long)]
        schema: Option<PathBuf>,

        /// Allowed CORS origin (repeatable); permissive when none given
        #[arg(long = "cors-origin")]
        cors_origins: Vec<String>,
    },

    /// Create and seed the employee database, replacing any existing table
    Seed {
        /// Path to the SQLite database file
        #[arg(long, default_value = "employee_reports.db")]
        db: PathBuf,

        /// Number of sample rows to insert
        #[arg(long, default_value_t = 200)]
        rows: usize,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
