//! CLI command dispatch
//!
//! `serve` builds the immutable schema registry and the read-only store,
//! then blocks on the async server. `seed` is the external one-time setup
//! step; the serving core itself never writes to the database.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::http_server::{HttpServer, HttpServerConfig, ReportState};
use crate::schema::{self, ReportSchema};
use crate::store::{self, ReportStore};

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run a single CLI command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve {
            host,
            port,
            db,
            schema,
            cors_origins,
        } => serve(host, port, db, schema, cors_origins),
        Command::Seed { db, rows } => seed(db, rows),
    }
}

fn serve(
    host: String,
    port: u16,
    db: PathBuf,
    schema_path: Option<PathBuf>,
    cors_origins: Vec<String>,
) -> CliResult<()> {
    init_tracing();

    let schema = match schema_path {
        Some(path) => schema::load_schema(&path)?,
        None => ReportSchema::employee_default(),
    };
    info!(
        table = %schema.table,
        columns = schema.describe().len(),
        "schema registry loaded"
    );

    let state = Arc::new(ReportState::new(schema, ReportStore::new(db)));
    let config = HttpServerConfig {
        host,
        port,
        cors_origins,
    };
    let server = HttpServer::new(config, state);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.start())?;

    Ok(())
}

fn seed(db: PathBuf, rows: usize) -> CliResult<()> {
    init_tracing();

    store::seed(&db, rows)?;
    info!(db = %db.display(), rows, "database seeded");
    println!("{} created with {} sample records.", db.display(), rows);

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // try_init so tests invoking commands repeatedly don't panic
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
