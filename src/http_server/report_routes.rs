//! Report HTTP Routes
//!
//! Endpoints for column discovery and the four report exports. Each handler
//! runs the full pipeline to completion before responding; either the full
//! result is rendered or an error body is returned, never partial rows.

use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tracing::info;

use crate::errors::ReportError;
use crate::render;
use crate::render::JsonReport;
use crate::report::{run_report, ReportRequest};
use crate::schema::{ColumnDescriptor, ReportSchema};
use crate::store::ReportStore;

// ==================
// Shared State
// ==================

/// Report state shared across handlers: the immutable schema registry and
/// the read-only row source.
pub struct ReportState {
    pub schema: Arc<ReportSchema>,
    pub store: ReportStore,
}

impl ReportState {
    pub fn new(schema: ReportSchema, store: ReportStore) -> Self {
        Self {
            schema: Arc::new(schema),
            store,
        }
    }
}

// ==================
// Report Routes
// ==================

/// Create report routes
pub fn report_routes(state: Arc<ReportState>) -> Router {
    Router::new()
        .route("/reports/columns", get(columns_handler))
        .route("/reports", post(report_json_handler))
        .route("/reports/pdf", post(report_pdf_handler))
        .route("/reports/csv", post(report_csv_handler))
        .route("/reports/excel", post(report_excel_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn columns_handler(State(state): State<Arc<ReportState>>) -> Json<Vec<ColumnDescriptor>> {
    Json(state.schema.describe().to_vec())
}

async fn report_json_handler(
    State(state): State<Arc<ReportState>>,
    Json(request): Json<ReportRequest>,
) -> Result<Json<JsonReport>, ReportError> {
    let (result, _) = run_report(&state.store, &state.schema, &request)?;
    let report = render::render_json(&result)?;
    info!(count = report.count, "report rendered as json");
    Ok(Json(report))
}

async fn report_pdf_handler(
    State(state): State<Arc<ReportState>>,
    Json(request): Json<ReportRequest>,
) -> Result<Response, ReportError> {
    let (result, summary) = run_report(&state.store, &state.schema, &request)?;
    let bytes = render::render_pdf(&result, &summary)?;
    info!(rows = result.rows.len(), "report rendered as pdf");
    Ok(attachment(bytes, "application/pdf", "employee_report.pdf"))
}

async fn report_csv_handler(
    State(state): State<Arc<ReportState>>,
    Json(request): Json<ReportRequest>,
) -> Result<Response, ReportError> {
    let (result, _) = run_report(&state.store, &state.schema, &request)?;
    let bytes = render::render_csv(&result)?;
    info!(rows = result.rows.len(), "report rendered as csv");
    Ok(attachment(bytes, "text/csv", "employee_report.csv"))
}

async fn report_excel_handler(
    State(state): State<Arc<ReportState>>,
    Json(request): Json<ReportRequest>,
) -> Result<Response, ReportError> {
    let (result, _) = run_report(&state.store, &state.schema, &request)?;
    let bytes = render::render_xlsx(&result)?;
    info!(rows = result.rows.len(), "report rendered as xlsx");
    Ok(attachment(
        bytes,
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "employee_report.xlsx",
    ))
}

fn attachment(bytes: Vec<u8>, content_type: &str, filename: &str) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        bytes,
    )
        .into_response()
}
