//! End-to-end HTTP tests against the full router, with a seeded SQLite
//! database behind the row source.

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use rusqlite::Connection;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use reportd::http_server::{HttpServer, HttpServerConfig, ReportState};
use reportd::schema::ReportSchema;
use reportd::store::ReportStore;

fn seeded_db(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("reports.db");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE employee_reports (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_name TEXT,
            department TEXT,
            status TEXT,
            report_date TEXT,
            hours_worked REAL,
            performance TEXT
        );
        INSERT INTO employee_reports
            (employee_name, department, status, report_date, hours_worked, performance)
        VALUES
            ('Alice', 'Engineering', 'Active', '2024-02-01', 8.5, 'Good'),
            ('Bob', 'Sales', 'On Leave', '2024-03-15', 6.0, 'Average'),
            ('Charlie', 'HR', 'Resigned', '2024-04-20', 4.75, 'Poor');",
    )
    .unwrap();
    path
}

fn app(db: &Path) -> Router {
    let state = Arc::new(ReportState::new(
        ReportSchema::employee_default(),
        ReportStore::new(db),
    ));
    HttpServer::new(HttpServerConfig::default(), state).router()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

#[tokio::test]
async fn liveness() {
    let dir = TempDir::new().unwrap();
    let app = app(&seeded_db(&dir));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_bytes(response).await;
    assert_eq!(body, b"Employee Report API is running.");
}

#[tokio::test]
async fn columns_endpoint_lists_schema() {
    let dir = TempDir::new().unwrap();
    let app = app(&seeded_db(&dir));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/reports/columns")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let columns: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    let columns = columns.as_array().unwrap();
    assert_eq!(columns.len(), 7);
    assert_eq!(columns[0]["name"], "id");
    assert_eq!(columns[2]["kind"], "enum");
    assert_eq!(columns[2]["options"][1], "Engineering");
}

#[tokio::test]
async fn department_filter_returns_exact_record() {
    let dir = TempDir::new().unwrap();
    let app = app(&seeded_db(&dir));

    let response = app
        .oneshot(post_json("/api/reports", json!({"department": ["Engineering"]})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body["count"], 1);
    assert_eq!(
        body["records"][0],
        json!({
            "id": 1,
            "employee_name": "Alice",
            "department": "Engineering",
            "status": "Active",
            "report_date": "2024-02-01",
            "hours_worked": 8.5,
            "performance": "Good"
        })
    );
}

#[tokio::test]
async fn requested_column_order_is_respected() {
    let dir = TempDir::new().unwrap();
    let app = app(&seeded_db(&dir));

    let response = app
        .oneshot(post_json(
            "/api/reports",
            json!({"columns": ["status", "employee_name"]}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body["count"], 3);

    let keys: Vec<&String> = body["records"][0].as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["status", "employee_name"]);
}

#[tokio::test]
async fn csv_export_contains_every_row() {
    let dir = TempDir::new().unwrap();
    let app = app(&seeded_db(&dir));

    let response = app.oneshot(post_json("/api/reports/csv", json!({}))).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE.as_str()], "text/csv");
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION.as_str()],
        "attachment; filename=\"employee_report.csv\""
    );

    let text = String::from_utf8(body_bytes(response).await).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len() - 1, 3);
    assert_eq!(lines[0], "ID,Name,Dept,Status,Date,Hours,Performance");
}

#[tokio::test]
async fn pdf_export_is_a_pdf_attachment() {
    let dir = TempDir::new().unwrap();
    let app = app(&seeded_db(&dir));

    let response = app
        .oneshot(post_json("/api/reports/pdf", json!({"status": ["Active"]})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE.as_str()],
        "application/pdf"
    );
    let body = body_bytes(response).await;
    assert_eq!(&body[..5], b"%PDF-");
}

#[tokio::test]
async fn excel_export_is_an_xlsx_attachment() {
    let dir = TempDir::new().unwrap();
    let app = app(&seeded_db(&dir));

    let response = app.oneshot(post_json("/api/reports/excel", json!({}))).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE.as_str()],
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    let body = body_bytes(response).await;
    assert_eq!(&body[..4], b"PK\x03\x04");
}

#[tokio::test]
async fn malformed_bound_is_a_client_error() {
    let dir = TempDir::new().unwrap();
    let app = app(&seeded_db(&dir));

    let response = app
        .oneshot(post_json("/api/reports", json!({"min_hours_worked": "lots"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body["code"], 400);
    assert!(body["error"].as_str().unwrap().contains("hours_worked"));
}

#[tokio::test]
async fn unknown_columns_only_is_a_render_error() {
    let dir = TempDir::new().unwrap();
    let app = app(&seeded_db(&dir));

    let response = app
        .oneshot(post_json("/api/reports/csv", json!({"columns": ["salary"]})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body["code"], 422);
}

#[tokio::test]
async fn unknown_filter_keys_are_ignored() {
    let dir = TempDir::new().unwrap();
    let app = app(&seeded_db(&dir));

    let response = app
        .oneshot(post_json("/api/reports", json!({"salary": [1, 2], "nonsense": "x"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body["count"], 3);
}

#[tokio::test]
async fn missing_database_is_a_server_error() {
    let state = Arc::new(ReportState::new(
        ReportSchema::employee_default(),
        ReportStore::new("/nonexistent/reports.db"),
    ));
    let app = HttpServer::new(HttpServerConfig::default(), state).router();

    let response = app.oneshot(post_json("/api/reports", json!({}))).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
