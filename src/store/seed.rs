//! One-time database seeding
//!
//! Creates the employee_reports table and fills it with sample records.
//! Invoked through `reportd seed`; the serving core never writes.

use std::path::Path;

use chrono::{Duration, NaiveDate};
use rand::Rng;
use rusqlite::{params, Connection};

use crate::errors::ReportError;

const NAMES: &[&str] = &[
    "Alice", "Bob", "Charlie", "David", "Eva", "Frank", "Grace", "Helen",
];
const DEPARTMENTS: &[&str] = &["HR", "Engineering", "Sales", "Marketing"];
const STATUSES: &[&str] = &["Active", "On Leave", "Resigned"];
const PERFORMANCES: &[&str] = &["Excellent", "Good", "Average", "Poor"];

/// Drops and recreates the employee_reports table, inserting `rows` sample
/// records with dates spread over the first 150 days of 2024 and hours in
/// the 4.0..10.0 range rounded to two decimals.
pub fn seed(path: &Path, rows: usize) -> Result<(), ReportError> {
    let conn = Connection::open(path)
        .map_err(|e| ReportError::Storage(format!("cannot open '{}': {}", path.display(), e)))?;

    conn.execute_batch(
        "DROP TABLE IF EXISTS employee_reports;
        CREATE TABLE employee_reports (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_name TEXT,
            department TEXT,
            status TEXT,
            report_date TEXT,
            hours_worked REAL,
            performance TEXT
        );",
    )?;

    let base = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid base date");
    let mut rng = rand::thread_rng();

    for _ in 0..rows {
        let name = NAMES[rng.gen_range(0..NAMES.len())];
        let department = DEPARTMENTS[rng.gen_range(0..DEPARTMENTS.len())];
        let status = STATUSES[rng.gen_range(0..STATUSES.len())];
        let performance = PERFORMANCES[rng.gen_range(0..PERFORMANCES.len())];
        let date = (base + Duration::days(rng.gen_range(0..=150)))
            .format("%Y-%m-%d")
            .to_string();
        let hours = (rng.gen_range(4.0..10.0_f64) * 100.0).round() / 100.0;

        conn.execute(
            "INSERT INTO employee_reports
                (employee_name, department, status, report_date, hours_worked, performance)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![name, department, status, date, hours, performance],
        )?;
    }

    Ok(())
}
