// backend/tests/common/mod.rs

#![allow(dead_code)]

use salary_report_api::{app, config::Config, db::Store, AppState};
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection};
use tempfile::TempDir;
use tokio::net::TcpListener;

pub const SCHEMA: &[&str] = &[
    "CREATE TABLE Employee (
        EmployeeId INTEGER PRIMARY KEY,
        FirstName TEXT,
        LastName TEXT,
        JobTitle TEXT,
        OfficeId INTEGER
    )",
    "CREATE TABLE Salary (
        EmployeeId INTEGER REFERENCES Employee(EmployeeId),
        YearlyCompensation NUMERIC
    )",
    "CREATE TABLE OfficeCountryMapping (
        OfficeId INTEGER PRIMARY KEY,
        Country TEXT NOT NULL
    )",
];

// 4 has no salary row, 5 sits in an office with no country mapping.
pub const ROWS: &[&str] = &[
    "INSERT INTO OfficeCountryMapping VALUES (1, 'US'), (2, 'UK')",
    "INSERT INTO Employee VALUES
        (1, 'Grace', 'Hopper', 'Eng', 1),
        (2, 'Alan', 'Turing', 'Eng', 1),
        (3, 'Ada', 'Lovelace', 'Sales', 2),
        (4, 'Linus', 'Torvalds', 'Eng', 1),
        (5, 'Ken', 'Thompson', 'Ops', 9)",
    "INSERT INTO Salary VALUES (1, 100), (2, 200), (3, 50.5), (5, 80)",
];

pub const EMPLOYEE_ROWS: usize = 5;

pub struct Fixture {
    _dir: TempDir,
    pub url: String,
}

/// Builds a SQLite file from `statements` in a fresh temp directory.
pub async fn database(statements: &[&str]) -> Fixture {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("utsc-exercise.db");

    let mut conn = SqliteConnectOptions::new()
        .filename(&path)
        .create_if_missing(true)
        .connect()
        .await
        .expect("create fixture db");
    for sql in statements {
        sqlx::query(sql).execute(&mut conn).await.expect("fixture statement");
    }
    conn.close().await.expect("close fixture db");

    Fixture { url: format!("sqlite://{}", path.display()), _dir: dir }
}

pub async fn seeded() -> Fixture {
    let statements: Vec<&str> = SCHEMA.iter().chain(ROWS).copied().collect();
    database(&statements).await
}

/// Serves the API on an ephemeral port and returns its base URL.
pub async fn spawn(database_url: &str) -> String {
    let store = Store::new(database_url).expect("store");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app(AppState::new(store, Config::default().session_ttl)).into_make_service())
            .await
            .expect("serve");
    });
    format!("http://{addr}")
}
