// backend/src/db/mod.rs

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{query_as, query_scalar, ConnectOptions, Connection};
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::EmployeeView;

const EMPLOYEE_VIEW_SQL: &str = r#"
    SELECT e.EmployeeId, e.FirstName, e.LastName,
           e.FirstName || ' ' || e.LastName AS FullName,
           e.JobTitle, CAST(e.OfficeId AS TEXT) AS OfficeId,
           CAST(s.YearlyCompensation AS REAL) AS YearlyCompensation,
           cm.Country
    FROM Employee e
    LEFT JOIN Salary s ON e.EmployeeId = s.EmployeeId
    LEFT JOIN OfficeCountryMapping cm ON cm.OfficeId = e.OfficeId
    ORDER BY e.EmployeeId
"#;

const EMPLOYEE_COUNT_SQL: &str = r#"SELECT COUNT(DISTINCT EmployeeId) FROM Employee"#;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record store unavailable: {0}")]
    Connection(#[source] sqlx::Error),
    #[error("record store schema mismatch: {0}")]
    Schema(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        if is_schema_error(&e) {
            StoreError::Schema(e)
        } else {
            StoreError::Connection(e)
        }
    }
}

fn is_schema_error(e: &sqlx::Error) -> bool {
    match e {
        sqlx::Error::Database(db) => {
            let msg = db.message();
            msg.starts_with("no such table") || msg.starts_with("no such column")
        }
        sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::TypeNotFound { .. } => true,
        _ => false,
    }
}

/// Read-only handle on the SQLite record store.
///
/// Holds connection options only. Every call opens its own connection and
/// closes it before returning, on success and on query failure alike.
#[derive(Debug, Clone)]
pub struct Store {
    options: SqliteConnectOptions,
}

impl Store {
    pub fn new(database_url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(StoreError::Connection)?
            .read_only(true)
            .create_if_missing(false);
        Ok(Self { options })
    }

    async fn connect(&self) -> Result<SqliteConnection, StoreError> {
        self.options.connect().await.map_err(|e| {
            warn!(error = %e, "failed to open record store");
            StoreError::Connection(e)
        })
    }

    /// Employee ⟕ Salary ⟕ OfficeCountryMapping, one row per employee.
    pub async fn fetch_employee_view(&self) -> Result<Vec<EmployeeView>, StoreError> {
        let mut conn = self.connect().await?;
        let rows = query_as::<_, EmployeeView>(EMPLOYEE_VIEW_SQL)
            .fetch_all(&mut conn)
            .await;
        release(conn).await;

        let rows = rows.map_err(|e| {
            warn!(error = %e, "employee view query failed");
            StoreError::from(e)
        })?;
        debug!(rows = rows.len(), "fetched employee view");
        Ok(rows)
    }

    pub async fn count_distinct_employees(&self) -> Result<i64, StoreError> {
        let mut conn = self.connect().await?;
        let count = query_scalar::<_, i64>(EMPLOYEE_COUNT_SQL)
            .fetch_one(&mut conn)
            .await;
        release(conn).await;

        let count = count.map_err(|e| {
            warn!(error = %e, "employee count query failed");
            StoreError::from(e)
        })?;
        debug!(count, "counted distinct employees");
        Ok(count)
    }
}

async fn release(conn: SqliteConnection) {
    if let Err(e) = conn.close().await {
        warn!(error = %e, "failed to close record store connection");
    }
}
