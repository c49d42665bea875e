// backend/src/routes/employees.rs

use axum::{extract::State, Json};
use crate::{AppState, models::{EmployeeCount, EmployeeView}};
use super::{store_error, ApiError};

/// GET /api/v1/employees
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmployeeView>>, ApiError> {
    let rows = state.store.fetch_employee_view().await.map_err(store_error)?;
    Ok(Json(rows))
}

/// GET /api/v1/employees/count
pub async fn count_employees(
    State(state): State<AppState>,
) -> Result<Json<EmployeeCount>, ApiError> {
    let total_employees = state.store.count_distinct_employees().await.map_err(store_error)?;
    Ok(Json(EmployeeCount { total_employees }))
}
