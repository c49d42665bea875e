// backend/src/routes/sessions.rs

use std::collections::HashSet;

use axum::{extract::{Path, State}, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::AppState;
use crate::aggregate::{aggregate, Dimension, DimensionValue, Metric, SummaryRow};
use crate::dashboard::{render, Dashboard, Selections};
use super::{session_not_found, store_error, ApiError};

#[derive(Serialize, Deserialize)]
pub struct SessionResp {
    pub session_id: Uuid,
    pub loaded_at: DateTime<Utc>,
    pub dashboard: Dashboard,
}

#[derive(Deserialize)]
pub struct SummaryBody {
    pub dimension: Dimension,
    pub metric: Metric,
    pub selected: Vec<DimensionValue>,
}

#[derive(Serialize)]
pub struct Deleted { pub deleted: bool }

/// POST /api/v1/sessions
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<Json<SessionResp>, ApiError> {
    // Count first, then the view, the same order the page shows them in.
    let total = state.store.count_distinct_employees().await.map_err(store_error)?;
    let view = state.store.fetch_employee_view().await.map_err(store_error)?;

    let session = state.sessions.open(view, total).await;
    info!(session_id = %session.id, rows = session.view.len(), "session loaded");

    let dashboard = render(&session.view, session.total_employees, &Selections::default());
    Ok(Json(SessionResp { session_id: session.id, loaded_at: session.loaded_at, dashboard }))
}

/// POST /api/v1/sessions/:id/dashboard
pub async fn render_dashboard(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(selections): Json<Selections>,
) -> Result<Json<Dashboard>, ApiError> {
    let session = state.sessions.get(id).await.ok_or_else(|| session_not_found(id))?;
    Ok(Json(render(&session.view, session.total_employees, &selections)))
}

/// POST /api/v1/sessions/:id/summary
pub async fn summarize(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(b): Json<SummaryBody>,
) -> Result<Json<Vec<SummaryRow>>, ApiError> {
    let session = state.sessions.get(id).await.ok_or_else(|| session_not_found(id))?;
    let selected: HashSet<DimensionValue> = b.selected.into_iter().collect();
    Ok(Json(aggregate(&session.view, b.dimension, b.metric, &selected)))
}

/// DELETE /api/v1/sessions/:id
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Json<Deleted> {
    Json(Deleted { deleted: state.sessions.close(id).await })
}
