use axum::http::StatusCode;

use crate::db::StoreError;

pub mod employees;
pub mod health;
pub mod sessions;

pub type ApiError = (StatusCode, String);

// Common error mapper
pub fn internal_error<E: std::fmt::Display>(e: E) -> ApiError {
    (StatusCode::INTERNAL_SERVER_ERROR, format!("internal error: {e}"))
}

// Store failures abort the whole render; nothing partial goes back.
pub fn store_error(e: StoreError) -> ApiError {
    match e {
        StoreError::Connection(_) => (StatusCode::SERVICE_UNAVAILABLE, e.to_string()),
        StoreError::Schema(_) => internal_error(e),
    }
}

pub fn session_not_found(id: uuid::Uuid) -> ApiError {
    (StatusCode::NOT_FOUND, format!("session {id} not found"))
}
