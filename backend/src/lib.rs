// backend/src/lib.rs

use std::time::Duration;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod aggregate;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod models;
pub mod routes;
pub mod session;

use db::Store;
use session::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(store: Store, session_ttl: Duration) -> Self {
        Self { store, sessions: SessionStore::new(session_ttl) }
    }
}

pub fn app(state: AppState) -> Router {
    // Very permissive CORS for local dev (tighten for prod)
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // health
        .route("/health", get(routes::health::health))
        // raw store reads, re-run on every call
        .route("/api/v1/employees", get(routes::employees::list_employees))
        .route("/api/v1/employees/count", get(routes::employees::count_employees))
        // sessions (one per page load)
        .route("/api/v1/sessions", post(routes::sessions::create_session))
        .route(
            "/api/v1/sessions/:id",
            delete(routes::sessions::delete_session),
        )
        .route(
            "/api/v1/sessions/:id/dashboard",
            post(routes::sessions::render_dashboard),
        )
        .route(
            "/api/v1/sessions/:id/summary",
            post(routes::sessions::summarize),
        )
        // state & middleware
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
