// backend/src/main.rs

use salary_report_api::{app, config::Config, db::Store, AppState};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from .env if present
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    let store = Store::new(&config.database_url)?;
    info!(database_url = %config.database_url, "record store configured");

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("API listening on http://127.0.0.1:{}", config.port);

    axum::serve(listener, app(AppState::new(store, config.session_ttl)).into_make_service()).await?;
    Ok(())
}
