//! HTTP API.
//!
//! ```text
//! GET  /api/canada-day            endpoint documentation
//! GET  /api/canada-day/{year}     Canada Day for a path year
//! POST /api/canada-day            Canada Day for {"year": ...}
//! GET  /api/sales/...             mock sales aggregates
//! ```

pub mod canada_day;
pub mod error;
pub mod response;
pub mod sales;
pub mod state;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use error::ApiError;
pub use response::ApiResponse;
pub use state::AppState;

use crate::config::AppConfig;

/// Builds the application router over `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/canada-day",
            get(canada_day::about).post(canada_day::by_body),
        )
        .route("/api/canada-day/{year}", get(canada_day::by_path))
        .route("/api/sales/overview", get(sales::overview))
        .route("/api/sales/regions", get(sales::regions))
        .route("/api/sales/products", get(sales::products))
        .route("/api/sales/reps", get(sales::reps))
        .route("/api/sales/funnel", get(sales::funnel))
        .route("/api/sales/trends", get(sales::trends))
        .route("/api/sales/data", get(sales::data))
        .route("/api/sales/filters", get(sales::filters))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds the configured address and serves until Ctrl-C.
///
/// # Errors
/// Returns any I/O error from binding or serving.
pub async fn serve(config: &AppConfig) -> std::io::Result<()> {
    let state = AppState::from_config(&config.sales);
    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
