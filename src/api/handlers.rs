//! HTTP request handlers

use super::types::HealthResponse;
use super::AppState;
use axum::{extract::State, routing::get, Json, Router};
use tower_http::trace::TraceLayer;

pub const LIVENESS_TEXT: &str = "Telegram Demo Trading Bot is running!";

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(liveness))
        .route("/health", get(health))
        .route("/set_webhook", get(set_webhook))
        .route("/version", get(get_version))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn liveness() -> &'static str {
    LIVENESS_TEXT
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Updates arrive by long polling, so no webhook is ever registered here
async fn set_webhook(State(state): State<AppState>) -> String {
    match state.webhook_url.as_deref() {
        Some(url) => {
            tracing::info!(webhook_url = %url, "set_webhook requested while polling");
            format!("Bot uses long polling; webhook {url}/webhook was not registered")
        }
        None => "WEBHOOK_URL not set".to_string(),
    }
}

async fn get_version() -> &'static str {
    concat!("demo-trading-bot ", env!("CARGO_PKG_VERSION"))
}
