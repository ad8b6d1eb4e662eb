//! Demo Trading Bot
//!
//! A Telegram bot that answers button presses with simulated trading content,
//! plus a small HTTP server for deployment health checks.

mod api;
mod assistant;
mod config;
mod telegram;

use api::{create_router, AppState};
use assistant::SessionStore;
use config::Config;
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use teloxide::Bot;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "demo_trading_bot=info,tower_http=info,teloxide=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "Invalid configuration");
            return Err(err.into());
        }
    };
    tracing::info!(port = config.port, webhook_url = ?config.webhook_url, "Configuration loaded");

    // Health-check server
    let app = create_router(AppState::new(config.webhook_url.clone()));
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Health server listening on {}", addr);

    // Sessions live for the lifetime of the process
    let store = Arc::new(SessionStore::new());
    let bot = Bot::new(config.bot_token);

    tokio::select! {
        result = axum::serve(listener, app).into_future() => result?,
        () = telegram::run(bot, store) => {}
    }

    Ok(())
}
