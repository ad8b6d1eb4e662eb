//! Health-check HTTP surface served next to the bot loop
//!
//! Shares no state with the dispatcher; it only reports liveness.

mod handlers;
mod types;

pub use handlers::create_router;

/// Application state shared across handlers
#[derive(Clone, Default)]
pub struct AppState {
    /// Informational only; updates arrive by long polling
    pub webhook_url: Option<String>,
}

impl AppState {
    pub fn new(webhook_url: Option<String>) -> Self {
        Self { webhook_url }
    }
}
