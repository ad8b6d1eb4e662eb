//! Conversational core of the demo trading bot
//!
//! Follows the Elm Architecture: raw text is resolved into an [`Action`], and
//! a pure [`dispatch`] maps `(session, text)` to a reply plus the next session.

mod action;
mod dispatch;
mod reply;
mod session;
pub mod templates;

#[cfg(test)]
mod proptests;

pub use action::Action;
pub use dispatch::dispatch;
pub use reply::{KeyboardRequest, Reply};
pub use session::{Session, SessionStore};
