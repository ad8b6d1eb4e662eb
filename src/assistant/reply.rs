//! Replies produced by the dispatcher

/// Whether the transport should (re)attach the main reply keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardRequest {
    Show,
    /// Leave whatever keyboard the client currently displays
    Keep,
}

/// Outgoing message text (HTML markup) plus presentation hints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub keyboard: KeyboardRequest,
}

impl Reply {
    pub fn with_keyboard(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: KeyboardRequest::Show,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: KeyboardRequest::Keep,
        }
    }
}
