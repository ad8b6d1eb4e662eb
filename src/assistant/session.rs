//! Per-user session records and the in-memory store that owns them

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use teloxide::types::UserId;

/// Conversation flags tracked for a single user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    /// Toggled by the start/stop trading button
    pub trading_active: bool,
    /// When set, the next text message is read as a withdrawal address
    pub awaiting_withdrawal: bool,
}

/// Process-lifetime map from user id to [`Session`]
///
/// Records are created lazily and never evicted. The whole map sits behind a
/// single mutex; updates for different chats may arrive concurrently, and
/// holding the lock for an entire dispatch keeps each user's read-modify-write
/// atomic.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<UserId, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the user's session, inserting defaults if absent
    #[allow(dead_code)] // Read-only lookup; message handling goes through update()
    pub fn get_or_create(&self, user_id: UserId) -> Session {
        *self.lock().entry(user_id).or_default()
    }

    /// Overwrite the user's session with defaults (start/help flow)
    pub fn reset(&self, user_id: UserId) -> Session {
        let session = Session::default();
        self.lock().insert(user_id, session);
        session
    }

    /// Get-or-create followed by in-place mutation, under one lock
    ///
    /// Runs `f` against the stored record, inserting defaults first if the
    /// user has none. This is the path every incoming message takes.
    pub fn update<R>(&self, user_id: UserId, f: impl FnOnce(&mut Session) -> R) -> R {
        let mut sessions = self.lock();
        f(sessions.entry(user_id).or_default())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[allow(dead_code)] // Pairs with len()
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic mid-update leaves two plain bools behind, which are always valid.
    fn lock(&self) -> MutexGuard<'_, HashMap<UserId, Session>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
