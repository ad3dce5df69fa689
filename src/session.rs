//! Per-session state.
//!
//! A session owns its own [`OrderHistory`]. The Telegram front-end uses one
//! session per chat, so two chats never see each other's orders.

use std::collections::HashMap;
use std::sync::Arc;

use teloxide::types::ChatId;
use tokio::sync::Mutex;
use tracing::debug;

use crate::history::OrderHistory;

/// Identifier for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub i64);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ChatId> for SessionId {
    fn from(id: ChatId) -> Self {
        SessionId(id.0)
    }
}

impl From<i64> for SessionId {
    fn from(id: i64) -> Self {
        SessionId(id)
    }
}

#[derive(Debug, Default)]
pub struct Session {
    history: OrderHistory,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &OrderHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut OrderHistory {
        &mut self.history
    }
}

/// Shared handle to all live sessions.
///
/// Cloning the store clones the handle, not the sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<SessionId, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` on the session, creating an empty one on first use.
    ///
    /// The store is locked while `f` runs, so `f` must not block.
    pub async fn with_session<T>(&self, id: SessionId, f: impl FnOnce(&mut Session) -> T) -> T {
        let mut sessions = self.sessions.lock().await;
        let session = sessions.entry(id).or_insert_with(|| {
            debug!(session = %id, "Starting new session");
            Session::new()
        });
        f(session)
    }

    /// Run `f` on an existing session without creating one.
    ///
    /// Returns `None` for a session that has never ordered.
    pub async fn read<T>(&self, id: SessionId, f: impl FnOnce(&Session) -> T) -> Option<T> {
        let sessions = self.sessions.lock().await;
        sessions.get(&id).map(f)
    }

    /// Forget everything recorded for a session.
    ///
    /// Returns `false` if the session had no history.
    pub async fn reset(&self, id: SessionId) -> bool {
        let mut sessions = self.sessions.lock().await;
        match sessions.remove(&id) {
            Some(session) => {
                debug!(session = %id, orders = session.history().len(), "Session reset");
                !session.history().is_empty()
            }
            None => false,
        }
    }

    /// Number of sessions seen since startup or their last reset.
    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.lock().await.is_empty()
    }
}
