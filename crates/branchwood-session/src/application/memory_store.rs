//! Process-local session store with idle expiry.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use branchwood_core::clock::Clock;
use chrono::TimeDelta;
use tracing::debug;

use super::store::{SessionId, SessionStore, SessionStoreError, StoredSession};

/// Keeps sessions in memory and drops those idle for longer than the TTL.
///
/// Sessions do not survive a restart.
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<SessionId, StoredSession>>,
    clock: Arc<dyn Clock>,
    ttl: TimeDelta,
}

impl InMemorySessionStore {
    /// Creates an empty store. Sessions untouched for longer than `ttl`
    /// expire.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, ttl: TimeDelta) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            clock,
            ttl,
        }
    }

    /// Removes every expired session and returns how many were dropped.
    ///
    /// # Errors
    ///
    /// Returns `SessionStoreError::Unavailable` if the store's lock is
    /// poisoned.
    pub fn purge_expired(&self) -> Result<usize, SessionStoreError> {
        let mut sessions = self.lock()?;
        let before = sessions.len();
        sessions.retain(|_, session| !self.is_expired(session));
        let purged = before - sessions.len();
        if purged > 0 {
            debug!(purged, remaining = sessions.len(), "purged expired sessions");
        }
        Ok(purged)
    }

    /// Number of sessions currently held, expired or not.
    ///
    /// # Errors
    ///
    /// Returns `SessionStoreError::Unavailable` if the store's lock is
    /// poisoned.
    pub fn session_count(&self) -> Result<usize, SessionStoreError> {
        Ok(self.lock()?.len())
    }

    fn is_expired(&self, session: &StoredSession) -> bool {
        self.clock.elapsed_since(session.touched_at) > self.ttl
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<SessionId, StoredSession>>, SessionStoreError> {
        self.sessions
            .lock()
            .map_err(|_| SessionStoreError::Unavailable("session map lock poisoned".to_owned()))
    }
}

impl std::fmt::Debug for InMemorySessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemorySessionStore")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self, id: SessionId) -> Result<Option<StoredSession>, SessionStoreError> {
        let mut sessions = self.lock()?;
        let Some(session) = sessions.get(&id) else {
            return Ok(None);
        };
        if self.is_expired(session) {
            debug!(session_id = %id, "session expired");
            sessions.remove(&id);
            return Ok(None);
        }
        Ok(Some(session.clone()))
    }

    async fn save(&self, id: SessionId, session: StoredSession) -> Result<(), SessionStoreError> {
        self.lock()?.insert(id, session);
        Ok(())
    }

    async fn remove(&self, id: SessionId) -> Result<(), SessionStoreError> {
        self.lock()?.remove(&id);
        Ok(())
    }
}
