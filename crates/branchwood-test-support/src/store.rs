//! Test session stores — `SessionStore` doubles for error paths.

use async_trait::async_trait;
use branchwood_session::application::store::{
    SessionId, SessionStore, SessionStoreError, StoredSession,
};

/// A session store that fails every operation. Useful for testing how the
/// transport layer reports storage outages.
#[derive(Debug)]
pub struct FailingSessionStore;

#[async_trait]
impl SessionStore for FailingSessionStore {
    async fn load(&self, _id: SessionId) -> Result<Option<StoredSession>, SessionStoreError> {
        Err(SessionStoreError::Unavailable("connection refused".into()))
    }

    async fn save(&self, _id: SessionId, _session: StoredSession) -> Result<(), SessionStoreError> {
        Err(SessionStoreError::Unavailable("connection refused".into()))
    }

    async fn remove(&self, _id: SessionId) -> Result<(), SessionStoreError> {
        Err(SessionStoreError::Unavailable("connection refused".into()))
    }
}
