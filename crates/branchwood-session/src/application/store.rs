//! Session storage port.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

/// Opaque handle the transport layer hands to clients to find their session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generates a fresh random session id.
    #[must_use]
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.as_simple().fmt(f)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// What the store keeps for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredSession {
    /// The serialized `SessionRecord`.
    pub record: serde_json::Value,
    /// Anti-forgery token issued with this session.
    pub csrf_token: String,
    /// Last time the session was written.
    pub touched_at: DateTime<Utc>,
}

/// Failures of the storage backend itself.
#[derive(Debug, Error)]
pub enum SessionStoreError {
    /// The backend could not be reached or refused the operation.
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}

/// Persists sessions between requests.
///
/// Implementations decide expiry; an expired session reads as absent.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Loads a session, or `None` if it does not exist or has expired.
    async fn load(&self, id: SessionId) -> Result<Option<StoredSession>, SessionStoreError>;

    /// Creates or replaces a session.
    async fn save(&self, id: SessionId, session: StoredSession) -> Result<(), SessionStoreError>;

    /// Deletes a session. Removing an absent session is not an error.
    async fn remove(&self, id: SessionId) -> Result<(), SessionStoreError>;
}
