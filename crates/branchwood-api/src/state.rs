//! Shared application state.

use std::fmt;
use std::sync::Arc;

use branchwood_core::clock::Clock;
use branchwood_session::application::store::SessionStore;
use branchwood_story::domain::story::Story;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The story being served. Immutable for the life of the process.
    pub story: Arc<Story>,
    /// Where sessions live between requests.
    pub sessions: Arc<dyn SessionStore>,
    /// Clock used to stamp session activity.
    pub clock: Arc<dyn Clock>,
    /// Whether cookies carry the `Secure` attribute.
    pub cookie_secure: bool,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        story: Arc<Story>,
        sessions: Arc<dyn SessionStore>,
        clock: Arc<dyn Clock>,
        cookie_secure: bool,
    ) -> Self {
        Self {
            story,
            sessions,
            clock,
            cookie_secure,
        }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("story_id", &self.story.id)
            .field("cookie_secure", &self.cookie_secure)
            .finish_non_exhaustive()
    }
}
