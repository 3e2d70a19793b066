//! Versioned transfer form of a player session.
//!
//! Whatever crosses a process boundary (a cookie-backed store, a cache, a
//! file) is a `SessionRecord`, never the in-memory state. Resuming checks the
//! record against this schema and nothing else: in particular the current
//! scene is not looked up in the story.

use branchwood_core::error::NarrativeError;
use branchwood_core::ids::{SceneId, StoryId};
use branchwood_core::variables::Variables;
use serde::{Deserialize, Serialize};

use super::state::PlayerSessionState;

/// Schema version written by this build.
pub const SESSION_RECORD_VERSION: u32 = 1;

/// Serialized session, schema version 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionRecord {
    /// Schema version.
    pub version: u32,
    /// The story being played.
    pub story_id: StoryId,
    /// The scene the player is in.
    pub current_scene_id: SceneId,
    /// Accumulated variables.
    pub variables: Variables,
    /// Scenes left so far, oldest first.
    pub visited_scenes: Vec<SceneId>,
}

impl SessionRecord {
    /// Converts the record to a JSON value for storage.
    #[must_use]
    pub fn to_value(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(self).expect("SessionRecord serialization is infallible")
    }
}

impl PlayerSessionState {
    /// Captures the state as a record of the current schema version.
    #[must_use]
    pub fn to_record(&self) -> SessionRecord {
        SessionRecord {
            version: SESSION_RECORD_VERSION,
            story_id: self.story_id(),
            current_scene_id: self.current_scene_id(),
            variables: self.variables().clone(),
            visited_scenes: self.visited_scenes().to_vec(),
        }
    }
}

impl TryFrom<SessionRecord> for PlayerSessionState {
    type Error = NarrativeError;

    fn try_from(record: SessionRecord) -> Result<Self, Self::Error> {
        if record.version != SESSION_RECORD_VERSION {
            return Err(NarrativeError::MalformedSession(format!(
                "unsupported session record version {}",
                record.version
            )));
        }
        Ok(Self::from_parts(
            record.story_id,
            record.current_scene_id,
            record.variables,
            record.visited_scenes,
        ))
    }
}

/// Rehydrates a session from a stored JSON record.
///
/// # Errors
///
/// Returns `NarrativeError::MalformedSession` if a field is missing, has the
/// wrong shape, an unknown field is present, or the schema version is not
/// supported.
pub fn resume_session(record: serde_json::Value) -> Result<PlayerSessionState, NarrativeError> {
    let record: SessionRecord = serde_json::from_value(record)
        .map_err(|e| NarrativeError::MalformedSession(e.to_string()))?;
    PlayerSessionState::try_from(record)
}

/// Rehydrates a session from raw JSON text.
///
/// # Errors
///
/// Same as [`resume_session`], plus `MalformedSession` for text that is not
/// JSON at all.
pub fn resume_session_str(record: &str) -> Result<PlayerSessionState, NarrativeError> {
    let record: SessionRecord = serde_json::from_str(record)
        .map_err(|e| NarrativeError::MalformedSession(e.to_string()))?;
    PlayerSessionState::try_from(record)
}
