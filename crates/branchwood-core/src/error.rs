//! Narrative engine error types.

use thiserror::Error;

use crate::ids::{ChoiceId, SceneId};

/// Errors surfaced by the narrative engine.
///
/// Every variant is a deterministic function of bad input; retrying with the
/// same input reproduces the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NarrativeError {
    /// A persisted session record is structurally invalid. The caller must
    /// start a new session.
    #[error("malformed session record: {0}")]
    MalformedSession(String),

    /// The scene the caller claims to act from does not exist in the story.
    #[error("unknown scene: {0}")]
    UnknownScene(SceneId),

    /// The selected choice is not part of the scene's choice list.
    #[error("unknown choice {choice_id} in scene {scene_id}")]
    UnknownChoice {
        /// The scene that was searched.
        scene_id: SceneId,
        /// The choice that was not found.
        choice_id: ChoiceId,
    },

    /// A choice points at a scene the story does not define. This is an
    /// authoring defect, not a recoverable runtime condition.
    #[error("choice {choice_id} in scene {scene_id} targets missing scene {target}")]
    DanglingTarget {
        /// The scene owning the broken choice.
        scene_id: SceneId,
        /// The broken choice.
        choice_id: ChoiceId,
        /// The unresolved target.
        target: SceneId,
    },
}

impl NarrativeError {
    /// Returns `true` for errors caused by story data rather than caller
    /// input.
    #[must_use]
    pub fn is_authoring_defect(&self) -> bool {
        matches!(self, Self::DanglingTarget { .. })
    }
}
