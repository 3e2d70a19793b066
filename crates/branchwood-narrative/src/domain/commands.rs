//! Commands for the Narrative Engine context.

use branchwood_core::ids::{ChoiceId, SceneId};

/// Take a choice from a scene.
///
/// `scene_id` is the scene the client claims to act from. It is checked
/// against the story, not against the session's current scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TakeChoice {
    /// The scene being left.
    pub scene_id: SceneId,
    /// The selected choice within that scene.
    pub choice_id: ChoiceId,
}
