//! Query handlers for the Narrative Engine context.

use branchwood_core::error::NarrativeError;
use branchwood_session::domain::state::PlayerSessionState;
use branchwood_story::domain::story::Story;

use crate::domain::outcome::Outcome;

/// Describes the scene `state` is currently in, without changing anything.
///
/// # Errors
///
/// Returns `NarrativeError::UnknownScene` if the session points at a scene
/// the story does not define.
pub fn present_scene(story: &Story, state: &PlayerSessionState) -> Result<Outcome, NarrativeError> {
    let scene = story
        .scene(state.current_scene_id())
        .ok_or(NarrativeError::UnknownScene(state.current_scene_id()))?;
    Ok(Outcome::for_scene(story, scene, state))
}
