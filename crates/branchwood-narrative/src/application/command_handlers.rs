//! Command handlers for the Narrative Engine context.
//!
//! Starting a session and taking a choice. Both are pure: the caller owns
//! loading and persisting the session around them.

use branchwood_core::error::NarrativeError;
use branchwood_session::domain::state::PlayerSessionState;
use branchwood_story::domain::story::Story;
use tracing::{debug, warn};

use crate::domain::commands::TakeChoice;
use crate::domain::outcome::Outcome;
use crate::domain::visibility::conditions_satisfied;

/// A successful transition: the session after the move and what to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The updated session, to be persisted by the caller.
    pub state: PlayerSessionState,
    /// The scene or ending reached.
    pub outcome: Outcome,
}

/// Creates a fresh session at the story's entry scene.
#[must_use]
pub fn start_session(story: &Story) -> PlayerSessionState {
    debug!(story_id = %story.id, entry_scene = %story.entry_scene_id, "starting session");
    PlayerSessionState::new(story.id, story.entry_scene_id)
}

/// Takes a choice from a scene and returns the resulting session and outcome.
///
/// The choice is applied even when its conditions are not currently met.
/// Gating is only enforced through what [`compute_visible_choices`] offers
/// to the client.
///
/// `state` is left untouched; on error nothing should be persisted.
///
/// [`compute_visible_choices`]: crate::domain::visibility::compute_visible_choices
///
/// # Errors
///
/// - `NarrativeError::UnknownScene` if `command.scene_id` is not in the story.
/// - `NarrativeError::UnknownChoice` if the scene has no such choice.
/// - `NarrativeError::DanglingTarget` if the choice leads to a scene the
///   story does not define.
pub fn apply_choice(
    story: &Story,
    state: &PlayerSessionState,
    command: &TakeChoice,
) -> Result<Transition, NarrativeError> {
    let scene = story
        .scene(command.scene_id)
        .ok_or(NarrativeError::UnknownScene(command.scene_id))?;

    let choice = scene
        .choice(command.choice_id)
        .ok_or(NarrativeError::UnknownChoice {
            scene_id: command.scene_id,
            choice_id: command.choice_id,
        })?;

    if !conditions_satisfied(&choice.conditions, state.variables()) {
        warn!(
            scene_id = %command.scene_id,
            choice_id = %command.choice_id,
            "applying choice whose conditions are not met"
        );
    }

    let mut next_state = state.clone();
    next_state.record_transition(
        command.scene_id,
        choice.target_scene_id,
        choice
            .effects
            .iter()
            .map(|(name, delta)| (name.as_str(), *delta)),
    );

    let next_scene =
        story
            .scene(choice.target_scene_id)
            .ok_or(NarrativeError::DanglingTarget {
                scene_id: command.scene_id,
                choice_id: command.choice_id,
                target: choice.target_scene_id,
            })?;

    let outcome = Outcome::for_scene(story, next_scene, &next_state);
    debug!(
        from = %command.scene_id,
        to = %next_scene.id,
        ending = outcome.is_ending(),
        "choice applied"
    );

    Ok(Transition {
        state: next_state,
        outcome,
    })
}
