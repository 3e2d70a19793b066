//! What the player sees after a start or a transition.

use branchwood_core::ids::SceneId;
use branchwood_core::variables::Variables;
use branchwood_session::domain::state::PlayerSessionState;
use branchwood_story::domain::scene::Scene;
use branchwood_story::domain::story::Story;
use serde::Serialize;

use super::visibility::{VisibleChoice, compute_visible_choices};

/// A scene the player can act in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenePresentation {
    /// The scene now current.
    pub scene_id: SceneId,
    /// Opaque background reference.
    pub background: String,
    /// Choices offered, after conditional-flow collapsing.
    pub choices: Vec<VisibleChoice>,
    /// Snapshot of the session's variables.
    pub variables: Variables,
}

impl ScenePresentation {
    /// Presents `scene` with its choices filtered for `variables`. An ending
    /// scene presents with no choices.
    #[must_use]
    pub fn of(scene: &Scene, variables: &Variables) -> Self {
        Self {
            scene_id: scene.id,
            background: scene.background.clone(),
            choices: compute_visible_choices(scene, variables),
            variables: variables.clone(),
        }
    }
}

/// Summary of a finished playthrough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndingSummary {
    /// The story's closing message.
    pub message: String,
    /// Snapshot of the session's variables.
    pub final_variables: Variables,
    /// Every scene left on the way here, oldest first. The ending scene
    /// itself is not included.
    pub path: Vec<SceneId>,
}

/// Result of presenting a scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The player is in a scene with choices.
    Continue(ScenePresentation),
    /// The player reached a scene without choices.
    Ending(EndingSummary),
}

impl Outcome {
    /// Describes `scene` as seen by a session in `state`.
    #[must_use]
    pub fn for_scene(story: &Story, scene: &Scene, state: &PlayerSessionState) -> Self {
        if scene.is_ending() {
            return Self::Ending(EndingSummary {
                message: story.ending_message.clone(),
                final_variables: state.variables().clone(),
                path: state.visited_scenes().to_vec(),
            });
        }

        Self::Continue(ScenePresentation::of(scene, state.variables()))
    }

    /// Returns `true` for an ending.
    #[must_use]
    pub fn is_ending(&self) -> bool {
        matches!(self, Self::Ending(_))
    }
}
