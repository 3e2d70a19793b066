//! The player's progress through a story.

use branchwood_core::ids::{SceneId, StoryId};
use branchwood_core::variables::Variables;

/// Progress of one player through one story.
///
/// Created fresh at the story's entry scene and changed only through
/// [`PlayerSessionState::record_transition`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSessionState {
    story_id: StoryId,
    current_scene_id: SceneId,
    variables: Variables,
    visited_scenes: Vec<SceneId>,
}

impl PlayerSessionState {
    /// Creates a session positioned at `entry_scene_id` with no variables and
    /// no history.
    #[must_use]
    pub fn new(story_id: StoryId, entry_scene_id: SceneId) -> Self {
        Self {
            story_id,
            current_scene_id: entry_scene_id,
            variables: Variables::new(),
            visited_scenes: Vec::new(),
        }
    }

    /// Rebuilds a session from previously persisted parts, as-is.
    #[must_use]
    pub fn from_parts(
        story_id: StoryId,
        current_scene_id: SceneId,
        variables: Variables,
        visited_scenes: Vec<SceneId>,
    ) -> Self {
        Self {
            story_id,
            current_scene_id,
            variables,
            visited_scenes,
        }
    }

    /// The story this session plays through.
    #[must_use]
    pub fn story_id(&self) -> StoryId {
        self.story_id
    }

    /// The scene the player is currently in.
    #[must_use]
    pub fn current_scene_id(&self) -> SceneId {
        self.current_scene_id
    }

    /// Accumulated variables.
    #[must_use]
    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    /// Scenes left so far, oldest first. Revisits appear more than once.
    #[must_use]
    pub fn visited_scenes(&self) -> &[SceneId] {
        &self.visited_scenes
    }

    /// Records a move out of `from` into `to`: every effect is added to its
    /// variable, `from` is appended to the history, and `to` becomes current.
    pub fn record_transition<'a>(
        &mut self,
        from: SceneId,
        to: SceneId,
        effects: impl IntoIterator<Item = (&'a str, i64)>,
    ) {
        for (name, delta) in effects {
            self.variables.adjust(name, delta);
        }
        self.visited_scenes.push(from);
        self.current_scene_id = to;
    }
}
