//! The story graph aggregate.

use std::collections::HashMap;

use branchwood_core::ids::{SceneId, StoryId};

use super::scene::Scene;
use crate::error::StoryError;

/// Message shown when a session reaches an ending, unless the story
/// overrides it.
pub const DEFAULT_ENDING_MESSAGE: &str = "The story concludes here.";

/// An immutable, directed graph of scenes keyed by scene id.
///
/// A story never changes after it is built, so one instance can be shared by
/// every request behind an `Arc` without locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    /// Story identifier, carried into every session started from it.
    pub id: StoryId,
    /// Human-readable title.
    pub title: String,
    /// The scene every new session starts in.
    pub entry_scene_id: SceneId,
    /// Message attached to ending outcomes.
    pub ending_message: String,
    /// Declared variable names. Informational only.
    pub attributes: Vec<String>,
    scenes: HashMap<SceneId, Scene>,
}

impl Story {
    /// Builds a story from its scenes.
    ///
    /// References between scenes are not checked here; see
    /// [`Story::validate`].
    ///
    /// # Errors
    ///
    /// Returns `StoryError::DuplicateScene` if two scenes share an id.
    pub fn new(
        id: StoryId,
        entry_scene_id: SceneId,
        scenes: impl IntoIterator<Item = Scene>,
    ) -> Result<Self, StoryError> {
        let mut by_id = HashMap::new();
        for scene in scenes {
            let scene_id = scene.id;
            if by_id.insert(scene_id, scene).is_some() {
                return Err(StoryError::DuplicateScene(scene_id));
            }
        }
        Ok(Self::from_scene_map(id, entry_scene_id, by_id))
    }

    pub(crate) fn from_scene_map(
        id: StoryId,
        entry_scene_id: SceneId,
        scenes: HashMap<SceneId, Scene>,
    ) -> Self {
        Self {
            id,
            title: String::new(),
            entry_scene_id,
            ending_message: DEFAULT_ENDING_MESSAGE.to_owned(),
            attributes: Vec::new(),
            scenes,
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the declared variable names.
    #[must_use]
    pub fn with_attributes<S: Into<String>>(
        mut self,
        attributes: impl IntoIterator<Item = S>,
    ) -> Self {
        self.attributes = attributes.into_iter().map(Into::into).collect();
        self
    }

    /// Overrides the ending message.
    #[must_use]
    pub fn with_ending_message(mut self, message: impl Into<String>) -> Self {
        self.ending_message = message.into();
        self
    }

    /// Looks up a scene by id.
    #[must_use]
    pub fn scene(&self, id: SceneId) -> Option<&Scene> {
        self.scenes.get(&id)
    }

    /// Returns the entry scene, if the story defines it.
    #[must_use]
    pub fn entry_scene(&self) -> Option<&Scene> {
        self.scene(self.entry_scene_id)
    }

    /// Iterates over all scenes in ascending id order.
    pub fn scenes(&self) -> impl Iterator<Item = &Scene> {
        let mut scenes: Vec<&Scene> = self.scenes.values().collect();
        scenes.sort_by_key(|scene| scene.id);
        scenes.into_iter()
    }

    /// Number of scenes in the story.
    #[must_use]
    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }
}
