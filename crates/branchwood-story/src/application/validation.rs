//! Authoring-defect checks over a loaded story.

use std::collections::HashSet;
use std::fmt;

use branchwood_core::ids::{ChoiceId, SceneId};

use crate::domain::story::Story;
use crate::error::StoryError;

/// A structural problem in story content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoryDefect {
    /// The declared entry scene does not exist.
    MissingEntryScene(SceneId),
    /// A choice targets a scene that does not exist.
    DanglingTarget {
        /// The scene owning the choice.
        scene_id: SceneId,
        /// The broken choice.
        choice_id: ChoiceId,
        /// The unresolved target.
        target: SceneId,
    },
    /// Two choices in the same scene share an id.
    DuplicateChoice {
        /// The scene containing the duplicates.
        scene_id: SceneId,
        /// The repeated choice id.
        choice_id: ChoiceId,
    },
}

impl fmt::Display for StoryDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingEntryScene(id) => write!(f, "entry scene {id} does not exist"),
            Self::DanglingTarget {
                scene_id,
                choice_id,
                target,
            } => write!(
                f,
                "choice {choice_id} in scene {scene_id} targets missing scene {target}"
            ),
            Self::DuplicateChoice {
                scene_id,
                choice_id,
            } => write!(f, "scene {scene_id} declares choice {choice_id} more than once"),
        }
    }
}

impl Story {
    /// Reports every authoring defect in the story, scenes in id order.
    ///
    /// An empty result means every reference resolves.
    #[must_use]
    pub fn validate(&self) -> Vec<StoryDefect> {
        let mut defects = Vec::new();

        if self.entry_scene().is_none() {
            defects.push(StoryDefect::MissingEntryScene(self.entry_scene_id));
        }

        for scene in self.scenes() {
            let mut seen = HashSet::new();
            for choice in &scene.choices {
                if !seen.insert(choice.id) {
                    defects.push(StoryDefect::DuplicateChoice {
                        scene_id: scene.id,
                        choice_id: choice.id,
                    });
                }
                if self.scene(choice.target_scene_id).is_none() {
                    defects.push(StoryDefect::DanglingTarget {
                        scene_id: scene.id,
                        choice_id: choice.id,
                        target: choice.target_scene_id,
                    });
                }
            }
        }

        defects
    }

    /// Returns the story unchanged if it has no authoring defects.
    ///
    /// # Errors
    ///
    /// Returns `StoryError::Defective` listing every defect found.
    pub fn validated(self) -> Result<Self, StoryError> {
        let defects = self.validate();
        if defects.is_empty() {
            Ok(self)
        } else {
            Err(StoryError::Defective(defects))
        }
    }
}
