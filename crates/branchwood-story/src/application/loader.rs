//! YAML story loading.

use std::path::Path;

use branchwood_core::ids::{SceneId, StoryId};
use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::scene::Scene;
use crate::domain::story::{DEFAULT_ENDING_MESSAGE, Story};
use crate::error::StoryError;

/// On-disk shape of a story. Scenes are a list here and become a keyed map
/// once loaded.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StoryDocument {
    #[serde(default)]
    id: StoryId,
    #[serde(default)]
    title: String,
    entry_scene: SceneId,
    #[serde(default)]
    ending_message: Option<String>,
    #[serde(default)]
    attributes: Vec<String>,
    scenes: Vec<Scene>,
}

impl Story {
    /// Parses a story from YAML text.
    ///
    /// # Errors
    ///
    /// Returns `StoryError::Parse` if the document is malformed and
    /// `StoryError::DuplicateScene` if two scenes share an id.
    pub fn from_yaml_str(source: &str) -> Result<Self, StoryError> {
        let document: StoryDocument = serde_yaml::from_str(source)?;
        debug!(
            scenes = document.scenes.len(),
            entry_scene = %document.entry_scene,
            "parsed story document"
        );

        let story = Self::new(document.id, document.entry_scene, document.scenes)?
            .with_title(document.title)
            .with_attributes(document.attributes)
            .with_ending_message(
                document
                    .ending_message
                    .unwrap_or_else(|| DEFAULT_ENDING_MESSAGE.to_owned()),
            );
        Ok(story)
    }

    /// Reads and parses a story file.
    ///
    /// # Errors
    ///
    /// Returns `StoryError::Io` if the file cannot be read, otherwise the
    /// errors of [`Story::from_yaml_str`].
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, StoryError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| StoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let story = Self::from_yaml_str(&source)?;
        info!(path = %path.display(), story_id = %story.id, "loaded story file");
        Ok(story)
    }
}

#[cfg(test)]
mod tests {
    use branchwood_core::ids::ChoiceId;

    use super::*;
    use crate::sample::sample_story;

    const SAMPLE_YAML: &str = include_str!("../../../../stories/sample.yaml");

    #[test]
    fn test_sample_yaml_matches_built_in_sample_story() {
        // Act
        let story = Story::from_yaml_str(SAMPLE_YAML).unwrap();

        // Assert
        assert_eq!(story, sample_story());
    }

    #[test]
    fn test_optional_fields_default_per_instance() {
        // Arrange
        let source = r"
entry_scene: 0
scenes:
  - id: 0
    background: /static/only.jpg
    choices:
      - { id: 1, text: Stay, target: 1 }
  - id: 1
    background: /static/end.jpg
";

        // Act
        let story = Story::from_yaml_str(source).unwrap();

        // Assert
        let start = story.scene(SceneId(0)).unwrap();
        let choice = start.choice(ChoiceId(1)).unwrap();
        assert!(choice.conditions.is_empty());
        assert!(choice.effects.is_empty());
        assert!(start.conditions.is_empty());
        assert!(story.scene(SceneId(1)).unwrap().is_ending());
        assert_eq!(story.id, StoryId(0));
        assert_eq!(story.ending_message, DEFAULT_ENDING_MESSAGE);
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let source = r"
entry_scene: 0
scenes:
  - id: 0
    background: /static/only.jpg
    music: theme.ogg
";

        let result = Story::from_yaml_str(source);

        assert!(matches!(result, Err(StoryError::Parse(_))));
    }

    #[test]
    fn test_duplicate_scene_ids_are_rejected() {
        let source = r"
entry_scene: 0
scenes:
  - { id: 0, background: /a.jpg }
  - { id: 0, background: /b.jpg }
";

        let result = Story::from_yaml_str(source);

        assert!(matches!(result, Err(StoryError::DuplicateScene(SceneId(0)))));
    }

    #[test]
    fn test_missing_file_reports_io_error_with_path() {
        let result = Story::from_yaml_file("/nonexistent/branchwood/story.yaml");

        match result {
            Err(StoryError::Io { path, .. }) => {
                assert_eq!(path, Path::new("/nonexistent/branchwood/story.yaml"));
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
