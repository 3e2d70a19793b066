//! Story loading errors.

use std::path::PathBuf;

use branchwood_core::ids::SceneId;
use thiserror::Error;

use crate::application::validation::StoryDefect;

/// Errors raised while building or loading a story.
#[derive(Debug, Error)]
pub enum StoryError {
    /// The story file could not be read.
    #[error("failed to read story file {}: {source}", .path.display())]
    Io {
        /// The path that was read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The story document is not valid YAML or does not match the schema.
    #[error("failed to parse story document: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Two scenes share the same id.
    #[error("duplicate scene id: {0}")]
    DuplicateScene(SceneId),

    /// The story loaded but contains authoring defects.
    #[error("story has {} authoring defect(s); first: {}", .0.len(), first_defect(.0))]
    Defective(Vec<StoryDefect>),
}

fn first_defect(defects: &[StoryDefect]) -> String {
    defects
        .first()
        .map_or_else(|| "none".to_owned(), ToString::to_string)
}
