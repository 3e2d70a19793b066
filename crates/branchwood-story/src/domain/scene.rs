//! Scenes and the choices that connect them.

use std::collections::BTreeMap;

use branchwood_core::ids::{ChoiceId, SceneId};
use serde::{Deserialize, Serialize};

/// Minimum variable values required for a choice to be available.
///
/// An empty map means the choice is unconditional.
pub type Conditions = BTreeMap<String, i64>;

/// Signed deltas added to variables when a choice is taken.
pub type Effects = BTreeMap<String, i64>;

/// A directed, optionally gated, optionally effectful edge between scenes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Choice {
    /// Identifier, unique within the owning scene only.
    pub id: ChoiceId,
    /// Display label.
    pub text: String,
    /// The scene this choice leads to.
    #[serde(rename = "target")]
    pub target_scene_id: SceneId,
    /// Variable thresholds gating this choice.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub conditions: Conditions,
    /// Variable deltas applied when this choice is taken.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub effects: Effects,
}

impl Choice {
    /// Creates an unconditional choice without effects.
    #[must_use]
    pub fn new(id: ChoiceId, text: impl Into<String>, target_scene_id: SceneId) -> Self {
        Self {
            id,
            text: text.into(),
            target_scene_id,
            conditions: Conditions::new(),
            effects: Effects::new(),
        }
    }

    /// Replaces the gating conditions.
    #[must_use]
    pub fn with_conditions<S: Into<String>>(
        mut self,
        conditions: impl IntoIterator<Item = (S, i64)>,
    ) -> Self {
        self.conditions = conditions
            .into_iter()
            .map(|(name, threshold)| (name.into(), threshold))
            .collect();
        self
    }

    /// Replaces the effects.
    #[must_use]
    pub fn with_effects<S: Into<String>>(
        mut self,
        effects: impl IntoIterator<Item = (S, i64)>,
    ) -> Self {
        self.effects = effects
            .into_iter()
            .map(|(name, delta)| (name.into(), delta))
            .collect();
        self
    }

    /// Returns `true` when the choice carries no conditions.
    #[must_use]
    pub fn is_unconditional(&self) -> bool {
        self.conditions.is_empty()
    }
}

/// A node in the story graph: a decision point, or an ending when it has no
/// choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scene {
    /// Identifier, unique within the story.
    pub id: SceneId,
    /// Opaque asset reference handed to the client as-is.
    pub background: String,
    /// Outgoing choices in declaration order.
    #[serde(default)]
    pub choices: Vec<Choice>,
    /// Reserved scene-level gating. Not evaluated by the engine.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub conditions: Conditions,
}

impl Scene {
    /// Creates a scene with the given choices.
    #[must_use]
    pub fn new(id: SceneId, background: impl Into<String>, choices: Vec<Choice>) -> Self {
        Self {
            id,
            background: background.into(),
            choices,
            conditions: Conditions::new(),
        }
    }

    /// Creates a scene with no choices.
    #[must_use]
    pub fn ending(id: SceneId, background: impl Into<String>) -> Self {
        Self::new(id, background, Vec::new())
    }

    /// Replaces the reserved scene-level conditions.
    #[must_use]
    pub fn with_conditions<S: Into<String>>(
        mut self,
        conditions: impl IntoIterator<Item = (S, i64)>,
    ) -> Self {
        self.conditions = conditions
            .into_iter()
            .map(|(name, threshold)| (name.into(), threshold))
            .collect();
        self
    }

    /// Returns `true` when this scene has no outgoing choices.
    #[must_use]
    pub fn is_ending(&self) -> bool {
        self.choices.is_empty()
    }

    /// Looks up a choice by id.
    #[must_use]
    pub fn choice(&self, id: ChoiceId) -> Option<&Choice> {
        self.choices.iter().find(|choice| choice.id == id)
    }
}
