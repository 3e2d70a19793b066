//! Which choices a scene offers for a given set of variables.

use branchwood_core::ids::ChoiceId;
use branchwood_core::variables::Variables;
use branchwood_story::domain::scene::{Choice, Conditions, Scene};
use serde::Serialize;

/// A choice as offered to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibleChoice {
    /// The choice id to submit back.
    pub id: ChoiceId,
    /// Display label.
    pub text: String,
    /// Whether the choice's conditions are currently met.
    pub available: bool,
}

impl VisibleChoice {
    fn from_choice(choice: &Choice, variables: &Variables) -> Self {
        Self {
            id: choice.id,
            text: choice.text.clone(),
            available: conditions_satisfied(&choice.conditions, variables),
        }
    }
}

/// Returns `true` iff every threshold is met, reading unset variables as
/// `0`. Thresholds are inclusive. Empty conditions are always satisfied.
#[must_use]
pub fn conditions_satisfied(conditions: &Conditions, variables: &Variables) -> bool {
    conditions
        .iter()
        .all(|(name, threshold)| variables.get(name) >= *threshold)
}

/// Returns `true` when `choices` has the conditional-flow shape: at least
/// two choices, the first gated, the last unconditional.
///
/// The check looks only at the first and last choice.
#[must_use]
pub fn has_conditional_flow(choices: &[Choice]) -> bool {
    match choices {
        [first, .., last] => !first.is_unconditional() && last.is_unconditional(),
        _ => false,
    }
}

/// Computes the choices `scene` offers given `variables`.
///
/// A conditional-flow scene collapses to a single choice: the first one, in
/// declaration order, whose conditions hold, or else the last choice as the
/// fallback whatever its own availability. Every other scene returns all of
/// its choices in declaration order, each flagged with its availability.
#[must_use]
pub fn compute_visible_choices(scene: &Scene, variables: &Variables) -> Vec<VisibleChoice> {
    if has_conditional_flow(&scene.choices) {
        let picked = scene
            .choices
            .iter()
            .find(|choice| conditions_satisfied(&choice.conditions, variables))
            .or_else(|| scene.choices.last());
        return picked
            .map(|choice| VisibleChoice::from_choice(choice, variables))
            .into_iter()
            .collect();
    }

    scene
        .choices
        .iter()
        .map(|choice| VisibleChoice::from_choice(choice, variables))
        .collect()
}

#[cfg(test)]
mod tests {
    use branchwood_core::ids::SceneId;

    use super::*;

    fn vars(pairs: &[(&str, i64)]) -> Variables {
        pairs.iter().map(|(name, value)| (*name, *value)).collect()
    }

    fn conditions(pairs: &[(&str, i64)]) -> Conditions {
        pairs
            .iter()
            .map(|(name, value)| ((*name).to_owned(), *value))
            .collect()
    }

    fn gated(id: i64, pairs: &[(&str, i64)]) -> Choice {
        Choice::new(ChoiceId(id), format!("choice {id}"), SceneId(100 + id))
            .with_conditions(pairs.iter().copied())
    }

    fn open(id: i64) -> Choice {
        Choice::new(ChoiceId(id), format!("choice {id}"), SceneId(100 + id))
    }

    fn scene_with(choices: Vec<Choice>) -> Scene {
        Scene::new(SceneId(1), "/static/test.jpg", choices)
    }

    fn ids(choices: &[VisibleChoice]) -> Vec<i64> {
        choices.iter().map(|c| c.id.0).collect()
    }

    #[test]
    fn test_empty_conditions_are_always_satisfied() {
        assert!(conditions_satisfied(&Conditions::new(), &Variables::new()));
        assert!(conditions_satisfied(&Conditions::new(), &vars(&[("trust", -50)])));
    }

    #[test]
    fn test_threshold_comparison_is_inclusive() {
        let needs_ten = conditions(&[("trust", 10)]);

        assert!(conditions_satisfied(&needs_ten, &vars(&[("trust", 10)])));
        assert!(conditions_satisfied(&needs_ten, &vars(&[("trust", 15)])));
        assert!(!conditions_satisfied(&needs_ten, &vars(&[("trust", 9)])));
    }

    #[test]
    fn test_missing_variable_reads_as_zero() {
        assert!(!conditions_satisfied(&conditions(&[("trust", 1)]), &Variables::new()));
        assert!(conditions_satisfied(&conditions(&[("trust", 0)]), &Variables::new()));
        assert!(conditions_satisfied(&conditions(&[("debt", -5)]), &Variables::new()));
    }

    #[test]
    fn test_every_condition_must_hold() {
        let both = conditions(&[("trust", 10), ("security", 5)]);

        assert!(conditions_satisfied(&both, &vars(&[("trust", 15), ("security", 10)])));
        assert!(!conditions_satisfied(&both, &vars(&[("trust", 15), ("security", 4)])));
    }

    #[test]
    fn test_conditional_flow_requires_gated_first_and_open_last() {
        assert!(has_conditional_flow(&[gated(1, &[("trust", 1)]), open(2)]));
        assert!(has_conditional_flow(&[
            gated(1, &[("trust", 1)]),
            open(2),
            open(3),
        ]));
        assert!(!has_conditional_flow(&[open(1), open(2)]));
        assert!(!has_conditional_flow(&[open(1), gated(2, &[("trust", 1)])]));
        assert!(!has_conditional_flow(&[
            gated(1, &[("trust", 1)]),
            gated(2, &[("trust", 2)]),
        ]));
        assert!(!has_conditional_flow(&[gated(1, &[("trust", 1)])]));
        assert!(!has_conditional_flow(&[open(1)]));
        assert!(!has_conditional_flow(&[]));
    }

    #[test]
    fn test_menu_scene_returns_every_choice_in_order() {
        // Arrange
        let scene = scene_with(vec![open(1), gated(2, &[("trust", 5)]), open(3)]);

        // Act
        let visible = compute_visible_choices(&scene, &Variables::new());

        // Assert
        assert_eq!(ids(&visible), vec![1, 2, 3]);
        assert_eq!(
            visible.iter().map(|c| c.available).collect::<Vec<_>>(),
            vec![true, false, true]
        );
    }

    #[test]
    fn test_scene_level_conditions_do_not_gate_choices() {
        let scene = scene_with(vec![open(1), open(2)]).with_conditions([("trust", 99)]);

        let visible = compute_visible_choices(&scene, &Variables::new());

        assert_eq!(ids(&visible), vec![1, 2]);
        assert!(visible.iter().all(|c| c.available));
    }

    #[test]
    fn test_menu_scene_with_gated_last_choice_is_not_collapsed() {
        let scene = scene_with(vec![gated(1, &[("trust", 5)]), gated(2, &[("trust", 50)])]);

        let visible = compute_visible_choices(&scene, &vars(&[("trust", 5)]));

        assert_eq!(ids(&visible), vec![1, 2]);
        assert!(visible[0].available);
        assert!(!visible[1].available);
    }

    #[test]
    fn test_conditional_flow_picks_first_satisfied_choice() {
        // Arrange
        let scene = scene_with(vec![
            gated(1, &[("trust", 50)]),
            gated(2, &[("trust", 20)]),
            open(3),
        ]);

        // Act
        let visible = compute_visible_choices(&scene, &vars(&[("trust", 25)]));

        // Assert
        assert_eq!(ids(&visible), vec![2]);
        assert!(visible[0].available);
    }

    #[test]
    fn test_conditional_flow_may_pick_an_open_middle_choice() {
        let scene = scene_with(vec![gated(1, &[("trust", 50)]), open(2), open(3)]);

        let visible = compute_visible_choices(&scene, &Variables::new());

        assert_eq!(ids(&visible), vec![2]);
    }

    #[test]
    fn test_conditional_flow_falls_back_to_last_choice() {
        let scene = scene_with(vec![gated(1, &[("trust", 30)]), open(9)]);

        let visible = compute_visible_choices(&scene, &Variables::new());

        assert_eq!(ids(&visible), vec![9]);
        assert!(visible[0].available);
    }

    #[test]
    fn test_ending_scene_offers_nothing() {
        let scene = Scene::ending(SceneId(6), "/static/end.jpg");

        assert!(compute_visible_choices(&scene, &Variables::new()).is_empty());
    }
}
