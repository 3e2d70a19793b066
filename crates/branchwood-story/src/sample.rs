//! The built-in reference story.
//!
//! Scene 5 is a conditional-flow scene: choice 8 needs `trust >= 30` and
//! `security >= 10`, choice 9 is the unconditional fallback.

use branchwood_core::ids::{ChoiceId, SceneId, StoryId};

use crate::domain::scene::{Choice, Scene};
use crate::domain::story::Story;

/// Id of the reference story.
pub const SAMPLE_STORY_ID: StoryId = StoryId(0);

/// Entry scene of the reference story.
pub const SAMPLE_ENTRY_SCENE: SceneId = SceneId(0);

/// Builds the reference story.
#[must_use]
pub fn sample_story() -> Story {
    let scenes = vec![
        Scene::new(
            SceneId(0),
            "/static/house_entrance.jpg",
            vec![
                Choice::new(ChoiceId(1), "Enter the house", SceneId(1)),
                Choice::new(ChoiceId(2), "Don't enter, go to the barn", SceneId(3)),
            ],
        ),
        Scene::new(
            SceneId(1),
            "/static/inside_house.jpg",
            vec![
                Choice::new(ChoiceId(3), "Trust the friend", SceneId(2))
                    .with_effects([("trust", 10), ("security", 10)]),
                Choice::new(ChoiceId(4), "Don't trust them, go outside", SceneId(3)),
            ],
        ),
        Scene::new(
            SceneId(2),
            "/static/with_friend.jpg",
            vec![
                Choice::new(ChoiceId(5), "Gift him my watch", SceneId(5))
                    .with_effects([("trust", 20)]),
                Choice::new(ChoiceId(6), "Don't gift the watch", SceneId(5)),
            ],
        ),
        Scene::new(
            SceneId(3),
            "/static/barn.jpg",
            vec![
                Choice::new(ChoiceId(7), "Sleep in the barn", SceneId(6))
                    .with_effects([("trust", -5), ("security", -10)]),
            ],
        ),
        Scene::ending(SceneId(4), "/static/outside.jpg"),
        Scene::new(
            SceneId(5),
            "/static/friend_room.jpg",
            vec![
                Choice::new(ChoiceId(8), "Continue...", SceneId(7))
                    .with_conditions([("trust", 30), ("security", 10)]),
                Choice::new(ChoiceId(9), "Continue...", SceneId(8)),
            ],
        ),
        Scene::ending(SceneId(6), "/static/barn_ending.jpg"),
        Scene::ending(SceneId(7), "/static/separate_bed.jpg"),
        Scene::ending(SceneId(8), "/static/couch.jpg"),
    ];

    let by_id = scenes.into_iter().map(|scene| (scene.id, scene)).collect();
    Story::from_scene_map(SAMPLE_STORY_ID, SAMPLE_ENTRY_SCENE, by_id)
        .with_title("A Night at the Farmhouse")
        .with_attributes(["trust", "security"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_story_declares_entry_and_endings() {
        // Act
        let story = sample_story();

        // Assert
        assert_eq!(story.entry_scene_id, SAMPLE_ENTRY_SCENE);
        assert_eq!(story.scene_count(), 9);
        let endings: Vec<SceneId> = story
            .scenes()
            .filter(|scene| scene.is_ending())
            .map(|scene| scene.id)
            .collect();
        assert_eq!(endings, vec![SceneId(4), SceneId(6), SceneId(7), SceneId(8)]);
    }
}
