//! Small fixture stories shared by the engine and API tests.

use branchwood_core::ids::{ChoiceId, SceneId, StoryId};
use branchwood_core::variables::Variables;
use branchwood_session::domain::state::PlayerSessionState;
use branchwood_story::domain::scene::{Choice, Scene};
use branchwood_story::domain::story::Story;

fn story_from(scenes: Vec<Scene>) -> Story {
    match Story::new(StoryId(1), SceneId(0), scenes) {
        Ok(story) => story,
        Err(err) => panic!("fixture story is invalid: {err}"),
    }
}

/// Two branches that both end in scene 3.
///
/// Scene 0 offers "Go left" (`trust +5`, to 1) and "Go right"
/// (`courage +5`, to 2). Scenes 1 and 2 each continue to the ending with a
/// further `+10` to their variable.
#[must_use]
pub fn test_story() -> Story {
    story_from(vec![
        Scene::new(
            SceneId(0),
            "/static/start.jpg",
            vec![
                Choice::new(ChoiceId(1), "Go left", SceneId(1)).with_effects([("trust", 5)]),
                Choice::new(ChoiceId(2), "Go right", SceneId(2)).with_effects([("courage", 5)]),
            ],
        ),
        Scene::new(
            SceneId(1),
            "/static/left.jpg",
            vec![Choice::new(ChoiceId(3), "Continue", SceneId(3)).with_effects([("trust", 10)])],
        ),
        Scene::new(
            SceneId(2),
            "/static/right.jpg",
            vec![Choice::new(ChoiceId(4), "Continue", SceneId(3)).with_effects([("courage", 10)])],
        ),
        Scene::ending(SceneId(3), "/static/end.jpg"),
    ])
    .with_attributes(["trust", "courage"])
}

/// A conditional-flow scene (1) reached after gaining `trust +30`.
///
/// Choice 2 needs `trust >= 30` and leads to ending 2; choice 3 is the
/// fallback to ending 3.
#[must_use]
pub fn conditional_story() -> Story {
    story_from(vec![
        Scene::new(
            SceneId(0),
            "/static/start.jpg",
            vec![Choice::new(ChoiceId(1), "Build trust", SceneId(1)).with_effects([("trust", 30)])],
        ),
        Scene::new(
            SceneId(1),
            "/static/choice.jpg",
            vec![
                Choice::new(ChoiceId(2), "High trust path", SceneId(2))
                    .with_conditions([("trust", 30)]),
                Choice::new(ChoiceId(3), "Low trust path", SceneId(3)),
            ],
        ),
        Scene::ending(SceneId(2), "/static/high_trust.jpg"),
        Scene::ending(SceneId(3), "/static/low_trust.jpg"),
    ])
    .with_attributes(["trust"])
}

/// Scene 0 loops back to itself with `trust +7`; choice 2 leaves for
/// ending 1.
#[must_use]
pub fn looping_story() -> Story {
    story_from(vec![
        Scene::new(
            SceneId(0),
            "/static/porch.jpg",
            vec![
                Choice::new(ChoiceId(1), "Wait a little longer", SceneId(0))
                    .with_effects([("trust", 7)]),
                Choice::new(ChoiceId(2), "Walk away", SceneId(1)),
            ],
        ),
        Scene::ending(SceneId(1), "/static/road.jpg"),
    ])
    .with_attributes(["trust"])
}

/// A single scene that is both entry and ending.
#[must_use]
pub fn empty_story() -> Story {
    story_from(vec![Scene::ending(SceneId(0), "/static/only.jpg")])
}

/// A story whose only choice points at scene 42, which does not exist.
#[must_use]
pub fn dangling_story() -> Story {
    story_from(vec![Scene::new(
        SceneId(0),
        "/static/start.jpg",
        vec![Choice::new(ChoiceId(1), "Into the void", SceneId(42))],
    )])
}

/// A session of the sample story sitting in `scene` with the given
/// variables and no history.
#[must_use]
pub fn session_at(scene: SceneId, variables: &[(&str, i64)]) -> PlayerSessionState {
    PlayerSessionState::from_parts(
        StoryId(0),
        scene,
        variables.iter().copied().collect::<Variables>(),
        Vec::new(),
    )
}
