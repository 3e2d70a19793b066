//! Shared test fixtures and doubles for the Branchwood narrative engine.

mod clock;
mod stories;
mod store;

pub use clock::FixedClock;
pub use stories::{
    conditional_story, dangling_story, empty_story, looping_story, session_at, test_story,
};
pub use store::FailingSessionStore;
