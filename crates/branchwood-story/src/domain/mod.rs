//! Domain model for the Story Graph context.

pub mod scene;
pub mod story;
