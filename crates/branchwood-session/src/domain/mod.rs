//! Domain model for the Player Session State context.

pub mod record;
pub mod state;
