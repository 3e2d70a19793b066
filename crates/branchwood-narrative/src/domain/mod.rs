//! Domain rules for the Narrative Engine context.

pub mod commands;
pub mod outcome;
pub mod visibility;
