//! Session persistence for the Player Session State context.

pub mod memory_store;
pub mod store;
