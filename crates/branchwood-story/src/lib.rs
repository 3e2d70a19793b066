//! Branchwood — Story Graph bounded context.
//!
//! Holds the immutable scene/choice graph a session is played through,
//! loads it from YAML, and reports authoring defects before a server starts
//! serving it.

pub mod application;
pub mod domain;
pub mod error;
pub mod sample;
