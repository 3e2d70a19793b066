//! Branchwood Core — shared domain types.
//!
//! This crate defines the identifiers, the variable map, the engine error
//! taxonomy and the clock abstraction that every other crate depends on.
//! It contains no infrastructure code.

pub mod clock;
pub mod error;
pub mod ids;
pub mod variables;
