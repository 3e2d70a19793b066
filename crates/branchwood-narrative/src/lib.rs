//! Branchwood — Narrative Engine bounded context.
//!
//! Pure, synchronous functions over a story and a player session: which
//! choices a scene offers, what happens when one is taken, and when a
//! session has reached an ending. Nothing here performs I/O or keeps state
//! between calls.

pub mod application;
pub mod domain;
