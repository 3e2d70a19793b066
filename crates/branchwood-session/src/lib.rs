//! Branchwood — Player Session State bounded context.
//!
//! Owns the per-player progress record, its versioned transfer form, and the
//! storage port the transport layer persists it through between requests.

pub mod application;
pub mod domain;
