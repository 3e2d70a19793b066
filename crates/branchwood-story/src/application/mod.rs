//! Application services for the Story Graph context.

pub mod loader;
pub mod validation;
