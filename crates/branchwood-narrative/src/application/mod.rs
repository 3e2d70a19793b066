//! Entry points the transport layer calls.

pub mod command_handlers;
pub mod query_handlers;
