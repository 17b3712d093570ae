//! Command handling for the interactive assistant.

pub mod handlers;
