//! The `rsvp` command line: argument types and command handlers.

pub mod cli;
pub mod commands;
pub mod error;
