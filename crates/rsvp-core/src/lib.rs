//! Shared building blocks for the RSVP import and suggestion crates.
//!
//! - [`normalize`] - display forms and comparison keys for free text
//! - [`types`] - the supported display languages
//! - [`config`] - layered settings loading
//! - [`error`] - the core error type

pub mod config;
pub mod error;
pub mod normalize;
pub mod types;
