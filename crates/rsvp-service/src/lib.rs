//! Guest snapshots and the hosting-suggestion aggregator.
//!
//! - [`model`] - guests, events, invitations and per-guest preferences
//! - [`suggestions`] - ranked hosting suggestions for one event
//! - [`error`] - the service error type

pub mod error;
pub mod model;
pub mod suggestions;

pub use model::SuggestionSnapshot;
pub use suggestions::{
    HostingSuggestions, RankedItem, SuggestionScope, TimingRecommendation,
    build_hosting_suggestions,
};
