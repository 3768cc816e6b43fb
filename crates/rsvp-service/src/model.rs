//! Snapshot types the aggregator reads.
//!
//! These mirror the rows the hosting backend stores. Preference values are
//! kept as entered (catalog codes, labels in any language, or free text);
//! the aggregator resolves them.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ServiceResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: Uuid,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub starts_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvitationStatus {
    #[default]
    Pending,
    Accepted,
    Declined,
    Maybe,
}

/// Links a guest to an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invitation {
    pub id: Uuid,
    pub event_id: Uuid,
    pub guest_id: Uuid,
    #[serde(default)]
    pub status: InvitationStatus,
}

/// Tastes a guest filled in on the RSVP form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuestPreferences {
    pub food_likes: Vec<String>,
    pub food_dislikes: Vec<String>,
    pub drink_likes: Vec<String>,
    pub drink_dislikes: Vec<String>,
    pub colors: Vec<String>,
    pub music_genres: Vec<String>,
    pub day_moments: Vec<String>,
    pub experience_types: Vec<String>,
    pub relationship_affinities: Vec<String>,
    pub punctuality: Option<String>,
    pub icebreaker_topics: Vec<String>,
    pub taboo_topics: Vec<String>,
}

/// Health-related answers, stored apart from [`GuestPreferences`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuestSensitiveData {
    pub allergies: Vec<String>,
    pub intolerances: Vec<String>,
    pub pet_allergies: Vec<String>,
    pub dietary_types: Vec<String>,
}

/// Everything the aggregator looks at, keyed by guest id where per-guest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SuggestionSnapshot {
    pub guests: Vec<Guest>,
    pub events: Vec<Event>,
    pub invitations: Vec<Invitation>,
    pub preferences: HashMap<Uuid, GuestPreferences>,
    pub sensitive: HashMap<Uuid, GuestSensitiveData>,
}

impl SuggestionSnapshot {
    /// ## Summary
    /// Reads a snapshot from its JSON form.
    ///
    /// ## Errors
    /// Returns [`crate::error::ServiceError::InvalidSnapshot`] if the JSON
    /// does not describe a snapshot.
    pub fn from_json(json: &str) -> ServiceResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn event(&self, event_id: Uuid) -> Option<&Event> {
        self.events.iter().find(|event| event.id == event_id)
    }

    /// Guests invited to `event_id`, in guest-list order.
    #[must_use]
    pub fn invited_guests(&self, event_id: Uuid) -> Vec<&Guest> {
        let invited: std::collections::HashSet<Uuid> = self
            .invitations
            .iter()
            .filter(|invitation| invitation.event_id == event_id)
            .map(|invitation| invitation.guest_id)
            .collect();

        self.guests
            .iter()
            .filter(|guest| invited.contains(&guest.id))
            .collect()
    }
}
