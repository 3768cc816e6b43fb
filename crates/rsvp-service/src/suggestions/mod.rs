//! Hosting suggestions for an event.
//!
//! ## Summary
//! Aggregates the preferences of an event's invited guests into ranked lists
//! the host can act on: what to serve, what to play, what to talk about and
//! what to keep off the table. When nobody is invited yet the whole guest
//! pool is used instead and the summary says so through its `scope`.

mod expansion;
mod tally;

use rsvp_catalog::{CatalogName, CatalogRegistry};
use rsvp_core::config::SuggestionConfig;
use rsvp_core::types::Language;
use serde::Serialize;
use uuid::Uuid;

use crate::model::{Guest, GuestPreferences, GuestSensitiveData, SuggestionSnapshot};
use tally::{AvoidList, Tally};

/// Which guests a summary was computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionScope {
    /// The event's invitees.
    Event,
    /// Every guest; the event had no invitations.
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimingRecommendation {
    StartOnTime,
    StartWithBuffer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedItem {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostingSuggestions {
    pub scope: SuggestionScope,
    pub has_data: bool,
    pub guest_count: usize,
    pub event_title: Option<String>,
    pub food_suggestions: Vec<RankedItem>,
    pub drink_suggestions: Vec<RankedItem>,
    pub color_suggestions: Vec<RankedItem>,
    pub music_suggestions: Vec<RankedItem>,
    pub icebreakers: Vec<RankedItem>,
    pub taboo_topics: Vec<RankedItem>,
    pub experience_suggestions: Vec<RankedItem>,
    pub day_moment_suggestions: Vec<RankedItem>,
    pub relationship_mix: Vec<RankedItem>,
    pub dietary_needs: Vec<RankedItem>,
    pub avoid_items: Vec<String>,
    pub timing_recommendation: TimingRecommendation,
}

#[derive(Debug, Default)]
struct Buckets {
    food: Tally,
    drinks: Tally,
    colors: Tally,
    music: Tally,
    icebreakers: Tally,
    taboo: Tally,
    experiences: Tally,
    day_moments: Tally,
    relationships: Tally,
    dietary: Tally,
}

/// Avoid-list sources, merged in this order.
#[derive(Debug, Default)]
struct AvoidSources {
    food_dislikes: Vec<String>,
    drink_dislikes: Vec<String>,
    pet_allergies: Vec<String>,
    expanded: Vec<String>,
}

#[derive(Debug, Default)]
struct PunctualityVotes {
    punctual: usize,
    flexible: usize,
}

impl PunctualityVotes {
    fn record(&mut self, code: &str) {
        match code {
            "early" | "punctual" => self.punctual += 1,
            "flexible" | "late" => self.flexible += 1,
            _ => {}
        }
    }

    const fn recommendation(&self) -> TimingRecommendation {
        if self.flexible > self.punctual {
            TimingRecommendation::StartWithBuffer
        } else {
            TimingRecommendation::StartOnTime
        }
    }
}

struct Aggregator<'a> {
    registry: &'a CatalogRegistry,
    language: Language,
    buckets: Buckets,
    avoid: AvoidSources,
    votes: PunctualityVotes,
}

impl<'a> Aggregator<'a> {
    fn new(registry: &'a CatalogRegistry, language: Language) -> Self {
        Self {
            registry,
            language,
            buckets: Buckets::default(),
            avoid: AvoidSources::default(),
            votes: PunctualityVotes::default(),
        }
    }

    fn labels(&self, name: CatalogName, values: &[String]) -> Vec<String> {
        values
            .iter()
            .map(|value| self.registry.resolve_label(name, value, self.language))
            .collect()
    }

    fn add_preferences(&mut self, prefs: &GuestPreferences) {
        let drinks = self.labels(CatalogName::Drink, &prefs.drink_likes);
        let drink_dislikes = self.labels(CatalogName::Drink, &prefs.drink_dislikes);
        let colors = self.labels(CatalogName::Color, &prefs.colors);
        let music = self.labels(CatalogName::MusicGenre, &prefs.music_genres);
        let icebreakers = self.labels(CatalogName::Topic, &prefs.icebreaker_topics);
        let taboo = self.labels(CatalogName::Topic, &prefs.taboo_topics);
        let experiences = self.labels(CatalogName::ExperienceType, &prefs.experience_types);
        let day_moments = self.labels(CatalogName::DayMoment, &prefs.day_moments);
        let relationships = self.labels(CatalogName::Relationship, &prefs.relationship_affinities);

        let buckets = &mut self.buckets;
        buckets.food.extend(&prefs.food_likes);
        buckets.drinks.extend(drinks);
        buckets.colors.extend(colors);
        buckets.music.extend(music);
        buckets.icebreakers.extend(icebreakers);
        buckets.taboo.extend(taboo);
        buckets.experiences.extend(experiences);
        buckets.day_moments.extend(day_moments);
        buckets.relationships.extend(relationships);

        self.avoid.food_dislikes.extend(prefs.food_dislikes.iter().cloned());
        self.avoid.drink_dislikes.extend(drink_dislikes);

        if let Some(punctuality) = &prefs.punctuality {
            let code = self.registry.resolve_code(CatalogName::Punctuality, punctuality);
            self.votes.record(&code);
        }
    }

    fn add_sensitive(&mut self, data: &GuestSensitiveData) {
        let dietary = self.labels(CatalogName::DietaryType, &data.dietary_types);
        let allergies = self.labels(CatalogName::Allergy, &data.allergies);
        let intolerances = self.labels(CatalogName::Intolerance, &data.intolerances);
        let pets = self.labels(CatalogName::PetAllergy, &data.pet_allergies);

        self.buckets.dietary.extend(dietary);
        self.buckets.dietary.extend(&allergies);
        self.buckets.dietary.extend(&intolerances);
        self.avoid.pet_allergies.extend(pets);

        self.expand(CatalogName::Allergy, &data.allergies);
        self.expand(CatalogName::Intolerance, &data.intolerances);
    }

    /// Adds the ingredients each restriction implies, or the restriction's
    /// own label when no rule covers it.
    fn expand(&mut self, name: CatalogName, values: &[String]) {
        for value in values {
            let code = self.registry.resolve_code(name, value);
            if code.is_empty() {
                continue;
            }
            let label = self.registry.resolve_label(name, value, self.language);

            match expansion::expand(&code, &label, self.language) {
                Some(ingredients) => self
                    .avoid
                    .expanded
                    .extend(ingredients.iter().map(|i| (*i).to_owned())),
                None => self.avoid.expanded.push(label),
            }
        }
    }

    fn finish(self, limits: SuggestionConfig) -> Summary {
        let sources = self.avoid;
        let mut avoid = AvoidList::default();
        avoid.extend(sources.food_dislikes);
        avoid.extend(sources.drink_dislikes);
        avoid.extend(sources.pet_allergies);
        avoid.extend(sources.expanded);

        let cap = limits.max_items;
        let buckets = self.buckets;
        let servable = |items: Vec<RankedItem>| -> Vec<RankedItem> {
            items
                .into_iter()
                .filter(|item| !avoid.blocks(&item.label))
                .collect()
        };

        let food = servable(buckets.food.ranked(cap));
        let drinks = servable(buckets.drinks.ranked(cap));

        Summary {
            food,
            drinks,
            colors: buckets.colors.ranked(cap),
            music: buckets.music.ranked(cap),
            icebreakers: buckets.icebreakers.ranked(limits.max_icebreakers),
            taboo: buckets.taboo.ranked(cap),
            experiences: buckets.experiences.ranked(cap),
            day_moments: buckets.day_moments.ranked(cap),
            relationships: buckets.relationships.ranked(cap),
            dietary: buckets.dietary.ranked(cap),
            timing: self.votes.recommendation(),
            avoid: avoid.into_items(),
        }
    }
}

struct Summary {
    food: Vec<RankedItem>,
    drinks: Vec<RankedItem>,
    colors: Vec<RankedItem>,
    music: Vec<RankedItem>,
    icebreakers: Vec<RankedItem>,
    taboo: Vec<RankedItem>,
    experiences: Vec<RankedItem>,
    day_moments: Vec<RankedItem>,
    relationships: Vec<RankedItem>,
    dietary: Vec<RankedItem>,
    avoid: Vec<String>,
    timing: TimingRecommendation,
}

fn guests_in_scope(snapshot: &SuggestionSnapshot, event_id: Uuid) -> (SuggestionScope, Vec<&Guest>) {
    let invited = snapshot.invited_guests(event_id);
    if invited.is_empty() {
        (SuggestionScope::All, snapshot.guests.iter().collect())
    } else {
        (SuggestionScope::Event, invited)
    }
}

/// ## Summary
/// Builds the hosting suggestions for `event_id` from `snapshot`.
///
/// Catalog-backed values are shown as labels in `language`; food is free
/// text and shown as entered. Lists are capped by `limits`. Food and drinks
/// that mention anything on the avoid list are left out.
///
/// Never fails: guests without preferences contribute nothing and an empty
/// pool yields empty lists with `has_data` unset.
#[must_use]
pub fn build_hosting_suggestions(
    event_id: Uuid,
    snapshot: &SuggestionSnapshot,
    registry: &CatalogRegistry,
    language: Language,
    limits: SuggestionConfig,
) -> HostingSuggestions {
    let (scope, guests) = guests_in_scope(snapshot, event_id);

    let mut aggregator = Aggregator::new(registry, language);
    for guest in &guests {
        if let Some(prefs) = snapshot.preferences.get(&guest.id) {
            aggregator.add_preferences(prefs);
        }
        if let Some(data) = snapshot.sensitive.get(&guest.id) {
            aggregator.add_sensitive(data);
        }
    }

    let summary = aggregator.finish(limits);

    tracing::info!(
        %event_id,
        ?scope,
        guests = guests.len(),
        avoid = summary.avoid.len(),
        timing = ?summary.timing,
        "Hosting suggestions built"
    );

    HostingSuggestions {
        scope,
        has_data: !guests.is_empty(),
        guest_count: guests.len(),
        event_title: snapshot.event(event_id).map(|event| event.title.clone()),
        food_suggestions: summary.food,
        drink_suggestions: summary.drinks,
        color_suggestions: summary.colors,
        music_suggestions: summary.music,
        icebreakers: summary.icebreakers,
        taboo_topics: summary.taboo,
        experience_suggestions: summary.experiences,
        day_moment_suggestions: summary.day_moments,
        relationship_mix: summary.relationships,
        dietary_needs: summary.dietary,
        avoid_items: summary.avoid,
        timing_recommendation: summary.timing,
    }
}
