//! Hosting suggestions over a backend-style snapshot.

use rsvp_test::app::cli::Command;
use rsvp_test::app::commands;
use rsvp_test::component::catalog;
use rsvp_test::component::config::{Settings, SuggestionConfig};
use rsvp_test::component::service::{
    HostingSuggestions, RankedItem, SuggestionScope, TimingRecommendation,
    build_hosting_suggestions,
};
use rsvp_test::component::types::Language;
use rsvp_test::fixtures::{EVENT_ID, OTHER_EVENT_ID, snapshot, snapshot_json};

fn build(event_id: uuid::Uuid, language: Language) -> HostingSuggestions {
    build_hosting_suggestions(
        event_id,
        &snapshot(),
        catalog::builtin().unwrap(),
        language,
        SuggestionConfig::default(),
    )
}

fn labels(items: &[RankedItem]) -> Vec<&str> {
    items.iter().map(|item| item.label.as_str()).collect()
}

#[test_log::test]
fn avoided_food_loses_despite_top_rank() {
    let summary = build(EVENT_ID, Language::Es);

    assert_eq!(summary.scope, SuggestionScope::Event);
    assert_eq!(summary.guest_count, 2);
    assert_eq!(labels(&summary.food_suggestions), vec!["croquetas", "tortilla"]);
    assert!(summary.avoid_items.contains(&"salmon".to_owned()));
}

#[test]
fn avoid_list_collects_every_source() {
    let summary = build(EVENT_ID, Language::Es);

    assert_eq!(
        summary.avoid_items,
        vec!["salmon", "Gatos", "almendra", "nuez", "avellana", "anacardo", "pistacho"]
    );
    assert_eq!(labels(&summary.dietary_needs), vec!["Frutos secos"]);
}

#[test]
fn catalog_backed_lists_use_labels() {
    let summary = build(EVENT_ID, Language::Es);

    assert_eq!(
        summary.drink_suggestions,
        vec![
            RankedItem { label: "Cerveza".to_owned(), count: 2 },
            RankedItem { label: "Vino tinto".to_owned(), count: 1 },
        ]
    );
    assert_eq!(labels(&summary.music_suggestions), vec!["Flamenco"]);
    assert_eq!(labels(&summary.icebreakers), vec!["Viajes"]);
    assert_eq!(labels(&summary.taboo_topics), vec!["Política"]);
}

#[test]
fn flexible_guests_get_a_buffer() {
    assert_eq!(
        build(EVENT_ID, Language::En).timing_recommendation,
        TimingRecommendation::StartWithBuffer
    );
}

#[test]
fn event_without_invitations_uses_everyone() {
    let summary = build(OTHER_EVENT_ID, Language::En);

    assert_eq!(summary.scope, SuggestionScope::All);
    assert_eq!(summary.guest_count, 3);
    assert!(summary.has_data);
    assert!(labels(&summary.food_suggestions).contains(&"sushi"));
}

#[test]
fn suggest_command_reads_snapshot_file() {
    let path = std::env::temp_dir().join(format!("rsvp-snapshot-{}.json", uuid::Uuid::new_v4()));
    std::fs::write(&path, snapshot_json().to_string()).unwrap();

    let settings = Settings::load_from("does-not-exist.toml").unwrap();
    let output = commands::run(
        &Command::Suggest {
            snapshot: path.clone(),
            event: EVENT_ID,
            lang: Some(Language::Fr),
        },
        &settings,
    );
    std::fs::remove_file(&path).unwrap();

    let output = output.unwrap();
    assert_eq!(output["scope"], "event");
    assert_eq!(output["eventTitle"], "Cena de otoño");
    assert_eq!(output["timingRecommendation"], "start_with_buffer");
    assert_eq!(output["drinkSuggestions"][0]["label"], "Bière");
    tracing::debug!(%output, "Suggest command output");
}
