//! State controller behavior with in-memory collaborators.

mod common;

use babynames::generation::GenerationError;
use babynames::storage::{KeyValueStore, MemoryStore, FAVORITES_KEY};
use common::{harness, harness_with, japanese_a, record};
use std::sync::Arc;
use std::time::{Duration, Instant};

#[tokio::test]
async fn test_successful_generation_replaces_results() {
    let mut h = harness(vec![
        Ok(vec![record("Aiko"), record("Akira")]),
        Ok(vec![record("Asuka")]),
    ]);

    assert!(h.controller.generate(japanese_a()).await);
    assert_eq!(h.controller.state().generated.len(), 2);
    assert_eq!(h.controller.state().generated[0].name, "Aiko");

    assert!(h.controller.generate(japanese_a()).await);
    let state = h.controller.state();
    assert_eq!(state.generated, vec![record("Asuka")]);
    assert!(!state.is_loading);
    assert!(state.error.is_none());
    assert_eq!(h.generator.calls.lock().len(), 2);
}

#[tokio::test]
async fn test_failed_generation_shows_fixed_message() {
    let mut h = harness(vec![
        Ok(vec![record("Aiko")]),
        Err(GenerationError::Image {
            name: "Akira".to_string(),
            source: Box::new(GenerationError::MissingContent {
                what: "image predictions",
            }),
        }),
    ]);

    h.controller.generate(japanese_a()).await;
    h.controller.generate(japanese_a()).await;

    let state = h.controller.state();
    assert!(state.generated.is_empty());
    assert!(!state.is_loading);
    assert_eq!(
        state.error.as_deref(),
        Some("Could not generate names and images. The AI may be unavailable or the request is invalid.")
    );
}

#[tokio::test]
async fn test_empty_response_message() {
    let mut h = harness(vec![Err(GenerationError::EmptyResponse)]);

    h.controller.generate(japanese_a()).await;

    assert_eq!(
        h.controller.state().error.as_deref(),
        Some("The API returned an empty response. Please try a different query.")
    );
}

#[tokio::test]
async fn test_submit_while_loading_is_ignored() {
    let mut h = harness(vec![Ok(vec![record("Aiko")])]);

    let ticket = h.controller.begin_generate(japanese_a()).expect("accepted");
    assert!(h.controller.state().is_loading);
    assert!(h.controller.begin_generate(japanese_a()).is_none());

    let outcome = babynames::controller::Controller::run(h.controller.generator(), ticket).await;
    h.controller.finish_generate(outcome);

    assert!(!h.controller.state().is_loading);
    assert_eq!(h.controller.state().generated.len(), 1);
    assert_eq!(h.generator.calls.lock().len(), 1);
}

#[test]
fn test_toggle_twice_restores_favorites_and_storage() {
    let store = Arc::new(MemoryStore::new());
    let mut h = harness_with(vec![], store.clone(), false);
    let aiko = record("Aiko");

    h.controller.toggle_favorite(&aiko);
    assert!(h.controller.is_favorite(&aiko));
    let saved = store.get(FAVORITES_KEY).unwrap().unwrap();
    assert!(saved.contains("\"Aiko\""));

    h.controller.toggle_favorite(&aiko);
    assert!(!h.controller.is_favorite(&aiko));
    assert!(h.controller.state().favorites.is_empty());
    assert_eq!(store.get(FAVORITES_KEY).unwrap().as_deref(), Some("[]"));
}

#[test]
fn test_favorites_survive_a_restart() {
    let store = Arc::new(MemoryStore::new());
    {
        let mut h = harness_with(vec![], store.clone(), false);
        h.controller.toggle_favorite(&record("Aiko"));
        h.controller.toggle_favorite(&record("Ren"));
    }

    let h = harness_with(vec![], store, false);
    let names: Vec<&str> = h
        .controller
        .state()
        .favorites
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(names, vec!["Aiko", "Ren"]);
}

#[test]
fn test_corrupt_favorites_load_as_empty() {
    let store = Arc::new(MemoryStore::new());
    store.set(FAVORITES_KEY, "{not json").unwrap();

    let h = harness_with(vec![], store, false);

    assert!(h.controller.state().favorites.is_empty());
}

#[tokio::test]
async fn test_favorite_status_recomputed_for_new_results() {
    let mut h = harness(vec![Ok(vec![
        common::record("Aiko"),
        common::record("Akira"),
    ])]);
    // Same name, different meaning and image: still a favorite.
    let earlier = babynames::model::NameRecord::new("Aiko", "Beloved", "https://example.com/a.jpg");
    h.controller.toggle_favorite(&earlier);

    h.controller.generate(japanese_a()).await;

    let state = h.controller.state();
    assert!(state.is_favorite(&state.generated[0]));
    assert!(!state.is_favorite(&state.generated[1]));
}

#[test]
fn test_share_copies_text_and_notifies_until_expiry() {
    let mut h = harness(vec![]);
    let now = Instant::now();

    h.controller.share(&record("Aiko"), now);

    assert_eq!(
        h.clipboard.lock().as_slice(),
        &["Check out this baby name I found: Aiko! It means \"meaning of Aiko\".".to_string()]
    );
    assert_eq!(
        h.controller.state().notification_message(),
        Some("Copied to clipboard!")
    );

    h.controller.tick(now + Duration::from_secs(1));
    assert!(h.controller.state().notification.is_some());

    h.controller.tick(now + Duration::from_secs(3));
    assert!(h.controller.state().notification.is_none());
}

#[test]
fn test_clipboard_failure_notifies() {
    let mut h = harness_with(vec![], Arc::new(MemoryStore::new()), true);

    h.controller.share(&record("Aiko"), Instant::now());

    assert_eq!(h.controller.state().notification_message(), Some("Failed to copy."));
    assert!(h.clipboard.lock().is_empty());
}
