//! Favorites survive a reload of the plugin.

use marquee::directory::{DirectoryRequest, HttpReply};
use marquee::storage::{FavoritesStore, JsonFileStore, KeyValueStore, FAVORITES_KEY};
use marquee::ui::OverlayView;
use marquee::{handle_event, initialize, open_favorites_store, Action, AppState, Config, Event};
use std::path::Path;

const SEARCH_BODY: &str = r#"{
    "Search": [
        {"Title":"The Avengers","Year":"2012","imdbID":"tt0848228","Type":"movie","Poster":"N/A"},
        {"Title":"Avengers: Endgame","Year":"2019","imdbID":"tt4154796","Type":"movie","Poster":"N/A"}
    ],
    "Response":"True"
}"#;

fn config(dir: &Path) -> Config {
    Config {
        api_key: Some("test-key".to_string()),
        favorites_dir: dir.to_path_buf(),
        ..Config::default()
    }
}

/// A state with durable favorites and the search answered.
fn started(dir: &Path) -> AppState {
    let config = config(dir);
    let mut state = initialize(&config);
    state.attach_favorites(open_favorites_store(&config));

    let (_, actions) = handle_event(&mut state, &Event::Ready).unwrap();
    let request: &DirectoryRequest = actions
        .iter()
        .find_map(|a| match a {
            Action::Fetch(request) => Some(request),
            _ => None,
        })
        .unwrap();
    let event = Event::DirectoryResponse {
        tag: request.tag.clone(),
        reply: HttpReply::new(200, SEARCH_BODY),
    };
    handle_event(&mut state, &event).unwrap();
    state
}

#[test]
fn toggled_favorite_is_reloaded() {
    let dir = tempfile::tempdir().unwrap();

    let mut state = started(dir.path());
    handle_event(&mut state, &Event::FocusResults).unwrap();
    let (render, _) = handle_event(&mut state, &Event::ToggleFavorite).unwrap();
    assert!(render);
    assert!(state.favorites.contains("tt0848228"));
    drop(state);

    let reloaded = started(dir.path());
    let ids: Vec<&str> = reloaded.favorites.items().iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, ["tt0848228"]);
    assert!(reloaded.compute_viewmodel(24, 80).display_items[0].is_favorite);
}

#[test]
fn removal_from_overlay_is_persisted() {
    let dir = tempfile::tempdir().unwrap();

    let mut state = started(dir.path());
    handle_event(&mut state, &Event::ToggleFavorite).unwrap();
    handle_event(&mut state, &Event::KeyDown).unwrap();
    handle_event(&mut state, &Event::ToggleFavorite).unwrap();
    // newest first
    let ids: Vec<&str> = state.favorites.items().iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, ["tt4154796", "tt0848228"]);

    handle_event(&mut state, &Event::ShowFavorites).unwrap();
    handle_event(&mut state, &Event::KeyDown).unwrap();
    let (render, _) = handle_event(&mut state, &Event::RemoveFavorite).unwrap();
    assert!(render);

    let Some(OverlayView::Favorites(view)) = state.compute_viewmodel(24, 80).overlay else {
        panic!("favorites overlay should be showing");
    };
    assert_eq!(view.title, "Favorites (1)");
    assert_eq!(view.rows.len(), 1);
    assert!(view.rows[0].is_selected);

    let reloaded = FavoritesStore::load(Box::new(JsonFileStore::new(dir.path()).unwrap()));
    assert_eq!(reloaded.len(), 1);
    assert!(reloaded.contains("tt4154796"));
}

#[test]
fn toggling_twice_leaves_an_empty_list_on_disk() {
    let dir = tempfile::tempdir().unwrap();

    let mut state = started(dir.path());
    handle_event(&mut state, &Event::ToggleFavorite).unwrap();
    handle_event(&mut state, &Event::ToggleFavorite).unwrap();
    assert!(state.favorites.is_empty());

    let store = JsonFileStore::new(dir.path()).unwrap();
    let raw = store.get(FAVORITES_KEY).unwrap().unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored, serde_json::json!([]));
}

#[test]
fn stored_document_uses_the_directory_field_names() {
    let dir = tempfile::tempdir().unwrap();

    let mut state = started(dir.path());
    handle_event(&mut state, &Event::ToggleFavorite).unwrap();

    let raw = std::fs::read_to_string(dir.path().join("favorites.json")).unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        stored,
        serde_json::json!([{
            "Title": "The Avengers",
            "Year": "2012",
            "imdbID": "tt0848228",
            "Type": "movie",
            "Poster": "N/A"
        }])
    );
}

#[test]
fn corrupt_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("favorites.json"), "{not json").unwrap();

    let state = started(dir.path());
    assert!(state.favorites.is_empty());
    assert_eq!(state.compute_viewmodel(24, 80).header.favorites_label, "Favorites (0)");
}
