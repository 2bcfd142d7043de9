//! End-to-end behavior of the theme preference across reloads, storage
//! backends and mounted views.

use std::rc::Rc;

use narrativenet::{
    reset_theme_detector, set_theme_detector, ClassTheme, DetachedRoot, DocumentRoot, FileStorage,
    InitialPreference, MemoryStorage, NavBar, Page, PresentationRoot, Recommendations, Renderer,
    Screen, Storage, StoreConfig, ThemePreference, ThemePreferenceStore, ThemeToggle, ThemedView,
};
use serial_test::serial;
use tempfile::TempDir;

fn file_store(dir: &TempDir) -> ThemePreferenceStore<FileStorage, DocumentRoot> {
    ThemePreferenceStore::new(FileStorage::new(dir.path().join("storage.json")), DocumentRoot::new())
}

#[test]
fn test_round_trip_through_reload() {
    for pref in ThemePreference::ALL {
        let dir = TempDir::new().unwrap();
        let mut store = file_store(&dir);
        store.set_current(pref).unwrap();

        let mut reloaded = file_store(&dir);
        assert_eq!(reloaded.get_current(), pref);
        assert_eq!(reloaded.root().theme_markers(), vec![pref.marker()]);
    }
}

#[test]
fn test_reload_picks_up_external_write() {
    let dir = TempDir::new().unwrap();
    let mut store = file_store(&dir);
    assert_eq!(store.get_current(), ThemePreference::Light);

    let mut other = FileStorage::new(dir.path().join("storage.json"));
    other.set_item("theme", "dark").unwrap();

    assert_eq!(store.reload(), ThemePreference::Dark);
    assert_eq!(store.root().theme_markers(), vec!["dark"]);
}

#[test]
fn test_toggle_end_to_end() {
    let mut store = ThemePreferenceStore::new(MemoryStorage::new(), DocumentRoot::new());
    assert_eq!(store.get_current(), ThemePreference::Light);

    store.toggle().unwrap();

    assert_eq!(store.get_current(), ThemePreference::Dark);
    assert_eq!(store.root().theme_markers(), vec!["dark"]);
}

#[test]
fn test_set_current_to_current_is_invisible() {
    let dir = TempDir::new().unwrap();
    let mut store = file_store(&dir);
    store.set_current(ThemePreference::Dark).unwrap();
    let before = std::fs::read_to_string(dir.path().join("storage.json")).unwrap();
    let markers_before = store.root().theme_markers();

    let current = store.get_current();
    store.set_current(current).unwrap();

    let after = std::fs::read_to_string(dir.path().join("storage.json")).unwrap();
    assert_eq!(before, after);
    assert_eq!(store.root().theme_markers(), markers_before);
}

#[test]
fn test_invalid_persisted_value_falls_back() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("storage.json"), r#"{"theme": "blue"}"#).unwrap();

    let mut store = file_store(&dir);
    assert_eq!(store.get_current(), ThemePreference::Light);
    assert_eq!(store.root().theme_markers(), vec!["light"]);
}

#[test]
fn test_corrupt_storage_file_falls_back() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("storage.json"), "{ not json").unwrap();

    let mut store = file_store(&dir);
    assert_eq!(store.get_current(), ThemePreference::Light);
}

#[test]
fn test_corrupt_storage_file_recovers_on_write() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "{ not json").unwrap();

    let mut store = file_store(&dir);
    assert_eq!(store.toggle().unwrap(), ThemePreference::Dark);

    let mut reopened = file_store(&dir);
    assert_eq!(reopened.get_current(), ThemePreference::Dark);

    std::fs::write(&path, "{ not json").unwrap();
    assert_eq!(reopened.reset().unwrap(), ThemePreference::Light);
    assert_eq!(file_store(&dir).get_current(), ThemePreference::Light);
}

#[test]
fn test_write_failure_still_updates_session() {
    let dir = TempDir::new().unwrap();
    // A directory where the file should be makes every write fail.
    std::fs::create_dir(dir.path().join("storage.json")).unwrap();

    let mut store = file_store(&dir);
    let result = store.toggle();

    assert!(result.is_err());
    assert_eq!(store.get_current(), ThemePreference::Dark);
    assert_eq!(store.root().theme_markers(), vec!["dark"]);
}

#[test]
fn test_detached_root_persists_for_next_attachment() {
    let storage = MemoryStorage::new();
    let mut store = ThemePreferenceStore::new(storage, DetachedRoot);
    store.set_current(ThemePreference::Dark).unwrap();

    let storage = store.storage().clone();
    let mut attached = ThemePreferenceStore::new(storage, DocumentRoot::new());
    assert_eq!(attached.get_current(), ThemePreference::Dark);
    assert_eq!(attached.root().class_attr(), "dark");
}

#[test]
#[serial]
fn test_follow_system_only_when_slot_empty() {
    set_theme_detector(|| ThemePreference::Dark);
    let config = StoreConfig::default().with_initial(InitialPreference::FollowSystem);

    let mut empty = ThemePreferenceStore::with_config(MemoryStorage::new(), DocumentRoot::new(), config.clone());
    assert_eq!(empty.get_current(), ThemePreference::Dark);

    let saved = MemoryStorage::new().with_item("theme", "light");
    let mut explicit = ThemePreferenceStore::with_config(saved, DocumentRoot::new(), config.clone());
    assert_eq!(explicit.get_current(), ThemePreference::Light);

    let mut reset = ThemePreferenceStore::with_config(
        MemoryStorage::new().with_item("theme", "light"),
        DocumentRoot::new(),
        config,
    );
    assert_eq!(reset.reset().unwrap(), ThemePreference::Dark);
    assert_eq!(reset.root().theme_markers(), vec!["dark"]);

    reset_theme_detector();
}

#[test]
fn test_every_mounted_consumer_observes_toggle() {
    let mut store = ThemePreferenceStore::new(MemoryStorage::new(), DocumentRoot::new());
    let renderer = Rc::new(Renderer::new(ClassTheme::narrativenet()).unwrap());

    let header_views: Vec<Box<dyn ThemedView>> = vec![Box::new(NavBar::default())];
    let header = Screen::mount(&mut store, Rc::clone(&renderer), header_views).unwrap();

    let sidebar_views: Vec<Box<dyn ThemedView>> =
        vec![Box::new(ThemeToggle), Box::new(Recommendations::default())];
    let sidebar = Screen::mount(&mut store, Rc::clone(&renderer), sidebar_views).unwrap();

    store.toggle().unwrap();

    for frame in [header.frame(), sidebar.frame()] {
        assert_eq!(frame.preference, ThemePreference::Dark);
        assert_eq!(frame.passes, 2);
    }
    assert!(sidebar.frame().output("theme-toggle").unwrap().contains(" checked"));
    assert!(sidebar
        .frame()
        .output("recommendations")
        .unwrap()
        .contains("bg-red-950"));
    assert!(header.frame().output("navbar").unwrap().contains("bg-gray-900"));
}

#[test]
fn test_page_reflects_root_markers() {
    let mut store = ThemePreferenceStore::new(MemoryStorage::new(), DocumentRoot::new());
    store.toggle().unwrap();
    let renderer = Renderer::new(ClassTheme::narrativenet()).unwrap();

    let html = Page::default()
        .with_root_class(store.root().class_attr())
        .render(&renderer, store.get_current())
        .unwrap();

    assert!(html.starts_with("<!doctype html>"));
    assert!(html.contains(r#"<html class="dark">"#));
    assert!(html.contains("bg-black"));
}
