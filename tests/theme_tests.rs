//! Theme provider behavior against the on-disk preference store.

use std::fs;

use civic_ui::dom::RootClassList;
use civic_ui::style::{generate, CardVariant};
use civic_ui::theme::{FileStore, ManualAmbient, MemoryStore, ThemeMode, ThemeProvider};
use tempfile::TempDir;

fn file_store(dir: &TempDir) -> FileStore {
    FileStore::new(dir.path().join("preferences.toml"))
}

#[test]
fn test_choice_survives_restart() {
    let dir = TempDir::new().unwrap();
    let ambient = ManualAmbient::new(Some(false));

    let provider = ThemeProvider::new(file_store(&dir), &ambient, RootClassList::new());
    assert_eq!(provider.mode(), ThemeMode::Light);
    assert_eq!(provider.toggle_dark_mode(), ThemeMode::Dark);
    drop(provider);

    let root = RootClassList::new();
    let provider = ThemeProvider::new(file_store(&dir), &ambient, root.clone());
    assert_eq!(provider.mode(), ThemeMode::Dark);
    assert!(provider.has_explicit_preference());
    assert!(root.contains("dark"));
}

#[test]
fn test_preference_file_is_plain_toml() {
    let dir = TempDir::new().unwrap();
    let ambient = ManualAmbient::new(None);
    let provider = ThemeProvider::new(file_store(&dir), &ambient, RootClassList::new());

    provider.set_mode(ThemeMode::Dark);

    let content = fs::read_to_string(dir.path().join("preferences.toml")).unwrap();
    assert!(content.contains("theme = \"dark\""), "got: {content}");
}

#[test]
fn test_unrecognized_saved_value_means_light() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("preferences.toml"), "theme = \"sepia\"\n").unwrap();
    let ambient = ManualAmbient::new(Some(true));

    let provider = ThemeProvider::new(file_store(&dir), &ambient, RootClassList::new());
    assert_eq!(provider.mode(), ThemeMode::Light);
}

#[test]
fn test_corrupt_preference_file_falls_back_to_light() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("preferences.toml"), "theme = [not toml").unwrap();
    let ambient = ManualAmbient::new(Some(true));

    let provider = ThemeProvider::new(file_store(&dir), &ambient, RootClassList::new());
    assert_eq!(provider.mode(), ThemeMode::Light);
}

#[test]
fn test_context_tracks_every_change() {
    let ambient = ManualAmbient::new(Some(true));
    let provider = ThemeProvider::new(MemoryStore::new(), &ambient, RootClassList::new());

    let context = provider.context();
    assert!(context.is_dark_mode);
    assert_eq!(context.ui_config, generate(true));

    provider.set_dark_mode(false);
    let context = provider.context();
    assert!(!context.is_dark_mode);
    assert_eq!(context.ui_config, generate(false));
    assert!(!context.ui().is_dark_mode());
    assert!(context
        .ui()
        .card_classes(CardVariant::Default, None)
        .contains(generate(false).colors.card));
}

#[test]
fn test_os_changes_followed_until_user_chooses() {
    let ambient = ManualAmbient::new(Some(false));
    let root = RootClassList::new();
    let provider = ThemeProvider::new(MemoryStore::new(), &ambient, root.clone());

    ambient.set(Some(true));
    assert!(provider.is_dark_mode());
    assert!(root.contains("dark"));

    provider.set_dark_mode(false);
    ambient.set(Some(false));
    ambient.set(Some(true));
    assert!(!provider.is_dark_mode());
    assert!(!root.contains("dark"));

    assert_eq!(provider.reset_to_system(&ambient), ThemeMode::Dark);
    ambient.set(Some(false));
    assert!(!provider.is_dark_mode());
}

#[test]
fn test_context_serializes_for_frontend() {
    let ambient = ManualAmbient::new(None);
    let provider = ThemeProvider::new(MemoryStore::new(), &ambient, RootClassList::new());

    let json = serde_json::to_value(provider.context()).unwrap();
    assert_eq!(json["isDarkMode"], false);
    assert_eq!(json["uiConfig"]["colors"]["card"], generate(false).colors.card);
    assert!(json["uiConfig"]["components"]["button"].is_object());
}
