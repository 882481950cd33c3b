//! Tests for the filesystem store and whole-collection persistence.

use grimoire_core::fixtures::{sample_beast, sample_character};
use grimoire_core::{Beast, Character, Dossier, ProfileItem};
use grimoire_storage::{CollectionKey, CollectionStore, FileSystemStore, InMemoryStore, load, save};
use tempfile::TempDir;

#[test]
fn test_save_and_load_preserve_order() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let store = FileSystemStore::new(temp_dir.path())?;

    let characters = vec![sample_character("2"), sample_character("1")];
    save(&store, CollectionKey::Characters, &characters)?;

    assert!(store.path_for("characters").exists());
    let loaded: Vec<Character> = load(&store, CollectionKey::Characters);
    assert_eq!(loaded, characters);
    Ok(())
}

#[test]
fn test_missing_key_loads_empty() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let store = FileSystemStore::new(temp_dir.path().join("nested/dir"))?;

    let loaded: Vec<Beast> = load(&store, CollectionKey::Beasts);
    assert!(loaded.is_empty());
    Ok(())
}

#[test]
fn test_corrupt_contents_load_empty() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let store = FileSystemStore::new(temp_dir.path())?;
    std::fs::write(store.path_for("beasts"), "{not json")?;

    let loaded: Vec<Beast> = load(&store, CollectionKey::Beasts);
    assert!(loaded.is_empty());
    Ok(())
}

#[test]
fn test_unreadable_entry_loads_empty() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let store = FileSystemStore::new(temp_dir.path())?;
    // A directory where the file should be makes the read fail.
    std::fs::create_dir(store.path_for("characters"))?;

    let loaded: Vec<Character> = load(&store, CollectionKey::Characters);
    assert!(loaded.is_empty());
    Ok(())
}

#[test]
fn test_saving_empty_list_removes_key() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let store = FileSystemStore::new(temp_dir.path())?;

    save(&store, CollectionKey::Beasts, &[sample_beast("1")])?;
    assert!(store.path_for("beasts").exists());

    save::<Beast, _>(&store, CollectionKey::Beasts, &[])?;
    assert!(!store.path_for("beasts").exists());
    assert_eq!(store.read("beasts")?, None);
    Ok(())
}

#[test]
fn test_overwrite_leaves_no_temp_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let store = FileSystemStore::new(temp_dir.path())?;

    save(&store, CollectionKey::Beasts, &[sample_beast("1")])?;
    save(&store, CollectionKey::Beasts, &[sample_beast("2"), sample_beast("1")])?;

    let names: Vec<String> = std::fs::read_dir(temp_dir.path())?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["beasts.json".to_string()]);

    let loaded: Vec<Beast> = load(&store, CollectionKey::Beasts);
    assert_eq!(loaded.len(), 2);
    Ok(())
}

#[test]
fn test_profile_items_stored_with_saved_type() -> anyhow::Result<()> {
    let store = InMemoryStore::new();
    let items = vec![
        sample_character("1").into_profile_item(),
        sample_beast("2").into_profile_item(),
    ];
    save(&store, CollectionKey::ProfileItems, &items)?;

    let raw = store.read("savedProfileItems")?.unwrap_or_default();
    let value: serde_json::Value = serde_json::from_str(&raw)?;
    assert_eq!(value[0]["savedType"], "character");
    assert_eq!(value[1]["savedType"], "beast");

    let loaded: Vec<ProfileItem> = load(&store, CollectionKey::ProfileItems);
    assert_eq!(loaded, items);
    Ok(())
}
