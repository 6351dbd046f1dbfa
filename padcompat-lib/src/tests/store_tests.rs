use super::*;
use crate::classifier::FixedClassifier;
use tempfile::TempDir;

fn store_in(tmp: &TempDir) -> CompatibilityStore {
    CompatibilityStore::open(tmp.path().join("compatibility.json"))
}

#[test]
fn key_prefers_origin_id() {
    let entry = CatalogEntry::new("abc", "Half-Life 2").with_origin("Steam", "220");
    assert_eq!(game_key(&entry), "steam_220");
}

#[test]
fn key_falls_back_to_name() {
    let entry = CatalogEntry::new("abc", "Hollow Knight Silksong");
    assert_eq!(game_key(&entry), "hollow_knight_silksong");

    let blank_origin = CatalogEntry::new("abc", "Celeste").with_origin("GOG", "");
    assert_eq!(game_key(&blank_origin), "celeste");
}

#[test]
fn update_then_get_by_key() {
    let tmp = TempDir::new().unwrap();
    let store = store_in(&tmp);
    let entry = CatalogEntry::new("1", "Celeste").with_origin("Steam", "504230");

    let written = store.update(&entry, SupportLevel::Full, CompatibilitySource::User);
    let read = store.get(&entry);
    assert_eq!(read, written);
    assert_eq!(read.game_id, "1");
    assert_eq!(read.source, CompatibilitySource::User);
}

#[test]
fn name_fallback_exact_then_substring() {
    let tmp = TempDir::new().unwrap();
    let store = store_in(&tmp);
    store.update(
        &CatalogEntry::new("hl2", "Half-Life 2").with_origin("Steam", "220"),
        SupportLevel::Full,
        CompatibilitySource::Official,
    );

    let exact = store.get(&CatalogEntry::new("x", "half life 2"));
    assert_eq!(exact.game_name, "Half-Life 2");
    assert_eq!(exact.support_level, SupportLevel::Full);

    let longer = store.get(&CatalogEntry::new("y", "Half-Life 2: Episode One"));
    assert_eq!(longer.game_name, "Half-Life 2");

    let shorter = store.get(&CatalogEntry::new("z", "Half"));
    assert_eq!(shorter.game_name, "Half-Life 2");
}

#[test]
fn exact_name_match_beats_earlier_substring_match() {
    let tmp = TempDir::new().unwrap();
    let store = store_in(&tmp);
    // "a_..." sorts first and would match as a substring.
    store.update(
        &CatalogEntry::new("1", "Doom").with_origin("a", "1"),
        SupportLevel::Partial,
        CompatibilitySource::User,
    );
    store.update(
        &CatalogEntry::new("2", "Doom Eternal").with_origin("b", "2"),
        SupportLevel::Full,
        CompatibilitySource::User,
    );
    let found = store.get(&CatalogEntry::new("q", "DOOM eternal"));
    assert_eq!(found.game_name, "Doom Eternal");
}

#[test]
fn miss_returns_transient_unknown() {
    let tmp = TempDir::new().unwrap();
    let store = store_in(&tmp);
    store.update(
        &CatalogEntry::new("hl2", "Half-Life 2"),
        SupportLevel::Full,
        CompatibilitySource::User,
    );

    let portal = CatalogEntry::new("p", "Portal");
    let record = store.get(&portal);
    assert_eq!(record.support_level, SupportLevel::Unknown);
    assert_eq!(record.source, CompatibilitySource::Unknown);
    assert_eq!(record.game_name, "Portal");
    assert_eq!(store.len(), 1);
    assert!(store.lookup_stored(&portal).is_none());
}

#[test]
fn blank_names_never_fallback() {
    let tmp = TempDir::new().unwrap();
    let store = store_in(&tmp);
    store.update(
        &CatalogEntry::new("1", "Celeste"),
        SupportLevel::Full,
        CompatibilitySource::User,
    );
    assert!(store.lookup_stored(&CatalogEntry::new("2", "???")).is_none());
}

#[test]
fn update_replaces_whole_record() {
    let tmp = TempDir::new().unwrap();
    let store = store_in(&tmp);
    let entry = CatalogEntry::new("1", "Celeste");
    store.update(&entry, SupportLevel::None, CompatibilitySource::Community);
    let first = store.get(&entry);

    let second = store.update(&entry, SupportLevel::Full, CompatibilitySource::User);
    assert_eq!(store.len(), 1);
    assert_eq!(second.support_level, SupportLevel::Full);
    assert!(second.notes.is_none());
    assert!(second.last_updated >= first.last_updated);
}

#[test]
fn auto_update_uses_classifier() {
    let tmp = TempDir::new().unwrap();
    let store = CompatibilityStore::with_classifier(
        tmp.path().join("db.json"),
        Box::new(FixedClassifier(SupportLevel::None)),
    );
    let record = store.auto_update(&CatalogEntry::new("1", "Typing Tutor"));
    assert_eq!(record.support_level, SupportLevel::None);
    assert_eq!(record.source, CompatibilitySource::AutoDetected);
}

#[test]
fn by_level_filters_snapshot() {
    let tmp = TempDir::new().unwrap();
    let store = store_in(&tmp);
    store.update(&CatalogEntry::new("1", "A"), SupportLevel::Full, CompatibilitySource::User);
    store.update(&CatalogEntry::new("2", "B"), SupportLevel::None, CompatibilitySource::User);
    store.update(&CatalogEntry::new("3", "C"), SupportLevel::Full, CompatibilitySource::User);

    let full = store.by_level(SupportLevel::Full);
    assert_eq!(full.len(), 2);
    assert!(full.iter().all(|r| r.support_level == SupportLevel::Full));
    assert!(store.by_level(SupportLevel::Community).is_empty());
    assert_eq!(store.all().len(), 3);
}

#[test]
fn read_missing_file_is_empty() {
    let tmp = TempDir::new().unwrap();
    let records = read_records(&tmp.path().join("nope.json")).unwrap();
    assert!(records.is_empty());
}

#[test]
fn read_malformed_file_is_parse_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("db.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(read_records(&path), Err(StoreError::Parse { .. })));
}

#[test]
fn save_creates_parent_directory() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nested").join("deeper").join("db.json");
    let store = CompatibilityStore::open(&path);
    store.update(&CatalogEntry::new("1", "A"), SupportLevel::Full, CompatibilitySource::User);
    assert!(path.exists());
    assert!(!path.with_extension("json.tmp").exists());
}
