use super::*;
use crate::classifier::FixedClassifier;
use tempfile::TempDir;

struct Fixture {
    _tmp: TempDir,
    store: CompatibilityStore,
    overrides: OverrideFile,
}

fn fixture(classifier_level: SupportLevel) -> Fixture {
    let tmp = TempDir::new().unwrap();
    let store = CompatibilityStore::with_classifier(
        tmp.path().join("db.json"),
        Box::new(FixedClassifier(classifier_level)),
    );
    let overrides = OverrideFile::load(tmp.path().join("overrides.txt"));
    Fixture {
        _tmp: tmp,
        store,
        overrides,
    }
}

#[test]
fn override_wins_without_writing() {
    let mut f = fixture(SupportLevel::None);
    f.overrides.set("g1", "full").unwrap();
    let entry = CatalogEntry::new("g1", "Celeste");
    f.store.update(&entry, SupportLevel::None, CompatibilitySource::AutoDetected);

    let record = Resolver::new(&f.store, &f.overrides, true).resolve(&entry);
    assert_eq!(record.support_level, SupportLevel::Full);
    assert_eq!(record.source, CompatibilitySource::User);
    assert_eq!(f.store.get(&entry).support_level, SupportLevel::None);
}

#[test]
fn unrecognized_override_is_ignored() {
    let mut f = fixture(SupportLevel::Partial);
    f.overrides.set("g1", "sort of").unwrap();
    let entry = CatalogEntry::new("g1", "Celeste");
    f.store.update(&entry, SupportLevel::Full, CompatibilitySource::Official);

    let record = Resolver::new(&f.store, &f.overrides, false).resolve(&entry);
    assert_eq!(record.support_level, SupportLevel::Full);
    assert_eq!(record.source, CompatibilitySource::Official);
}

#[test]
fn miss_auto_detects_when_enabled() {
    let f = fixture(SupportLevel::None);
    let entry = CatalogEntry::new("g1", "Spreadsheet Simulator");

    let record = Resolver::new(&f.store, &f.overrides, true).resolve(&entry);
    assert_eq!(record.support_level, SupportLevel::None);
    assert_eq!(record.source, CompatibilitySource::AutoDetected);
    assert_eq!(f.store.len(), 1);
}

#[test]
fn miss_stays_unknown_when_disabled() {
    let f = fixture(SupportLevel::Full);
    let entry = CatalogEntry::new("g1", "Spreadsheet Simulator");

    let record = Resolver::new(&f.store, &f.overrides, false).resolve(&entry);
    assert_eq!(record.support_level, SupportLevel::Unknown);
    assert!(f.store.is_empty());
}

#[test]
fn stored_unknown_is_reclassified() {
    let f = fixture(SupportLevel::Partial);
    let entry = CatalogEntry::new("g1", "Celeste");
    f.store.update(&entry, SupportLevel::Unknown, CompatibilitySource::User);

    let record = Resolver::new(&f.store, &f.overrides, true).resolve(&entry);
    assert_eq!(record.support_level, SupportLevel::Partial);
}

#[test]
fn sync_writes_matching_overrides() {
    let mut f = fixture(SupportLevel::Full);
    f.overrides.set("g1", "Partial").unwrap();
    f.overrides.set("g2", "garbage").unwrap();
    f.overrides.set("absent", "Full").unwrap();

    let entries = vec![
        CatalogEntry::new("g1", "One"),
        CatalogEntry::new("g2", "Two"),
        CatalogEntry::new("g3", "Three"),
    ];
    let written = Resolver::new(&f.store, &f.overrides, true).sync_overrides(&entries);
    assert_eq!(written, 2);
    assert_eq!(f.store.len(), 2);

    let one = f.store.get(&entries[0]);
    assert_eq!(one.support_level, SupportLevel::Partial);
    assert_eq!(one.source, CompatibilitySource::User);
    assert_eq!(f.store.get(&entries[1]).support_level, SupportLevel::Unknown);
}
