use super::*;
use chrono::Utc;
use padcompat_core::CatalogEntry;

fn record(name: &str, level: SupportLevel) -> CompatibilityRecord {
    sourced(name, level, CompatibilitySource::User)
}

fn sourced(name: &str, level: SupportLevel, source: CompatibilitySource) -> CompatibilityRecord {
    CompatibilityRecord::for_entry(&CatalogEntry::new(name, name), level, source, Utc::now())
}

#[test]
fn counts_every_level() {
    let records = vec![
        record("a", SupportLevel::Full),
        record("b", SupportLevel::Full),
        record("c", SupportLevel::Partial),
        record("d", SupportLevel::None),
    ];
    let stats = CompatibilityStats::from_records(&records);
    assert_eq!(stats.total, 4);
    assert_eq!(stats.count(SupportLevel::Full), 2);
    assert_eq!(stats.count(SupportLevel::Partial), 1);
    assert_eq!(stats.count(SupportLevel::None), 1);
    assert_eq!(stats.count(SupportLevel::Community), 0);
    assert_eq!(stats.count(SupportLevel::Unknown), 0);
    assert_eq!(stats.controller_ready(), 3);
    assert_eq!(stats.percent(SupportLevel::Full), 50.0);
    assert_eq!(stats.ready_percent(), 75.0);
}

#[test]
fn empty_store_has_zero_percentages() {
    let stats = CompatibilityStats::from_records(&[]);
    assert_eq!(stats.total, 0);
    assert_eq!(stats.percent(SupportLevel::Full), 0.0);
    assert_eq!(stats.ready_percent(), 0.0);
}

#[test]
fn counts_every_source() {
    let records = vec![
        sourced("a", SupportLevel::Full, CompatibilitySource::AutoDetected),
        sourced("b", SupportLevel::Partial, CompatibilitySource::AutoDetected),
        sourced("c", SupportLevel::None, CompatibilitySource::User),
    ];
    let stats = CompatibilityStats::from_records(&records);
    let per_source: Vec<usize> = CompatibilitySource::all()
        .iter()
        .map(|source| stats.count_source(*source))
        .collect();
    assert_eq!(per_source, vec![0, 0, 0, 1, 2]);
    assert_eq!(per_source.iter().sum::<usize>(), stats.total);
}
