use super::*;
use chrono::TimeZone;

#[test]
fn serializes_with_camel_case_fields() {
    let entry = CatalogEntry::new("abc", "Portal");
    let when = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let record = CompatibilityRecord::for_entry(
        &entry,
        SupportLevel::Full,
        CompatibilitySource::AutoDetected,
        when,
    );
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["gameId"], "abc");
    assert_eq!(json["gameName"], "Portal");
    assert_eq!(json["supportLevel"], "Full");
    assert_eq!(json["source"], "AutoDetected");
    assert_eq!(json["communityRating"], 0);
    assert!(json["recommendedConfigurations"].as_array().unwrap().is_empty());
}

#[test]
fn missing_optional_fields_take_defaults() {
    let json = r#"{
        "gameId": "1",
        "gameName": "Celeste",
        "supportLevel": "Partial",
        "lastUpdated": "2023-01-02T03:04:05Z"
    }"#;
    let record: CompatibilityRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.support_level, SupportLevel::Partial);
    assert_eq!(record.source, CompatibilitySource::Unknown);
    assert_eq!(record.notes, None);
    assert_eq!(record.total_ratings, 0);
}

#[test]
fn unknown_placeholder_copies_identity() {
    let entry = CatalogEntry::new("xyz", "Portal");
    let record = CompatibilityRecord::unknown(&entry);
    assert_eq!(record.game_id, "xyz");
    assert_eq!(record.game_name, "Portal");
    assert_eq!(record.support_level, SupportLevel::Unknown);
    assert_eq!(record.source, CompatibilitySource::Unknown);
}
