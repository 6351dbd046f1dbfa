//! The persisted per-game compatibility record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entry::CatalogEntry;
use crate::support::{CompatibilitySource, SupportLevel};

/// Stored verdict for one game key.
///
/// Field names serialize in camelCase to match the on-disk database layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityRecord {
    pub game_id: String,
    pub game_name: String,
    pub support_level: SupportLevel,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub source: CompatibilitySource,
    pub last_updated: DateTime<Utc>,
    #[serde(default)]
    pub recommended_configurations: Vec<String>,
    /// 1-5 stars, or 0 when unrated
    #[serde(default)]
    pub community_rating: u8,
    #[serde(default)]
    pub total_ratings: u32,
}

impl CompatibilityRecord {
    /// Build a fresh record for `entry`, stamped with `last_updated`.
    ///
    /// Notes, configurations and ratings start empty.
    pub fn for_entry(
        entry: &CatalogEntry,
        support_level: SupportLevel,
        source: CompatibilitySource,
        last_updated: DateTime<Utc>,
    ) -> Self {
        Self {
            game_id: entry.id.clone(),
            game_name: entry.name.clone(),
            support_level,
            notes: None,
            source,
            last_updated,
            recommended_configurations: Vec::new(),
            community_rating: 0,
            total_ratings: 0,
        }
    }

    /// The placeholder returned for games that have no stored record.
    pub fn unknown(entry: &CatalogEntry) -> Self {
        Self::for_entry(
            entry,
            SupportLevel::Unknown,
            CompatibilitySource::Unknown,
            Utc::now(),
        )
    }
}

#[cfg(test)]
#[path = "tests/record_tests.rs"]
mod tests;
