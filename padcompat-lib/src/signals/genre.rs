//! Weighted scoring of genres, tags and features.
//!
//! Each list has its own weight table. Terms are compared lowercased and
//! must match a table key exactly; anything else scores zero.

use padcompat_core::{CatalogEntry, DetectionOpinion, SupportLevel};

use super::GENRE_METHOD;

const GENRE_WEIGHTS: &[(&str, f64)] = &[
    // Controller-friendly
    ("action", 0.8),
    ("adventure", 0.6),
    ("racing", 0.9),
    ("sports", 0.9),
    ("fighting", 0.9),
    ("platformer", 0.8),
    ("shooter", 0.7),
    ("rpg", 0.6),
    ("arcade", 0.8),
    ("simulation", 0.4),
    // Neutral
    ("puzzle", 0.0),
    ("indie", 0.0),
    // Keyboard and mouse preferred
    ("strategy", -0.7),
    ("real-time strategy", -0.8),
    ("rts", -0.8),
    ("turn-based strategy", -0.6),
    ("point & click", -0.8),
    ("visual novel", -0.5),
    ("management", -0.6),
    ("city builder", -0.7),
    ("mmorpg", -0.4),
];

const TAG_WEIGHTS: &[(&str, f64)] = &[
    ("controller", 0.9),
    ("gamepad", 0.9),
    ("xbox controller", 0.9),
    ("playstation controller", 0.9),
    ("full controller support", 1.0),
    ("partial controller support", 0.6),
    ("co-op", 0.4),
    ("local co-op", 0.5),
    ("split screen", 0.6),
    ("multiplayer", 0.3),
    ("keyboard only", -1.0),
    ("mouse only", -1.0),
    ("point and click", -0.8),
    ("text heavy", -0.4),
    ("menu heavy", -0.3),
    ("complex ui", -0.4),
];

const FEATURE_WEIGHTS: &[(&str, f64)] = &[
    ("full controller support", 1.0),
    ("partial controller support", 0.6),
    ("steam controller support", 0.8),
    ("xbox controller support", 0.9),
    ("playstation controller support", 0.9),
    ("remote play", 0.5),
    ("local co-op", 0.6),
    ("shared/split screen", 0.7),
];

const GENRE_SHARE: f64 = 0.4;
const TAG_SHARE: f64 = 0.3;
const FEATURE_SHARE: f64 = 0.3;

pub fn detect_genre_and_tags(entry: &CatalogEntry) -> DetectionOpinion {
    let score = combined_score(entry);

    let (level, confidence) = if score > 0.5 {
        (SupportLevel::Full, score.min(0.8))
    } else if score > 0.1 {
        (SupportLevel::Partial, score.abs().max(0.4))
    } else if score > -0.2 {
        // Nothing conclusive: weak default
        (SupportLevel::Partial, 0.3)
    } else {
        (SupportLevel::None, score.abs().min(0.6))
    };

    DetectionOpinion::new(level, confidence, GENRE_METHOD)
}

/// `0.4 * genres + 0.3 * tags + 0.3 * features`.
pub fn combined_score(entry: &CatalogEntry) -> f64 {
    GENRE_SHARE * weigh(&entry.genres, GENRE_WEIGHTS)
        + TAG_SHARE * weigh(&entry.tags, TAG_WEIGHTS)
        + FEATURE_SHARE * weigh(&entry.features, FEATURE_WEIGHTS)
}

/// Sum of table weights for every term in `terms`.
fn weigh(terms: &[String], table: &[(&str, f64)]) -> f64 {
    terms
        .iter()
        .map(|term| {
            let term = term.trim().to_lowercase();
            table
                .iter()
                .find(|(key, _)| *key == term)
                .map_or(0.0, |(_, weight)| *weight)
        })
        .sum()
}

#[cfg(test)]
#[path = "tests/genre_tests.rs"]
mod tests;
