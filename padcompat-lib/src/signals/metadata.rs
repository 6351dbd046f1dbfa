//! Controller mentions in the free-text description.

use padcompat_core::{CatalogEntry, DetectionOpinion, SupportLevel};

use super::METADATA_METHOD;

const POSITIVE_PHRASES: &[&str] = &[
    "controller support",
    "gamepad",
    "xbox controller",
    "playstation controller",
    "full controller",
    "controller compatible",
];

const NEGATIVE_PHRASES: &[&str] = &["keyboard only", "mouse required", "no controller"];

/// Positive and negative phrase counts found in a description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MentionCount {
    pub positive: usize,
    pub negative: usize,
}

pub fn detect_metadata(entry: &CatalogEntry) -> DetectionOpinion {
    let description = entry.description.as_deref().unwrap_or_default().to_lowercase();
    let mentions = count_mentions(&description);

    if mentions.positive > mentions.negative {
        let level = if mentions.positive > 2 {
            SupportLevel::Full
        } else {
            SupportLevel::Partial
        };
        let confidence = (mentions.positive as f64 * 0.2).min(0.8);
        DetectionOpinion::new(level, confidence, METADATA_METHOD)
    } else if mentions.negative > 0 {
        let confidence = (mentions.negative as f64 * 0.3).min(0.6);
        DetectionOpinion::new(SupportLevel::None, confidence, METADATA_METHOD)
    } else {
        DetectionOpinion::no_signal(METADATA_METHOD)
    }
}

/// Count non-overlapping phrase occurrences in already-lowercased text.
pub fn count_mentions(text: &str) -> MentionCount {
    let count = |phrases: &[&str]| -> usize {
        phrases.iter().map(|phrase| text.matches(*phrase).count()).sum()
    };
    MentionCount {
        positive: count(POSITIVE_PHRASES),
        negative: count(NEGATIVE_PHRASES),
    }
}

#[cfg(test)]
#[path = "tests/metadata_tests.rs"]
mod tests;
