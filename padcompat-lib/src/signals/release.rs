use padcompat_core::{CatalogEntry, DetectionOpinion, SupportLevel};

use super::RELEASE_METHOD;

/// Confidence used when the catalog has no release date at all.
const BASE_CONFIDENCE: f64 = 0.4;

/// Newer releases are more likely to ship with controller support.
///
/// A missing date yields the base `Partial` opinion; a date that is present
/// but unparseable yields no signal.
pub fn detect_release_date(entry: &CatalogEntry) -> DetectionOpinion {
    let has_date = entry
        .release_date
        .as_deref()
        .is_some_and(|date| !date.trim().is_empty());
    let (level, confidence) = match entry.release_year() {
        Some(year) if year >= 2018 => (SupportLevel::Full, 0.7),
        Some(year) if year >= 2010 => (SupportLevel::Partial, 0.6),
        Some(year) if year >= 2000 => (SupportLevel::Partial, 0.4),
        Some(_) => (SupportLevel::None, 0.5),
        None if has_date => return DetectionOpinion::no_signal(RELEASE_METHOD),
        None => (SupportLevel::Partial, BASE_CONFIDENCE),
    };
    DetectionOpinion::new(level, confidence, RELEASE_METHOD)
}

#[cfg(test)]
#[path = "tests/release_tests.rs"]
mod tests;
