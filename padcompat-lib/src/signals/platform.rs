use padcompat_core::{CatalogEntry, DetectionOpinion, SupportLevel};

use super::PLATFORM_METHOD;

const CONSOLE_FAMILIES: &[&str] = &[
    "xbox",
    "playstation",
    "nintendo",
    "switch",
    "ps3",
    "ps4",
    "ps5",
];

const PC_FAMILIES: &[&str] = &["pc", "windows", "linux", "mac"];

const BASE_CONFIDENCE: f64 = 0.5;

/// Console releases imply a controller; PC releases imply a partial one.
pub fn detect_platform(entry: &CatalogEntry) -> DetectionOpinion {
    let platforms: Vec<String> = entry.platforms.iter().map(|p| p.to_lowercase()).collect();
    let any_family = |families: &[&str]| {
        platforms
            .iter()
            .any(|p| families.iter().any(|family| p.contains(*family)))
    };

    let (level, confidence) = if any_family(CONSOLE_FAMILIES) {
        (SupportLevel::Full, 0.8)
    } else if any_family(PC_FAMILIES) {
        (SupportLevel::Partial, 0.6)
    } else {
        (SupportLevel::Partial, BASE_CONFIDENCE)
    };
    DetectionOpinion::new(level, confidence, PLATFORM_METHOD)
}

#[cfg(test)]
#[path = "tests/platform_tests.rs"]
mod tests;
