use padcompat_core::{CatalogEntry, DetectionOpinion, SupportLevel};

use super::PUBLISHER_METHOD;

/// Publishers with a history of controller-friendly releases, in match order.
const CONTROLLER_FRIENDLY_PUBLISHERS: &[&str] = &[
    "microsoft",
    "sony",
    "nintendo",
    "valve",
    "ubisoft",
    "activision",
    "electronic arts",
    "ea",
    "square enix",
    "capcom",
    "bandai namco",
];

/// Weak hint from the primary (first listed) publisher.
pub fn detect_publisher(entry: &CatalogEntry) -> DetectionOpinion {
    let Some(publisher) = entry.publishers.first() else {
        return DetectionOpinion::no_signal(PUBLISHER_METHOD);
    };
    let publisher = publisher.to_lowercase();
    if publisher.is_empty() {
        return DetectionOpinion::no_signal(PUBLISHER_METHOD);
    }

    if CONTROLLER_FRIENDLY_PUBLISHERS
        .iter()
        .any(|known| publisher.contains(*known))
    {
        DetectionOpinion::new(SupportLevel::Partial, 0.3, PUBLISHER_METHOD)
    } else {
        DetectionOpinion::no_signal(PUBLISHER_METHOD)
    }
}

#[cfg(test)]
#[path = "tests/publisher_tests.rs"]
mod tests;
