//! Runs every extractor against an entry and combines the results.

use padcompat_core::{CatalogEntry, DetectionOpinion, SupportLevel};

use crate::combiner::combine;
use crate::signals::ALL_EXTRACTORS;

/// Anything that can turn a catalog entry into a support level.
///
/// The store holds one of these for auto-updates; tests substitute fixed
/// answers.
pub trait SupportClassifier: Send + Sync {
    fn classify(&self, entry: &CatalogEntry) -> SupportLevel;
}

/// Every extractor's opinion plus the combined verdict.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// One opinion per extractor, in extractor order
    pub opinions: Vec<DetectionOpinion>,
    pub verdict: SupportLevel,
}

/// The heuristic classifier built from the seven signal extractors.
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier;

impl Classifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, entry: &CatalogEntry) -> SupportLevel {
        self.explain(entry).verdict
    }

    /// Run all extractors and keep their opinions alongside the verdict.
    pub fn explain(&self, entry: &CatalogEntry) -> Classification {
        let opinions: Vec<DetectionOpinion> = ALL_EXTRACTORS
            .iter()
            .map(|extract| {
                let opinion = extract(entry);
                log::debug!("'{}' {}", entry.name, opinion);
                opinion
            })
            .collect();
        let verdict = combine(&opinions);
        Classification { opinions, verdict }
    }
}

impl SupportClassifier for Classifier {
    fn classify(&self, entry: &CatalogEntry) -> SupportLevel {
        Classifier::classify(self, entry)
    }
}

/// A classifier that always answers the same level.
#[derive(Debug, Clone, Copy)]
pub struct FixedClassifier(pub SupportLevel);

impl SupportClassifier for FixedClassifier {
    fn classify(&self, _entry: &CatalogEntry) -> SupportLevel {
        self.0
    }
}

#[cfg(test)]
#[path = "tests/classifier_tests.rs"]
mod tests;
