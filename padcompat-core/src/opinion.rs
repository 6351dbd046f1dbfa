use crate::support::SupportLevel;

/// One extractor's confidence-weighted guess at a support level.
///
/// Opinions are transient: they feed the combiner and are never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionOpinion {
    pub level: SupportLevel,
    confidence: f64,
    pub method: &'static str,
}

impl DetectionOpinion {
    /// Build an opinion, clamping `confidence` into `[0.0, 1.0]`.
    ///
    /// NaN is treated as no confidence at all.
    pub fn new(level: SupportLevel, confidence: f64, method: &'static str) -> Self {
        let confidence = if confidence.is_nan() {
            0.0
        } else {
            confidence.clamp(0.0, 1.0)
        };
        Self {
            level,
            confidence,
            method,
        }
    }

    /// An opinion that carries no signal.
    pub fn no_signal(method: &'static str) -> Self {
        Self::new(SupportLevel::Unknown, 0.0, method)
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Whether this opinion takes part in combining (confidence above zero).
    pub fn has_signal(&self) -> bool {
        self.confidence > 0.0
    }
}

impl std::fmt::Display for DetectionOpinion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} ({:.2})", self.method, self.level, self.confidence)
    }
}

#[cfg(test)]
#[path = "tests/opinion_tests.rs"]
mod tests;
