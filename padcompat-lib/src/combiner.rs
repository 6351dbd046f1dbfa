//! Aggregation of extractor opinions into a single verdict.

use padcompat_core::{DetectionOpinion, SupportLevel};

/// Verdict when no extractor produced a signal, or when the winner is weak.
pub const DEFAULT_LEVEL: SupportLevel = SupportLevel::Partial;

/// Minimum winning score for a verdict backed by file evidence.
const FILE_EVIDENCE_THRESHOLD: f64 = 0.3;

/// Below this winning score the verdict falls back to [`DEFAULT_LEVEL`].
const LOW_CONFIDENCE_THRESHOLD: f64 = 0.4;

/// Sum confidences per level, in first-seen order.
///
/// Opinions without a signal (confidence 0) are dropped.
pub fn weighted_scores(opinions: &[DetectionOpinion]) -> Vec<(SupportLevel, f64)> {
    let mut scores: Vec<(SupportLevel, f64)> = Vec::new();
    for opinion in opinions.iter().filter(|o| o.has_signal()) {
        match scores.iter_mut().find(|(level, _)| *level == opinion.level) {
            Some((_, total)) => *total += opinion.confidence(),
            None => scores.push((opinion.level, opinion.confidence())),
        }
    }
    scores
}

/// Whether an opinion came from looking at installed files.
pub fn is_file_evidence(opinion: &DetectionOpinion) -> bool {
    opinion.has_signal()
        && (opinion.method.contains("Engine") || opinion.method.contains("Executable"))
}

/// Combine opinions into one support level.
///
/// The highest summed confidence wins; a tie keeps the level seen first.
/// File-based evidence is trusted from a score of 0.3, otherwise anything
/// under 0.4 becomes [`DEFAULT_LEVEL`].
pub fn combine(opinions: &[DetectionOpinion]) -> SupportLevel {
    let scores = weighted_scores(opinions);

    let mut best: Option<(SupportLevel, f64)> = None;
    for &(level, score) in &scores {
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((level, score));
        }
    }
    let Some((winner, score)) = best else {
        log::debug!("No signals, defaulting to {}", DEFAULT_LEVEL);
        return DEFAULT_LEVEL;
    };

    let verdict = if opinions.iter().any(is_file_evidence) && score >= FILE_EVIDENCE_THRESHOLD {
        winner
    } else if score < LOW_CONFIDENCE_THRESHOLD {
        DEFAULT_LEVEL
    } else {
        winner
    };
    log::debug!("Verdict {} (winner {} at {:.2})", verdict, winner, score);
    verdict
}

#[cfg(test)]
#[path = "tests/combiner_tests.rs"]
mod tests;
