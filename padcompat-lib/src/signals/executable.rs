//! Launch-target filename analysis.
//!
//! Only the filename is inspected; the binary itself is never opened.

use std::path::Path;
use std::sync::LazyLock;

use padcompat_core::{CatalogEntry, DetectionOpinion, SupportLevel};
use regex::Regex;

use super::EXECUTABLE_METHOD;

/// Filename patterns in priority order.
static EXECUTABLE_PATTERNS: LazyLock<Vec<(Regex, SupportLevel)>> = LazyLock::new(|| {
    [
        (r"(?i)^.*-win64.*\.exe$", SupportLevel::Partial),
        (r"(?i)^.*unity.*\.exe$", SupportLevel::Full),
        (r"(?i)^.*unreal.*\.exe$", SupportLevel::Full),
    ]
    .into_iter()
    .map(|(pattern, level)| {
        (
            Regex::new(pattern).expect("executable pattern must compile"),
            level,
        )
    })
    .collect()
});

const MATCH_CONFIDENCE: f64 = 0.5;

/// Inspect each existing launch target and keep the most confident match.
pub fn detect_executable(entry: &CatalogEntry) -> DetectionOpinion {
    let mut best: Option<(SupportLevel, f64)> = None;

    for target in &entry.launch_targets {
        if !target.is_file() {
            continue;
        }
        let Some((level, confidence)) = analyze_executable(target) else {
            continue;
        };
        if best.is_none_or(|(_, c)| confidence > c) {
            best = Some((level, confidence));
        }
    }

    match best {
        Some((level, confidence)) => DetectionOpinion::new(level, confidence, EXECUTABLE_METHOD),
        None => DetectionOpinion::no_signal(EXECUTABLE_METHOD),
    }
}

/// Match one executable's filename against the pattern table.
pub fn analyze_executable(path: &Path) -> Option<(SupportLevel, f64)> {
    let file_name = path.file_name()?.to_string_lossy().to_lowercase();
    EXECUTABLE_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.is_match(&file_name))
        .map(|(_, level)| (*level, MATCH_CONFIDENCE))
}

#[cfg(test)]
#[path = "tests/executable_tests.rs"]
mod tests;
