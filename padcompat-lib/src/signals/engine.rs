//! Engine detection from installation artifacts and the game's name.

use std::path::Path;

use padcompat_core::{CatalogEntry, DetectionOpinion, SupportLevel};
use walkdir::WalkDir;

use super::ENGINE_METHOD;

/// Filename fragments that identify an engine or runtime, in priority order.
///
/// The first row with any fragment contained in any installed filename wins.
const ENGINE_INDICATORS: &[(&[&str], SupportLevel)] = &[
    // Unreal Engine 4+
    (&["ue4game.exe", "engine.ini", "unrealengine"], SupportLevel::Full),
    // Unity
    (&["unityplayer.dll", "unityengine", "mono.dll"], SupportLevel::Full),
    // Source
    (&["sourceengine", "hl2.exe", "engine.dll"], SupportLevel::Partial),
    // DirectX / XInput runtimes
    (&["d3d11.dll", "xinput1_3.dll", "dinput8.dll"], SupportLevel::Partial),
    // SDL
    (&["sdl2.dll", "sdl.dll"], SupportLevel::Full),
    // GameMaker
    (&["game.exe", "data.win"], SupportLevel::Partial),
    (&["godot", "godot.exe"], SupportLevel::Full),
    // Ren'Py
    (&["renpy", "renpy.exe"], SupportLevel::Partial),
    // NW.js
    (&["nw.exe", "nwjs"], SupportLevel::Partial),
];

/// Engine names looked for inside the game's display name.
const KNOWN_ENGINES: &[(&str, SupportLevel)] = &[
    ("unreal", SupportLevel::Full),
    ("unity", SupportLevel::Full),
    ("source", SupportLevel::Partial),
    ("gamemaker", SupportLevel::Full),
    ("construct", SupportLevel::Partial),
    ("godot", SupportLevel::Full),
];

const INDICATOR_CONFIDENCE: f64 = 0.8;
const EXECUTABLE_FALLBACK_CONFIDENCE: f64 = 0.4;
const NAME_CONFIDENCE: f64 = 0.3;

/// Directory findings below this confidence let the name check take over.
const NAME_FALLBACK_BELOW: f64 = 0.5;

/// Guess the engine from the install directory, falling back to the name.
pub fn detect_engine(entry: &CatalogEntry) -> DetectionOpinion {
    let mut found = entry.install_dir.as_deref().and_then(scan_install_dir);

    if found.is_none_or(|(_, confidence)| confidence < NAME_FALLBACK_BELOW) {
        if let Some(level) = engine_from_name(&entry.name) {
            found = Some((level, NAME_CONFIDENCE));
        }
    }

    let opinion = match found {
        Some((level, confidence)) => DetectionOpinion::new(level, confidence, ENGINE_METHOD),
        None => DetectionOpinion::no_signal(ENGINE_METHOD),
    };
    log::debug!(
        "'{}' engine: {} (dir: {})",
        entry.name,
        opinion,
        entry
            .install_dir
            .as_deref()
            .map(|d| d.display().to_string())
            .unwrap_or_default(),
    );
    opinion
}

/// Scan every file under `dir` and match filenames against the indicator table.
///
/// Returns `None` when the directory does not exist or nothing matched.
/// Unreadable subdirectories are skipped.
pub fn scan_install_dir(dir: &Path) -> Option<(SupportLevel, f64)> {
    if !dir.is_dir() {
        return None;
    }
    let file_names = list_file_names(dir);
    classify_file_names(&file_names)
}

/// Match lowercase filenames against the indicator table.
pub fn classify_file_names(file_names: &[String]) -> Option<(SupportLevel, f64)> {
    for (fragments, level) in ENGINE_INDICATORS {
        let hit = fragments
            .iter()
            .any(|fragment| file_names.iter().any(|name| name.contains(*fragment)));
        if hit {
            return Some((*level, INDICATOR_CONFIDENCE));
        }
    }

    if file_names.iter().any(|name| name.ends_with(".exe")) {
        return Some((SupportLevel::Partial, EXECUTABLE_FALLBACK_CONFIDENCE));
    }

    None
}

/// First known engine whose name appears in `name` (case-insensitive).
pub fn engine_from_name(name: &str) -> Option<SupportLevel> {
    let lower = name.to_lowercase();
    KNOWN_ENGINES
        .iter()
        .find(|(engine, _)| lower.contains(*engine))
        .map(|(_, level)| *level)
}

fn list_file_names(dir: &Path) -> Vec<String> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(e) => {
                log::debug!("Skipping unreadable path under {}: {}", dir.display(), e);
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .map(|e| e.file_name().to_string_lossy().to_lowercase())
        .collect()
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
