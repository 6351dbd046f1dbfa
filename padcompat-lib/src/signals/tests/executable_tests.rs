use super::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn patterns_match_by_filename() {
    assert_eq!(
        analyze_executable(Path::new("/games/x/Game-Win64-Shipping.exe")),
        Some((SupportLevel::Partial, 0.5))
    );
    assert_eq!(
        analyze_executable(Path::new("MyUnityGame.EXE")),
        Some((SupportLevel::Full, 0.5))
    );
    assert_eq!(analyze_executable(Path::new("launcher.exe")), None);
    assert_eq!(analyze_executable(Path::new("unity.sh")), None);
}

#[test]
fn first_pattern_wins_for_ambiguous_names() {
    // Matches both the -win64 row and the unreal row; -win64 is listed first.
    assert_eq!(
        analyze_executable(Path::new("UnrealGame-Win64-Shipping.exe")),
        Some((SupportLevel::Partial, 0.5))
    );
}

#[test]
fn only_existing_targets_count() {
    let tmp = TempDir::new().unwrap();
    let real = tmp.path().join("unity_game.exe");
    fs::write(&real, b"MZ").unwrap();

    let entry = CatalogEntry::new("1", "Game")
        .with_launch_target(tmp.path().join("unreal_missing.exe"))
        .with_launch_target(&real);
    let opinion = detect_executable(&entry);
    assert_eq!(opinion.level, SupportLevel::Full);
    assert_eq!(opinion.confidence(), 0.5);
    assert_eq!(opinion.method, EXECUTABLE_METHOD);
}

#[test]
fn first_matching_target_is_kept_on_equal_confidence() {
    let tmp = TempDir::new().unwrap();
    let first = tmp.path().join("game-win64.exe");
    let second = tmp.path().join("unity.exe");
    fs::write(&first, b"").unwrap();
    fs::write(&second, b"").unwrap();

    let entry = CatalogEntry::new("1", "Game")
        .with_launch_target(&first)
        .with_launch_target(&second);
    assert_eq!(detect_executable(&entry).level, SupportLevel::Partial);
}

#[test]
fn no_targets_is_no_signal() {
    let opinion = detect_executable(&CatalogEntry::new("1", "Game"));
    assert_eq!(opinion.level, SupportLevel::Unknown);
    assert!(!opinion.has_signal());
}
