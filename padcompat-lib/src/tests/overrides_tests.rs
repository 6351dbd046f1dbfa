use super::*;
use tempfile::TempDir;

#[test]
fn missing_file_is_empty() {
    let tmp = TempDir::new().unwrap();
    let overrides = OverrideFile::load(tmp.path().join("overrides.txt"));
    assert!(overrides.is_empty());
}

#[test]
fn parses_lines_and_skips_malformed() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("overrides.txt");
    fs::write(
        &path,
        "game-1:Full\n\nnot a pair\na:b:c\n:Partial\ngame-2: none \n",
    )
    .unwrap();

    let overrides = OverrideFile::load(&path);
    assert_eq!(overrides.len(), 3);
    assert_eq!(overrides.get("game-1"), Some("Full"));
    assert_eq!(overrides.get("game-2"), Some("none"));
    assert_eq!(overrides.get("a:b"), Some("c"));
    assert_eq!(overrides.get("a"), None);
}

#[test]
fn set_persists_and_reloads() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("sub").join("overrides.txt");

    let mut overrides = OverrideFile::load(&path);
    overrides.set("g1", "Partial").unwrap();
    overrides.set("g2", "Full").unwrap();
    overrides.set("g1", "None").unwrap();

    let reloaded = OverrideFile::load(&path);
    let pairs: Vec<(&str, &str)> = reloaded.iter().collect();
    assert_eq!(pairs, vec![("g1", "None"), ("g2", "Full")]);
}

#[test]
fn remove_rewrites_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("overrides.txt");
    let mut overrides = OverrideFile::load(&path);
    overrides.set("g1", "Full").unwrap();

    assert!(overrides.remove("g1").unwrap());
    assert!(!overrides.remove("g1").unwrap());
    assert!(OverrideFile::load(&path).is_empty());
}

#[test]
fn colon_ids_survive_reload() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("overrides.txt");
    let mut overrides = OverrideFile::load(&path);
    overrides.set("steam:123", "full").unwrap();
    overrides.set("gog:1207658924", "Partial").unwrap();

    let reloaded = OverrideFile::load(&path);
    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded.get("steam:123"), Some("full"));
    assert_eq!(reloaded.get("gog:1207658924"), Some("Partial"));
}

#[test]
fn set_rejects_pairs_that_break_the_line_format() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("overrides.txt");
    let mut overrides = OverrideFile::load(&path);

    for (id, label) in [("a\nb", "Full"), ("a", "Full\r"), ("  ", "Full"), ("a", "x:y")] {
        let err = overrides.set(id, label).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput, "{:?}", (id, label));
    }
    assert!(overrides.is_empty());
    assert!(!path.exists());
}
