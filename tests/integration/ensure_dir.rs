//! Integration tests for the directory ensurer

use super::test_utils::Fixture;
use std::fs;
use ultra_file_search::{ensure_dir, search, InspectError};

#[test]
fn test_ensure_dir_twice_leaves_one_directory() {
    let fixture = Fixture::new();
    let target = fixture.path("out");

    let first = ensure_dir(&target).unwrap();
    let second = ensure_dir(&target).unwrap();

    assert_eq!(first, second);
    assert!(target.is_dir());
    let matching = fs::read_dir(fixture.root())
        .unwrap()
        .filter(|e| e.as_ref().unwrap().file_name() == "out")
        .count();
    assert_eq!(matching, 1);
}

#[test]
fn test_ensure_existing_directory_keeps_contents() {
    let fixture = Fixture::new();

    let resolved = ensure_dir(fixture.path("docs")).unwrap();

    assert!(resolved.ends_with("docs"));
    let report = search(&resolved).unwrap();
    assert_eq!(report.as_directory().unwrap().total_files, 2);
}

#[test]
fn test_ensure_dir_resolves_relative_components() {
    let fixture = Fixture::new();
    let target = fixture.path("docs/../made/here");

    let resolved = ensure_dir(&target).unwrap();

    assert!(resolved.is_absolute());
    assert!(!resolved.to_string_lossy().contains(".."));
    assert!(fixture.path("made/here").is_dir());
}

#[test]
fn test_ensure_dir_over_existing_file() {
    let fixture = Fixture::new();
    let err = ensure_dir(fixture.path("sample.txt")).unwrap_err();
    assert!(matches!(err, InspectError::NotADirectory(_)));
    // the file is untouched
    assert_eq!(fs::read_to_string(fixture.path("sample.txt")).unwrap(), "hello world");
}

#[cfg(unix)]
#[test]
fn test_ensure_dir_in_read_only_parent() {
    use std::os::unix::fs::PermissionsExt;

    let fixture = Fixture::new();
    let locked = fixture.path("locked");
    fs::create_dir(&locked).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

    // privileged users bypass permission bits
    if fs::write(locked.join("probe"), "x").is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let err = ensure_dir(locked.join("child")).unwrap_err();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    assert!(matches!(err, InspectError::AccessDenied(_)));
}

#[cfg(unix)]
#[test]
fn test_ensure_dir_over_dangling_symlink() {
    use std::os::unix::fs::symlink;

    let fixture = Fixture::new();
    let link = fixture.path("stale");
    symlink(fixture.path("gone"), &link).unwrap();

    let err = ensure_dir(&link).unwrap_err();
    assert!(matches!(err, InspectError::NotADirectory(p) if p == link));
    assert!(!fixture.path("gone").exists());
}
