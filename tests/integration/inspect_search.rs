//! Integration tests for the path inspector

use super::test_utils::Fixture;
use std::fs;
use tempfile::TempDir;
use ultra_file_search::{search, search_with, InspectError, Report, WalkerConfig};

#[test]
fn test_sample_directory_totals() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("sample.txt"), "hello world").unwrap();

    let report = search(temp_dir.path()).unwrap();
    let dir = report.as_directory().unwrap();

    assert_eq!(dir.total_files, 1);
    assert_eq!(dir.total_size, 11);
}

#[test]
fn test_fixture_tree_totals() {
    let fixture = Fixture::new();

    let report = search(fixture.root()).unwrap();
    let dir = report.as_directory().unwrap();

    assert_eq!(dir.total_files, 3);
    assert_eq!(dir.total_dirs, 3);
    assert_eq!(dir.total_size, 116);
    assert_eq!(
        dir.name,
        fixture.root().file_name().unwrap().to_string_lossy()
    );
}

#[test]
fn test_directory_total_matches_per_file_reports() {
    let fixture = Fixture::new();

    let per_file: u64 = ["sample.txt", "docs/readme.md", "docs/nested/data.bin"]
        .iter()
        .map(|rel| match search(fixture.path(rel)).unwrap() {
            Report::File(file) => file.size,
            Report::Directory(_) => panic!("{} should be a file", rel),
        })
        .sum();

    let dir = search(fixture.root()).unwrap();
    assert_eq!(dir.as_directory().unwrap().total_size, per_file);
}

#[test]
fn test_nested_directory_search() {
    let fixture = Fixture::new();

    let report = search(fixture.path("docs")).unwrap();
    let dir = report.as_directory().unwrap();

    assert_eq!(dir.name, "docs");
    assert_eq!(dir.total_files, 2);
    assert_eq!(dir.total_dirs, 1);
    assert_eq!(dir.total_size, 105);
}

#[test]
fn test_file_report_fields() {
    let fixture = Fixture::new();

    let report = search(fixture.path("docs/readme.md")).unwrap();
    let file = report.as_file().unwrap();

    assert_eq!(file.name, "readme.md");
    assert_eq!(file.size, 5);
    assert_eq!(file.extension, ".md");

    let mtime = fs::metadata(fixture.path("docs/readme.md"))
        .unwrap()
        .modified()
        .unwrap()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs_f64();
    assert!((file.modified - mtime).abs() < 1e-6);
}

#[test]
fn test_file_without_extension() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("LICENSE");
    fs::write(&file, "").unwrap();

    let report = search(&file).unwrap();
    let file = report.as_file().unwrap();
    assert_eq!(file.extension, "");
    assert_eq!(file.size, 0);
}

#[test]
fn test_trailing_parent_component_is_named() {
    let fixture = Fixture::new();

    let report = search(fixture.path("docs/..")).unwrap();
    let dir = report.as_directory().unwrap();

    assert_eq!(dir.name, "..");
    assert_eq!(dir.total_files, 3);
}

#[test]
fn test_search_nonexistent_paths() {
    let temp_dir = TempDir::new().unwrap();

    for path in [temp_dir.path().join("missing"), temp_dir.path().join("a/b/c")] {
        let err = search(&path).unwrap_err();
        assert!(matches!(err, InspectError::NotFound(ref p) if *p == path));
    }
    assert!(matches!(search(""), Err(InspectError::NotFound(_))));
}

#[test]
fn test_search_is_read_only() {
    let fixture = Fixture::new();
    let before: Vec<_> = walk_names(fixture.root());

    search(fixture.root()).unwrap();

    assert_eq!(walk_names(fixture.root()), before);
}

#[test]
fn test_search_with_depth_limit() {
    let fixture = Fixture::new();
    let config = WalkerConfig {
        max_depth: Some(1),
        ..WalkerConfig::default()
    };

    let report = search_with(fixture.root(), &config).unwrap();
    let dir = report.as_directory().unwrap();

    assert_eq!(dir.total_files, 1);
    assert_eq!(dir.total_dirs, 2);
    assert_eq!(dir.total_size, 11);
}

#[cfg(unix)]
#[test]
fn test_symlink_cycle_terminates_by_default() {
    use std::os::unix::fs::symlink;

    let fixture = Fixture::new();
    symlink(fixture.root(), fixture.path("docs/loop")).unwrap();

    let report = search(fixture.root()).unwrap();
    let dir = report.as_directory().unwrap();

    // the link is counted as a directory, never descended
    assert_eq!(dir.total_dirs, 4);
    assert_eq!(dir.total_files, 3);

    let follow = WalkerConfig {
        follow_symlinks: true,
        ..WalkerConfig::default()
    };
    let err = search_with(fixture.root(), &follow).unwrap_err();
    assert!(matches!(err, InspectError::SymlinkLoop(_)));
}

#[cfg(unix)]
#[test]
fn test_self_referential_link_when_following() {
    use std::os::unix::fs::symlink;

    let temp_dir = TempDir::new().unwrap();
    let me = temp_dir.path().join("me");
    symlink(&me, &me).unwrap();

    let report = search(temp_dir.path()).unwrap();
    let dir = report.as_directory().unwrap();
    assert_eq!((dir.total_files, dir.total_dirs), (0, 0));

    let follow = WalkerConfig {
        follow_symlinks: true,
        ..WalkerConfig::default()
    };
    let err = search_with(temp_dir.path(), &follow).unwrap_err();
    assert!(matches!(err, InspectError::SymlinkLoop(p) if p == me));
}

#[cfg(unix)]
#[test]
fn test_search_unreadable_subdirectory() {
    use std::os::unix::fs::PermissionsExt;

    let fixture = Fixture::new();
    let locked = fixture.path("docs/nested");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // privileged users bypass permission bits
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let result = search(fixture.root());
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    assert!(matches!(result, Err(InspectError::AccessDenied(p)) if p == locked));
}

fn walk_names(root: &std::path::Path) -> Vec<std::path::PathBuf> {
    let mut names: Vec<_> = walkdir::WalkDir::new(root)
        .into_iter()
        .map(|e| e.unwrap().into_path())
        .collect();
    names.sort();
    names
}
