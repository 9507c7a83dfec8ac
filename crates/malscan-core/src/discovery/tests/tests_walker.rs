//! Tests for file enumeration

#![allow(clippy::expect_used, clippy::unwrap_used)]

use crate::discovery::{DiscoveryError, FileEnumerator};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn file_names(files: &[PathBuf]) -> Vec<String> {
    files
        .iter()
        .filter_map(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect()
}

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    fs::write(path, content).expect("Failed to write file");
}

#[test]
fn test_single_file_root_yields_that_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file = temp_dir.path().join("malware.exe");
    write(&file, "MZ");

    let files = FileEnumerator::new(&file)
        .enumerate()
        .expect("Failed to enumerate");

    assert_eq!(files.len(), 1);
    assert_eq!(files[0], file.canonicalize().expect("Failed to canonicalize"));
}

#[test]
fn test_directory_lists_all_files_recursively() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write(&temp_dir.path().join("a.txt"), "a");
    write(&temp_dir.path().join("src/b.rs"), "b");
    write(&temp_dir.path().join("src/deep/nested/c.md"), "c");

    let files = FileEnumerator::new(temp_dir.path())
        .enumerate()
        .expect("Failed to enumerate");

    let mut names = file_names(&files);
    names.sort();
    assert_eq!(names, vec!["a.txt", "b.rs", "c.md"]);
}

#[test]
fn test_excludes_git_and_node_modules_at_any_depth() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();
    write(&root.join("keep.txt"), "keep");
    write(&root.join(".git/config"), "[core]");
    write(&root.join(".git/objects/ab/cdef"), "blob");
    write(&root.join("node_modules/left-pad/index.js"), "module.exports");
    write(&root.join("pkg/node_modules/dep/index.js"), "dep");
    write(&root.join("pkg/sub/.git/HEAD"), "ref: refs/heads/main");
    write(&root.join("pkg/sibling.js"), "sibling");
    write(&root.join("pkg/sub/kept.txt"), "kept");

    let files = FileEnumerator::new(root)
        .enumerate()
        .expect("Failed to enumerate");

    let mut names = file_names(&files);
    names.sort();
    assert_eq!(names, vec!["keep.txt", "kept.txt", "sibling.js"]);
    assert!(files.iter().all(|p| !p
        .components()
        .any(|c| c.as_os_str() == ".git" || c.as_os_str() == "node_modules")));
}

#[test]
fn test_files_named_like_excluded_dirs_are_kept() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write(&temp_dir.path().join(".git"), "gitdir: ../.git/modules/sub");

    let files = FileEnumerator::new(temp_dir.path())
        .enumerate()
        .expect("Failed to enumerate");

    assert_eq!(file_names(&files), vec![".git"]);
}

#[test]
fn test_excluded_name_as_root_is_still_walked() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path().join("node_modules");
    write(&root.join("pkg/index.js"), "x");

    let files = FileEnumerator::new(&root)
        .enumerate()
        .expect("Failed to enumerate");

    assert_eq!(file_names(&files), vec!["index.js"]);
}

#[test]
fn test_empty_directory_yields_nothing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::create_dir(temp_dir.path().join("empty")).expect("Failed to create dir");

    let files = FileEnumerator::new(temp_dir.path())
        .enumerate()
        .expect("Failed to enumerate");

    assert!(files.is_empty());
}

#[test]
fn test_paths_are_absolute() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write(&temp_dir.path().join("dir/file.txt"), "x");

    let files = FileEnumerator::new(temp_dir.path())
        .enumerate()
        .expect("Failed to enumerate");

    assert_eq!(files.len(), 1);
    assert!(files[0].is_absolute());
}

#[test]
fn test_order_is_deterministic() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    for name in ["zeta.txt", "alpha.txt", "mid/beta.txt", "mid/aardvark.txt"] {
        write(&temp_dir.path().join(name), name);
    }

    let enumerator = FileEnumerator::new(temp_dir.path());
    let first = enumerator.enumerate().expect("Failed to enumerate");
    let second = enumerator.enumerate().expect("Failed to enumerate");

    assert_eq!(first, second);
    assert_eq!(
        file_names(&first),
        vec!["alpha.txt", "aardvark.txt", "beta.txt", "zeta.txt"]
    );
}

#[test]
fn test_missing_root_is_not_found() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let missing = temp_dir.path().join("does-not-exist");

    let err = FileEnumerator::new(&missing).enumerate().unwrap_err();

    assert!(matches!(err, DiscoveryError::NotFound { ref path } if *path == missing));
}

#[cfg(unix)]
#[test]
fn test_symlinks_are_skipped() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();
    write(&root.join("real.txt"), "real");
    write(&root.join("outside/secret.txt"), "secret");
    std::os::unix::fs::symlink(root.join("real.txt"), root.join("link.txt"))
        .expect("Failed to create symlink");

    let scan_root = root.join("scan");
    fs::create_dir(&scan_root).expect("Failed to create dir");
    std::os::unix::fs::symlink(root.join("outside"), scan_root.join("linked-dir"))
        .expect("Failed to create symlink");
    write(&scan_root.join("own.txt"), "own");

    let files = FileEnumerator::new(root)
        .enumerate()
        .expect("Failed to enumerate");
    let names = file_names(&files);
    assert!(!names.contains(&"link.txt".to_string()));

    let scan_files = FileEnumerator::new(&scan_root)
        .enumerate()
        .expect("Failed to enumerate");
    assert_eq!(file_names(&scan_files), vec!["own.txt"]);
}

#[cfg(unix)]
#[test]
fn test_unreadable_directory_fails_enumeration() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let locked = temp_dir.path().join("locked");
    write(&locked.join("hidden.txt"), "x");
    write(&temp_dir.path().join("visible.txt"), "y");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))
        .expect("Failed to set permissions");

    // Privileged users can read the directory anyway
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))
            .expect("Failed to restore permissions");
        return;
    }

    let result = FileEnumerator::new(temp_dir.path()).enumerate();

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))
        .expect("Failed to restore permissions");

    assert!(matches!(result, Err(DiscoveryError::Filesystem { .. })));
}
