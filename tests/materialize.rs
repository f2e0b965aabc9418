use mkpath::{
    materialize_directory, materialize_directory_with, materialize_file_parent,
    MaterializeOptions, SymlinkPolicy,
};
use std::fs;
use std::path::Path;
use std::sync::{Arc, Barrier};
use std::thread;
use tempfile::TempDir;

#[test]
fn test_existing_ancestors_succeed() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("a/b")).unwrap();
    assert!(materialize_directory(dir.path().join("a/b")));
    assert!(materialize_directory(dir.path().join("a")));
}

#[test]
fn test_missing_segments_all_created() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("one/two/three/four");
    assert!(materialize_directory(&target));
    let mut p: &Path = &target;
    while p != dir.path() {
        assert!(p.is_dir(), "{} missing", p.display());
        p = p.parent().unwrap();
    }
}

#[test]
fn test_plain_file_component_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("blocker"), b"x").unwrap();
    assert!(!materialize_directory(dir.path().join("blocker/more/dirs")));
    assert!(!dir.path().join("blocker/more").exists());
}

#[test]
fn test_file_parent_nested() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("a/b/c.txt");
    assert!(materialize_file_parent(&file));
    assert!(dir.path().join("a").is_dir());
    assert!(dir.path().join("a/b").is_dir());
    assert!(!file.exists());
}

#[test]
fn test_file_parent_without_directory_component() {
    assert!(materialize_file_parent("c.txt"));
    assert!(!Path::new("c.txt").exists());
}

#[test]
fn test_many_threads_same_target() {
    let dir = TempDir::new().unwrap();
    let target = Arc::new(dir.path().join("r/a/c/e"));
    let threads = 16;
    let barrier = Arc::new(Barrier::new(threads));
    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let target = Arc::clone(&target);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                materialize_directory(target.as_path())
            })
        })
        .collect();
    for h in handles {
        assert!(h.join().unwrap());
    }
    assert!(target.is_dir());
}

#[cfg(unix)]
#[test]
fn test_reject_policy_through_boolean_api() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("real")).unwrap();
    std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("alias")).unwrap();
    let reject = MaterializeOptions::default().with_symlinks(SymlinkPolicy::Reject);
    assert!(!materialize_directory_with(dir.path().join("alias/x"), &reject));
    assert!(materialize_directory(dir.path().join("alias/x")));
}
