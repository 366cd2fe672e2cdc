//! Integration tests for site traversal
//!
//! These tests verify:
//! - Denylisted directories are pruned at any depth
//! - Only allowlisted suffixes are returned
//! - Unreadable entries are skipped without aborting the walk

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tailwind_harvester::services::{CandidateKind, DiagnosticKind, PathFilter, walk};
use tempfile::TempDir;

fn create_site() -> (TempDir, Utf8PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let root = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    (temp_dir, root)
}

fn touch(root: &Utf8Path, relative: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "").unwrap();
}

fn relative_paths(root: &Utf8Path, filter: &PathFilter) -> Vec<String> {
    walk(root, filter)
        .unwrap()
        .candidates
        .into_iter()
        .map(|c| c.path.strip_prefix(root).unwrap().as_str().replace('\\', "/"))
        .collect()
}

#[test]
fn test_denylisted_directories_pruned_at_any_depth() {
    let (_temp_dir, root) = create_site();
    touch(&root, "index.php");
    touch(&root, "node_modules/lib/index.js");
    touch(&root, "wp-admin/admin.php");
    touch(&root, "wp-includes/version.php");
    touch(&root, ".git/hooks/pre-commit.js");
    touch(&root, "wp-content/themes/site/node_modules/pkg/a.js");
    touch(&root, "wp-content/themes/site/.git/b.html");
    touch(&root, "wp-content/themes/site/header.php");

    let paths = relative_paths(&root, &PathFilter::default());
    assert_eq!(paths, vec!["index.php", "wp-content/themes/site/header.php"]);

    let denylist = ["node_modules", "wp-admin", "wp-includes", ".git"];
    for path in &paths {
        for component in path.split('/') {
            assert!(!denylist.contains(&component), "{} leaked", path);
        }
    }
}

#[test]
fn test_pruned_directories_are_counted() {
    let (_temp_dir, root) = create_site();
    touch(&root, "node_modules/a.js");
    touch(&root, "sub/.git/b.js");

    let outcome = walk(&root, &PathFilter::default()).unwrap();
    assert!(outcome.candidates.is_empty());
    assert_eq!(outcome.pruned_dirs, 2);
}

#[test]
fn test_only_allowlisted_suffixes() {
    let (_temp_dir, root) = create_site();
    for name in [
        "a.php",
        "b.html",
        "c.js",
        "d.css",
        "e.json",
        "f.tailwind.json",
        "g.htm",
        "h.jsx",
        "README",
    ] {
        touch(&root, name);
    }

    let outcome = walk(&root, &PathFilter::default()).unwrap();
    let names: Vec<&str> = outcome
        .candidates
        .iter()
        .map(|c| c.path.file_name().unwrap())
        .collect();
    assert_eq!(names, vec!["a.php", "b.html", "c.js", "f.tailwind.json"]);

    let standalone: Vec<_> = outcome
        .candidates
        .iter()
        .filter(|c| c.kind == CandidateKind::StandaloneConfig)
        .collect();
    assert_eq!(standalone.len(), 1);
}

#[test]
fn test_walk_order_is_stable() {
    let (_temp_dir, root) = create_site();
    for name in ["z.php", "a.php", "m/b.js", "c.html"] {
        touch(&root, name);
    }

    let filter = PathFilter::default();
    let first = relative_paths(&root, &filter);
    let second = relative_paths(&root, &filter);
    assert_eq!(first, second);
    assert_eq!(first, vec!["a.php", "c.html", "m/b.js", "z.php"]);
}

#[cfg(unix)]
#[test]
fn test_broken_symlink_does_not_abort_walk() {
    let (_temp_dir, root) = create_site();
    for i in 0..9 {
        touch(&root, &format!("dir{}/page{}.php", i % 3, i));
    }
    std::os::unix::fs::symlink(root.join("does-not-exist.php"), root.join("dir1/broken.php"))
        .unwrap();

    let outcome = walk(&root, &PathFilter::default()).unwrap();
    assert_eq!(outcome.candidates.len(), 9);
    assert_eq!(outcome.skipped.len(), 1);
    assert_eq!(outcome.skipped[0].kind, DiagnosticKind::UnreadableEntry);
    assert!(outcome.skipped[0].path.as_str().ends_with("broken.php"));
}

#[cfg(unix)]
#[test]
fn test_symlinked_file_is_followed() {
    let (_temp_dir, root) = create_site();
    touch(&root, "real/page.html");
    std::os::unix::fs::symlink(root.join("real/page.html"), root.join("alias.html")).unwrap();

    let paths = relative_paths(&root, &PathFilter::default());
    assert_eq!(paths, vec!["alias.html", "real/page.html"]);
}
