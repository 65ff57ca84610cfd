//! Fixture helpers shared by the integration tests

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Create a temporary directory holding `files` (relative path, contents).
pub fn grammar_tree(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().expect("temp dir");
    for (relative, contents) in files {
        write_file(dir.path(), relative, contents);
    }
    dir
}

pub fn write_file(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent directories");
    }
    fs::write(&path, contents).expect("write fixture file");
}
