//! Grammar file collection
//!
//! Walks a root directory depth-first, entries sorted by file name, and yields
//! every regular file whose name ends with the configured suffix. Files are
//! read lazily, one at a time, as UTF-8 text.

use std::fs;
use std::path::{Path, PathBuf};

use bnf_config::SourceConfig;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{BnfError, Result};
use crate::parsing::split_lines;

/// One grammar source read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub text: String,
}

impl SourceFile {
    /// Raw lines, split on `\r\n`, `\r` or `\n`.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        split_lines(&self.text)
    }
}

/// Lazy iterator over the grammar files below a root.
pub struct SourceFiles {
    walker: walkdir::IntoIter,
    suffix: String,
}

impl Iterator for SourceFiles {
    type Item = Result<SourceFile>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(err) => return Some(Err(walk_error(err))),
            };

            let path = entry.path();
            // `is_file` follows a symlink to a regular file
            if !path.is_file() || !has_suffix(path, &self.suffix) {
                continue;
            }

            debug!(path = %path.display(), "collected grammar file");
            return Some(read_source(path));
        }
    }
}

/// Start collecting grammar files below `root`.
///
/// Fails with [`BnfError::MissingRoot`] before touching the file system any
/// further when `root` is not an existing directory.
pub fn collect(root: &Path, config: &SourceConfig) -> Result<SourceFiles> {
    if !root.is_dir() {
        return Err(BnfError::MissingRoot {
            path: root.to_path_buf(),
        });
    }

    let walker = WalkDir::new(root)
        .follow_links(config.follow_links)
        .sort_by_file_name()
        .into_iter();

    Ok(SourceFiles {
        walker,
        suffix: config.suffix(),
    })
}

/// Read one file as UTF-8 text.
pub fn read_source(path: &Path) -> Result<SourceFile> {
    let text = fs::read_to_string(path).map_err(|source| BnfError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(SourceFile {
        path: path.to_path_buf(),
        text,
    })
}

fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(suffix))
}

fn walk_error(err: walkdir::Error) -> BnfError {
    let path = err.path().map(Path::to_path_buf).unwrap_or_default();
    BnfError::Walk { path, source: err }
}
