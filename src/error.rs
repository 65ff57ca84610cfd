//! Error types for grammar loading, validation and output.
//!
//! Every failure is fatal: errors propagate unchanged to the caller, which
//! reports a single message and writes no output.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use bnf_config::ConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BnfError>;

/// Where a line came from: the grammar file (when loading from disk) and its
/// 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub path: Option<PathBuf>,
    pub line: usize,
}

impl SourceLocation {
    pub fn new(path: Option<&Path>, line: usize) -> Self {
        Self {
            path: path.map(Path::to_path_buf),
            line,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{}:{}", path.display(), self.line),
            None => write!(f, "line {}", self.line),
        }
    }
}

#[derive(Debug, Error)]
pub enum BnfError {
    #[error("Folder not found: {}", .path.display())]
    MissingRoot { path: PathBuf },

    #[error("Error reading file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error walking {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Duplicate rule definition found: <{name}>{}", located(.location))]
    DuplicateRule {
        name: String,
        location: Option<SourceLocation>,
    },

    #[error("Invalid BNF line (orphaned content): {line}{}", located(.location))]
    OrphanedContent {
        line: String,
        location: Option<SourceLocation>,
    },

    #[error("Invalid syntax in rule <{rule}> at position {position}: ...{remainder}")]
    InvalidSyntax {
        rule: String,
        position: usize,
        remainder: String,
    },

    #[error("Failed to serialize grammar: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl BnfError {
    /// Attach a source location to a line-level error that does not have one yet.
    /// Other variants are returned untouched.
    pub fn at(self, location: SourceLocation) -> Self {
        match self {
            BnfError::DuplicateRule {
                name,
                location: None,
            } => BnfError::DuplicateRule {
                name,
                location: Some(location),
            },
            BnfError::OrphanedContent {
                line,
                location: None,
            } => BnfError::OrphanedContent {
                line,
                location: Some(location),
            },
            other => other,
        }
    }
}

fn located(location: &Option<SourceLocation>) -> String {
    match location {
        Some(location) => format!(" (at {})", location),
        None => String::new(),
    }
}
