//! Grammar loading API
//!
//! This module provides the primary entry point for turning grammar sources
//! into a validated [`Grammar`].
//!
//! # Architecture
//!
//! - String-based methods are the core functionality (parse source text)
//! - Directory-based methods are thin wrappers (collect files, then feed their lines)
//! - Validation runs once, after every source has been merged
//!
//! # Examples
//!
//! ```rust,ignore
//! use bnf_merge::loading::GrammarLoader;
//!
//! let loader = GrammarLoader::new();
//!
//! // Parse a string
//! let grammar = loader.parse_str("<a> ::= 'x'\n")?;
//!
//! // Merge a directory tree
//! let grammar = loader.load_dir("grammars/")?;
//! ```

pub mod collector;

use std::path::Path;

use bnf_config::{BnfConfig, ParsingConfig, SourceConfig};
use tracing::{debug, info};

use crate::error::{Result, SourceLocation};
use crate::grammar::Grammar;
use crate::lexing::validate_grammar;
use crate::parsing::{split_lines, LineParser};

pub use collector::{collect, read_source, SourceFile, SourceFiles};

/// Merges grammar sources into one validated grammar.
#[derive(Debug, Clone, Default)]
pub struct GrammarLoader {
    source: SourceConfig,
    parsing: ParsingConfig,
}

impl GrammarLoader {
    /// Create a loader with the built-in defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader from the `source` and `parsing` sections of a configuration
    pub fn with_config(config: &BnfConfig) -> Self {
        Self {
            source: config.source.clone(),
            parsing: config.parsing.clone(),
        }
    }

    // ===== STRING-BASED PROCESSING (core methods) =====

    /// Parse and validate a single source text.
    pub fn parse_str(&self, source: &str) -> Result<Grammar> {
        let mut grammar = Grammar::new();
        let mut parser = LineParser::new(&mut grammar);
        feed_lines(&mut parser, split_lines(source), None)?;
        validate_grammar(&grammar)?;
        Ok(grammar)
    }

    // ===== DIRECTORY-BASED PROCESSING (wrappers) =====

    /// Merge every grammar file below `root`, then validate the result.
    ///
    /// Any error aborts the whole merge; rules collected from earlier files are
    /// discarded.
    pub fn load_dir(&self, root: impl AsRef<Path>) -> Result<Grammar> {
        let root = root.as_ref();
        info!(root = %root.display(), extension = %self.source.extension, "merging grammar files");

        let mut grammar = Grammar::new();
        let mut parser = LineParser::new(&mut grammar);
        let mut files = 0usize;

        for file in collect(root, &self.source)? {
            let file = file?;
            if self.parsing.reset_cursor_per_file {
                parser.reset_cursor();
            }
            feed_lines(&mut parser, file.lines(), Some(file.path.as_path()))?;
            files += 1;
        }

        debug!(files, rules = grammar.len(), "grammar files merged");
        validate_grammar(&grammar)?;
        info!(files, rules = grammar.len(), "grammar merged and validated");
        Ok(grammar)
    }
}

/// Trim each line, skip blanks, and hand the rest to the parser. Line-level
/// errors get the 1-based line number and, when known, the file path.
fn feed_lines<'a>(
    parser: &mut LineParser<'_>,
    lines: impl Iterator<Item = &'a str>,
    path: Option<&Path>,
) -> Result<()> {
    for (index, raw) in lines.enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        parser
            .parse_line(line)
            .map_err(|err| err.at(SourceLocation::new(path, index + 1)))?;
    }
    Ok(())
}
