//! Line parser
//!
//! Applies one classified line to the grammar and returns the cursor for the
//! next line.

use tracing::trace;

use crate::error::{BnfError, Result};
use crate::grammar::Grammar;
use crate::parsing::line_classification::{classify_line, LineType};

/// Name of the rule that continuation lines currently extend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseCursor {
    current: Option<String>,
}

impl ParseCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(name: impl Into<String>) -> Self {
        Self {
            current: Some(name.into()),
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

/// Apply a trimmed, non-blank line.
///
/// A header inserts a new rule and moves the cursor to it; a continuation is
/// appended to the cursor's rule. Headers for an existing name fail with
/// [`BnfError::DuplicateRule`], continuations with no open rule with
/// [`BnfError::OrphanedContent`].
pub fn parse_line(line: &str, cursor: ParseCursor, grammar: &mut Grammar) -> Result<ParseCursor> {
    match classify_line(line) {
        LineType::RuleHeader { name, definition } => {
            grammar.insert(name, definition)?;
            trace!(rule = name, "rule opened");
            Ok(ParseCursor::at(name))
        }
        LineType::Continuation(text) => match cursor.current() {
            Some(name) => {
                grammar.append(name, text)?;
                trace!(rule = name, "rule continued");
                Ok(cursor)
            }
            None => Err(BnfError::OrphanedContent {
                line: text.to_string(),
                location: None,
            }),
        },
    }
}

/// Stateful wrapper owning the cursor while feeding lines into one grammar.
pub struct LineParser<'g> {
    grammar: &'g mut Grammar,
    cursor: ParseCursor,
}

impl<'g> LineParser<'g> {
    pub fn new(grammar: &'g mut Grammar) -> Self {
        Self {
            grammar,
            cursor: ParseCursor::new(),
        }
    }

    pub fn parse_line(&mut self, line: &str) -> Result<()> {
        let cursor = std::mem::take(&mut self.cursor);
        self.cursor = parse_line(line, cursor, self.grammar)?;
        Ok(())
    }

    /// Forget the open rule, e.g. at a file boundary.
    pub fn reset_cursor(&mut self) {
        self.cursor = ParseCursor::new();
    }

    pub fn cursor(&self) -> &ParseCursor {
        &self.cursor
    }
}
