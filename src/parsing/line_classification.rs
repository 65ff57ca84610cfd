//! Line Classification
//!
//! Splits source text into lines and decides whether a trimmed, non-blank line
//! opens a new rule or continues the current one.

use once_cell::sync::Lazy;
use regex::Regex;

/// `<name>`, optional whitespace, `::=`, optional whitespace, then the definition
static RULE_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<([^>]+)>\s*::=\s*(.*)$").unwrap());

/// `\r\n`, a bare `\r`, or `\n`
static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\r|\n").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType<'a> {
    /// `<name> ::= definition`, with the definition trimmed
    RuleHeader { name: &'a str, definition: &'a str },
    /// Anything else; extends the current rule
    Continuation(&'a str),
}

/// Split source text into raw lines on any of `\r\n`, `\r` or `\n`.
///
/// A break at the very end does not produce an extra empty line, so the
/// 1-based position of each line matches what an editor shows.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut lines: Vec<&str> = LINE_BREAK.split(text).collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines.into_iter()
}

/// Determine the type of a line.
///
/// The caller trims the line and skips blank lines before classifying.
pub fn classify_line(line: &str) -> LineType<'_> {
    match RULE_HEADER.captures(line) {
        Some(captures) => {
            // both groups always participate when the pattern matches
            let name = captures.get(1).map_or("", |m| m.as_str());
            let definition = captures.get(2).map_or("", |m| m.as_str()).trim();
            LineType::RuleHeader { name, definition }
        }
        None => LineType::Continuation(line),
    }
}
