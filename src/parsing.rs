//! Line-based parsing of grammar sources
//!
//! Grammar files are read one line at a time. After trimming, each non-blank
//! line is either a rule header (`<name> ::= definition`) or a continuation of
//! the most recently opened rule. The parser threads a cursor naming that rule
//! across lines and writes into a [`Grammar`](crate::grammar::Grammar).

pub mod line_classification;
pub mod line_parser;

pub use line_classification::{classify_line, split_lines, LineType};
pub use line_parser::{parse_line, LineParser, ParseCursor};
