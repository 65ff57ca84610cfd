//! Lexing
//!
//! Right-hand sides are checked against a fixed token alphabet: whitespace runs,
//! `<nonterminal>` references, `"double"` and `'single'` quoted terminals, and the
//! `|` alternation bar. Tokenization is done through the logos lexer, which
//! compiles the alphabet into a single state machine, so each position is decided
//! without backtracking.
//!
//! Only the lexical shape is validated. Nonterminal references are not resolved
//! and the grammar itself is not analysed.

pub mod tokens;
pub mod validation;

pub use tokens::Token;
pub use validation::{tokenize, validate_definition, validate_grammar};
