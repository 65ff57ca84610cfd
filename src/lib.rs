//! # bnf-merge
//!
//! Merges a directory tree of BNF grammar files into one named-rule collection,
//! checks that every right-hand side uses only the supported token shapes, and
//! emits the result as JSON.
//!
//! The pipeline is strictly sequential:
//!
//! 1. [`loading`] walks the root and feeds each file's lines to the parser
//! 2. [`parsing`] classifies lines as rule headers or continuations
//! 3. [`grammar`] accumulates definitions and rejects duplicate names
//! 4. [`lexing`] re-scans every merged definition against the token alphabet
//! 5. [`output`] serializes the validated grammar
//!
//! Any error aborts the run; no partial grammar is returned or written.

pub mod error;
pub mod grammar;
pub mod lexing;
pub mod loading;
pub mod output;
pub mod parsing;

pub use error::{BnfError, Result, SourceLocation};
pub use grammar::Grammar;
pub use loading::GrammarLoader;
