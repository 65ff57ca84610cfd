//! JSON output of a merged grammar
//!
//! The document maps each rule name to its definition, in insertion order. It is
//! rendered completely in memory before anything touches the output path.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::info;

use crate::error::{BnfError, Result};
use crate::grammar::Grammar;

/// Render the grammar as pretty-printed JSON, `indent` spaces per level.
pub fn to_json(grammar: &Grammar, indent: usize) -> Result<String> {
    let indent = " ".repeat(indent);
    let mut buffer = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(indent.as_bytes()));
    grammar.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Serialize and write the grammar to `path`.
pub fn write_grammar(grammar: &Grammar, path: impl AsRef<Path>, indent: usize) -> Result<()> {
    let path = path.as_ref();
    let json = to_json(grammar, indent)?;
    fs::write(path, json).map_err(|source| BnfError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), rules = grammar.len(), "grammar written");
    Ok(())
}
