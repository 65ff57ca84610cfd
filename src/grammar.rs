//! Grammar accumulator
//!
//! Owns the mapping from rule name to its right-hand-side text. Names, once
//! inserted, are never reassigned; definitions only grow, by space-joined
//! appends, until the whole tree has been read and validated.
//!
//! Insertion order is kept so the serialized document is deterministic for a
//! given traversal order.

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{BnfError, Result};

/// Named-rule collection built from one or more grammar sources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Grammar {
    rules: IndexMap<String, String>,
}

impl Grammar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Register a new rule. Redefining a name is always an error, even when the
    /// definitions are identical.
    pub fn insert(&mut self, name: impl Into<String>, definition: impl Into<String>) -> Result<()> {
        let name = name.into();
        if self.has(&name) {
            return Err(BnfError::DuplicateRule {
                name,
                location: None,
            });
        }
        self.rules.insert(name, definition.into());
        Ok(())
    }

    /// Extend an existing rule with a continuation line, separated by one space.
    pub fn append(&mut self, name: &str, text: &str) -> Result<()> {
        match self.rules.get_mut(name) {
            Some(definition) => {
                definition.push(' ');
                definition.push_str(text);
                Ok(())
            }
            None => Err(BnfError::OrphanedContent {
                line: text.to_string(),
                location: None,
            }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.rules.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rules
            .iter()
            .map(|(name, definition)| (name.as_str(), definition.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }
}
