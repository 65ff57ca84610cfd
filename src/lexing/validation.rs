//! Definition validation
//!
//! Every merged definition must decompose, left to right and with no gaps, into
//! tokens of the alphabet in [`Token`]. The first position where no token starts
//! aborts the whole run.

use std::ops::Range;

use logos::Logos;
use tracing::{debug, trace};

use crate::error::{BnfError, Result};
use crate::grammar::Grammar;
use crate::lexing::tokens::Token;

/// Tokenize a rule's right-hand side.
///
/// Returns the tokens with their byte ranges, or [`BnfError::InvalidSyntax`]
/// for the first position no token matches. The reported position counts
/// characters, not bytes.
pub fn tokenize(rule: &str, definition: &str) -> Result<Vec<(Token, Range<usize>)>> {
    let mut lexer = Token::lexer(definition);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(token) => tokens.push((token, span)),
            Err(()) => return Err(invalid_syntax(rule, definition, span.start)),
        }
    }

    Ok(tokens)
}

/// Check a single definition without keeping its tokens.
pub fn validate_definition(rule: &str, definition: &str) -> Result<()> {
    tokenize(rule, definition).map(|tokens| {
        trace!(rule, tokens = tokens.len(), "definition validated");
    })
}

/// Validate every rule, in insertion order, failing on the first bad one.
pub fn validate_grammar(grammar: &Grammar) -> Result<()> {
    for (name, definition) in grammar.iter() {
        validate_definition(name, definition)?;
    }
    debug!(rules = grammar.len(), "grammar validated");
    Ok(())
}

fn invalid_syntax(rule: &str, definition: &str, byte_offset: usize) -> BnfError {
    let (consumed, remainder) = definition.split_at(byte_offset);
    BnfError::InvalidSyntax {
        rule: rule.to_string(),
        position: consumed.chars().count(),
        remainder: remainder.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(definition: &str) -> Vec<Token> {
        tokenize("r", definition)
            .expect("definition to be valid")
            .into_iter()
            .map(|(token, _)| token)
            .collect()
    }

    fn failure(definition: &str) -> (usize, String) {
        match tokenize("r", definition) {
            Err(BnfError::InvalidSyntax {
                position,
                remainder,
                ..
            }) => (position, remainder),
            other => panic!("expected InvalidSyntax, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_definition_is_fully_covered() {
        let definition = "\"x\" | <b>  'y'";
        let tokens = tokenize("a", definition).unwrap();
        let mut end = 0;
        for (_, span) in &tokens {
            assert_eq!(span.start, end, "tokens must be contiguous");
            end = span.end;
        }
        assert_eq!(end, definition.len());
    }

    #[test]
    fn test_empty_definition_is_valid() {
        assert!(tokenize("a", "").unwrap().is_empty());
    }

    #[test]
    fn test_token_kinds() {
        assert_eq!(
            kinds("<a> | 'b'"),
            vec![
                Token::Nonterminal,
                Token::Whitespace,
                Token::Alternation,
                Token::Whitespace,
                Token::SingleQuoted,
            ]
        );
    }

    #[test]
    fn test_unknown_character_reports_position_and_remainder() {
        let (position, remainder) = failure("\"x\" $ \"y\"");
        assert_eq!(position, 4);
        assert_eq!(remainder, "$ \"y\"");
    }

    #[test]
    fn test_bare_word_is_rejected() {
        let (position, remainder) = failure("<a> word");
        assert_eq!(position, 4);
        assert_eq!(remainder, "word");
    }

    #[test]
    fn test_unterminated_quote_fails_at_the_quote() {
        let (position, remainder) = failure("<a> \"open");
        assert_eq!(position, 4);
        assert_eq!(remainder, "\"open");
    }

    #[test]
    fn test_unterminated_nonterminal_fails_at_the_angle() {
        let (position, _) = failure("'x' <open");
        assert_eq!(position, 4);
    }

    #[test]
    fn test_stray_closing_angle() {
        let (position, remainder) = failure("<a>>");
        assert_eq!(position, 3);
        assert_eq!(remainder, ">");
    }

    #[test]
    fn test_position_counts_characters_not_bytes() {
        // "é" is two bytes in UTF-8
        let (position, remainder) = failure("'é' ?");
        assert_eq!(position, 4);
        assert_eq!(remainder, "?");
    }

    #[test]
    fn test_error_names_rule() {
        let err = tokenize("expr", "#").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid syntax in rule <expr> at position 0: ...#"
        );
    }

    #[test]
    fn test_validate_grammar_fails_fast_on_first_bad_rule() {
        let mut grammar = Grammar::new();
        grammar.insert("good", "'ok'").unwrap();
        grammar.insert("bad", "'x' !").unwrap();
        grammar.insert("worse", "???").unwrap();

        match validate_grammar(&grammar) {
            Err(BnfError::InvalidSyntax { rule, .. }) => assert_eq!(rule, "bad"),
            other => panic!("expected InvalidSyntax, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_empty_grammar() {
        assert!(validate_grammar(&Grammar::new()).is_ok());
    }
}
