//! Token definitions for grammar right-hand sides
//!
//! The five shapes start with distinct characters, so at most one of them can
//! match at any position.
use logos::Logos;

/// All tokens that may appear in a rule definition
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    #[regex(r"\s+")]
    Whitespace,

    // <name>: at least one character, no '>' inside
    #[regex(r"<[^>]+>")]
    Nonterminal,

    #[regex(r#""[^"]*""#)]
    DoubleQuoted,

    #[regex(r"'[^']*'")]
    SingleQuoted,

    #[token("|")]
    Alternation,
}

impl Token {
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace)
    }

    /// Check if this token is a quoted literal
    pub fn is_terminal(&self) -> bool {
        matches!(self, Token::DoubleQuoted | Token::SingleQuoted)
    }

    pub fn is_nonterminal(&self) -> bool {
        matches!(self, Token::Nonterminal)
    }

    pub fn is_alternation(&self) -> bool {
        matches!(self, Token::Alternation)
    }

    /// The text between the delimiters of a nonterminal or terminal slice.
    /// Whitespace and `|` have no inner text.
    pub fn inner<'s>(&self, slice: &'s str) -> Option<&'s str> {
        match self {
            Token::Nonterminal | Token::DoubleQuoted | Token::SingleQuoted => {
                slice.get(1..slice.len().saturating_sub(1))
            }
            Token::Whitespace | Token::Alternation => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(source: &str) -> Vec<Result<Token, ()>> {
        Token::lexer(source).collect()
    }

    #[test]
    fn test_each_shape() {
        assert_eq!(lex_all("  \t"), vec![Ok(Token::Whitespace)]);
        assert_eq!(lex_all("<expr>"), vec![Ok(Token::Nonterminal)]);
        assert_eq!(lex_all("\"if\""), vec![Ok(Token::DoubleQuoted)]);
        assert_eq!(lex_all("'then'"), vec![Ok(Token::SingleQuoted)]);
        assert_eq!(lex_all("|"), vec![Ok(Token::Alternation)]);
    }

    #[test]
    fn test_empty_quotes_are_terminals() {
        assert_eq!(lex_all("\"\""), vec![Ok(Token::DoubleQuoted)]);
        assert_eq!(lex_all("''"), vec![Ok(Token::SingleQuoted)]);
    }

    #[test]
    fn test_quotes_may_contain_the_other_quote() {
        assert_eq!(lex_all("\"it's\""), vec![Ok(Token::DoubleQuoted)]);
        assert_eq!(lex_all("'say \"hi\"'"), vec![Ok(Token::SingleQuoted)]);
    }

    #[test]
    fn test_nonterminal_may_contain_spaces_and_angle_open() {
        assert_eq!(lex_all("<a b>"), vec![Ok(Token::Nonterminal)]);
        assert_eq!(lex_all("<a<b>"), vec![Ok(Token::Nonterminal)]);
    }

    #[test]
    fn test_empty_nonterminal_is_rejected() {
        let mut lexer = Token::lexer("<>");
        assert_eq!(lexer.next(), Some(Err(())));
        assert_eq!(lexer.span().start, 0);
    }

    #[test]
    fn test_mixed_sequence() {
        let tokens = lex_all("\"x\" | <b>");
        assert_eq!(
            tokens,
            vec![
                Ok(Token::DoubleQuoted),
                Ok(Token::Whitespace),
                Ok(Token::Alternation),
                Ok(Token::Whitespace),
                Ok(Token::Nonterminal),
            ]
        );
    }

    #[test]
    fn test_inner_text() {
        assert_eq!(Token::Nonterminal.inner("<expr>"), Some("expr"));
        assert_eq!(Token::DoubleQuoted.inner("\"\""), Some(""));
        assert_eq!(Token::Alternation.inner("|"), None);
    }

    #[test]
    fn test_predicates() {
        assert!(Token::SingleQuoted.is_terminal());
        assert!(Token::DoubleQuoted.is_terminal());
        assert!(!Token::Nonterminal.is_terminal());
        assert!(Token::Nonterminal.is_nonterminal());
        assert!(Token::Whitespace.is_whitespace());
        assert!(Token::Alternation.is_alternation());
    }
}
