use logos::Logos;

use crate::calculator::graph::Operator;

/// Represents a lexical token of an expression.
///
/// Expressions are split on whitespace before lexing, so every word must lex
/// to exactly one of these tokens.
#[derive(Logos, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Token {
    /// Integer literal tokens with an optional sign, such as `42` or `-7`.
    #[regex(r"[+-]?[0-9]+")]
    Integer,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
}

impl Token {
    /// Returns the operator this token stands for, or `None` for literals.
    #[must_use]
    pub const fn operator(self) -> Option<Operator> {
        match self {
            Self::Integer => None,
            Self::Plus => Some(Operator::Add),
            Self::Minus => Some(Operator::Sub),
            Self::Star => Some(Operator::Mul),
            Self::Slash => Some(Operator::Div),
        }
    }
}

/// Classifies a whitespace-free word.
///
/// Returns `None` unless the lexer recognizes the whole word as one token, so
/// `2+3` or `12a` are rejected rather than split.
///
/// # Example
/// ```
/// use graph_calculator::calculator::lexer::{Token, classify};
///
/// assert_eq!(classify("-7"), Some(Token::Integer));
/// assert_eq!(classify("-"), Some(Token::Minus));
/// assert_eq!(classify("2+3"), None);
/// ```
#[must_use]
pub fn classify(word: &str) -> Option<Token> {
    let mut lexer = Token::lexer(word);

    let token = lexer.next()?.ok()?;
    if lexer.span().end != word.len() || lexer.next().is_some() {
        return None;
    }

    Some(token)
}
