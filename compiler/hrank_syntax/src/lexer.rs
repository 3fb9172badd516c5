//! Lexer shared by the three grammars, using logos.

use std::fmt;

use logos::Logos;

use crate::{Span, SyntaxError};

/// Raw token from logos.
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("[]")]
    EmptyBrackets,
    #[token("\\")]
    Backslash,
    #[token(".")]
    Dot,
    #[token("->")]
    Arrow,
    #[token("*")]
    Star,
    #[token("|")]
    Bar,

    // 'a, '$0
    #[regex(r"'[a-zA-Z_$][a-zA-Z0-9_$]*")]
    TypeVar,

    #[regex(r"[0-9]+")]
    Int,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    LParen,
    RParen,
    LBracket,
    RBracket,
    /// `[]` written without space.
    EmptyBrackets,
    Backslash,
    Dot,
    Arrow,
    Star,
    Bar,
    /// A type variable, without the leading quote.
    TypeVar(String),
    Int(String),
    Ident(String),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::LParen => f.write_str("'('"),
            TokenKind::RParen => f.write_str("')'"),
            TokenKind::LBracket => f.write_str("'['"),
            TokenKind::RBracket => f.write_str("']'"),
            TokenKind::EmptyBrackets => f.write_str("'[]'"),
            TokenKind::Backslash => f.write_str("'\\'"),
            TokenKind::Dot => f.write_str("'.'"),
            TokenKind::Arrow => f.write_str("'->'"),
            TokenKind::Star => f.write_str("'*'"),
            TokenKind::Bar => f.write_str("'|'"),
            TokenKind::TypeVar(name) => write!(f, "type variable '{name}"),
            TokenKind::Int(text) => write!(f, "number {text}"),
            TokenKind::Ident(name) => write!(f, "identifier {name}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

/// Split `source` into tokens. Comments and whitespace are dropped.
pub fn lex(source: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut tokens = Vec::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from(logos.span());
        let slice = logos.slice();

        let kind = match token_result {
            Ok(raw) => match convert_token(raw, slice) {
                Some(kind) => kind,
                None => continue,
            },
            Err(()) => {
                return Err(SyntaxError::InvalidCharacter {
                    text: slice.to_owned(),
                    span,
                })
            }
        };
        tokens.push(Token { kind, span });
    }

    Ok(tokens)
}

/// Convert a raw token; trivia converts to `None`.
fn convert_token(raw: RawToken, slice: &str) -> Option<TokenKind> {
    let kind = match raw {
        RawToken::LineComment => return None,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::EmptyBrackets => TokenKind::EmptyBrackets,
        RawToken::Backslash => TokenKind::Backslash,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Arrow => TokenKind::Arrow,
        RawToken::Star => TokenKind::Star,
        RawToken::Bar => TokenKind::Bar,
        RawToken::TypeVar => TokenKind::TypeVar(slice[1..].to_owned()),
        RawToken::Int => TokenKind::Int(slice.to_owned()),
        RawToken::Ident => TokenKind::Ident(slice.to_owned()),
    };
    Some(kind)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
