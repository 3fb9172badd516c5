//! Concatenative programs.
//!
//! A program is a sequence of terms: integers, `true`/`false`, words, and
//! bracketed quotations of further terms.

use std::fmt;

use hrank_stack::ensure_sufficient_stack;

use crate::cursor::{unexpected, Cursor};
use crate::error::Span;
use crate::lexer::TokenKind;
use crate::SyntaxError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatTerm {
    Number(String),
    Bool(bool),
    Word(String),
    Quotation(Vec<CatTerm>),
}

impl fmt::Display for CatTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatTerm::Number(text) | CatTerm::Word(text) => f.write_str(text),
            CatTerm::Bool(value) => write!(f, "{value}"),
            CatTerm::Quotation(terms) => write!(f, "[{}]", format_program(terms)),
        }
    }
}

/// Terms separated by single spaces.
pub fn format_program(terms: &[CatTerm]) -> String {
    terms
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn parse_cat(source: &str) -> Result<Vec<CatTerm>, SyntaxError> {
    let mut cursor = Cursor::new(source)?;
    cat_terms(&mut cursor, None)
}

/// Terms up to the `]` closing `open`, or to the end of input at top level.
fn cat_terms(cursor: &mut Cursor, open: Option<Span>) -> Result<Vec<CatTerm>, SyntaxError> {
    let mut terms = Vec::new();
    loop {
        match (cursor.peek(), open) {
            (None, None) => return Ok(terms),
            (None, Some(span)) => return Err(SyntaxError::Unclosed { open: "[", span }),
            (Some(TokenKind::RBracket), Some(_)) => {
                cursor.bump();
                return Ok(terms);
            }
            (Some(TokenKind::RBracket), None) => return Err(cursor.expected("a term")),
            (Some(_), _) => terms.push(cat_term(cursor)?),
        }
    }
}

fn cat_term(cursor: &mut Cursor) -> Result<CatTerm, SyntaxError> {
    ensure_sufficient_stack(|| {
        let Some(token) = cursor.bump() else {
            return Err(SyntaxError::UnexpectedEnd { expected: "a term" });
        };
        match token.kind {
            TokenKind::Int(text) => Ok(CatTerm::Number(text)),
            TokenKind::Ident(name) => Ok(match name.as_str() {
                "true" => CatTerm::Bool(true),
                "false" => CatTerm::Bool(false),
                _ => CatTerm::Word(name),
            }),
            TokenKind::EmptyBrackets => Ok(CatTerm::Quotation(Vec::new())),
            TokenKind::LBracket => Ok(CatTerm::Quotation(cat_terms(cursor, Some(token.span))?)),
            _ => Err(unexpected(&token, "a term")),
        }
    })
}
