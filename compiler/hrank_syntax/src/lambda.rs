//! Lambda terms.
//!
//! ```text
//! sequence := term+                  left-nested application
//! term     := '(' sequence ')'
//!           | '\' name '.' sequence  body extends as far right as possible
//!           | name | number
//! ```

use hrank_stack::ensure_sufficient_stack;

use crate::cursor::{unexpected, Cursor};
use crate::lexer::{Token, TokenKind};
use crate::SyntaxError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LambdaExpr {
    Abstraction {
        param: String,
        body: Box<LambdaExpr>,
    },
    Variable(String),
    Number(String),
    /// `f a b`: `f` applied to `a`, then the result to `b`. Always holds at
    /// least two items.
    Application(Vec<LambdaExpr>),
}

pub fn parse_lambda(source: &str) -> Result<LambdaExpr, SyntaxError> {
    let mut cursor = Cursor::new(source)?;
    let expr = sequence(&mut cursor)?;
    cursor.finish()?;
    Ok(expr)
}

/// Terms up to a `)` or the end of input.
fn sequence(cursor: &mut Cursor) -> Result<LambdaExpr, SyntaxError> {
    let mut items = Vec::new();
    while !matches!(cursor.peek(), None | Some(TokenKind::RParen)) {
        items.push(term(cursor)?);
    }
    if items.len() > 1 {
        return Ok(LambdaExpr::Application(items));
    }
    items.pop().ok_or_else(|| cursor.expected("a term"))
}

fn term(cursor: &mut Cursor) -> Result<LambdaExpr, SyntaxError> {
    ensure_sufficient_stack(|| {
        let Some(token) = cursor.bump() else {
            return Err(SyntaxError::UnexpectedEnd { expected: "a term" });
        };
        match token.kind {
            TokenKind::LParen => {
                let inner = sequence(cursor)?;
                match cursor.bump() {
                    Some(Token {
                        kind: TokenKind::RParen,
                        ..
                    }) => Ok(inner),
                    Some(other) => Err(unexpected(&other, "')'")),
                    None => Err(SyntaxError::Unclosed {
                        open: "(",
                        span: token.span,
                    }),
                }
            }
            TokenKind::Backslash => {
                let param = match cursor.bump() {
                    Some(Token {
                        kind: TokenKind::Ident(name),
                        ..
                    }) => name,
                    Some(other) => return Err(unexpected(&other, "a parameter name")),
                    None => {
                        return Err(SyntaxError::UnexpectedEnd {
                            expected: "a parameter name",
                        })
                    }
                };
                cursor.expect(&TokenKind::Dot, "'.'")?;
                let body = sequence(cursor)?;
                Ok(LambdaExpr::Abstraction {
                    param,
                    body: Box::new(body),
                })
            }
            TokenKind::Ident(name) => Ok(LambdaExpr::Variable(name)),
            TokenKind::Int(text) => Ok(LambdaExpr::Number(text)),
            _ => Err(unexpected(&token, "a term")),
        }
    })
}
