//! Type expressions.
//!
//! ```text
//! type := '(' type* ')'      array
//!       | 'name              variable, not starting with '$'
//!       | name | number      constant
//!       | '->' | '*' | '|' | '[]'
//! ```

use hrank_stack::ensure_sufficient_stack;
use hrank_types::{Type, TypeArray, ARROW, SUM_TAG};

use crate::cursor::{unexpected, Cursor};
use crate::lexer::TokenKind;
use crate::SyntaxError;

/// Parse a type expression. Parameters of every array are computed.
pub fn parse_type(source: &str) -> Result<Type, SyntaxError> {
    let mut cursor = Cursor::new(source)?;
    let mut ty = type_expr(&mut cursor)?;
    cursor.finish()?;
    ty.compute_parameters();
    Ok(ty)
}

fn type_expr(cursor: &mut Cursor) -> Result<Type, SyntaxError> {
    ensure_sufficient_stack(|| {
        let Some(token) = cursor.bump() else {
            return Err(SyntaxError::UnexpectedEnd { expected: "a type" });
        };
        match token.kind {
            TokenKind::LParen => {
                let mut types = Vec::new();
                loop {
                    match cursor.peek() {
                        Some(TokenKind::RParen) => {
                            cursor.bump();
                            break;
                        }
                        Some(_) => types.push(type_expr(cursor)?),
                        None => {
                            return Err(SyntaxError::Unclosed {
                                open: "(",
                                span: token.span,
                            })
                        }
                    }
                }
                Ok(Type::Array(TypeArray::new(types)))
            }
            // `$N` names belong to `NameSupply`.
            TokenKind::TypeVar(ref name) if name.starts_with('$') => {
                Err(unexpected(&token, "a type variable not starting with '$'"))
            }
            TokenKind::TypeVar(name) => Ok(Type::variable(name)),
            TokenKind::Ident(name) | TokenKind::Int(name) => Ok(Type::constant(name)),
            TokenKind::Arrow => Ok(Type::constant(ARROW)),
            TokenKind::Star => Ok(Type::constant("*")),
            TokenKind::Bar => Ok(Type::constant(SUM_TAG)),
            TokenKind::EmptyBrackets => Ok(Type::constant("[]")),
            _ => Err(unexpected(&token, "a type")),
        }
    })
}
