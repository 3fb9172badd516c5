//! Text front ends for hrank.
//!
//! One logos lexer feeds three small recursive-descent parsers:
//! - [`parse_type`]: S-expression type syntax, `(('a 'b) -> 'b)`
//! - [`parse_cat`]: concatenative programs, `[dup] dip swap`
//! - [`parse_lambda`]: lambda terms, `\x.\y.x y`
//!
//! The parsers only build trees; they contain no inference logic.

mod cat;
mod cursor;
mod error;
mod lambda;
mod lexer;
mod types;

pub use cat::{format_program, parse_cat, CatTerm};
pub use error::{Span, SyntaxError};
pub use lambda::{parse_lambda, LambdaExpr};
pub use lexer::{lex, Token, TokenKind};
pub use types::parse_type;
