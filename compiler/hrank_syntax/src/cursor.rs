//! Token cursor shared by the parsers.

use crate::lexer::{lex, Token, TokenKind};
use crate::SyntaxError;

pub(crate) struct Cursor {
    tokens: Vec<Token>,
    pos: usize,
}

impl Cursor {
    pub(crate) fn new(source: &str) -> Result<Self, SyntaxError> {
        Ok(Cursor {
            tokens: lex(source)?,
            pos: 0,
        })
    }

    pub(crate) fn peek(&self) -> Option<&TokenKind> {
        self.tokens.get(self.pos).map(|token| &token.kind)
    }

    pub(crate) fn bump(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Consume a token of the given kind.
    pub(crate) fn expect(
        &mut self,
        kind: &TokenKind,
        expected: &'static str,
    ) -> Result<Token, SyntaxError> {
        match self.bump() {
            Some(token) if token.kind == *kind => Ok(token),
            Some(token) => Err(unexpected(&token, expected)),
            None => Err(SyntaxError::UnexpectedEnd { expected }),
        }
    }

    /// Error for the current position.
    pub(crate) fn expected(&self, expected: &'static str) -> SyntaxError {
        match self.tokens.get(self.pos) {
            Some(token) => unexpected(token, expected),
            None => SyntaxError::UnexpectedEnd { expected },
        }
    }

    /// Fail if any input is left.
    pub(crate) fn finish(&self) -> Result<(), SyntaxError> {
        match self.tokens.get(self.pos) {
            Some(token) => Err(SyntaxError::TrailingInput {
                found: token.kind.to_string(),
                span: token.span,
            }),
            None => Ok(()),
        }
    }
}

pub(crate) fn unexpected(token: &Token, expected: &'static str) -> SyntaxError {
    SyntaxError::UnexpectedToken {
        found: token.kind.to_string(),
        expected,
        span: token.span,
    }
}
