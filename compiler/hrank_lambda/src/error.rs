use hrank_syntax::SyntaxError;
use hrank_types::TypeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LambdaError {
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("type error: {0}")]
    Type(#[from] TypeError),
}
