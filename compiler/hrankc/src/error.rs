use hrank_cat::CatError;
use hrank_lambda::LambdaError;
use hrank_syntax::SyntaxError;
use hrank_types::{Type, TypeError, UnifyError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Cat(#[from] CatError),

    #[error(transparent)]
    Lambda(#[from] LambdaError),

    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("type error: {0}")]
    Type(#[from] TypeError),

    #[error("unification failed: {0}")]
    Unify(#[from] UnifyError),

    #[error("invalid type {ty}: contains a recursive reference or an undetermined parameter")]
    Invalid { ty: Type },

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("unknown combinator '{0}'")]
    UnknownCombinator(String),

    #[error("cannot read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
