use hrank_syntax::SyntaxError;
use hrank_types::TypeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatError {
    #[error("unknown word: {0}")]
    UnknownWord(String),

    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("type error: {0}")]
    Type(#[from] TypeError),

    #[error("in definition of {word}: {source}")]
    Definition {
        word: &'static str,
        #[source]
        source: Box<CatError>,
    },
}
