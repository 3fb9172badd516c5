//! Errors surfaced by inference.

use crate::{Name, Type, UnifyError};

/// Error from the scoped engine or the composition operators.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TypeError {
    Unify(UnifyError),
    /// A variable was looked up that is not in scope.
    UnboundVariable { name: Name },
    /// A composition operand is not a function type.
    NotAFunction { ty: Type },
    /// Application of something that is neither a function nor a variable.
    NotApplicable { ty: Type },
}

impl std::fmt::Display for TypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unify(err) => write!(f, "{err}"),
            Self::UnboundVariable { name } => write!(f, "could not find variable: {name}"),
            Self::NotAFunction { ty } => write!(f, "expected a function type, found {ty}"),
            Self::NotApplicable { ty } => {
                write!(f, "type is neither a function type nor a type variable: {ty}")
            }
        }
    }
}

impl std::error::Error for TypeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unify(err) => Some(err),
            _ => None,
        }
    }
}

impl From<UnifyError> for TypeError {
    fn from(err: UnifyError) -> Self {
        Self::Unify(err)
    }
}
