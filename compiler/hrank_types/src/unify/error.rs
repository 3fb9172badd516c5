//! Unification error types.

use crate::Type;

/// Error from type unification.
///
/// Disagreement between constants, or between a constant and an array, is
/// not an error: it widens to a sum type. Only structural mismatches fail.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum UnifyError {
    /// Two arrays of different lengths were unified element-wise.
    ArityMismatch {
        left: Type,
        right: Type,
        /// Nesting depth at which the mismatch was found.
        depth: usize,
    },
}

impl UnifyError {
    /// Lengths of the two mismatched arrays.
    pub fn arities(&self) -> (usize, usize) {
        match self {
            Self::ArityMismatch { left, right, .. } => (arity(left), arity(right)),
        }
    }
}

fn arity(ty: &Type) -> usize {
    ty.as_array().map_or(0, |array| array.len())
}

impl std::fmt::Display for UnifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ArityMismatch { left, right, depth } => {
                let (expected, found) = self.arities();
                write!(
                    f,
                    "arity mismatch at depth {depth}: cannot unify {left} ({expected} elements) with {right} ({found} elements)"
                )
            }
        }
    }
}

impl std::error::Error for UnifyError {}
