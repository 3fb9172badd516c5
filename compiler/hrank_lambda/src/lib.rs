//! Type inference for the untyped lambda calculus.
//!
//! Terms are typed on [`hrank_types::ScopedInferenceEngine`]. Type
//! parameters are placed structurally, so a lambda-bound variable used at
//! two types gets a polytype argument:
//!
//! ```ignore
//! let ty = infer_lambda(r"\i.(i \x.x) \y.y", Naming::Alphabetic)?;
//! assert_eq!(ty.to_string(), "!c.((!a.(a -> a) -> (!b.(b -> b) -> c)) -> c)");
//! ```

mod combinators;
mod error;
mod infer;

pub use combinators::{combinator, COMBINATORS};
pub use error::LambdaError;
pub use infer::{infer_in, infer_lambda, infer_type};
