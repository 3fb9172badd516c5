//! Type inference for a concatenative combinator language.
//!
//! Every program denotes a function from an input stack to an output
//! stack. Stacks are nested pairs ending in a row variable, so `dup` has
//! the type `!t0!t1.((t0 t1) -> (t0 (t0 t1)))`. Inference looks words up
//! in a [`CatTypeEnv`] and composes their types; there is no other
//! inference logic here.
//!
//! ```ignore
//! let env = CatTypeEnv::standard()?;
//! let ty = infer_program("[dup] dip", &env, CompositionOrder::default())?;
//! assert_eq!(ty.to_string(), "!t0!t1!t2.((t0 (t1 t2)) -> (t0 (t1 (t1 t2))))");
//! ```

mod env;
mod error;
mod infer;

pub use env::{CatTypeEnv, LIBRARY, PRIMITIVES};
pub use error::CatError;
pub use infer::{infer_program, infer_terms};
