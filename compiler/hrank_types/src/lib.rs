//! Structural type inference with higher-rank polymorphism.
//!
//! Types are trees of constants, variables and arrays. Arrays encode
//! tuples, function types and stack effects, and carry their own quantified
//! variables, so a polytype can appear anywhere inside another type.
//!
//! # Architecture
//!
//! - [`Type`] / [`TypeArray`]: immutable type values with cached
//!   [`TypeFlags`].
//! - `scheme`: structural generalization ([`TypeArray::compute_parameters`]),
//!   hygienic renaming and canonical names.
//! - [`Unifier`]: union-find unification with sum-type widening and
//!   cycle-safe resolution.
//! - [`ScopedInferenceEngine`]: environment-driven inference for
//!   lambda-style clients.
//! - `compose`: composition of stack effects for concatenative clients.

mod compose;
mod error;
mod flags;
mod format;
mod infer;
mod name;
mod scheme;
mod ty;
mod unify;

#[cfg(test)]
mod testing;

pub use compose::{
    compose_function_chain, compose_function_chain_reverse, compose_functions, id_function,
    quotation, CompositionOrder,
};
pub use error::TypeError;
pub use flags::TypeFlags;
pub use format::Pretty;
pub use infer::ScopedInferenceEngine;
pub use name::{Name, NameSupply};
pub use scheme::{are_types_same, is_valid, Naming};
pub use ty::{Descendants, Renaming, Type, TypeArray, ARROW, REC_TAG, SUM_TAG};
pub use unify::{Unifier, UnifyError};
