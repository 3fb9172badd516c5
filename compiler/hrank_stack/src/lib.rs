//! Stack safety for deep recursion.
//!
//! Type trees built by composing long concatenative programs nest one cons
//! cell per stack slot, so unification, resolution and parameter
//! computation recurse as deep as the program is long. Every recursive walk
//! in `hrank_types` and the parsers in `hrank_syntax` goes through
//! [`ensure_sufficient_stack`].
//!
//! - **Native targets**: `stacker` grows the stack on demand.
//! - **WASM targets**: no-op passthrough.

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn resolve(&mut self, ty: &Type) -> Type {
///     ensure_sufficient_stack(|| match ty {
///         Type::Array(arr) => /* recurse into children */,
///         _ => ty.clone(),
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
