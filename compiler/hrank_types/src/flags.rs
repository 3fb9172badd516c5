//! Cached type metadata flags.
//!
//! `TypeFlags` are computed once when a [`TypeArray`](crate::TypeArray) is
//! built and cached on the node, so the hot paths of the engine can skip
//! whole subtrees without walking them:
//! - resolution returns variable-free subtrees untouched,
//! - parameter freshening skips subtrees without polytypes,
//! - validity checking rejects recursive markers without a traversal.

use bitflags::bitflags;

bitflags! {
    /// Pre-computed type properties for O(1) queries.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct TypeFlags: u8 {
        // === Presence flags ===
        // Propagate from children to parents.

        /// Contains a type variable.
        const HAS_VAR = 1 << 0;
        /// Contains an array with at least one type parameter.
        const HAS_PARAMS = 1 << 1;
        /// Contains the recursive-reference marker constant.
        const HAS_REC = 1 << 2;

        // === Category flags ===
        // Describe the node itself only.

        /// `(input -> output)`.
        const IS_FUNCTION = 1 << 4;
        /// `(| (alternatives...))`.
        const IS_SUM = 1 << 5;
    }
}

impl TypeFlags {
    /// Flags inherited by a parent from its children.
    pub const PROPAGATE_MASK: Self = Self::from_bits_truncate(
        Self::HAS_VAR.bits() | Self::HAS_PARAMS.bits() | Self::HAS_REC.bits(),
    );

    #[inline]
    pub const fn has_vars(self) -> bool {
        self.contains(Self::HAS_VAR)
    }

    #[inline]
    pub const fn has_params(self) -> bool {
        self.contains(Self::HAS_PARAMS)
    }

    #[inline]
    pub const fn has_recursive_marker(self) -> bool {
        self.contains(Self::HAS_REC)
    }

    /// Combine propagated flags from child types.
    #[inline]
    pub fn propagate_all(children: impl IntoIterator<Item = Self>) -> Self {
        children.into_iter().fold(Self::empty(), |acc, child| {
            acc.union(Self::from_bits_truncate(
                child.bits() & Self::PROPAGATE_MASK.bits(),
            ))
        })
    }
}

impl Default for TypeFlags {
    fn default() -> Self {
        Self::empty()
    }
}
