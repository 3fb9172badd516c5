//! Type unification engine.
//!
//! Variables are grouped with union-find. Each group has a representative
//! slot holding the group's best-fit type; rebinding a group is a single
//! write, and every alias sees it through `find`.
//!
//! # Preference
//!
//! When two candidates meet, a constant or array beats a variable, and of
//! two variables the first one stays representative. Binding two variables
//! always merges their groups, and the merged group holds the unification
//! of both bindings. Constant/constant and constant/array disagreement
//! widens to a sum type instead of failing.
//!
//! # Resolution
//!
//! [`Unifier::get_unified_type`] substitutes best-fit types recursively. A
//! variable met again on its own resolution path becomes the marker
//! `(rec N)`, where `N` counts back along the path. A group expanded twice
//! in one call gets fresh parameter names for the second expansion.
//!
//! ```ignore
//! let mut unifier = Unifier::new();
//! unifier.unify_types(&Type::variable("a"), &Type::constant("Num"))?;
//! assert_eq!(unifier.get_unified_type(&Type::variable("a")), Type::constant("Num"));
//! ```

mod error;

pub use error::UnifyError;

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use hrank_stack::ensure_sufficient_stack;

use crate::{Name, NameSupply, Type, TypeArray};

/// One union-find node per variable name.
///
/// `rep` and `ty` are only meaningful while the slot is its own parent.
#[derive(Clone, Debug)]
struct Slot {
    parent: usize,
    /// The variable that founded the group.
    rep: Name,
    /// Best-fit type of the group.
    ty: Type,
}

/// Substitution table for one unification problem.
#[derive(Clone, Debug, Default)]
pub struct Unifier {
    slots: Vec<Slot>,
    index: FxHashMap<Name, usize>,
    names: NameSupply,
}

impl Unifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// The supply used for fresh names during resolution.
    ///
    /// Share it when freshening inputs, so that generated names stay unique
    /// within the problem.
    pub fn names_mut(&mut self) -> &mut NameSupply {
        &mut self.names
    }

    // ========================================
    // Union-find
    // ========================================

    fn slot_for(&mut self, name: &Name) -> usize {
        if let Some(&slot) = self.index.get(name) {
            return slot;
        }
        let slot = self.slots.len();
        self.slots.push(Slot {
            parent: slot,
            rep: name.clone(),
            ty: Type::Variable(name.clone()),
        });
        self.index.insert(name.clone(), slot);
        slot
    }

    /// Find the representative, compressing the path behind it.
    fn find(&mut self, slot: usize) -> usize {
        let root = self.find_readonly(slot);
        let mut current = slot;
        while self.slots[current].parent != root {
            let next = self.slots[current].parent;
            self.slots[current].parent = root;
            current = next;
        }
        root
    }

    fn find_readonly(&self, mut slot: usize) -> usize {
        while self.slots[slot].parent != slot {
            slot = self.slots[slot].parent;
        }
        slot
    }

    fn root_of(&mut self, name: &Name) -> usize {
        let slot = self.slot_for(name);
        self.find(slot)
    }

    /// Current best-fit type of a variable, if it has been seen.
    pub fn best_fit(&self, name: &str) -> Option<&Type> {
        let slot = *self.index.get(name)?;
        Some(&self.slots[self.find_readonly(slot)].ty)
    }

    /// Number of variables in the table.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    // ========================================
    // Unification
    // ========================================

    /// Unify two types and return the most specific type consistent with
    /// both. The table records the decision.
    pub fn unify_types(&mut self, left: &Type, right: &Type) -> Result<Type, UnifyError> {
        self.unify_at(left, right, 0)
    }

    fn unify_at(&mut self, left: &Type, right: &Type, depth: usize) -> Result<Type, UnifyError> {
        ensure_sufficient_stack(|| {
            trace!(depth, %left, %right, "unify");
            if left == right {
                return Ok(left.clone());
            }
            match (left, right) {
                (Type::Variable(name), _) => self.bind(name, right, depth),
                (_, Type::Variable(name)) => self.bind(name, left, depth),
                (Type::Constant(_), _) | (_, Type::Constant(_)) => Ok(widen(left, right)),
                (Type::Array(l), Type::Array(r)) => {
                    if l.is_sum() || r.is_sum() {
                        Ok(widen(left, right))
                    } else {
                        self.unify_arrays(l, r, depth + 1)
                    }
                }
            }
        })
    }

    fn unify_arrays(
        &mut self,
        left: &TypeArray,
        right: &TypeArray,
        depth: usize,
    ) -> Result<Type, UnifyError> {
        if left.len() != right.len() {
            return Err(UnifyError::ArityMismatch {
                left: Type::Array(left.clone()),
                right: Type::Array(right.clone()),
                depth,
            });
        }
        let types = left
            .types()
            .iter()
            .zip(right.types())
            .map(|(l, r)| self.unify_at(l, r, depth))
            .collect::<Result<Vec<_>, _>>()?;

        // Keep the left parameters that still occur after unification.
        let params = left
            .params()
            .iter()
            .filter(|param| types.iter().any(|ty| ty.variable_occurs(param.as_str())))
            .cloned()
            .collect();
        Ok(Type::Array(TypeArray::with_params(types, params)))
    }

    /// Bind the group of `name` to the better of its current type and
    /// `other`.
    fn bind(&mut self, name: &Name, other: &Type, depth: usize) -> Result<Type, UnifyError> {
        let left = self.root_of(name);
        let (other_ty, right) = match other {
            Type::Variable(other_name) => {
                let right = self.root_of(other_name);
                if right == left {
                    return Ok(self.slots[left].ty.clone());
                }
                (self.slots[right].ty.clone(), Some(right))
            }
            _ => (other.clone(), None),
        };
        let current = self.slots[left].ty.clone();

        let best = match (current.is_variable(), other_ty.is_variable()) {
            (_, true) => current,
            (true, false) => other_ty.clone(),
            (false, false) => self.unify_at(&current, &other_ty, depth + 1)?,
        };

        let left = self.find(left);
        debug!(var = %name, rep = %self.slots[left].rep, %best, "bind");
        self.slots[left].ty = best.clone();
        // The recursion may have merged either group elsewhere.
        if let Some(right) = right {
            let right = self.find(right);
            if right != left {
                self.slots[right].parent = left;
            }
        }
        Ok(best)
    }

    // ========================================
    // Resolution
    // ========================================

    /// Substitute best-fit types into `ty` until only unbound variables,
    /// constants and recursive-reference markers remain.
    ///
    /// The result carries no parameter lists; callers recompute them.
    pub fn get_unified_type(&mut self, ty: &Type) -> Type {
        let mut path = SmallVec::<[Name; 8]>::new();
        let mut seen = FxHashSet::default();
        self.resolve_in(ty, &mut path, &mut seen)
    }

    fn resolve_in(
        &mut self,
        ty: &Type,
        path: &mut SmallVec<[Name; 8]>,
        seen: &mut FxHashSet<Name>,
    ) -> Type {
        ensure_sufficient_stack(|| match ty {
            Type::Constant(_) => ty.clone(),
            Type::Array(array) if !array.flags().has_vars() => ty.clone(),
            Type::Array(array) => Type::Array(TypeArray::new(
                array
                    .types()
                    .iter()
                    .map(|child| self.resolve_in(child, path, seen))
                    .collect(),
            )),
            Type::Variable(name) => {
                if let Some(distance) = path.iter().rev().position(|visited| visited == name) {
                    debug!(var = %name, distance, "recursive reference");
                    return Type::recursive(distance);
                }
                let Some(&slot) = self.index.get(name) else {
                    return ty.clone();
                };
                let root = self.find(slot);
                let bound = &self.slots[root].ty;
                if !matches!(bound, Type::Array(_)) {
                    return bound.clone();
                }
                let rep = self.slots[root].rep.clone();
                let expansion = if seen.insert(rep) {
                    bound.clone()
                } else {
                    let bound = bound.clone();
                    bound.fresh_parameter_names(&mut self.names)
                };
                path.push(name.clone());
                let resolved = self.resolve_in(&expansion, path, seen);
                path.pop();
                resolved
            }
        })
    }

    /// Human-readable dump of the table, one variable per line, sorted.
    pub fn state(&self) -> String {
        let mut lines: Vec<String> = self
            .index
            .iter()
            .map(|(name, &slot)| {
                let root = &self.slots[self.find_readonly(slot)];
                format!("{name} => {}: {}", root.rep, root.ty)
            })
            .collect();
        lines.sort();
        lines.join("\n")
    }
}

/// Soft failure: both alternatives survive as a sum type.
fn widen(left: &Type, right: &Type) -> Type {
    warn!(%left, %right, "mismatch widened to a sum type");
    Type::sum([left.clone(), right.clone()])
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
