//! The type model.
//!
//! Every type expression is one of three variants:
//! - [`Type::Constant`]: an atomic named type such as `Num`.
//! - [`Type::Variable`]: a placeholder, identified by name.
//! - [`Type::Array`]: an ordered tuple of sub-types with an optional list of
//!   type parameters, i.e. the variables quantified at that node.
//!
//! Functions, sums and recursive-reference markers are all encoded as
//! arrays tagged by a constant:
//!
//! | shape       | encoding                |
//! |-------------|-------------------------|
//! | function    | `(input -> output)`     |
//! | sum         | `(\| (a b ...))`        |
//! | recursion   | `(rec N)`               |
//!
//! Type trees are immutable values. Every operation that "changes" a type
//! builds a new tree.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use hrank_stack::ensure_sufficient_stack;

use crate::{Name, TypeFlags};

/// Constant in the middle of a function type.
pub const ARROW: &str = "->";
/// Tag constant of a sum type.
pub const SUM_TAG: &str = "|";
/// Tag constant of a recursive-reference marker.
pub const REC_TAG: &str = "rec";

/// A mapping from old to new variable names.
pub type Renaming = FxHashMap<Name, Name>;

/// A type expression.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Type {
    Constant(Name),
    Variable(Name),
    Array(TypeArray),
}

/// An ordered tuple of types, possibly quantified.
///
/// `params` lists the variables universally quantified at this node. Each
/// name appears at most once and occurs somewhere in `types`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeArray {
    pub(crate) types: Vec<Type>,
    pub(crate) params: Vec<Name>,
    pub(crate) flags: TypeFlags,
}

impl TypeArray {
    /// Create an array without type parameters.
    ///
    /// Use [`Type::array`] to build an array with its parameters computed.
    pub fn new(types: Vec<Type>) -> Self {
        Self::with_params(types, Vec::new())
    }

    pub(crate) fn with_params(types: Vec<Type>, params: Vec<Name>) -> Self {
        let flags = Self::compute_flags(&types, &params);
        TypeArray {
            types,
            params,
            flags,
        }
    }

    fn compute_flags(types: &[Type], params: &[Name]) -> TypeFlags {
        let mut flags = TypeFlags::propagate_all(types.iter().map(Type::flags));
        if !params.is_empty() {
            flags |= TypeFlags::HAS_PARAMS;
        }
        match types {
            [_, middle, _] if middle.is_constant_named(ARROW) => {
                flags |= TypeFlags::IS_FUNCTION;
            }
            [tag, _] if tag.is_constant_named(SUM_TAG) => flags |= TypeFlags::IS_SUM,
            _ => {}
        }
        flags
    }

    pub(crate) fn refresh_flags(&mut self) {
        self.flags = Self::compute_flags(&self.types, &self.params);
    }

    #[inline]
    pub fn types(&self) -> &[Type] {
        &self.types
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// The quantified variables of this node, in promotion order.
    #[inline]
    pub fn params(&self) -> &[Name] {
        &self.params
    }

    #[inline]
    pub fn flags(&self) -> TypeFlags {
        self.flags
    }

    /// Unique, sorted parameter names.
    pub fn type_parameter_names(&self) -> Vec<&Name> {
        let mut names: Vec<&Name> = self.params.iter().collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    #[inline]
    pub fn is_poly_type(&self) -> bool {
        !self.params.is_empty()
    }

    #[inline]
    pub fn is_function(&self) -> bool {
        self.flags.contains(TypeFlags::IS_FUNCTION)
    }

    #[inline]
    pub fn is_sum(&self) -> bool {
        self.flags.contains(TypeFlags::IS_SUM)
    }

    pub fn into_types(self) -> Vec<Type> {
        self.types
    }

    /// Clone under a renaming. Parameters are renamed through the same map.
    pub fn rename_vars(&self, renaming: &Renaming) -> TypeArray {
        if !self.flags.has_vars() {
            return self.clone();
        }
        let types = self
            .types
            .iter()
            .map(|ty| ty.rename_vars(renaming))
            .collect();
        let params = self
            .params
            .iter()
            .map(|param| renaming.get(param).unwrap_or(param).clone())
            .collect();
        TypeArray::with_params(types, params)
    }
}

impl Type {
    pub fn constant(name: impl Into<Name>) -> Type {
        Type::Constant(name.into())
    }

    pub fn variable(name: impl Into<Name>) -> Type {
        Type::Variable(name.into())
    }

    /// Build an array and compute its type parameters.
    pub fn array(types: Vec<Type>) -> Type {
        let mut array = TypeArray::new(types);
        array.compute_parameters();
        Type::Array(array)
    }

    /// `(input -> output)`, with parameters computed.
    pub fn function(input: Type, output: Type) -> Type {
        Type::array(vec![input, Type::constant(ARROW), output])
    }

    /// A sum of alternatives. Alternatives that are sums themselves are
    /// flattened into the result.
    pub fn sum(options: impl IntoIterator<Item = Type>) -> Type {
        let mut flat = Vec::new();
        for option in options {
            match option.sum_options() {
                Some(inner) => flat.extend_from_slice(inner),
                None => flat.push(option),
            }
        }
        Type::array(vec![Type::constant(SUM_TAG), Type::array(flat)])
    }

    /// The marker for a variable found `distance` steps back on the current
    /// resolution path.
    pub fn recursive(distance: usize) -> Type {
        Type::array(vec![
            Type::constant(REC_TAG),
            Type::constant(distance.to_string()),
        ])
    }

    /// Cached flags. Leaves compute theirs on the fly.
    pub fn flags(&self) -> TypeFlags {
        match self {
            Type::Constant(name) if name.as_str() == REC_TAG => TypeFlags::HAS_REC,
            Type::Constant(_) => TypeFlags::empty(),
            Type::Variable(_) => TypeFlags::HAS_VAR,
            Type::Array(array) => array.flags,
        }
    }

    pub fn as_array(&self) -> Option<&TypeArray> {
        match self {
            Type::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn is_constant_named(&self, name: &str) -> bool {
        matches!(self, Type::Constant(constant) if constant.as_str() == name)
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Type::Variable(_))
    }

    pub fn is_function(&self) -> bool {
        self.as_array().is_some_and(TypeArray::is_function)
    }

    pub fn is_sum(&self) -> bool {
        self.as_array().is_some_and(TypeArray::is_sum)
    }

    pub fn is_poly_type(&self) -> bool {
        self.as_array().is_some_and(TypeArray::is_poly_type)
    }

    /// Input and output of a function type.
    pub fn as_function(&self) -> Option<(&Type, &Type)> {
        match self {
            Type::Array(array) if array.is_function() => match array.types() {
                [input, _, output] => Some((input, output)),
                _ => None,
            },
            _ => None,
        }
    }

    /// Owned input and output of a function type.
    pub fn into_function(self) -> Option<(Type, Type)> {
        match self {
            Type::Array(array) if array.is_function() => {
                let mut types = array.into_types().into_iter();
                match (types.next(), types.next(), types.next()) {
                    (Some(input), Some(_), Some(output)) => Some((input, output)),
                    _ => None,
                }
            }
            _ => None,
        }
    }

    /// Alternatives of a sum type.
    pub fn sum_options(&self) -> Option<&[Type]> {
        match self {
            Type::Array(array) if array.is_sum() => match array.types() {
                [_, options] => options.as_array().map(TypeArray::types),
                _ => None,
            },
            _ => None,
        }
    }

    /// This type followed by every type nested inside it, in preorder.
    pub fn descendants(&self) -> Descendants<'_> {
        let mut stack = SmallVec::new();
        stack.push(self);
        Descendants { stack }
    }

    /// Every variable occurrence, in left-to-right order, repetitions kept.
    pub fn type_vars(&self) -> Vec<&Name> {
        if !self.flags().has_vars() {
            return Vec::new();
        }
        self.descendants()
            .filter_map(|ty| match ty {
                Type::Variable(name) => Some(name),
                _ => None,
            })
            .collect()
    }

    pub fn variable_occurs(&self, name: &str) -> bool {
        self.flags().has_vars()
            && self
                .descendants()
                .any(|ty| matches!(ty, Type::Variable(var) if var.as_str() == name))
    }

    /// Unique, sorted parameter names; empty for leaves.
    pub fn type_parameter_names(&self) -> Vec<&Name> {
        self.as_array()
            .map(TypeArray::type_parameter_names)
            .unwrap_or_default()
    }

    /// Clone under a renaming. Variables without an entry keep their name.
    pub fn rename_vars(&self, renaming: &Renaming) -> Type {
        ensure_sufficient_stack(|| match self {
            Type::Constant(_) => self.clone(),
            Type::Variable(name) => match renaming.get(name) {
                Some(renamed) => Type::Variable(renamed.clone()),
                None => self.clone(),
            },
            Type::Array(array) => Type::Array(array.rename_vars(renaming)),
        })
    }
}

/// Preorder walk over a type tree. See [`Type::descendants`].
pub struct Descendants<'a> {
    stack: SmallVec<[&'a Type; 16]>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Type;

    fn next(&mut self) -> Option<&'a Type> {
        let ty = self.stack.pop()?;
        if let Type::Array(array) = ty {
            self.stack.extend(array.types().iter().rev());
        }
        Some(ty)
    }
}
