//! Structural generalization and renaming.
//!
//! Quantifiers are placed structurally: a variable becomes a parameter of
//! the smallest array at which it is shared by two different children, or
//! of the array that holds it as a direct child. No typing context is
//! consulted.

use hrank_stack::ensure_sufficient_stack;

use crate::{Name, NameSupply, Renaming, Type, TypeArray};

impl TypeArray {
    /// Recompute the parameters of this array and every array inside it.
    ///
    /// Existing parameter lists in the subtree are discarded. A name promoted
    /// to this node is removed from the parameter lists of all descendants.
    pub fn compute_parameters(&mut self) {
        ensure_sufficient_stack(|| {
            for child in &mut self.types {
                child.compute_parameters();
            }
            let promoted = self.shared_child_vars();
            if !promoted.is_empty() {
                for child in &mut self.types {
                    if let Type::Array(array) = child {
                        array.strip_params(&promoted);
                    }
                }
            }
            self.params = promoted;
            self.refresh_flags();
        });
    }

    /// Variables that must be quantified here: direct variable children, and
    /// variables of an array child that also occur in a sibling.
    fn shared_child_vars(&self) -> Vec<Name> {
        let child_vars: Vec<Vec<&Name>> = self.types.iter().map(Type::type_vars).collect();
        let mut promoted: Vec<Name> = Vec::new();
        let mut promote = |name: &Name| {
            if !promoted.contains(name) {
                promoted.push(name.clone());
            }
        };
        for (i, child) in self.types.iter().enumerate() {
            match child {
                Type::Variable(name) => promote(name),
                Type::Array(_) => {
                    for var in &child_vars[i] {
                        let shared = child_vars
                            .iter()
                            .enumerate()
                            .any(|(j, vars)| j != i && vars.contains(var));
                        if shared {
                            promote(*var);
                        }
                    }
                }
                Type::Constant(_) => {}
            }
        }
        promoted
    }

    fn strip_params(&mut self, names: &[Name]) {
        if !self.flags.has_params() {
            return;
        }
        ensure_sufficient_stack(|| {
            self.params.retain(|param| !names.contains(param));
            for child in &mut self.types {
                if let Type::Array(array) = child {
                    array.strip_params(names);
                }
            }
            self.refresh_flags();
        });
    }

    /// Give every parameter of this array, and of every polytype nested in
    /// it, a brand-new name. Free variables keep their names.
    pub fn fresh_parameter_names(&self, names: &mut NameSupply) -> TypeArray {
        if !self.flags.has_params() {
            return self.clone();
        }
        ensure_sufficient_stack(|| {
            let renaming: Renaming = self
                .type_parameter_names()
                .into_iter()
                .map(|param| (param.clone(), names.fresh()))
                .collect();
            let types = self
                .types
                .iter()
                .map(|child| child.rename_vars(&renaming).fresh_parameter_names(names))
                .collect();
            let params = self
                .params
                .iter()
                .map(|param| renaming.get(param).unwrap_or(param).clone())
                .collect();
            TypeArray::with_params(types, params)
        })
    }
}

impl Type {
    /// See [`TypeArray::compute_parameters`]. Leaves are unaffected.
    pub fn compute_parameters(&mut self) {
        if let Type::Array(array) = self {
            array.compute_parameters();
        }
    }

    /// Rename every variable in the tree to a fresh name.
    pub fn fresh_variable_names(&self, names: &mut NameSupply) -> Type {
        let mut renaming = Renaming::default();
        for var in self.type_vars() {
            renaming.entry(var.clone()).or_insert_with(|| names.fresh());
        }
        self.rename_vars(&renaming)
    }

    /// See [`TypeArray::fresh_parameter_names`]. Leaves are returned as is.
    pub fn fresh_parameter_names(&self, names: &mut NameSupply) -> Type {
        match self {
            Type::Array(array) => Type::Array(array.fresh_parameter_names(names)),
            _ => self.clone(),
        }
    }

    /// Rename variables to `t0, t1, ...` in order of first occurrence.
    pub fn normalize_var_names(&self) -> Type {
        self.rename_in_order(|i| Name::from(format!("t{i}")))
    }

    /// Rename variables to `a, b, ..., z, aa, ab, ...` in order of first
    /// occurrence.
    pub fn alphabetize_var_names(&self) -> Type {
        self.rename_in_order(|i| Name::from(alphabetic_name(i)))
    }

    fn rename_in_order(&self, mut name_for: impl FnMut(usize) -> Name) -> Type {
        let mut renaming = Renaming::default();
        for var in self.type_vars() {
            if !renaming.contains_key(var) {
                let name = name_for(renaming.len());
                renaming.insert(var.clone(), name);
            }
        }
        self.rename_vars(&renaming)
    }
}

/// Bijective base-26: `0 -> a`, `25 -> z`, `26 -> aa`.
fn alphabetic_name(mut index: usize) -> String {
    const LETTERS: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";
    let mut letters = Vec::new();
    loop {
        letters.push(LETTERS[index % 26]);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    letters.reverse();
    String::from_utf8_lossy(&letters).into_owned()
}

/// Which canonical renaming to apply before display.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Naming {
    /// `t0, t1, ...`
    #[default]
    Numeric,
    /// `a, b, ...`
    Alphabetic,
}

impl Naming {
    pub fn apply(self, ty: &Type) -> Type {
        match self {
            Naming::Numeric => ty.normalize_var_names(),
            Naming::Alphabetic => ty.alphabetize_var_names(),
        }
    }
}

/// Equal up to a consistent renaming of variables.
pub fn are_types_same(left: &Type, right: &Type) -> bool {
    left.normalize_var_names().to_string() == right.normalize_var_names().to_string()
}

/// Check the invariants clients rely on.
///
/// A type is invalid if it contains a recursive-reference marker, or if a
/// function quantifies a variable that does not occur in its input.
pub fn is_valid(ty: &Type) -> bool {
    if ty.flags().has_recursive_marker() {
        return false;
    }
    ty.descendants().all(|node| match node.as_function() {
        Some((input, _)) => node
            .type_parameter_names()
            .into_iter()
            .all(|param| input.variable_occurs(param.as_str())),
        None => true,
    })
}

impl NameSupply {
    /// A supply whose names do not clash with any generated name in `ty`.
    pub fn avoiding(ty: &Type) -> NameSupply {
        let next = ty
            .type_vars()
            .into_iter()
            .filter_map(|name| name.as_str().strip_prefix('$')?.parse::<u32>().ok())
            .max()
            .map_or(0, |highest| highest.saturating_add(1));
        NameSupply::starting_at(next)
    }
}
