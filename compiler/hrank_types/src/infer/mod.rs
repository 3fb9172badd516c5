//! Scoped inference engine.
//!
//! A flat environment stack of `(name, type)` pairs plus one [`Unifier`]
//! that lives as long as the engine. Clients push a variable when entering
//! a binder, pop it when leaving, and apply functions as they walk a term.
//! Shadowing resolves to the innermost entry.

use tracing::debug;

use crate::{Name, Type, TypeError, Unifier};

#[derive(Debug, Default)]
pub struct ScopedInferenceEngine {
    names: Vec<Name>,
    types: Vec<Type>,
    unifier: Unifier,
    /// Suffix counter for generated variable names.
    next_id: u32,
}

impl ScopedInferenceEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// A variable named `base$N`, unique within this engine.
    fn fresh_variable(&mut self, base: &str) -> Type {
        let var = Type::variable(format!("{base}${}", self.next_id));
        self.next_id += 1;
        var
    }

    /// Push a fresh variable for `name` and return it.
    pub fn introduce_variable(&mut self, name: &str) -> Type {
        let var = self.fresh_variable(name);
        debug!(name, %var, depth = self.names.len(), "introduce");
        self.names.push(Name::new(name));
        self.types.push(var.clone());
        var
    }

    /// Pop the innermost variable.
    pub fn pop_variable(&mut self) -> Option<(Name, Type)> {
        let name = self.names.pop()?;
        let ty = self.types.pop()?;
        Some((name, ty))
    }

    /// Run `body` with `name` in scope. The variable is popped on every
    /// exit path, including errors.
    pub fn with_variable<T, E>(
        &mut self,
        name: &str,
        body: impl FnOnce(&mut Self, Type) -> Result<T, E>,
    ) -> Result<T, E> {
        let var = self.introduce_variable(name);
        let result = body(self, var);
        self.pop_variable();
        result
    }

    /// Number of variables currently in scope.
    pub fn depth(&self) -> usize {
        self.names.len()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().rposition(|n| n.as_str() == name)
    }

    /// The current unified type of the innermost `name`.
    pub fn lookup_variable(&mut self, name: &str) -> Result<Type, TypeError> {
        let index = self
            .position(name)
            .ok_or_else(|| TypeError::UnboundVariable { name: Name::new(name) })?;
        let ty = self.types[index].clone();
        Ok(self.get_unified_type(&ty))
    }

    /// Like [`lookup_variable`](Self::lookup_variable), but introduces the
    /// variable when it is not in scope.
    pub fn lookup_or_introduce_variable(&mut self, name: &str) -> Type {
        match self.lookup_variable(name) {
            Ok(ty) => ty,
            Err(_) => self.introduce_variable(name),
        }
    }

    /// Unify the current type of `name` with `ty`.
    pub fn assign_variable(&mut self, name: &str, ty: &Type) -> Result<Type, TypeError> {
        let current = self.lookup_variable(name)?;
        Ok(self.unifier.unify_types(&current, ty)?)
    }

    /// Type of applying `function` to `argument`.
    ///
    /// A variable in function position is first unified with a fresh
    /// `(input -> output)`. The returned output type is not resolved.
    pub fn apply_function(&mut self, function: &Type, argument: &Type) -> Result<Type, TypeError> {
        let function = match function {
            _ if function.is_function() => function.clone(),
            Type::Variable(name) => {
                let input = self.fresh_variable(&format!("{name}_i"));
                let output = self.fresh_variable(&format!("{name}_o"));
                let synthesized = Type::function(input, output);
                self.unifier.unify_types(function, &synthesized)?;
                synthesized
            }
            _ => return Err(TypeError::NotApplicable { ty: function.clone() }),
        };
        let Some((input, output)) = function.as_function() else {
            return Err(TypeError::NotApplicable { ty: function.clone() });
        };
        self.unifier.unify_types(input, argument)?;
        Ok(output.clone())
    }

    /// Resolve `ty` against everything unified so far, with parameters
    /// recomputed.
    pub fn get_unified_type(&mut self, ty: &Type) -> Type {
        let mut resolved = self.unifier.get_unified_type(ty);
        resolved.compute_parameters();
        resolved
    }

    pub fn unifier(&self) -> &Unifier {
        &self.unifier
    }

    /// Dump of the environment (innermost last) and the unifier table.
    pub fn state(&mut self) -> String {
        let mut lines = Vec::with_capacity(self.names.len() + 1);
        for index in 0..self.names.len() {
            let ty = self.types[index].clone();
            let resolved = self.get_unified_type(&ty);
            lines.push(format!("{} : {ty} = {resolved}", self.names[index]));
        }
        lines.push(self.unifier.state());
        lines.join("\n")
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
