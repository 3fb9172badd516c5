//! Function composition operators.
//!
//! Stack effects of a concatenative program are function types from an
//! input stack to an output stack. Stacks are cons cells ending in a row
//! variable: `(a (b rest))`. A program's type is the sequential composition
//! of the types of its terms.

use tracing::debug;

use crate::{NameSupply, Type, TypeError, Unifier};

/// Direction of a chain fold. Both give the same canonical type for
/// programs without self-reference.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CompositionOrder {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl CompositionOrder {
    pub fn compose_chain(self, functions: &[Type]) -> Result<Type, TypeError> {
        match self {
            CompositionOrder::LeftToRight => compose_function_chain(functions),
            CompositionOrder::RightToLeft => compose_function_chain_reverse(functions),
        }
    }
}

/// `f` then `g`: the output of `f` feeds the input of `g`.
///
/// Both operands are freshened apart before unification; the result has
/// parameters recomputed and canonical variable names.
pub fn compose_functions(f: &Type, g: &Type) -> Result<Type, TypeError> {
    let mut unifier = Unifier::new();
    let (input_f, output_f) = freshened_parts(f, unifier.names_mut())?;
    let (input_g, output_g) = freshened_parts(g, unifier.names_mut())?;

    unifier.unify_types(&output_f, &input_g)?;
    let input = unifier.get_unified_type(&input_f);
    let output = unifier.get_unified_type(&output_g);
    let composed = Type::function(input, output).normalize_var_names();
    debug!(%f, %g, %composed, "compose");
    Ok(composed)
}

fn freshened_parts(ty: &Type, names: &mut NameSupply) -> Result<(Type, Type), TypeError> {
    ty.fresh_variable_names(names)
        .into_function()
        .ok_or_else(|| TypeError::NotAFunction { ty: ty.clone() })
}

/// Left fold of [`compose_functions`]. An empty chain is the identity.
pub fn compose_function_chain(functions: &[Type]) -> Result<Type, TypeError> {
    let Some((first, rest)) = functions.split_first() else {
        return Ok(id_function());
    };
    rest.iter()
        .try_fold(first.clone(), |composed, g| compose_functions(&composed, g))
}

/// Right fold of [`compose_functions`]. An empty chain is the identity.
pub fn compose_function_chain_reverse(functions: &[Type]) -> Result<Type, TypeError> {
    let Some((last, rest)) = functions.split_last() else {
        return Ok(id_function());
    };
    rest.iter()
        .rev()
        .try_fold(last.clone(), |composed, f| compose_functions(f, &composed))
}

/// The stack effect that pushes a value of type `value`:
/// `(_ -> (value _))`, or `(_ -> _)` without a value.
pub fn quotation(value: Option<&Type>) -> Type {
    let row = Type::variable("_");
    let output = match value {
        Some(value) => {
            let value = value.fresh_parameter_names(&mut NameSupply::avoiding(value));
            Type::array(vec![value, row.clone()])
        }
        None => row.clone(),
    };
    Type::function(row, output).normalize_var_names()
}

/// `!t0.(t0 -> t0)`
pub fn id_function() -> Type {
    quotation(None)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
