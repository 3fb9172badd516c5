//! Term inference on the scoped engine.
//!
//! An abstraction scopes a fresh variable over its body and builds
//! `(param -> body)`. A variable reference reads the current unified type
//! of the innermost binding. Numbers are `Num`. An application sequence
//! folds left through [`ScopedInferenceEngine::apply_function`].

use hrank_stack::ensure_sufficient_stack;
use hrank_syntax::{parse_lambda, LambdaExpr};
use hrank_types::{Naming, ScopedInferenceEngine, Type, TypeError};

use crate::LambdaError;

/// Parse and infer a term, renaming variables with `naming`.
#[tracing::instrument(level = "debug", skip(naming))]
pub fn infer_lambda(source: &str, naming: Naming) -> Result<Type, LambdaError> {
    let expr = parse_lambda(source)?;
    Ok(naming.apply(&infer_type(&expr)?))
}

/// Principal type of `expr`, resolved and with parameters computed.
/// Variable names are the engine's generated names.
pub fn infer_type(expr: &LambdaExpr) -> Result<Type, TypeError> {
    let mut engine = ScopedInferenceEngine::new();
    let ty = infer_in(&mut engine, expr)?;
    Ok(engine.get_unified_type(&ty))
}

/// Infer `expr` against the bindings already in `engine`. The result is
/// not resolved.
pub fn infer_in(engine: &mut ScopedInferenceEngine, expr: &LambdaExpr) -> Result<Type, TypeError> {
    ensure_sufficient_stack(|| match expr {
        LambdaExpr::Abstraction { param, body } => engine.with_variable(param, |engine, var| {
            let body = infer_in(engine, body)?;
            Ok(Type::function(var, body))
        }),
        LambdaExpr::Variable(name) => engine.lookup_variable(name),
        LambdaExpr::Number(_) => Ok(Type::constant("Num")),
        LambdaExpr::Application(items) => {
            let Some((head, args)) = items.split_first() else {
                return Err(TypeError::NotApplicable {
                    ty: Type::array(Vec::new()),
                });
            };
            let mut function = infer_in(engine, head)?;
            for arg in args {
                let arg = infer_in(engine, arg)?;
                function = engine.apply_function(&function, &arg)?;
            }
            Ok(function)
        }
    })
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
