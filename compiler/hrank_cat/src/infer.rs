//! Program inference.
//!
//! A literal pushes a constant, a quotation pushes the stack effect of its
//! body, and a sequence composes the effects of its terms.

use tracing::trace;

use hrank_syntax::{parse_cat, CatTerm};
use hrank_types::{quotation, CompositionOrder, Type};

use crate::{CatError, CatTypeEnv};

/// Parse and infer a program. The result has canonical variable names.
pub fn infer_program(
    source: &str,
    env: &CatTypeEnv,
    order: CompositionOrder,
) -> Result<Type, CatError> {
    let terms = parse_cat(source)?;
    infer_terms(&terms, env, order)
}

/// Infer a parsed program. The result has canonical variable names.
pub fn infer_terms(
    terms: &[CatTerm],
    env: &CatTypeEnv,
    order: CompositionOrder,
) -> Result<Type, CatError> {
    let types = terms
        .iter()
        .map(|term| term_type(term, env, order))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(order.compose_chain(&types)?.normalize_var_names())
}

fn term_type(
    term: &CatTerm,
    env: &CatTypeEnv,
    order: CompositionOrder,
) -> Result<Type, CatError> {
    let ty = match term {
        CatTerm::Number(_) => quotation(Some(&Type::constant("Num"))),
        CatTerm::Bool(_) => quotation(Some(&Type::constant("Bool"))),
        CatTerm::Word(word) => env
            .get(word)
            .cloned()
            .ok_or_else(|| CatError::UnknownWord(word.clone()))?,
        CatTerm::Quotation(body) => quotation(Some(&infer_terms(body, env, order)?)),
    };
    trace!(%term, %ty, "term");
    Ok(ty)
}
