//! Command handlers.
//!
//! Each handler returns the text to print on success. Errors are printed by
//! the binary, which then exits with status 1.

use rayon::prelude::*;
use tracing::debug;

use hrank_cat::{infer_program, CatTypeEnv};
use hrank_lambda::{combinator, infer_lambda, COMBINATORS};
use hrank_syntax::parse_type;
use hrank_types::{is_valid, Type, Unifier};

use crate::{CliError, InferOptions};

/// Render an inferred type according to `options`.
fn render(ty: &Type, options: &InferOptions) -> Result<String, CliError> {
    let ty = options.naming.apply(ty);
    if options.check && !is_valid(&ty) {
        return Err(CliError::Invalid { ty });
    }
    Ok(if options.pretty {
        ty.pretty().to_string()
    } else {
        ty.to_string()
    })
}

/// `hrank cat <program>`
pub fn infer_cat(
    program: &str,
    env: &CatTypeEnv,
    options: &InferOptions,
) -> Result<String, CliError> {
    let ty = infer_program(program, env, options.order)?;
    render(&ty, options)
}

/// `hrank lambda <term>`. A known combinator name stands for its source.
pub fn infer_term(term: &str, options: &InferOptions) -> Result<String, CliError> {
    let source = combinator(term).unwrap_or(term);
    let ty = infer_lambda(source, options.naming)?;
    render(&ty, options)
}

/// `hrank unify <left> <right>`: the unified type, then the substitution
/// table.
pub fn unify(left: &str, right: &str) -> Result<String, CliError> {
    let left = parse_type(left)?;
    let right = parse_type(right)?;
    let mut unifier = Unifier::new();
    let unified = unifier.unify_types(&left, &right)?;
    let mut resolved = unifier.get_unified_type(&unified);
    resolved.compute_parameters();

    let mut out = resolved.to_string();
    let state = unifier.state();
    if !state.is_empty() {
        out.push('\n');
        out.push_str(&state);
    }
    Ok(out)
}

/// `hrank library`: every word of `env` with its type.
pub fn library(env: &CatTypeEnv, options: &InferOptions) -> Result<String, CliError> {
    let width = env.iter().map(|(word, _)| word.len()).max().unwrap_or(0);
    let lines = env
        .iter()
        .map(|(word, ty)| Ok(format!("{word:<width$}  {}", render(ty, options)?)))
        .collect::<Result<Vec<_>, CliError>>()?;
    Ok(lines.join("\n"))
}

/// `hrank combinators`: the classic lambda terms with their types.
pub fn combinators(options: &InferOptions) -> Result<String, CliError> {
    let width = COMBINATORS.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    let lines = COMBINATORS
        .iter()
        .map(|(name, source)| {
            let ty = infer_lambda(source, options.naming)?;
            Ok(format!("{name:<width$}  {}", render(&ty, options)?))
        })
        .collect::<Result<Vec<_>, CliError>>()?;
    Ok(lines.join("\n"))
}

/// Outcome of `hrank batch`.
#[derive(Debug)]
pub struct BatchReport {
    /// One line per program, in input order.
    pub lines: Vec<String>,
    pub failures: usize,
}

/// Infer each non-blank line of `source` as a separate program.
///
/// Programs are independent problems and run in parallel; a failure is
/// reported on its own line and does not stop the others.
pub fn batch(source: &str, env: &CatTypeEnv, options: &InferOptions) -> BatchReport {
    let programs: Vec<&str> = source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    debug!(count = programs.len(), "batch");

    let results: Vec<Result<String, CliError>> = programs
        .par_iter()
        .map(|program| infer_cat(program, env, options))
        .collect();

    let mut failures = 0;
    let lines = programs
        .iter()
        .zip(results)
        .map(|(program, result)| match result {
            Ok(ty) => format!("{program} : {ty}"),
            Err(err) => {
                failures += 1;
                format!("{program} : error: {err}")
            }
        })
        .collect();
    BatchReport { lines, failures }
}

/// [`batch`] over the contents of a file.
pub fn batch_file(
    path: &str,
    env: &CatTypeEnv,
    options: &InferOptions,
) -> Result<BatchReport, CliError> {
    let source = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })?;
    Ok(batch(&source, env, options))
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
