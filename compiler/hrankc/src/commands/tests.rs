use pretty_assertions::assert_eq;

use hrank_types::{CompositionOrder, Naming};

use super::*;

fn env() -> CatTypeEnv {
    CatTypeEnv::standard().unwrap()
}

#[test]
fn test_infer_cat_default() {
    let out = infer_cat("dup", &env(), &InferOptions::default()).unwrap();
    assert_eq!(out, "!t0!t1.((t0 t1) -> (t0 (t0 t1)))");
}

#[test]
fn test_infer_cat_alpha_pretty() {
    let options = InferOptions {
        naming: Naming::Alphabetic,
        pretty: true,
        ..InferOptions::default()
    };
    let out = infer_cat("swap", &env(), &options).unwrap();
    assert_eq!(out, "(a b c -> b a c)");
}

#[test]
fn test_infer_cat_reverse() {
    let options = InferOptions {
        order: CompositionOrder::RightToLeft,
        ..InferOptions::default()
    };
    let out = infer_cat("swap quote compose apply", &env(), &options).unwrap();
    assert_eq!(out, "!t1!t2.(!t0.((t0 -> t1) (t2 t0)) -> (t2 t1))");
}

#[test]
fn test_check_rejects_recursive_types() {
    let options = InferOptions {
        check: true,
        ..InferOptions::default()
    };
    assert!(infer_cat("dup", &env(), &options).is_ok());
    let err = infer_cat("dup apply", &env(), &options).unwrap_err();
    assert!(matches!(err, CliError::Invalid { .. }), "{err}");
}

#[test]
fn test_infer_term_by_name_and_source() {
    let options = InferOptions {
        naming: Naming::Alphabetic,
        ..InferOptions::default()
    };
    assert_eq!(infer_term("k", &options).unwrap(), "!a.(a -> !b.(b -> a))");
    assert_eq!(
        infer_term(r"\x.\y.x", &options).unwrap(),
        "!a.(a -> !b.(b -> a))"
    );
}

#[test]
fn test_unify_reports_bindings() {
    let out = unify("('a -> Num)", "(Bool -> 'b)").unwrap();
    assert_eq!(out, "(Bool -> Num)\na => a: Bool\nb => b: Num");
}

#[test]
fn test_unify_arity_mismatch() {
    let err = unify("('a 'b)", "('a 'b 'c)").unwrap_err();
    assert!(matches!(err, CliError::Unify(_)), "{err}");
}

#[test]
fn test_library_lists_every_word() {
    let env = env();
    let out = library(&env, &InferOptions::default()).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), env.len());
    assert_eq!(lines[0], "apply     !t1.(!t0.((t0 -> t1) t0) -> t1)");
}

#[test]
fn test_combinators_all_infer() {
    let options = InferOptions {
        naming: Naming::Alphabetic,
        ..InferOptions::default()
    };
    let out = combinators(&options).unwrap();
    assert_eq!(out.lines().count(), COMBINATORS.len());
    assert!(out.lines().any(|line| line == "i       !a.(a -> a)"));
}

#[test]
fn test_batch_keeps_input_order() {
    let source = "dup\n\n  0 1  \nbogus\nswap swap\n";
    let report = batch(source, &env(), &InferOptions::default());
    assert_eq!(
        report.lines,
        vec![
            "dup : !t0!t1.((t0 t1) -> (t0 (t0 t1)))".to_owned(),
            "0 1 : !t0.(t0 -> (Num (Num t0)))".to_owned(),
            "bogus : error: unknown word: bogus".to_owned(),
            "swap swap : !t0!t1!t2.((t0 (t1 t2)) -> (t0 (t1 t2)))".to_owned(),
        ]
    );
    assert_eq!(report.failures, 1);
}

#[test]
fn test_batch_file_missing() {
    let err = batch_file("/nonexistent/programs.cat", &env(), &InferOptions::default())
        .unwrap_err();
    assert!(matches!(err, CliError::Read { .. }), "{err}");
}
