use pretty_assertions::assert_eq;

use super::*;
use crate::testing::{apply, compose, con, dup, pop, quote, swap, var};
use crate::are_types_same;

fn chain(functions: &[Type]) -> String {
    compose_function_chain(functions).unwrap().normalize_var_names().to_string()
}

#[test]
fn identity_function() {
    assert_eq!(id_function().to_string(), "!t0.(t0 -> t0)");
    assert_eq!(chain(&[]), "!t0.(t0 -> t0)");
}

#[test]
fn quotation_pushes_a_value() {
    assert_eq!(
        quotation(Some(&con("Num"))).to_string(),
        "!t0.(t0 -> (Num t0))"
    );
}

#[test]
fn quotation_of_a_polytype_keeps_it_quantified() {
    assert_eq!(
        quotation(Some(&dup())).to_string(),
        "!t0.(t0 -> (!t1!t2.((t1 t2) -> (t1 (t1 t2))) t0))"
    );
}

#[test]
fn single_primitives() {
    assert_eq!(chain(&[dup()]), "!t0!t1.((t0 t1) -> (t0 (t0 t1)))");
    assert_eq!(chain(&[swap()]), "!t0!t1!t2.((t0 (t1 t2)) -> (t1 (t0 t2)))");
    assert_eq!(chain(&[pop()]), "!t1.(!t0.(t0 t1) -> t1)");
}

#[test]
fn dip_like_sequence() {
    assert_eq!(
        chain(&[swap(), quote(), compose(), apply()]),
        "!t1!t2.(!t0.((t0 -> t1) (t2 t0)) -> (t2 t1))"
    );
}

#[test]
fn composition_after_pop() {
    assert_eq!(
        chain(&[compose(), pop()]),
        "!t3.(!t0.(!t1.(t0 -> t1) (!t2.(t2 -> t0) t3)) -> t3)"
    );
}

#[test]
fn self_application_produces_a_marker() {
    assert_eq!(
        chain(&[dup(), apply()]),
        "!t1.(!t0.((((rec 1) t0) -> t1) t0) -> t1)"
    );
}

#[test]
fn pushed_literal_is_applied() {
    let push_quoted = quotation(Some(&id_function()));
    assert_eq!(chain(&[push_quoted, apply()]), "!t0.(t0 -> t0)");
}

#[test]
fn identity_is_neutral() {
    for f in [dup(), swap(), pop(), apply(), quote(), compose()] {
        let left = compose_functions(&id_function(), &f).unwrap();
        let right = compose_functions(&f, &id_function()).unwrap();
        assert!(are_types_same(&left, &f), "id . {f}");
        assert!(are_types_same(&right, &f), "{f} . id");
    }
}

#[test]
fn folds_agree() {
    let functions = [swap(), quote(), compose()];
    let forward = compose_function_chain(&functions).unwrap();
    let backward = compose_function_chain_reverse(&functions).unwrap();
    assert!(are_types_same(&forward, &backward));
    assert_eq!(
        forward.to_string(),
        "!t0!t1!t2!t3.(((t0 -> t1) (t2 t3)) -> ((t0 -> (t2 t1)) t3))"
    );
}

#[test]
fn order_selects_the_fold() {
    let functions = [dup(), swap(), pop()];
    for order in [CompositionOrder::LeftToRight, CompositionOrder::RightToLeft] {
        let composed = order.compose_chain(&functions).unwrap();
        assert_eq!(composed.to_string(), "!t0!t1.((t0 t1) -> (t0 t1))");
    }
}

#[test]
fn operands_must_be_functions() {
    let err = compose_functions(&con("Num"), &dup()).unwrap_err();
    assert_eq!(err, TypeError::NotAFunction { ty: con("Num") });
    let err = compose_functions(&dup(), &var("f")).unwrap_err();
    assert_eq!(err, TypeError::NotAFunction { ty: var("f") });
}

#[test]
fn mismatched_stacks_widen_instead_of_failing() {
    let push_num = quotation(Some(&con("Num")));
    let composed = compose_functions(&push_num, &apply()).unwrap();
    assert_eq!(composed.to_string(), "!t0!t1.(t0 -> t1)");
}
