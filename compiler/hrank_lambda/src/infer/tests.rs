use pretty_assertions::assert_eq;

use super::*;

fn parse(source: &str) -> LambdaExpr {
    parse_lambda(source).unwrap()
}

#[test]
fn test_number() {
    assert_eq!(infer_type(&parse("0")).unwrap(), Type::constant("Num"));
}

#[test]
fn test_identity_uses_engine_names() {
    let ty = infer_type(&parse(r"\x.x")).unwrap();
    assert_eq!(ty.to_string(), "!x$0.(x$0 -> x$0)");
}

#[test]
fn test_unbound_variable() {
    let err = infer_type(&parse(r"\x.y")).unwrap_err();
    assert_eq!(err.to_string(), "could not find variable: y");
}

#[test]
fn test_scope_is_restored_after_error() {
    let mut engine = ScopedInferenceEngine::new();
    let result = infer_in(&mut engine, &parse(r"\x.\y.0 x"));
    assert!(matches!(result, Err(TypeError::NotApplicable { .. })));
    assert_eq!(engine.depth(), 0);
}

#[test]
fn test_infer_in_sees_outer_bindings() {
    let mut engine = ScopedInferenceEngine::new();
    engine.introduce_variable("n");
    let ty = infer_in(&mut engine, &parse("n 0")).unwrap();
    let resolved = engine.get_unified_type(&ty);
    assert_eq!(resolved, Type::variable("n$0_o$2"));
    let n = engine.lookup_variable("n").unwrap();
    assert_eq!(n.to_string(), "!n$0_o$2.(Num -> n$0_o$2)");
    assert_eq!(engine.depth(), 1);
}

#[test]
fn test_shadowing_uses_innermost() {
    let ty = infer_lambda(r"\x.\x.x", Naming::Alphabetic).unwrap();
    assert_eq!(ty.to_string(), "!a.(a -> !b.(b -> b))");
}
