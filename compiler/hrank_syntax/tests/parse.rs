//! Parser tests across the three grammars.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;

use hrank_syntax::{
    format_program, parse_cat, parse_lambda, parse_type, CatTerm, LambdaExpr, Span, SyntaxError,
};
use hrank_types::Type;

// Type expressions

#[test]
fn type_constant_and_variable() {
    assert_eq!(parse_type("Num").unwrap(), Type::constant("Num"));
    assert_eq!(parse_type("'a").unwrap(), Type::variable("a"));
}

#[test]
fn type_function_gets_parameters() {
    let ty = parse_type("(('a 'b) -> ('a 'b))").unwrap();
    assert!(ty.is_function());
    assert_eq!(ty.to_string(), "!a!b.((a b) -> (a b))");
}

#[test]
fn type_parameters_are_placed_at_the_lowest_shared_node() {
    let ty = parse_type("(('a -> 'a) -> Num)").unwrap();
    assert_eq!(ty.to_string(), "(!a.(a -> a) -> Num)");
    let pop = parse_type("(('a 'b) -> 'b)").unwrap();
    assert_eq!(pop.to_string(), "!b.(!a.(a b) -> b)");
}

#[test]
fn type_special_constants() {
    let ty = parse_type("(| (Num Bool))").unwrap();
    assert!(ty.is_sum());
    assert_eq!(parse_type("[]").unwrap(), Type::constant("[]"));
    assert_eq!(parse_type("*").unwrap(), Type::constant("*"));
}

#[test]
fn type_unclosed_paren() {
    assert_eq!(
        parse_type("(('a -> 'b)").unwrap_err(),
        SyntaxError::Unclosed {
            open: "(",
            span: Span::new(0, 1)
        }
    );
}

#[test]
fn type_trailing_input() {
    let err = parse_type("('a -> 'a))").unwrap_err();
    assert!(matches!(err, SyntaxError::TrailingInput { .. }), "{err}");
    assert_eq!(err.span(), Some(Span::new(10, 11)));
}

#[test]
fn type_empty_input() {
    assert_eq!(
        parse_type("").unwrap_err(),
        SyntaxError::UnexpectedEnd { expected: "a type" }
    );
}

#[test]
fn type_variables_cannot_use_generated_names() {
    assert_eq!(
        parse_type("('$0 -> Num)").unwrap_err(),
        SyntaxError::UnexpectedToken {
            found: "type variable '$0".to_owned(),
            expected: "a type variable not starting with '$'",
            span: Span::new(1, 4),
        }
    );
    assert_eq!(parse_type("'x$0").unwrap(), Type::variable("x$0"));
}

// Concatenative programs

#[test]
fn cat_terms() {
    assert_eq!(
        parse_cat("0 true [dup [] [ ]] swap").unwrap(),
        vec![
            CatTerm::Number("0".into()),
            CatTerm::Bool(true),
            CatTerm::Quotation(vec![
                CatTerm::Word("dup".into()),
                CatTerm::Quotation(vec![]),
                CatTerm::Quotation(vec![]),
            ]),
            CatTerm::Word("swap".into()),
        ]
    );
}

#[test]
fn cat_empty_program() {
    assert_eq!(parse_cat("  // nothing\n").unwrap(), vec![]);
}

#[test]
fn cat_format_round_trip() {
    let terms = parse_cat("[id] dup 0 swap apply false").unwrap();
    assert_eq!(format_program(&terms), "[id] dup 0 swap apply false");
}

#[test]
fn cat_unclosed_quotation() {
    assert_eq!(
        parse_cat("dup [swap [pop]").unwrap_err(),
        SyntaxError::Unclosed {
            open: "[",
            span: Span::new(4, 5)
        }
    );
}

#[test]
fn cat_stray_close() {
    let err = parse_cat("dup ] swap").unwrap_err();
    assert_eq!(
        err,
        SyntaxError::UnexpectedToken {
            found: "']'".into(),
            expected: "a term",
            span: Span::new(4, 5),
        }
    );
}

// Lambda terms

fn var(name: &str) -> LambdaExpr {
    LambdaExpr::Variable(name.into())
}

fn abs(param: &str, body: LambdaExpr) -> LambdaExpr {
    LambdaExpr::Abstraction {
        param: param.into(),
        body: Box::new(body),
    }
}

#[test]
fn lambda_body_extends_right() {
    assert_eq!(
        parse_lambda(r"\x.\y.x y").unwrap(),
        abs("x", abs("y", LambdaExpr::Application(vec![var("x"), var("y")])))
    );
}

#[test]
fn lambda_parentheses_group() {
    assert_eq!(
        parse_lambda(r"(\i.0) \y.y").unwrap(),
        LambdaExpr::Application(vec![
            abs("i", LambdaExpr::Number("0".into())),
            abs("y", var("y")),
        ])
    );
}

#[test]
fn lambda_single_item_is_not_an_application() {
    assert_eq!(parse_lambda("((x))").unwrap(), var("x"));
}

#[test]
fn lambda_errors() {
    assert_eq!(
        parse_lambda("").unwrap_err(),
        SyntaxError::UnexpectedEnd { expected: "a term" }
    );
    assert_eq!(
        parse_lambda(r"\x x").unwrap_err(),
        SyntaxError::UnexpectedToken {
            found: "identifier x".into(),
            expected: "'.'",
            span: Span::new(3, 4),
        }
    );
    assert!(matches!(
        parse_lambda("(x y").unwrap_err(),
        SyntaxError::Unclosed { open: "(", .. }
    ));
    assert!(matches!(
        parse_lambda("x )").unwrap_err(),
        SyntaxError::TrailingInput { .. }
    ));
    assert!(matches!(
        parse_lambda("()").unwrap_err(),
        SyntaxError::UnexpectedToken { expected: "a term", .. }
    ));
}
