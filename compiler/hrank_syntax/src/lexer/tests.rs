use pretty_assertions::assert_eq;

use super::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).unwrap().into_iter().map(|t| t.kind).collect()
}

#[test]
fn test_type_tokens() {
    assert_eq!(
        kinds("(('a Num) -> '$0)"),
        vec![
            TokenKind::LParen,
            TokenKind::LParen,
            TokenKind::TypeVar("a".into()),
            TokenKind::Ident("Num".into()),
            TokenKind::RParen,
            TokenKind::Arrow,
            TokenKind::TypeVar("$0".into()),
            TokenKind::RParen,
        ]
    );
}

#[test]
fn test_empty_brackets_are_one_token() {
    assert_eq!(kinds("[]"), vec![TokenKind::EmptyBrackets]);
    assert_eq!(kinds("[ ]"), vec![TokenKind::LBracket, TokenKind::RBracket]);
}

#[test]
fn test_lambda_tokens() {
    assert_eq!(
        kinds(r"\x.f 0"),
        vec![
            TokenKind::Backslash,
            TokenKind::Ident("x".into()),
            TokenKind::Dot,
            TokenKind::Ident("f".into()),
            TokenKind::Int("0".into()),
        ]
    );
}

#[test]
fn test_comments_and_whitespace_skipped() {
    assert_eq!(
        kinds("dup // copy the top\n\tswap"),
        vec![TokenKind::Ident("dup".into()), TokenKind::Ident("swap".into())]
    );
}

#[test]
fn test_spans() {
    let tokens = lex("ab  [cd]").unwrap();
    let spans: Vec<Span> = tokens.iter().map(|t| t.span).collect();
    assert_eq!(
        spans,
        vec![
            Span::new(0, 2),
            Span::new(4, 5),
            Span::new(5, 7),
            Span::new(7, 8)
        ]
    );
}

#[test]
fn test_invalid_character() {
    let err = lex("dup # swap").unwrap_err();
    assert_eq!(
        err,
        SyntaxError::InvalidCharacter {
            text: "#".into(),
            span: Span::new(4, 5),
        }
    );
    assert_eq!(err.to_string(), "invalid character \"#\" at 4..5");
}

#[test]
fn test_token_descriptions() {
    assert_eq!(TokenKind::RParen.to_string(), "')'");
    assert_eq!(TokenKind::Ident("x".into()).to_string(), "identifier x");
    assert_eq!(TokenKind::TypeVar("a".into()).to_string(), "type variable 'a");
}
