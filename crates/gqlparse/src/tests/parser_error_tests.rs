//! Tests for parser failures: unexpected tokens, premature EOF, lexical
//! errors surfacing through the parser, nesting limits and invalid UTF-8.

use crate::Parser;
use crate::SyntaxError;
use crate::SyntaxErrorKind;
use crate::parse;
use crate::parse_bytes;
use crate::tests::utils::MockTokenSource;
use crate::tests::utils::mock_name_token;
use crate::tests::utils::mock_punctuator_token;
use crate::token::Punctuator;

fn parse_err(source: &str) -> SyntaxError {
    match parse(source) {
        Ok(doc) => panic!("expected {source:?} to fail, got {doc:?}"),
        Err(err) => err,
    }
}

// =============================================================================
// Unexpected tokens and EOF
// =============================================================================

/// Verifies that a missing `:` reports the expected and found tokens with the
/// offending token's position.
#[test]
fn unexpected_token() {
    let err = parse_err("{ user(id 1) }");
    assert_eq!(
        err.kind(),
        &SyntaxErrorKind::UnexpectedToken {
            expected: vec!["`:`".to_string()],
            found: "int `1`".to_string(),
        },
    );
    assert_eq!(err.message(), "expected `:`, found int `1`");
    assert_eq!((err.line(), err.position()), (1, 11));
}

/// Verifies that an unclosed selection set fails at EOF with a note pointing
/// at the opening brace.
#[test]
fn unclosed_selection_set() {
    let err = parse_err("{ hello");
    assert_eq!(
        err.kind(),
        &SyntaxErrorKind::UnexpectedEof {
            expected: vec!["a name".to_string()],
        },
    );
    assert_eq!(err.message(), "expected a name, found end of input");
    assert_eq!((err.line(), err.position()), (1, 8));
    assert_eq!(err.notes().len(), 1);
    assert_eq!(err.notes()[0].message, "selection set opened at 1:1 was never closed");
}

/// Verifies that empty documents are rejected.
#[test]
fn empty_document() {
    for source in ["", "   ", "# just a comment\n"] {
        let err = parse_err(source);
        assert!(
            matches!(err.kind(), SyntaxErrorKind::UnexpectedEof { .. }),
            "for {source:?}: {err:?}",
        );
    }
}

/// Verifies that a stray closing brace is not a definition.
#[test]
fn stray_closing_brace() {
    let err = parse_err("query Q { a } }");
    assert_eq!(err.message(), "expected a definition, found `}`");
    assert_eq!((err.line(), err.position()), (1, 15));
}

/// Verifies that empty selection sets are rejected.
#[test]
fn empty_selection_set() {
    let err = parse_err("{ }");
    assert_eq!(err.message(), "expected a name, found `}`");
}

/// Verifies that a definition without a selection set is rejected.
#[test]
fn operation_without_selection_set() {
    let err = parse_err("query Q");
    assert_eq!(
        err.kind(),
        &SyntaxErrorKind::UnexpectedEof {
            expected: vec!["`{`".to_string()],
        },
    );
}

/// Verifies that a field-less type definition reads a following shorthand
/// query as its field list.
#[test]
fn field_list_absorbs_following_shorthand_query() {
    let err = parse_err("type Foo\n{ hello }");
    assert_eq!(err.message(), "expected `:`, found `}`");
    assert_eq!((err.line(), err.position()), (2, 9));
}

// =============================================================================
// Grammar-specific restrictions
// =============================================================================

/// Verifies that a fragment may not be named `on`.
#[test]
fn fragment_named_on() {
    let err = parse_err("fragment on on T { a }");
    assert_eq!(
        err.kind(),
        &SyntaxErrorKind::UnexpectedToken {
            expected: vec!["a fragment name".to_string()],
            found: "name `on`".to_string(),
        },
    );
    assert_eq!(err.notes().len(), 1);
}

/// Verifies that only type system definitions may carry descriptions.
#[test]
fn description_on_operation() {
    let err = parse_err(r#""Describes a query" query { a }"#);
    assert_eq!(err.message(), "expected a type system definition, found name `query`");
    assert_eq!(err.notes()[0].message, "only type system definitions may have descriptions");
}

/// Verifies that enum values cannot be `true`, `false` or `null`.
#[test]
fn reserved_enum_value_names() {
    for reserved in ["true", "false", "null"] {
        let source = format!("enum E {{ A {reserved} }}");
        let err = parse_err(&source);
        assert_eq!(err.message(), format!("enum values cannot be named `{reserved}`"));
        assert_eq!(err.position(), 12);
    }
}

/// Verifies that directive locations must be known upper-case names.
#[test]
fn unknown_directive_location() {
    let err = parse_err("directive @d on field");
    assert_eq!(err.message(), "expected a directive location, found name `field`");
    assert_eq!(err.notes()[0].kind, crate::ErrorNoteKind::Help);
}

/// Verifies that `extend` must be followed by an extensible keyword.
#[test]
fn bad_extension_keyword() {
    let err = parse_err("extend directive @d on FIELD");
    assert!(matches!(err.kind(), SyntaxErrorKind::UnexpectedToken { .. }));
    assert_eq!(err.position(), 8);
}

/// Verifies that an extension which adds nothing is rejected, reporting what
/// could have followed it.
#[test]
fn empty_extensions() {
    let err = parse_err("extend schema");
    assert_eq!(
        err.kind(),
        &SyntaxErrorKind::UnexpectedEof {
            expected: vec!["`@`".to_string(), "`{`".to_string()],
        },
    );

    let err = parse_err("extend type Foo");
    assert_eq!(err.message(), "expected `implements` or `@` or `{`, found end of input");

    let err = parse_err("extend scalar S type T { a: Int }");
    assert_eq!(
        err.kind(),
        &SyntaxErrorKind::UnexpectedToken {
            expected: vec!["`@`".to_string()],
            found: "name `type`".to_string(),
        },
    );
    assert_eq!(err.position(), 17);

    for source in ["extend interface I", "extend union U", "extend enum E", "extend input In"] {
        let err = parse_err(source);
        assert!(matches!(err.kind(), SyntaxErrorKind::UnexpectedEof { .. }), "{source}");
    }
}

/// Verifies that a non-extension schema definition requires root operation
/// types.
#[test]
fn schema_without_root_operations() {
    let err = parse_err("schema @a");
    assert!(matches!(err.kind(), SyntaxErrorKind::UnexpectedEof { .. }));
}

// =============================================================================
// Lexical errors
// =============================================================================

/// Verifies that an `Illegal` number token becomes a lexical error carrying
/// the lexer's diagnostic.
#[test]
fn lexical_error_number() {
    let err = parse_err("{ f(a: 01) }");
    assert_eq!(err.kind(), &SyntaxErrorKind::Lexical);
    assert_eq!(err.message(), "invalid number, unexpected digit after 0: '1'");
    assert_eq!((err.line(), err.position()), (1, 8));
}

/// Verifies that an unrecognized character becomes a lexical error naming
/// it.
#[test]
fn lexical_error_character() {
    let err = parse_err("{ a ? }");
    assert_eq!(err.kind(), &SyntaxErrorKind::Lexical);
    assert_eq!(err.message(), "unexpected character `?`");
    assert_eq!(err.position(), 5);
}

/// Verifies that a control character in a string becomes a lexical error.
#[test]
fn lexical_error_string() {
    let err = parse_err("{ f(a: \"x\u{0001}y\") }");
    assert_eq!(err.kind(), &SyntaxErrorKind::Lexical);
    assert_eq!(err.message(), "invalid character within string: U+0001");

    let err = parse_err(r#"{ f(a: "abc) }"#);
    assert_eq!(err.message(), "unterminated string");
}

// =============================================================================
// Nesting limits
// =============================================================================

/// Verifies that 64 nested selection sets parse but 65 do not.
#[test]
fn selection_set_nesting_limit() {
    let nested = |depth: usize| {
        format!("{}{{ b{}", "{ a ".repeat(depth - 1), " }".repeat(depth))
    };
    assert!(parse(&nested(64)).is_ok());

    let err = parse_err(&nested(65));
    assert_eq!(err.kind(), &SyntaxErrorKind::RecursionLimitExceeded);
}

/// Verifies the nesting limit for list values.
#[test]
fn list_value_nesting_limit() {
    let source = format!("{{ f(a: {}) }}", "[".repeat(100));
    let err = parse_err(&source);
    assert_eq!(err.kind(), &SyntaxErrorKind::RecursionLimitExceeded);
}

/// Verifies the nesting limit for list types.
#[test]
fn list_type_nesting_limit() {
    let source = format!("query ($v: {}Int) {{ a }}", "[".repeat(100));
    let err = parse_err(&source);
    assert_eq!(err.kind(), &SyntaxErrorKind::RecursionLimitExceeded);
}

// =============================================================================
// Byte input
// =============================================================================

/// Verifies that invalid UTF-8 is reported at the first invalid byte.
#[test]
fn invalid_utf8() {
    let err = match parse_bytes(b"{ a }\n{ \xFF }") {
        Ok(doc) => panic!("expected failure, got {doc:?}"),
        Err(err) => err,
    };
    assert_eq!(err.kind(), &SyntaxErrorKind::InvalidUtf8);
    assert_eq!((err.line(), err.position()), (2, 3));
}

/// Verifies that valid byte input parses like the equivalent string.
#[test]
fn valid_bytes() {
    let doc = parse_bytes(b"{ a }").unwrap();
    assert_eq!(doc, parse("{ a }").unwrap());
}

// =============================================================================
// Custom token sources
// =============================================================================

/// Verifies that a token source ending without an EOF token is treated as
/// ending at EOF.
#[test]
fn token_source_without_eof() {
    let tokens = MockTokenSource::new(vec![
        mock_punctuator_token(Punctuator::CurlyBraceOpen),
        mock_name_token("a"),
        mock_punctuator_token(Punctuator::CurlyBraceClose),
    ]);
    let doc = Parser::from_token_source(tokens).parse_document().unwrap();
    assert_eq!(doc.operations().count(), 1);
}

/// Verifies that a token source running dry mid-definition yields an EOF
/// error positioned after the last token.
#[test]
fn token_source_ends_early() {
    let tokens = MockTokenSource::new(vec![mock_name_token("query")]);
    let err = match Parser::from_token_source(tokens).parse_document() {
        Ok(doc) => panic!("expected failure, got {doc:?}"),
        Err(err) => err,
    };
    assert_eq!(
        err.kind(),
        &SyntaxErrorKind::UnexpectedEof {
            expected: vec!["`{`".to_string()],
        },
    );
    assert_eq!((err.line(), err.position()), (1, 6));
}
