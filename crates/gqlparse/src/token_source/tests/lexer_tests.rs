//! Tests for [`Lexer`].

use crate::token::Punctuator;
use crate::token::Token;
use crate::token::TokenKind;
use crate::token_source::Lexer;
use std::borrow::Cow;

fn tokens(source: &str) -> Vec<Token<'_>> {
    Lexer::new(source).collect()
}

fn token_kinds(source: &str) -> Vec<TokenKind> {
    Lexer::new(source).map(|t| t.kind).collect()
}

/// Lexes `source` and returns the first token, which is expected to be the
/// only non-EOF token.
fn single_token(source: &str) -> Token<'_> {
    let mut tokens = tokens(source);
    assert_eq!(tokens.len(), 2, "expected exactly one token, got {tokens:?}");
    assert_eq!(tokens[1].kind, TokenKind::Eof);
    tokens.remove(0)
}

// =============================================================================
// Punctuators and names
// =============================================================================

/// Verifies that every single-character punctuator and `...` lex correctly.
#[test]
fn punctuators() {
    let kinds = token_kinds("{ } ( ) [ ] : = @ ! $ & | ...");
    let expected: Vec<TokenKind> = [
        Punctuator::CurlyBraceOpen,
        Punctuator::CurlyBraceClose,
        Punctuator::ParenOpen,
        Punctuator::ParenClose,
        Punctuator::SquareBracketOpen,
        Punctuator::SquareBracketClose,
        Punctuator::Colon,
        Punctuator::Equals,
        Punctuator::At,
        Punctuator::Bang,
        Punctuator::Dollar,
        Punctuator::Ampersand,
        Punctuator::Pipe,
        Punctuator::Ellipsis,
    ]
    .into_iter()
    .map(TokenKind::Punctuator)
    .chain(std::iter::once(TokenKind::Eof))
    .collect();
    assert_eq!(kinds, expected);
}

/// Verifies that adjacent punctuators need no separating whitespace.
#[test]
fn punctuators_adjacent() {
    assert_eq!(
        token_kinds("{}[]"),
        vec![
            TokenKind::Punctuator(Punctuator::CurlyBraceOpen),
            TokenKind::Punctuator(Punctuator::CurlyBraceClose),
            TokenKind::Punctuator(Punctuator::SquareBracketOpen),
            TokenKind::Punctuator(Punctuator::SquareBracketClose),
            TokenKind::Eof,
        ],
    );
}

/// Verifies that keywords are plain names and that names borrow from the
/// source.
#[test]
fn names_and_keywords() {
    let tokens = tokens("query _private true null on a1_B2");
    let literals: Vec<&str> = tokens[..6].iter().map(|t| t.literal.as_ref()).collect();
    assert_eq!(literals, vec!["query", "_private", "true", "null", "on", "a1_B2"]);
    assert!(tokens[..6].iter().all(|t| t.kind == TokenKind::Name));
    assert!(tokens[..6].iter().all(|t| matches!(t.literal, Cow::Borrowed(_))));
    assert!(tokens[2].is_keyword("true"));
    assert!(!tokens[2].is_keyword("false"));
}

/// Verifies that an incomplete ellipsis is reported with the offending
/// sequence.
#[test]
fn ellipsis_too_short() {
    let token = single_token("..");
    assert_eq!(token.kind, TokenKind::Illegal);
    assert_eq!(token.literal, r#"invalid punctuator, expected "..." but got: "..""#);
}

/// Verifies that dots separated by whitespace do not form an ellipsis.
#[test]
fn ellipsis_with_gap() {
    let tokens = tokens(". ..");
    assert_eq!(tokens[0].kind, TokenKind::Illegal);
    assert_eq!(tokens[0].literal, r#"invalid punctuator, expected "..." but got: ". .""#);
}

/// Verifies that a character that cannot start any token produces an
/// `Illegal` token carrying the character itself, and that lexing resumes
/// afterwards.
#[test]
fn unrecognized_character() {
    let tokens = tokens("a ? b");
    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].literal, "?");
    assert_eq!(tokens[2].kind, TokenKind::Name);
    assert_eq!(tokens[2].literal, "b");
}

// =============================================================================
// Numbers
// =============================================================================

/// Verifies the basic int/float classification.
#[test]
fn numbers() {
    let cases = [
        ("0", TokenKind::IntValue),
        ("-3", TokenKind::IntValue),
        ("1234567890", TokenKind::IntValue),
        ("1.5", TokenKind::FloatValue),
        ("1.5e10", TokenKind::FloatValue),
        ("2E-3", TokenKind::FloatValue),
        ("-0.0", TokenKind::FloatValue),
        ("6e+2", TokenKind::FloatValue),
    ];
    for (source, kind) in cases {
        let token = single_token(source);
        assert_eq!(token.kind, kind, "for {source:?}");
        assert_eq!(token.literal, source);
    }
}

/// Verifies that a leading zero may not be followed by another digit.
#[test]
fn leading_zero_followed_by_digit() {
    for source in ["00", "01", "-01"] {
        let token = single_token(source);
        assert_eq!(token.kind, TokenKind::Illegal, "for {source:?}");
        assert!(
            token.literal.starts_with("invalid number, unexpected digit after 0"),
            "for {source:?}: {}",
            token.literal,
        );
    }
}

/// Verifies that fractional parts and exponents require digits.
#[test]
fn missing_digits() {
    assert_eq!(
        single_token("1.").literal,
        "invalid number, expected digit but got: end of input",
    );
    assert_eq!(
        single_token("1e").literal,
        "invalid number, expected digit but got: end of input",
    );
    assert_eq!(
        tokens("- 1")[0].literal,
        "invalid number, expected digit but got: ` `",
    );
}

/// Verifies that a number running straight into a name is illegal.
#[test]
fn number_followed_by_name_start() {
    let tokens = tokens("123abc");
    assert_eq!(tokens[0].kind, TokenKind::Illegal);
    assert_eq!(
        tokens[0].literal,
        "invalid number, unexpected character after number: `a`",
    );
}

// =============================================================================
// Strings
// =============================================================================

/// Verifies that strings without escapes are borrowed from the source.
#[test]
fn simple_string_is_borrowed() {
    let token = single_token(r#""hello world""#);
    assert_eq!(token.kind, TokenKind::StringValue);
    assert_eq!(token.literal, "hello world");
    assert!(matches!(token.literal, Cow::Borrowed(_)));
}

/// Verifies that a `\t` escape decodes to a tab character.
#[test]
fn string_tab_escape() {
    let token = single_token(r#""Hello\tWorld""#);
    assert_eq!(token.kind, TokenKind::StringValue);
    assert_eq!(token.literal, "Hello\tWorld");
    assert!(matches!(token.literal, Cow::Owned(_)));
}

/// Verifies every simple escape sequence.
#[test]
fn string_simple_escapes() {
    let token = single_token(r#""\" \\ \/ \b \f \n \r \t""#);
    assert_eq!(token.literal, "\" \\ / \u{0008} \u{000C} \n \r \t");
}

/// Verifies `\uXXXX` escapes, case-insensitively.
#[test]
fn string_unicode_escapes() {
    assert_eq!(single_token(r#""\u0041\u00e9\u00E9""#).literal, "A\u{e9}\u{e9}");
}

/// Verifies that a surrogate pair decodes to a single scalar value and that a
/// lone surrogate decodes to U+FFFD.
#[test]
fn string_surrogates() {
    assert_eq!(single_token(r#""\uD83D\uDE00""#).literal, "\u{1F600}");
    assert_eq!(single_token(r#""\uD83Dx""#).literal, "\u{FFFD}x");
    assert_eq!(single_token(r#""\uDE00""#).literal, "\u{FFFD}");
}

/// Verifies that an unknown escape is illegal.
#[test]
fn string_invalid_escape() {
    let token = tokens(r#""a\qb""#).remove(0);
    assert_eq!(token.kind, TokenKind::Illegal);
    assert_eq!(token.literal, "invalid character escape sequence: \\q");
}

/// Verifies that a malformed `\u` escape is illegal.
#[test]
fn string_invalid_unicode_escape() {
    let token = tokens(r#""\u12G4""#).remove(0);
    assert_eq!(token.kind, TokenKind::Illegal);
    assert_eq!(token.literal, "invalid character escape sequence: \\u12G");
}

/// Verifies that raw control characters other than tab are rejected inside
/// strings.
#[test]
fn string_control_characters() {
    let token = tokens("\"a\u{0007}b\"").remove(0);
    assert_eq!(token.kind, TokenKind::Illegal);
    assert_eq!(token.literal, "invalid character within string: U+0007 (BELL)");

    let token = tokens("\"a\nb\"").remove(0);
    assert_eq!(token.kind, TokenKind::Illegal);
    assert_eq!(token.literal, "invalid character within string: U+000A (LINE FEED)");

    assert_eq!(single_token("\"a\tb\"").literal, "a\tb");
}

/// Verifies unterminated strings.
#[test]
fn string_unterminated() {
    let token = single_token(r#""abc"#);
    assert_eq!(token.kind, TokenKind::Illegal);
    assert_eq!(token.literal, "unterminated string");
}

// =============================================================================
// Block strings
// =============================================================================

/// Verifies that exactly one leading and one trailing line break are
/// stripped.
#[test]
fn block_string_strips_one_line_break() {
    let token = single_token("\"\"\"\nhello\n\"\"\"");
    assert_eq!(token.kind, TokenKind::BlockStringValue);
    assert_eq!(token.literal, "hello");

    let token = single_token("\"\"\"\n\nhello\n\n\"\"\"");
    assert_eq!(token.literal, "\nhello\n");

    let token = single_token("\"\"\"\r\nhello\r\n\"\"\"");
    assert_eq!(token.literal, "hello");
}

/// Verifies that block strings keep indentation and backslashes verbatim.
#[test]
fn block_string_is_not_dedented() {
    let token = single_token("\"\"\"\n    a\\n\n      b\n\"\"\"");
    assert_eq!(token.literal, "    a\\n\n      b");
    assert!(matches!(token.literal, Cow::Borrowed(_)));
}

/// Verifies the `\"""` escape.
#[test]
fn block_string_escaped_quotes() {
    let token = single_token(r#""""a \""" b""""#);
    assert_eq!(token.literal, r#"a """ b"#);
}

/// Verifies unterminated block strings.
#[test]
fn block_string_unterminated() {
    let token = single_token("\"\"\"abc\n");
    assert_eq!(token.kind, TokenKind::Illegal);
    assert_eq!(token.literal, "unterminated block string");
}

// =============================================================================
// Ignored tokens
// =============================================================================

/// Verifies that comments, commas and byte order marks are skipped.
#[test]
fn ignored_tokens() {
    let tokens = tokens("\u{FEFF}# leading\na,,b # trailing\n\u{FEFF}c");
    let names: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Name)
        .map(|t| t.literal.as_ref())
        .collect();
    assert_eq!(names, vec!["a", "b", "c"]);
    assert_eq!(tokens.len(), 4);
}

/// Verifies that a comment at the very end of input is fine.
#[test]
fn comment_only() {
    assert_eq!(token_kinds("# nothing here"), vec![TokenKind::Eof]);
}

// =============================================================================
// Positions
// =============================================================================

/// Verifies line and rune-column tracking across `\n`, `\r\n` and multi-byte
/// characters.
#[test]
fn positions() {
    let tokens = tokens("{\n  name\r\n  \u{e9} x }");
    let positions: Vec<(TokenKind, usize, usize)> =
        tokens.iter().map(|t| (t.kind, t.line, t.position)).collect();
    assert_eq!(
        positions,
        vec![
            (TokenKind::Punctuator(Punctuator::CurlyBraceOpen), 1, 1),
            (TokenKind::Name, 2, 3),
            (TokenKind::Illegal, 3, 3),
            (TokenKind::Name, 3, 5),
            (TokenKind::Punctuator(Punctuator::CurlyBraceClose), 3, 7),
            (TokenKind::Eof, 3, 8),
        ],
    );
    assert_eq!(tokens[2].literal, "\u{e9}");
}

/// Verifies that a lone `\r` is one line break.
#[test]
fn positions_lone_carriage_return() {
    let tokens = tokens("a\rb\r\rc");
    assert_eq!((tokens[1].line, tokens[1].position), (2, 1));
    assert_eq!((tokens[2].line, tokens[2].position), (4, 1));
}

/// Verifies that positions after a string containing multi-byte characters
/// are counted in runes.
#[test]
fn positions_after_multibyte_string() {
    let tokens = tokens("\"h\u{e9}llo\" x");
    assert_eq!(tokens[1].position, 9);
}

/// Verifies that line breaks inside block strings advance the line counter.
#[test]
fn positions_after_block_string() {
    let tokens = tokens("\"\"\"a\nb\"\"\" c");
    assert_eq!((tokens[1].line, tokens[1].position), (2, 6));
}

/// Verifies that a byte order mark occupies a column.
#[test]
fn positions_after_bom() {
    let token = single_token("\u{FEFF}query");
    assert_eq!(token.literal, "query");
    assert_eq!((token.line, token.position), (1, 2));
}

// =============================================================================
// End of input
// =============================================================================

/// Verifies that the iterator yields exactly one EOF, while `scan` keeps
/// returning it.
#[test]
fn eof_behavior() {
    assert_eq!(token_kinds(""), vec![TokenKind::Eof]);

    let mut lexer = Lexer::new("a");
    assert_eq!(Lexer::scan(&mut lexer).kind, TokenKind::Name);
    assert_eq!(Lexer::scan(&mut lexer).kind, TokenKind::Eof);
    assert_eq!(Lexer::scan(&mut lexer).kind, TokenKind::Eof);
}
