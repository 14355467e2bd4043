//! Various test utils.

use crate::ast::Definition;
use crate::ast::Document;
use crate::ast::ExecutableDefinition;
use crate::ast::Field;
use crate::ast::OperationDefinition;
use crate::ast::Selection;
use crate::ast::TypeDefinition;
use crate::ast::TypeSystemDefinition;
use crate::token::Punctuator;
use crate::token::Token;
use crate::token::TokenKind;

/// Parses `source`, panicking with a detailed diagnostic on failure.
pub fn parse_ok(source: &str) -> Document<'_> {
    match crate::parse(source) {
        Ok(doc) => doc,
        Err(err) => panic!("failed to parse:\n{}", err.format_detailed(Some(source))),
    }
}

/// Returns the only operation in `doc`.
pub fn only_operation<'a, 'src>(doc: &'a Document<'src>) -> &'a OperationDefinition<'src> {
    assert_eq!(doc.definitions.len(), 1, "expected exactly one definition");
    match doc.definitions.first() {
        Some(Definition::Executable(ExecutableDefinition::Operation(op))) => op,
        other => panic!("expected an operation, got {other:?}"),
    }
}

/// Returns the only type definition in `doc`.
pub fn only_type_definition<'a, 'src>(doc: &'a Document<'src>) -> &'a TypeDefinition<'src> {
    assert_eq!(doc.definitions.len(), 1, "expected exactly one definition");
    match doc.definitions.first() {
        Some(Definition::TypeSystem(TypeSystemDefinition::Type(type_def))) => type_def,
        other => panic!("expected a type definition, got {other:?}"),
    }
}

/// Unwraps a field selection.
pub fn as_field<'a, 'src>(selection: &'a Selection<'src>) -> &'a Field<'src> {
    match selection {
        Selection::Field(field) => field,
        other => panic!("expected a field, got {other:?}"),
    }
}

/// Creates a token at line 1, position 1.
pub fn mock_token(kind: TokenKind, literal: &'static str) -> Token<'static> {
    Token::new(kind, literal, 1, 1)
}

pub fn mock_name_token(name: &'static str) -> Token<'static> {
    mock_token(TokenKind::Name, name)
}

pub fn mock_punctuator_token(punctuator: Punctuator) -> Token<'static> {
    Token::punctuator(punctuator, 1, 1)
}

/// A mock token source that produces tokens from a Vec.
pub struct MockTokenSource {
    tokens: std::vec::IntoIter<Token<'static>>,
}

impl MockTokenSource {
    pub fn new(tokens: Vec<Token<'static>>) -> Self {
        Self {
            tokens: tokens.into_iter(),
        }
    }
}

impl Iterator for MockTokenSource {
    type Item = Token<'static>;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens.next()
    }
}
