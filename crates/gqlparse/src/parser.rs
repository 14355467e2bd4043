//! A fail-fast recursive-descent parser for GraphQL documents.
//!
//! Executable definitions, type system definitions and type system
//! extensions may be freely mixed in one document; deciding which are allowed
//! where is left to validation.
//!
//! Every repeated grammar element is accumulated into an [`IndexedList`] by
//! prepending and each finished list is relinked once with
//! [`IndexedList::into_reversed`], so lists in the returned [`Document`]
//! traverse in source order.

use crate::SyntaxError;
use crate::SyntaxErrorKind;
use crate::TokenStream;
use crate::ast::Argument;
use crate::ast::Definition;
use crate::ast::Directive;
use crate::ast::DirectiveDefinition;
use crate::ast::DirectiveLocation;
use crate::ast::Document;
use crate::ast::EnumTypeDefinition;
use crate::ast::EnumValueDefinition;
use crate::ast::ExecutableDefinition;
use crate::ast::Field;
use crate::ast::FieldDefinition;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::IndexedList;
use crate::ast::InlineFragment;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InputValueDefinition;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::ListTypeAnnotation;
use crate::ast::NamedTypeAnnotation;
use crate::ast::Nullability;
use crate::ast::ObjectField;
use crate::ast::ObjectTypeDefinition;
use crate::ast::OperationDefinition;
use crate::ast::OperationType;
use crate::ast::RootOperationTypeDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::StringValue;
use crate::ast::TypeAnnotation;
use crate::ast::TypeDefinition;
use crate::ast::TypeDefinitionKind;
use crate::ast::TypeSystemDefinition;
use crate::ast::TypeSystemExtension;
use crate::ast::UnionTypeDefinition;
use crate::ast::Value;
use crate::ast::VariableDefinition;
use crate::token::Punctuator;
use crate::token::Token;
use crate::token::TokenKind;
use crate::token_source::Lexer;
use crate::token_source::TokenSource;
use crate::token_source::describe_char;
use std::borrow::Cow;

/// Maximum nesting of selection sets, list/object values and list types.
///
/// Deeper input fails with [`SyntaxErrorKind::RecursionLimitExceeded`]
/// instead of overflowing the stack.
const MAX_RECURSION_DEPTH: usize = 64;

/// Parses `source` into a [`Document`].
pub fn parse(source: &str) -> Result<Document<'_>, SyntaxError> {
    Parser::new(source).parse_document()
}

/// Parses raw bytes into a [`Document`].
///
/// Invalid UTF-8 is reported as a [`SyntaxErrorKind::InvalidUtf8`] error at
/// the first invalid byte.
pub fn parse_bytes(bytes: &[u8]) -> Result<Document<'_>, SyntaxError> {
    match std::str::from_utf8(bytes) {
        Ok(source) => parse(source),
        Err(err) => {
            let valid_prefix = String::from_utf8_lossy(&bytes[..err.valid_up_to()]);
            let (line, position) = position_after(&valid_prefix);
            Err(SyntaxError::new(
                "invalid UTF-8 sequence",
                SyntaxErrorKind::InvalidUtf8,
                line,
                position,
            ))
        },
    }
}

/// The 1-based line and rune column immediately after `text`.
fn position_after(text: &str) -> (usize, usize) {
    let mut line = 1;
    let mut column = 0;
    let mut last_char_was_cr = false;
    for ch in text.chars() {
        match ch {
            '\n' if last_char_was_cr => last_char_was_cr = false,
            '\n' | '\r' => {
                line += 1;
                column = 0;
                last_char_was_cr = ch == '\r';
            },
            _ => {
                column += 1;
                last_char_was_cr = false;
            },
        }
    }
    (line, column + 1)
}

/// A recursive-descent GraphQL parser over any [`TokenSource`].
///
/// The parser stops at the first error. There is no recovery and no partial
/// document.
///
/// ```rust
/// use gqlparse::Parser;
///
/// let doc = Parser::new("{ hello }").parse_document().unwrap();
/// assert_eq!(doc.definitions.len(), 1);
/// ```
pub struct Parser<'src, TTokenSource: TokenSource<'src> = Lexer<'src>> {
    tokens: TokenStream<'src, TTokenSource>,
    recursion_depth: usize,
}

impl<'src> Parser<'src, Lexer<'src>> {
    pub fn new(source: &'src str) -> Self {
        Self::from_token_source(Lexer::new(source))
    }
}

impl<'src, TTokenSource: TokenSource<'src>> Parser<'src, TTokenSource> {
    pub fn from_token_source(token_source: TTokenSource) -> Self {
        Self {
            tokens: TokenStream::new(token_source),
            recursion_depth: 0,
        }
    }

    /// Parses a complete document containing one or more definitions.
    pub fn parse_document(mut self) -> Result<Document<'src>, SyntaxError> {
        if self.tokens.is_at_end() {
            return Err(self.unexpected(&["a definition"]));
        }

        let mut definitions = IndexedList::new();
        while !self.tokens.is_at_end() {
            definitions.add(self.parse_definition()?);
        }

        let document = Document {
            definitions: definitions.into_reversed(),
        };
        log::trace!("parsed document with {} definition(s)", document.definitions.len());
        Ok(document)
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    fn peek_kind(&mut self) -> TokenKind {
        self.tokens.peek().kind
    }

    fn peek_is(&mut self, punctuator: Punctuator) -> bool {
        self.peek_kind().is_punctuator(punctuator)
    }

    fn peek_is_keyword(&mut self, keyword: &str) -> bool {
        self.tokens.peek().is_keyword(keyword)
    }

    /// Returns the next token's literal if it is a name.
    fn peek_name(&mut self) -> Option<Cow<'src, str>> {
        let token = self.tokens.peek();
        (token.kind == TokenKind::Name).then(|| token.literal.clone())
    }

    /// Consumes the next token if it is `punctuator`.
    fn consume_if(&mut self, punctuator: Punctuator) -> bool {
        if self.peek_is(punctuator) {
            self.tokens.consume();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, punctuator: Punctuator) -> Result<Token<'src>, SyntaxError> {
        if self.peek_is(punctuator) {
            Ok(self.tokens.consume())
        } else {
            Err(self.unexpected(&[format!("`{punctuator}`").as_str()]))
        }
    }

    fn expect_name(&mut self) -> Result<Cow<'src, str>, SyntaxError> {
        if self.peek_kind() == TokenKind::Name {
            Ok(self.tokens.consume().literal)
        } else {
            Err(self.unexpected(&["a name"]))
        }
    }

    fn expect_keyword(&mut self, keyword: &str) -> Result<(), SyntaxError> {
        if self.peek_is_keyword(keyword) {
            self.tokens.consume();
            Ok(())
        } else {
            Err(self.unexpected(&[format!("`{keyword}`").as_str()]))
        }
    }

    fn enter_nested(&mut self) -> Result<(), SyntaxError> {
        self.recursion_depth += 1;
        if self.recursion_depth > MAX_RECURSION_DEPTH {
            let token = self.tokens.peek();
            return Err(SyntaxError::new(
                format!("maximum nesting depth of {MAX_RECURSION_DEPTH} exceeded"),
                SyntaxErrorKind::RecursionLimitExceeded,
                token.line,
                token.position,
            ));
        }
        Ok(())
    }

    fn exit_nested(&mut self) {
        self.recursion_depth -= 1;
    }

    // =========================================================================
    // Errors
    // =========================================================================

    /// Builds the error for the next token not being one of `expected`.
    ///
    /// `Illegal` tokens always produce a lexical error carrying the lexer's
    /// diagnostic, regardless of what was expected.
    fn unexpected(&mut self, expected: &[&str]) -> SyntaxError {
        let token = self.tokens.peek();
        let expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();

        match token.kind {
            TokenKind::Illegal => lexical_error(token),
            TokenKind::Eof => SyntaxError::new(
                format!("expected {}, found end of input", expected.join(" or ")),
                SyntaxErrorKind::UnexpectedEof { expected },
                token.line,
                token.position,
            ),
            _ => {
                let found = describe_token(token);
                SyntaxError::new(
                    format!("expected {}, found {found}", expected.join(" or ")),
                    SyntaxErrorKind::UnexpectedToken { expected, found },
                    token.line,
                    token.position,
                )
                .with_width(token.literal.chars().count())
            },
        }
    }

    // =========================================================================
    // Definitions
    // =========================================================================

    fn parse_definition(&mut self) -> Result<Definition<'src>, SyntaxError> {
        match self.peek_kind() {
            TokenKind::Punctuator(Punctuator::CurlyBraceOpen) => Ok(Definition::Executable(
                ExecutableDefinition::Operation(self.parse_operation_definition()?),
            )),

            TokenKind::StringValue | TokenKind::BlockStringValue => {
                let description = self.parse_description();
                Ok(Definition::TypeSystem(
                    self.parse_type_system_definition(description)?,
                ))
            },

            TokenKind::Name => {
                let keyword = self.peek_name().unwrap_or_default();
                match keyword.as_ref() {
                    "query" | "mutation" | "subscription" => Ok(Definition::Executable(
                        ExecutableDefinition::Operation(self.parse_operation_definition()?),
                    )),
                    "fragment" => Ok(Definition::Executable(
                        ExecutableDefinition::Fragment(self.parse_fragment_definition()?),
                    )),
                    "extend" => Ok(Definition::TypeSystemExtension(
                        self.parse_type_system_extension()?,
                    )),
                    _ => Ok(Definition::TypeSystem(self.parse_type_system_definition(None)?)),
                }
            },

            _ => Err(self.unexpected(&["a definition"])),
        }
    }

    fn parse_type_system_definition(
        &mut self,
        description: Option<StringValue<'src>>,
    ) -> Result<TypeSystemDefinition<'src>, SyntaxError> {
        let keyword = self.peek_name().unwrap_or_default();
        match keyword.as_ref() {
            "schema" => Ok(TypeSystemDefinition::Schema(
                self.parse_schema_definition(description, false)?,
            )),
            "directive" => Ok(TypeSystemDefinition::Directive(
                self.parse_directive_definition(description)?,
            )),
            _ => match TypeDefinitionKind::from_keyword(&keyword) {
                Some(kind) => Ok(TypeSystemDefinition::Type(
                    self.parse_type_definition(kind, description)?,
                )),
                None if description.is_some() => {
                    let mut err = self.unexpected(&["a type system definition"]);
                    err.add_note("only type system definitions may have descriptions");
                    Err(err)
                },
                None => Err(self.unexpected(&["a definition"])),
            },
        }
    }

    fn parse_type_system_extension(&mut self) -> Result<TypeSystemExtension<'src>, SyntaxError> {
        self.expect_keyword("extend")?;
        let keyword = self.peek_name().unwrap_or_default();
        if keyword == "schema" {
            let schema_ext = self.parse_schema_definition(None, true)?;
            if schema_ext.directives.is_empty() && schema_ext.root_operation_types.is_empty() {
                return Err(self.unexpected(&["`@`", "`{`"]));
            }
            return Ok(TypeSystemExtension::Schema(schema_ext));
        }

        let Some(kind) = TypeDefinitionKind::from_keyword(&keyword) else {
            return Err(self.unexpected(&[
                "`schema`", "`scalar`", "`type`", "`interface`", "`union`", "`enum`", "`input`",
            ]));
        };
        let type_ext = self.parse_type_definition(kind, None)?;
        if let Some(expected) = empty_extension_expectations(&type_ext) {
            return Err(self.unexpected(expected));
        }
        Ok(TypeSystemExtension::Type(type_ext))
    }

    // =========================================================================
    // Operations and fragments
    // =========================================================================

    fn parse_operation_definition(&mut self) -> Result<OperationDefinition<'src>, SyntaxError> {
        if self.peek_is(Punctuator::CurlyBraceOpen) {
            return Ok(OperationDefinition {
                operation_type: OperationType::Query,
                name: None,
                variable_definitions: IndexedList::new(),
                directives: IndexedList::new(),
                selection_set: self.parse_selection_set()?,
            });
        }

        let operation_type = self.parse_operation_type()?;
        let name = match self.peek_kind() {
            TokenKind::Name => Some(self.expect_name()?),
            _ => None,
        };
        let variable_definitions = if self.peek_is(Punctuator::ParenOpen) {
            self.parse_variable_definitions()?
        } else {
            IndexedList::new()
        };
        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;

        Ok(OperationDefinition {
            operation_type,
            name,
            variable_definitions,
            directives,
            selection_set,
        })
    }

    fn parse_operation_type(&mut self) -> Result<OperationType, SyntaxError> {
        match self.peek_name().as_deref().and_then(OperationType::from_keyword) {
            Some(operation_type) => {
                self.tokens.consume();
                Ok(operation_type)
            },
            None => Err(self.unexpected(&["`query`", "`mutation`", "`subscription`"])),
        }
    }

    fn parse_variable_definitions(
        &mut self,
    ) -> Result<IndexedList<VariableDefinition<'src>>, SyntaxError> {
        self.expect(Punctuator::ParenOpen)?;
        let mut var_defs = IndexedList::new();
        loop {
            self.expect(Punctuator::Dollar)?;
            let name = self.expect_name()?;
            self.expect(Punctuator::Colon)?;
            let var_type = self.parse_type_annotation()?;
            let default_value = if self.consume_if(Punctuator::Equals) {
                Some(self.parse_value()?)
            } else {
                None
            };
            let directives = self.parse_directives()?;
            var_defs.add(VariableDefinition {
                name,
                var_type,
                default_value,
                directives,
            });

            if self.consume_if(Punctuator::ParenClose) {
                break;
            }
        }
        Ok(var_defs.into_reversed())
    }

    fn parse_fragment_definition(&mut self) -> Result<FragmentDefinition<'src>, SyntaxError> {
        self.expect_keyword("fragment")?;
        if self.peek_is_keyword("on") {
            let mut err = self.unexpected(&["a fragment name"]);
            err.add_help("fragments are written as `fragment Name on Type { ... }`");
            return Err(err);
        }
        let name = self.expect_name()?;
        self.expect_keyword("on")?;
        let type_condition = self.expect_name()?;
        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;

        Ok(FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
        })
    }

    // =========================================================================
    // Selections
    // =========================================================================

    fn parse_selection_set(&mut self) -> Result<SelectionSet<'src>, SyntaxError> {
        let open = self.expect(Punctuator::CurlyBraceOpen)?;
        self.enter_nested()?;

        let mut selections = IndexedList::new();
        loop {
            match self.parse_selection() {
                Ok(selection) => selections.add(selection),
                Err(mut err) => {
                    if matches!(err.kind(), SyntaxErrorKind::UnexpectedEof { .. }) {
                        err.add_note(format!(
                            "selection set opened at {}:{} was never closed",
                            open.line,
                            open.position,
                        ));
                    }
                    return Err(err);
                },
            }
            if self.consume_if(Punctuator::CurlyBraceClose) {
                break;
            }
        }

        self.exit_nested();
        Ok(selections.into_reversed())
    }

    fn parse_selection(&mut self) -> Result<Selection<'src>, SyntaxError> {
        if !self.consume_if(Punctuator::Ellipsis) {
            return Ok(Selection::Field(self.parse_field()?));
        }

        if self.peek_is_keyword("on") {
            self.tokens.consume();
            let type_condition = Some(self.expect_name()?);
            return Ok(Selection::InlineFragment(InlineFragment {
                type_condition,
                directives: self.parse_directives()?,
                selection_set: self.parse_selection_set()?,
            }));
        }

        if self.peek_kind() == TokenKind::Name {
            return Ok(Selection::FragmentSpread(FragmentSpread {
                name: self.expect_name()?,
                directives: self.parse_directives()?,
            }));
        }

        Ok(Selection::InlineFragment(InlineFragment {
            type_condition: None,
            directives: self.parse_directives()?,
            selection_set: self.parse_selection_set()?,
        }))
    }

    fn parse_field(&mut self) -> Result<Field<'src>, SyntaxError> {
        let first_name = self.expect_name()?;
        let (alias, name) = if self.consume_if(Punctuator::Colon) {
            (Some(first_name), self.expect_name()?)
        } else {
            (None, first_name)
        };
        let arguments = self.parse_arguments()?;
        let directives = self.parse_directives()?;
        let selection_set = if self.peek_is(Punctuator::CurlyBraceOpen) {
            Some(self.parse_selection_set()?)
        } else {
            None
        };

        Ok(Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
        })
    }

    /// Parses an optional `(name: value ...)` argument list.
    fn parse_arguments(&mut self) -> Result<IndexedList<Argument<'src>>, SyntaxError> {
        let mut arguments = IndexedList::new();
        if !self.consume_if(Punctuator::ParenOpen) {
            return Ok(arguments);
        }
        loop {
            let name = self.expect_name()?;
            self.expect(Punctuator::Colon)?;
            let value = self.parse_value()?;
            arguments.add(Argument { name, value });

            if self.consume_if(Punctuator::ParenClose) {
                break;
            }
        }
        Ok(arguments.into_reversed())
    }

    /// Parses zero or more `@name(arguments)` annotations.
    fn parse_directives(&mut self) -> Result<IndexedList<Directive<'src>>, SyntaxError> {
        let mut directives = IndexedList::new();
        while self.consume_if(Punctuator::At) {
            let name = self.expect_name()?;
            let arguments = self.parse_arguments()?;
            directives.add(Directive { name, arguments });
        }
        Ok(directives.into_reversed())
    }

    // =========================================================================
    // Values and types
    // =========================================================================

    fn parse_value(&mut self) -> Result<Value<'src>, SyntaxError> {
        match self.peek_kind() {
            TokenKind::Punctuator(Punctuator::Dollar) => {
                self.tokens.consume();
                Ok(Value::Variable(self.expect_name()?))
            },
            TokenKind::IntValue => Ok(Value::Int(self.tokens.consume().literal)),
            TokenKind::FloatValue => Ok(Value::Float(self.tokens.consume().literal)),
            TokenKind::StringValue | TokenKind::BlockStringValue => {
                let token = self.tokens.consume();
                Ok(Value::String(StringValue {
                    is_block: token.kind == TokenKind::BlockStringValue,
                    value: token.literal,
                }))
            },
            TokenKind::Name => {
                let literal = self.tokens.consume().literal;
                Ok(match literal.as_ref() {
                    "true" => Value::Boolean(true),
                    "false" => Value::Boolean(false),
                    "null" => Value::Null,
                    _ => Value::Enum(literal),
                })
            },
            TokenKind::Punctuator(Punctuator::SquareBracketOpen) => {
                self.tokens.consume();
                self.enter_nested()?;
                let mut items = IndexedList::new();
                while !self.consume_if(Punctuator::SquareBracketClose) {
                    items.add(self.parse_value()?);
                }
                self.exit_nested();
                Ok(Value::List(items.into_reversed()))
            },
            TokenKind::Punctuator(Punctuator::CurlyBraceOpen) => {
                self.tokens.consume();
                self.enter_nested()?;
                let mut fields = IndexedList::new();
                while !self.consume_if(Punctuator::CurlyBraceClose) {
                    let name = self.expect_name()?;
                    self.expect(Punctuator::Colon)?;
                    let value = self.parse_value()?;
                    fields.add(ObjectField { name, value });
                }
                self.exit_nested();
                Ok(Value::Object(fields.into_reversed()))
            },
            _ => Err(self.unexpected(&["a value"])),
        }
    }

    fn parse_type_annotation(&mut self) -> Result<TypeAnnotation<'src>, SyntaxError> {
        let annot = if self.consume_if(Punctuator::SquareBracketOpen) {
            self.enter_nested()?;
            let element_type = self.parse_type_annotation()?;
            self.expect(Punctuator::SquareBracketClose)?;
            self.exit_nested();
            TypeAnnotation::List(ListTypeAnnotation {
                element_type: Box::new(element_type),
                nullability: self.parse_nullability(),
            })
        } else {
            let name = self.expect_name()?;
            TypeAnnotation::Named(NamedTypeAnnotation {
                name,
                nullability: self.parse_nullability(),
            })
        };
        Ok(annot)
    }

    fn parse_nullability(&mut self) -> Nullability {
        if self.consume_if(Punctuator::Bang) {
            Nullability::NonNull
        } else {
            Nullability::Nullable
        }
    }

    fn parse_named_type(&mut self) -> Result<TypeAnnotation<'src>, SyntaxError> {
        Ok(TypeAnnotation::Named(NamedTypeAnnotation {
            name: self.expect_name()?,
            nullability: Nullability::Nullable,
        }))
    }

    // =========================================================================
    // Type system
    // =========================================================================

    fn parse_description(&mut self) -> Option<StringValue<'src>> {
        match self.peek_kind() {
            TokenKind::StringValue | TokenKind::BlockStringValue => {
                let token = self.tokens.consume();
                Some(StringValue {
                    is_block: token.kind == TokenKind::BlockStringValue,
                    value: token.literal,
                })
            },
            _ => None,
        }
    }

    fn parse_schema_definition(
        &mut self,
        description: Option<StringValue<'src>>,
        is_extension: bool,
    ) -> Result<SchemaDefinition<'src>, SyntaxError> {
        self.expect_keyword("schema")?;
        let directives = self.parse_directives()?;

        let mut root_operation_types = IndexedList::new();
        if !is_extension || self.peek_is(Punctuator::CurlyBraceOpen) {
            self.expect(Punctuator::CurlyBraceOpen)?;
            loop {
                let operation_type = self.parse_operation_type()?;
                self.expect(Punctuator::Colon)?;
                let named_type = self.expect_name()?;
                root_operation_types.add(RootOperationTypeDefinition {
                    operation_type,
                    named_type,
                });

                if self.consume_if(Punctuator::CurlyBraceClose) {
                    break;
                }
            }
        }

        Ok(SchemaDefinition {
            description,
            directives,
            root_operation_types: root_operation_types.into_reversed(),
        })
    }

    fn parse_type_definition(
        &mut self,
        kind: TypeDefinitionKind,
        description: Option<StringValue<'src>>,
    ) -> Result<TypeDefinition<'src>, SyntaxError> {
        self.expect_keyword(kind.keyword())?;
        let name = self.expect_name()?;

        let type_def = match kind {
            TypeDefinitionKind::Scalar => TypeDefinition::Scalar(ScalarTypeDefinition {
                description,
                name,
                directives: self.parse_directives()?,
            }),

            TypeDefinitionKind::Object => TypeDefinition::Object(ObjectTypeDefinition {
                description,
                name,
                interfaces: self.parse_implements_interfaces()?,
                directives: self.parse_directives()?,
                fields: self.parse_fields_definition()?,
            }),

            TypeDefinitionKind::Interface => TypeDefinition::Interface(InterfaceTypeDefinition {
                description,
                name,
                interfaces: self.parse_implements_interfaces()?,
                directives: self.parse_directives()?,
                fields: self.parse_fields_definition()?,
            }),

            TypeDefinitionKind::Union => TypeDefinition::Union(UnionTypeDefinition {
                description,
                name,
                directives: self.parse_directives()?,
                members: self.parse_union_members()?,
            }),

            TypeDefinitionKind::Enum => TypeDefinition::Enum(EnumTypeDefinition {
                description,
                name,
                directives: self.parse_directives()?,
                values: self.parse_enum_values_definition()?,
            }),

            TypeDefinitionKind::InputObject => {
                TypeDefinition::InputObject(InputObjectTypeDefinition {
                    description,
                    name,
                    directives: self.parse_directives()?,
                    fields: self.parse_input_fields_definition()?,
                })
            },
        };
        Ok(type_def)
    }

    /// Parses an optional `implements A & B` clause.
    fn parse_implements_interfaces(
        &mut self,
    ) -> Result<IndexedList<TypeAnnotation<'src>>, SyntaxError> {
        let mut interfaces = IndexedList::new();
        if !self.peek_is_keyword("implements") {
            return Ok(interfaces);
        }
        self.tokens.consume();
        self.consume_if(Punctuator::Ampersand);
        loop {
            interfaces.add(self.parse_named_type()?);
            if !self.consume_if(Punctuator::Ampersand) {
                break;
            }
        }
        Ok(interfaces.into_reversed())
    }

    /// Parses an optional `{ field: Type ... }` block.
    fn parse_fields_definition(
        &mut self,
    ) -> Result<IndexedList<FieldDefinition<'src>>, SyntaxError> {
        let mut fields = IndexedList::new();
        if !self.consume_if(Punctuator::CurlyBraceOpen) {
            return Ok(fields);
        }
        loop {
            let description = self.parse_description();
            let name = self.expect_name()?;
            let arguments = self.parse_arguments_definition()?;
            self.expect(Punctuator::Colon)?;
            let field_type = self.parse_type_annotation()?;
            let directives = self.parse_directives()?;
            fields.add(FieldDefinition {
                description,
                name,
                arguments,
                field_type,
                directives,
            });

            if self.consume_if(Punctuator::CurlyBraceClose) {
                break;
            }
        }
        Ok(fields.into_reversed())
    }

    /// Parses an optional `(name: Type = default ...)` block.
    fn parse_arguments_definition(
        &mut self,
    ) -> Result<IndexedList<InputValueDefinition<'src>>, SyntaxError> {
        let mut arguments = IndexedList::new();
        if !self.consume_if(Punctuator::ParenOpen) {
            return Ok(arguments);
        }
        loop {
            arguments.add(self.parse_input_value_definition()?);
            if self.consume_if(Punctuator::ParenClose) {
                break;
            }
        }
        Ok(arguments.into_reversed())
    }

    /// Parses an optional `{ name: Type = default ... }` block.
    fn parse_input_fields_definition(
        &mut self,
    ) -> Result<IndexedList<InputValueDefinition<'src>>, SyntaxError> {
        let mut fields = IndexedList::new();
        if !self.consume_if(Punctuator::CurlyBraceOpen) {
            return Ok(fields);
        }
        loop {
            fields.add(self.parse_input_value_definition()?);
            if self.consume_if(Punctuator::CurlyBraceClose) {
                break;
            }
        }
        Ok(fields.into_reversed())
    }

    fn parse_input_value_definition(
        &mut self,
    ) -> Result<InputValueDefinition<'src>, SyntaxError> {
        let description = self.parse_description();
        let name = self.expect_name()?;
        self.expect(Punctuator::Colon)?;
        let value_type = self.parse_type_annotation()?;
        let default_value = if self.consume_if(Punctuator::Equals) {
            Some(self.parse_value()?)
        } else {
            None
        };
        let directives = self.parse_directives()?;

        Ok(InputValueDefinition {
            description,
            name,
            value_type,
            default_value,
            directives,
        })
    }

    /// Parses an optional `= A | B` clause.
    fn parse_union_members(&mut self) -> Result<IndexedList<TypeAnnotation<'src>>, SyntaxError> {
        let mut members = IndexedList::new();
        if !self.consume_if(Punctuator::Equals) {
            return Ok(members);
        }
        self.consume_if(Punctuator::Pipe);
        loop {
            members.add(self.parse_named_type()?);
            if !self.consume_if(Punctuator::Pipe) {
                break;
            }
        }
        Ok(members.into_reversed())
    }

    /// Parses an optional `{ VALUE ... }` block.
    fn parse_enum_values_definition(
        &mut self,
    ) -> Result<IndexedList<EnumValueDefinition<'src>>, SyntaxError> {
        let mut values = IndexedList::new();
        if !self.consume_if(Punctuator::CurlyBraceOpen) {
            return Ok(values);
        }
        loop {
            let description = self.parse_description();
            if let Some(reserved) = self.peek_name().filter(|name| {
                matches!(name.as_ref(), "true" | "false" | "null")
            }) {
                let token = self.tokens.peek();
                return Err(SyntaxError::new(
                    format!("enum values cannot be named `{reserved}`"),
                    SyntaxErrorKind::UnexpectedToken {
                        expected: vec!["an enum value".to_string()],
                        found: describe_token(token),
                    },
                    token.line,
                    token.position,
                )
                .with_width(reserved.len()));
            }
            let name = self.expect_name()?;
            let directives = self.parse_directives()?;
            values.add(EnumValueDefinition {
                description,
                name,
                directives,
            });

            if self.consume_if(Punctuator::CurlyBraceClose) {
                break;
            }
        }
        Ok(values.into_reversed())
    }

    fn parse_directive_definition(
        &mut self,
        description: Option<StringValue<'src>>,
    ) -> Result<DirectiveDefinition<'src>, SyntaxError> {
        self.expect_keyword("directive")?;
        self.expect(Punctuator::At)?;
        let name = self.expect_name()?;
        let arguments = self.parse_arguments_definition()?;
        let repeatable = self.peek_is_keyword("repeatable");
        if repeatable {
            self.tokens.consume();
        }
        self.expect_keyword("on")?;

        self.consume_if(Punctuator::Pipe);
        let mut locations = IndexedList::new();
        loop {
            let location = self.peek_name().as_deref().and_then(DirectiveLocation::parse);
            match location {
                Some(location) => {
                    self.tokens.consume();
                    locations.add(location);
                },
                None => {
                    let mut err = self.unexpected(&["a directive location"]);
                    err.add_help("directive locations are written in upper case, e.g. `FIELD`");
                    return Err(err);
                },
            }
            if !self.consume_if(Punctuator::Pipe) {
                break;
            }
        }

        Ok(DirectiveDefinition {
            description,
            name,
            arguments,
            repeatable,
            locations: locations.into_reversed(),
        })
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// Converts an `Illegal` token into a lexical [`SyntaxError`].
/// An extension must add at least one directive, member, value or field.
/// Returns what could have followed an extension that adds nothing.
fn empty_extension_expectations(type_ext: &TypeDefinition<'_>) -> Option<&'static [&'static str]> {
    let (is_empty, expected): (bool, &'static [&'static str]) = match type_ext {
        TypeDefinition::Scalar(ext) => (ext.directives.is_empty(), &["`@`"]),
        TypeDefinition::Object(ext) => (
            ext.interfaces.is_empty() && ext.directives.is_empty() && ext.fields.is_empty(),
            &["`implements`", "`@`", "`{`"],
        ),
        TypeDefinition::Interface(ext) => (
            ext.interfaces.is_empty() && ext.directives.is_empty() && ext.fields.is_empty(),
            &["`implements`", "`@`", "`{`"],
        ),
        TypeDefinition::Union(ext) => (
            ext.directives.is_empty() && ext.members.is_empty(),
            &["`@`", "`=`"],
        ),
        TypeDefinition::Enum(ext) => (
            ext.directives.is_empty() && ext.values.is_empty(),
            &["`@`", "`{`"],
        ),
        TypeDefinition::InputObject(ext) => (
            ext.directives.is_empty() && ext.fields.is_empty(),
            &["`@`", "`{`"],
        ),
    };
    is_empty.then_some(expected)
}

fn lexical_error(token: &Token<'_>) -> SyntaxError {
    let mut chars = token.literal.chars();
    let message = match (chars.next(), chars.next()) {
        (Some(ch), None) => format!("unexpected character {}", describe_char(ch)),
        _ => token.literal.to_string(),
    };
    SyntaxError::new(message, SyntaxErrorKind::Lexical, token.line, token.position)
}

/// A short description of `token` for "found ..." error messages.
fn describe_token(token: &Token<'_>) -> String {
    match token.kind {
        TokenKind::Name => format!("name `{}`", token.literal),
        TokenKind::Punctuator(punctuator) => format!("`{punctuator}`"),
        TokenKind::IntValue => format!("int `{}`", token.literal),
        TokenKind::FloatValue => format!("float `{}`", token.literal),
        TokenKind::StringValue => format!("string {:?}", token.literal),
        TokenKind::BlockStringValue => "block string".to_string(),
        TokenKind::Illegal => token.literal.to_string(),
        TokenKind::Eof => "end of input".to_string(),
    }
}
