//! Tests for the rules in [`SPECIFIED_SDL_RULES`](crate::SPECIFIED_SDL_RULES).

use crate::Schema;
use crate::ValidationError;
use crate::tests::utils::parse_ok;
use crate::tests::utils::schema_from;
use crate::validate_sdl;

fn sdl_errors(schema: Option<&Schema<'static>>, source: &'static str) -> Vec<ValidationError> {
    validate_sdl(&parse_ok(source), schema)
}

fn duplicate_type(name: &str) -> ValidationError {
    ValidationError::DuplicateTypeName {
        name: name.to_string(),
    }
}

fn existed_type(name: &str) -> ValidationError {
    ValidationError::ExistedTypeName {
        name: name.to_string(),
    }
}

// =============================================================================
// Unique type names
// =============================================================================

/// Verifies documents without repeated type names.
#[test]
fn unique_type_names_accepted() {
    for source in [
        "directive @test on SCHEMA",
        "type Foo",
        "type Foo\ntype Bar\ntype Baz",
        "query Foo { __typename }\n\
         fragment Foo on Query { __typename }\n\
         directive @Foo on SCHEMA\n\
         type Foo",
    ] {
        assert_eq!(sdl_errors(None, source), vec![], "for {source:?}");
    }
}

/// Verifies that a type defined twice yields exactly one error.
#[test]
fn type_defined_twice() {
    let errors = sdl_errors(None, "type Foo\nscalar Foo");
    assert_eq!(errors, vec![duplicate_type("Foo")]);
    assert_eq!(errors[0].to_string(), "There can be only one type named \"Foo\".");
}

/// Verifies one error per repeated definition, across all type kinds.
#[test]
fn types_named_the_same() {
    let errors = sdl_errors(
        None,
        "type Foo\n\
         scalar Foo\n\
         type Foo\n\
         interface Foo\n\
         union Foo\n\
         enum Foo\n\
         input Foo",
    );
    assert_eq!(errors, vec![duplicate_type("Foo"); 6]);
}

/// Verifies that new types may be added to an existing schema, including
/// types that share a name with an existing directive.
#[test]
fn adding_new_types_to_existing_schema() {
    let schema = schema_from("type Foo");
    assert_eq!(sdl_errors(Some(&schema), "type Bar"), vec![]);

    let schema = schema_from("directive @Foo on SCHEMA");
    assert_eq!(sdl_errors(Some(&schema), "type Foo"), vec![]);
}

/// Verifies that collisions with the existing schema use their own error.
#[test]
fn adding_conflicting_types_to_existing_schema() {
    let schema = schema_from("type Foo");
    let errors = sdl_errors(
        Some(&schema),
        "scalar Foo\n\
         type Foo\n\
         interface Foo\n\
         union Foo\n\
         enum Foo\n\
         input Foo",
    );
    assert_eq!(errors, vec![existed_type("Foo"); 6]);
    assert_eq!(
        errors[0].to_string(),
        "Type \"Foo\" already exists in the schema. It cannot also be defined in this type \
         definition.",
    );
}

/// Verifies that extensions do not count as definitions.
#[test]
fn extensions_are_not_duplicates() {
    assert_eq!(sdl_errors(None, "type Foo extend type Foo @a extend type Foo @b"), vec![]);
}

// =============================================================================
// Unique directive names
// =============================================================================

/// Verifies repeated directive definitions within a document and against an
/// existing schema.
#[test]
fn unique_directive_names() {
    assert_eq!(
        sdl_errors(None, "directive @a on FIELD directive @b on FIELD directive @a on QUERY"),
        vec![ValidationError::DuplicateDirectiveName {
            name: "a".to_string(),
        }],
    );

    let schema = schema_from("directive @a on FIELD");
    let errors = sdl_errors(Some(&schema), "directive @a on FIELD");
    assert_eq!(
        errors,
        vec![ValidationError::ExistedDirectiveName {
            name: "a".to_string(),
        }],
    );
    assert_eq!(
        errors[0].to_string(),
        "Directive \"@a\" already exists in the schema. It cannot be redefined.",
    );
}

// =============================================================================
// Lone schema definition
// =============================================================================

/// Verifies that a document may define the schema only once.
#[test]
fn lone_schema_definition() {
    assert_eq!(sdl_errors(None, "schema { query: Q } type Q"), vec![]);
    assert_eq!(
        sdl_errors(None, "schema { query: Q } schema { query: R } schema { query: S }"),
        vec![ValidationError::SchemaDefinitionNotAlone; 2],
    );
}

/// Verifies that a schema cannot be redefined on top of an existing schema
/// with root operation types, while extending it is fine.
#[test]
fn schema_already_defined() {
    let schema = schema_from("type Query { a: Int }");
    assert_eq!(
        sdl_errors(Some(&schema), "schema { query: Query }"),
        vec![ValidationError::SchemaAlreadyDefined],
    );
    assert_eq!(sdl_errors(Some(&schema), "extend schema @a"), vec![]);

    let schema = schema_from("type Foo");
    assert_eq!(sdl_errors(Some(&schema), "schema { query: Foo }"), vec![]);
}

// =============================================================================
// Possible type extensions
// =============================================================================

/// Verifies extensions of types defined before, after, or in the existing
/// schema.
#[test]
fn extensions_of_defined_types() {
    assert_eq!(sdl_errors(None, "type Foo extend type Foo @a"), vec![]);
    assert_eq!(sdl_errors(None, "extend enum E { C } enum E { A B }"), vec![]);

    let schema = schema_from("input In { a: Int }");
    assert_eq!(sdl_errors(Some(&schema), "extend input In { b: Int }"), vec![]);
}

/// Verifies that extending an unknown type is reported.
#[test]
fn extension_of_unknown_type() {
    let errors = sdl_errors(None, "type Foo extend type Bar @a");
    assert_eq!(
        errors,
        vec![ValidationError::ExtendedTypeNotDefined {
            name: "Bar".to_string(),
        }],
    );
    assert_eq!(errors[0].to_string(), "Cannot extend type \"Bar\" because it is not defined.");
}

/// Verifies that the extension keyword must match the extended type's kind.
#[test]
fn extension_of_wrong_kind() {
    let errors = sdl_errors(None, "scalar S extend type S @a");
    assert_eq!(
        errors,
        vec![ValidationError::ExtendedTypeKindMismatch {
            name: "S".to_string(),
            kind: "object",
        }],
    );
    assert_eq!(errors[0].to_string(), "Cannot extend non-object type \"S\".");

    let schema = schema_from("type T");
    let errors = sdl_errors(Some(&schema), "extend input T @a");
    assert_eq!(errors[0].to_string(), "Cannot extend non-input object type \"T\".");
}
