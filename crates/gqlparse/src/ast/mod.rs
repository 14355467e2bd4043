//! The GraphQL abstract syntax tree.
//!
//! Every union of node shapes is a Rust enum with one payload per variant and
//! a `kind()` method returning a `Copy` discriminant. Repeated children are
//! stored in [`IndexedList`]s, which traverse in source order for any
//! document produced by the [`Parser`](crate::Parser).
//!
//! Nodes carry no source locations, so two documents that differ only in
//! layout compare equal.

mod ast_node;
mod directive;
mod document;
mod executable;
mod indexed_list;
mod type_annotation;
mod type_system;
mod value;

pub use ast_node::AstNode;
pub use directive::Directive;
pub use document::Definition;
pub use document::DefinitionKind;
pub use document::Document;
pub use document::ExecutableDefinition;
pub use document::ExecutableDefinitionKind;
pub use document::TypeSystemDefinition;
pub use document::TypeSystemDefinitionKind;
pub use document::TypeSystemExtension;
pub use document::TypeSystemExtensionKind;
pub use executable::Field;
pub use executable::FragmentDefinition;
pub use executable::FragmentSpread;
pub use executable::InlineFragment;
pub use executable::OperationDefinition;
pub use executable::OperationType;
pub use executable::Selection;
pub use executable::SelectionKind;
pub use executable::SelectionSet;
pub use executable::VariableDefinition;
pub use indexed_list::IndexedList;
pub use indexed_list::Iter as IndexedListIter;
pub use type_annotation::ListTypeAnnotation;
pub use type_annotation::NamedTypeAnnotation;
pub use type_annotation::Nullability;
pub use type_annotation::TypeAnnotation;
pub use type_annotation::TypeAnnotationKind;
pub use type_system::DirectiveDefinition;
pub use type_system::DirectiveLocation;
pub use type_system::EnumTypeDefinition;
pub use type_system::EnumValueDefinition;
pub use type_system::FieldDefinition;
pub use type_system::InputObjectTypeDefinition;
pub use type_system::InputValueDefinition;
pub use type_system::InterfaceTypeDefinition;
pub use type_system::ObjectTypeDefinition;
pub use type_system::RootOperationTypeDefinition;
pub use type_system::ScalarTypeDefinition;
pub use type_system::SchemaDefinition;
pub use type_system::TypeDefinition;
pub use type_system::TypeDefinitionKind;
pub use type_system::UnionTypeDefinition;
pub use value::Argument;
pub use value::ObjectField;
pub use value::StringValue;
pub use value::Value;
pub use value::ValueKind;
