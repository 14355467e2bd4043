use crate::ast::Directive;
use crate::ast::IndexedList;
use crate::ast::OperationType;
use crate::ast::StringValue;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use std::borrow::Cow;

// =============================================================================
// Schema
// =============================================================================

/// `schema @directives { query: Query ... }`
///
/// Also used as the payload of a schema extension, where `description` is
/// always `None` and `root_operation_types` may be empty.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub directives: IndexedList<Directive<'src>>,
    pub root_operation_types: IndexedList<RootOperationTypeDefinition<'src>>,
}

/// `query: Query`
#[derive(Clone, Debug, PartialEq)]
pub struct RootOperationTypeDefinition<'src> {
    pub operation_type: OperationType,
    pub named_type: Cow<'src, str>,
}

// =============================================================================
// Types
// =============================================================================

/// A named type definition.
///
/// Also used as the payload of a type extension, where `description` is
/// always `None`.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeDefinition<'src> {
    Scalar(ScalarTypeDefinition<'src>),
    Object(ObjectTypeDefinition<'src>),
    Interface(InterfaceTypeDefinition<'src>),
    Union(UnionTypeDefinition<'src>),
    Enum(EnumTypeDefinition<'src>),
    InputObject(InputObjectTypeDefinition<'src>),
}

/// Discriminant of [`TypeDefinition`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TypeDefinitionKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
}

impl TypeDefinitionKind {
    /// The keyword that introduces this kind of definition.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Object => "type",
            Self::Interface => "interface",
            Self::Union => "union",
            Self::Enum => "enum",
            Self::InputObject => "input",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "scalar" => Some(Self::Scalar),
            "type" => Some(Self::Object),
            "interface" => Some(Self::Interface),
            "union" => Some(Self::Union),
            "enum" => Some(Self::Enum),
            "input" => Some(Self::InputObject),
            _ => None,
        }
    }
}

impl<'src> TypeDefinition<'src> {
    pub fn kind(&self) -> TypeDefinitionKind {
        match self {
            Self::Scalar(_) => TypeDefinitionKind::Scalar,
            Self::Object(_) => TypeDefinitionKind::Object,
            Self::Interface(_) => TypeDefinitionKind::Interface,
            Self::Union(_) => TypeDefinitionKind::Union,
            Self::Enum(_) => TypeDefinitionKind::Enum,
            Self::InputObject(_) => TypeDefinitionKind::InputObject,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Scalar(def) => &def.name,
            Self::Object(def) => &def.name,
            Self::Interface(def) => &def.name,
            Self::Union(def) => &def.name,
            Self::Enum(def) => &def.name,
            Self::InputObject(def) => &def.name,
        }
    }

    pub fn description(&self) -> Option<&StringValue<'src>> {
        match self {
            Self::Scalar(def) => def.description.as_ref(),
            Self::Object(def) => def.description.as_ref(),
            Self::Interface(def) => def.description.as_ref(),
            Self::Union(def) => def.description.as_ref(),
            Self::Enum(def) => def.description.as_ref(),
            Self::InputObject(def) => def.description.as_ref(),
        }
    }

    pub fn directives(&self) -> &IndexedList<Directive<'src>> {
        match self {
            Self::Scalar(def) => &def.directives,
            Self::Object(def) => &def.directives,
            Self::Interface(def) => &def.directives,
            Self::Union(def) => &def.directives,
            Self::Enum(def) => &def.directives,
            Self::InputObject(def) => &def.directives,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScalarTypeDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Cow<'src, str>,
    pub directives: IndexedList<Directive<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Cow<'src, str>,
    /// Always [`TypeAnnotation::Named`] and nullable.
    pub interfaces: IndexedList<TypeAnnotation<'src>>,
    pub directives: IndexedList<Directive<'src>>,
    pub fields: IndexedList<FieldDefinition<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Cow<'src, str>,
    /// Always [`TypeAnnotation::Named`] and nullable.
    pub interfaces: IndexedList<TypeAnnotation<'src>>,
    pub directives: IndexedList<Directive<'src>>,
    pub fields: IndexedList<FieldDefinition<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnionTypeDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Cow<'src, str>,
    pub directives: IndexedList<Directive<'src>>,
    /// Always [`TypeAnnotation::Named`] and nullable.
    pub members: IndexedList<TypeAnnotation<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Cow<'src, str>,
    pub directives: IndexedList<Directive<'src>>,
    pub values: IndexedList<EnumValueDefinition<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Cow<'src, str>,
    pub directives: IndexedList<Directive<'src>>,
    pub fields: IndexedList<InputValueDefinition<'src>>,
}

/// `name(arguments): Type @directives` inside an object or interface.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Cow<'src, str>,
    pub arguments: IndexedList<InputValueDefinition<'src>>,
    pub field_type: TypeAnnotation<'src>,
    pub directives: IndexedList<Directive<'src>>,
}

/// An argument definition or an input object field:
/// `name: Type = default @directives`.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Cow<'src, str>,
    pub value_type: TypeAnnotation<'src>,
    pub default_value: Option<Value<'src>>,
    pub directives: IndexedList<Directive<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Cow<'src, str>,
    pub directives: IndexedList<Directive<'src>>,
}

// =============================================================================
// Directives
// =============================================================================

/// `directive @name(arguments) repeatable on LOCATION | ...`
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    /// The directive's name, without the `@`.
    pub name: Cow<'src, str>,
    pub arguments: IndexedList<InputValueDefinition<'src>>,
    pub repeatable: bool,
    pub locations: IndexedList<DirectiveLocation>,
}

/// A location a directive may be applied to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DirectiveLocation {
    // Executable locations
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,

    // Type system locations
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

impl DirectiveLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "QUERY",
            Self::Mutation => "MUTATION",
            Self::Subscription => "SUBSCRIPTION",
            Self::Field => "FIELD",
            Self::FragmentDefinition => "FRAGMENT_DEFINITION",
            Self::FragmentSpread => "FRAGMENT_SPREAD",
            Self::InlineFragment => "INLINE_FRAGMENT",
            Self::VariableDefinition => "VARIABLE_DEFINITION",
            Self::Schema => "SCHEMA",
            Self::Scalar => "SCALAR",
            Self::Object => "OBJECT",
            Self::FieldDefinition => "FIELD_DEFINITION",
            Self::ArgumentDefinition => "ARGUMENT_DEFINITION",
            Self::Interface => "INTERFACE",
            Self::Union => "UNION",
            Self::Enum => "ENUM",
            Self::EnumValue => "ENUM_VALUE",
            Self::InputObject => "INPUT_OBJECT",
            Self::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Some(match name {
            "QUERY" => Self::Query,
            "MUTATION" => Self::Mutation,
            "SUBSCRIPTION" => Self::Subscription,
            "FIELD" => Self::Field,
            "FRAGMENT_DEFINITION" => Self::FragmentDefinition,
            "FRAGMENT_SPREAD" => Self::FragmentSpread,
            "INLINE_FRAGMENT" => Self::InlineFragment,
            "VARIABLE_DEFINITION" => Self::VariableDefinition,
            "SCHEMA" => Self::Schema,
            "SCALAR" => Self::Scalar,
            "OBJECT" => Self::Object,
            "FIELD_DEFINITION" => Self::FieldDefinition,
            "ARGUMENT_DEFINITION" => Self::ArgumentDefinition,
            "INTERFACE" => Self::Interface,
            "UNION" => Self::Union,
            "ENUM" => Self::Enum,
            "ENUM_VALUE" => Self::EnumValue,
            "INPUT_OBJECT" => Self::InputObject,
            "INPUT_FIELD_DEFINITION" => Self::InputFieldDefinition,
            _ => return None,
        })
    }

    pub fn is_executable(&self) -> bool {
        matches!(
            self,
            Self::Query
                | Self::Mutation
                | Self::Subscription
                | Self::Field
                | Self::FragmentDefinition
                | Self::FragmentSpread
                | Self::InlineFragment
                | Self::VariableDefinition
        )
    }
}
