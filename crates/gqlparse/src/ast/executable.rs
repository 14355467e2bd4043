use crate::ast::Argument;
use crate::ast::Directive;
use crate::ast::IndexedList;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use std::borrow::Cow;

/// A `{ ... }` group of selections. Never empty in a parsed document.
pub type SelectionSet<'src> = IndexedList<Selection<'src>>;

/// `query`, `mutation` or `subscription`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

impl OperationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "query" => Some(Self::Query),
            "mutation" => Some(Self::Mutation),
            "subscription" => Some(Self::Subscription),
            _ => None,
        }
    }
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An operation definition.
///
/// The shorthand form `{ ... }` parses to an anonymous `Query` operation with
/// no variable definitions and no directives; see
/// [`is_shorthand`](Self::is_shorthand).
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition<'src> {
    pub operation_type: OperationType,
    pub name: Option<Cow<'src, str>>,
    pub variable_definitions: IndexedList<VariableDefinition<'src>>,
    pub directives: IndexedList<Directive<'src>>,
    pub selection_set: SelectionSet<'src>,
}

impl<'src> OperationDefinition<'src> {
    /// Whether this operation can be written without its `query` keyword.
    pub fn is_shorthand(&self) -> bool {
        self.operation_type == OperationType::Query
            && self.name.is_none()
            && self.variable_definitions.is_empty()
            && self.directives.is_empty()
    }
}

/// `$name: Type = default @directives`
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition<'src> {
    /// The variable's name, without the `$`.
    pub name: Cow<'src, str>,
    pub var_type: TypeAnnotation<'src>,
    pub default_value: Option<Value<'src>>,
    pub directives: IndexedList<Directive<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Selection<'src> {
    Field(Field<'src>),
    FragmentSpread(FragmentSpread<'src>),
    InlineFragment(InlineFragment<'src>),
}

/// Discriminant of [`Selection`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SelectionKind {
    Field,
    FragmentSpread,
    InlineFragment,
}

impl<'src> Selection<'src> {
    pub fn kind(&self) -> SelectionKind {
        match self {
            Self::Field(_) => SelectionKind::Field,
            Self::FragmentSpread(_) => SelectionKind::FragmentSpread,
            Self::InlineFragment(_) => SelectionKind::InlineFragment,
        }
    }
}

/// `alias: name(arguments) @directives { selections }`
#[derive(Clone, Debug, PartialEq)]
pub struct Field<'src> {
    pub alias: Option<Cow<'src, str>>,
    pub name: Cow<'src, str>,
    pub arguments: IndexedList<Argument<'src>>,
    pub directives: IndexedList<Directive<'src>>,
    pub selection_set: Option<SelectionSet<'src>>,
}

impl<'src> Field<'src> {
    /// The key this field's result is stored under: the alias if present,
    /// otherwise the name.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

/// `...FragmentName @directives`
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread<'src> {
    pub name: Cow<'src, str>,
    pub directives: IndexedList<Directive<'src>>,
}

/// `... on TypeName @directives { selections }`
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment<'src> {
    pub type_condition: Option<Cow<'src, str>>,
    pub directives: IndexedList<Directive<'src>>,
    pub selection_set: SelectionSet<'src>,
}

/// `fragment Name on TypeName @directives { selections }`
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition<'src> {
    pub name: Cow<'src, str>,
    pub type_condition: Cow<'src, str>,
    pub directives: IndexedList<Directive<'src>>,
    pub selection_set: SelectionSet<'src>,
}
