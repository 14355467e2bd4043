use crate::ast::IndexedList;
use std::borrow::Cow;

/// A GraphQL input value.
///
/// `Int` and `Float` keep their source literal (including any `-` sign) so
/// that no precision is lost before a consumer decides how to coerce them.
#[derive(Clone, Debug, PartialEq)]
pub enum Value<'src> {
    /// `$name`. Holds the name without the `$`.
    Variable(Cow<'src, str>),
    Int(Cow<'src, str>),
    Float(Cow<'src, str>),
    String(StringValue<'src>),
    Boolean(bool),
    Null,
    Enum(Cow<'src, str>),
    List(IndexedList<Value<'src>>),
    Object(IndexedList<ObjectField<'src>>),
}

/// Discriminant of [`Value`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueKind {
    Variable,
    Int,
    Float,
    String,
    Boolean,
    Null,
    Enum,
    List,
    Object,
}

impl<'src> Value<'src> {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Variable(_) => ValueKind::Variable,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::String(_) => ValueKind::String,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Null => ValueKind::Null,
            Self::Enum(_) => ValueKind::Enum,
            Self::List(_) => ValueKind::List,
            Self::Object(_) => ValueKind::Object,
        }
    }

    /// Parses an `Int` value's literal. Returns `None` for other variants or
    /// when the literal does not fit in an `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(raw) => raw.parse().ok(),
            _ => None,
        }
    }

    /// Parses an `Int` or `Float` value's literal as an `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(raw) | Self::Float(raw) => raw.parse().ok(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(string) => Some(&string.value),
            _ => None,
        }
    }
}

/// A string value.
///
/// `value` is the decoded content. `is_block` records whether it was written
/// as a `"""` block string so that it can be printed back the same way.
#[derive(Clone, Debug, PartialEq)]
pub struct StringValue<'src> {
    pub value: Cow<'src, str>,
    pub is_block: bool,
}

/// One `name: value` entry of an object value.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField<'src> {
    pub name: Cow<'src, str>,
    pub value: Value<'src>,
}

/// One `name: value` entry of a field's or directive's argument list.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument<'src> {
    pub name: Cow<'src, str>,
    pub value: Value<'src>,
}
