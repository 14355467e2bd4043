use std::borrow::Cow;

/// Whether a type reference carries a trailing `!`.
///
/// Nullability is flattened onto each annotation node rather than modeled as
/// a wrapping `NonNull(...)` variant, which rules out redundant
/// `NonNull(NonNull(...))` nesting.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Nullability {
    NonNull,
    Nullable,
}

impl Nullability {
    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull)
    }
}

/// A type reference such as `String`, `[ID!]` or `[[Int]!]!`.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation<'src> {
    List(ListTypeAnnotation<'src>),
    Named(NamedTypeAnnotation<'src>),
}

/// Discriminant of [`TypeAnnotation`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TypeAnnotationKind {
    List,
    Named,
}

impl<'src> TypeAnnotation<'src> {
    pub fn kind(&self) -> TypeAnnotationKind {
        match self {
            Self::List(_) => TypeAnnotationKind::List,
            Self::Named(_) => TypeAnnotationKind::Named,
        }
    }

    pub fn nullability(&self) -> Nullability {
        match self {
            Self::List(list) => list.nullability,
            Self::Named(named) => named.nullability,
        }
    }

    /// The name at the innermost position of this annotation (`ID` for
    /// `[[ID!]]!`).
    pub fn innermost_name(&self) -> &str {
        let mut annot = self;
        loop {
            match annot {
                Self::List(list) => annot = &list.element_type,
                Self::Named(named) => return &named.name,
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeAnnotation<'src> {
    pub name: Cow<'src, str>,
    pub nullability: Nullability,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListTypeAnnotation<'src> {
    pub element_type: Box<TypeAnnotation<'src>>,
    pub nullability: Nullability,
}
