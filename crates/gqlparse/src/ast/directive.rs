use crate::ast::Argument;
use crate::ast::IndexedList;
use std::borrow::Cow;

/// A directive annotation such as `@include(if: $cond)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive<'src> {
    /// The directive's name, without the `@`.
    pub name: Cow<'src, str>,
    pub arguments: IndexedList<Argument<'src>>,
}
