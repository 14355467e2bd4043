//! Validation rules.
//!
//! A rule is a plain function that registers handlers on a [`Walker`]. The
//! handlers read the nodes they are interested in and report problems into
//! the shared [`ValidationContext`]. Any number of rules can share one
//! walker and therefore one traversal of the document.

mod executable_definitions;
mod lone_anonymous_operation;
mod lone_schema_definition;
mod possible_type_extensions;
mod unique_argument_names;
mod unique_directive_names;
mod unique_fragment_names;
mod unique_operation_names;
mod unique_type_names;
mod unique_variable_names;

pub use executable_definitions::executable_definitions;
pub use lone_anonymous_operation::lone_anonymous_operation;
pub use lone_schema_definition::lone_schema_definition;
pub use possible_type_extensions::possible_type_extensions;
pub use unique_argument_names::unique_argument_names;
pub use unique_directive_names::unique_directive_names;
pub use unique_fragment_names::unique_fragment_names;
pub use unique_operation_names::unique_operation_names;
pub use unique_type_names::unique_type_names;
pub use unique_variable_names::unique_variable_names;

use crate::ValidationContext;
use crate::ValidationError;
use crate::Walker;
use std::collections::HashSet;

/// A validation rule: registers handlers on a walker.
pub type Rule = fn(&mut Walker<'_, ValidationContext<'_>>);

/// Rules for documents that will be executed.
pub const SPECIFIED_EXECUTABLE_RULES: &[Rule] = &[
    executable_definitions,
    lone_anonymous_operation,
    unique_operation_names,
    unique_fragment_names,
    unique_variable_names,
    unique_argument_names,
];

/// Rules for schema definition documents.
pub const SPECIFIED_SDL_RULES: &[Rule] = &[
    lone_schema_definition,
    unique_type_names,
    unique_directive_names,
    possible_type_extensions,
];

/// Reports one error for every name in `names` that was already seen
/// earlier in the same sequence.
fn report_repeated_names<'n>(
    ctx: &mut ValidationContext<'_>,
    names: impl Iterator<Item = &'n str>,
    to_error: impl Fn(String) -> ValidationError,
) {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            ctx.report(to_error(name.to_string()));
        }
    }
}
