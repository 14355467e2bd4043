use crate::ValidationContext;
use crate::ValidationError;
use crate::Walker;
use crate::rules::report_repeated_names;

/// Argument names must be unique within each field and each directive
/// annotation.
pub fn unique_argument_names(walker: &mut Walker<'_, ValidationContext<'_>>) {
    walker.add_field_enter_handler(|ctx, field| {
        report_repeated_names(
            ctx,
            field.arguments.iter().map(|arg| &*arg.name),
            |name| ValidationError::DuplicateArgumentName { name },
        );
    });

    walker.add_directive_enter_handler(|ctx, directive| {
        report_repeated_names(
            ctx,
            directive.arguments.iter().map(|arg| &*arg.name),
            |name| ValidationError::DuplicateArgumentName { name },
        );
    });
}
