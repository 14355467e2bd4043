use crate::ValidationContext;
use crate::ValidationError;
use crate::Walker;
use crate::rules::report_repeated_names;

/// Variable names must be unique within each operation.
pub fn unique_variable_names(walker: &mut Walker<'_, ValidationContext<'_>>) {
    walker.add_operation_definition_enter_handler(|ctx, op| {
        report_repeated_names(
            ctx,
            op.variable_definitions.iter().map(|var_def| &*var_def.name),
            |name| ValidationError::DuplicateVariableName { name },
        );
    });
}
