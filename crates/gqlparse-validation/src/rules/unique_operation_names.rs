use crate::ValidationContext;
use crate::ValidationError;
use crate::Walker;

pub fn unique_operation_names(walker: &mut Walker<'_, ValidationContext<'_>>) {
    walker.add_operation_definition_enter_handler(|ctx, op| {
        let Some(name) = &op.name else {
            return;
        };
        if !ctx.known_operation_names.insert(name.to_string()) {
            ctx.report(ValidationError::DuplicateOperationName {
                name: name.to_string(),
            });
        }
    });
}
