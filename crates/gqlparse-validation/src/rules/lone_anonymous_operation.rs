use crate::ValidationContext;
use crate::ValidationError;
use crate::Walker;

/// An anonymous operation is only allowed when it is the document's only
/// operation.
pub fn lone_anonymous_operation(walker: &mut Walker<'_, ValidationContext<'_>>) {
    walker.add_document_enter_handler(|ctx, document| {
        ctx.operation_count = document.operations().count();
    });

    walker.add_operation_definition_enter_handler(|ctx, op| {
        if op.name.is_none() && ctx.operation_count > 1 {
            ctx.report(ValidationError::AnonymousOperationNotAlone);
        }
    });
}
