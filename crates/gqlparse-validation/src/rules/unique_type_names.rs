use crate::ValidationContext;
use crate::ValidationError;
use crate::Walker;

/// Type names must be unique within a document and must not collide with
/// types in the existing schema, if any.
///
/// Each repeated definition is reported separately. A collision with the
/// existing schema is reported as [`ValidationError::ExistedTypeName`]
/// instead of [`ValidationError::DuplicateTypeName`]. Extensions are not
/// definitions and are ignored.
pub fn unique_type_names(walker: &mut Walker<'_, ValidationContext<'_>>) {
    walker.add_type_definition_enter_handler(|ctx, type_def| {
        let name = type_def.name();

        if ctx
            .schema()
            .is_some_and(|schema| schema.type_definition(name).is_some())
        {
            ctx.report(ValidationError::ExistedTypeName {
                name: name.to_string(),
            });
            return;
        }

        if !ctx.known_type_names.insert(name.to_string()) {
            ctx.report(ValidationError::DuplicateTypeName {
                name: name.to_string(),
            });
        }
    });
}
