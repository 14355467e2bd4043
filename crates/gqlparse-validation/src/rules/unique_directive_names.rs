use crate::ValidationContext;
use crate::ValidationError;
use crate::Walker;

/// Directive names must be unique within a document and must not collide
/// with directives in the existing schema, if any.
pub fn unique_directive_names(walker: &mut Walker<'_, ValidationContext<'_>>) {
    walker.add_directive_definition_enter_handler(|ctx, directive_def| {
        let name = &*directive_def.name;

        if ctx
            .schema()
            .is_some_and(|schema| schema.directive(name).is_some())
        {
            ctx.report(ValidationError::ExistedDirectiveName {
                name: name.to_string(),
            });
            return;
        }

        if !ctx.known_directive_names.insert(name.to_string()) {
            ctx.report(ValidationError::DuplicateDirectiveName {
                name: name.to_string(),
            });
        }
    });
}
