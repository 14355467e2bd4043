use crate::ValidationContext;
use crate::ValidationError;
use crate::Walker;

/// A document may contain at most one schema definition, and none at all
/// when validated against a schema that already has one.
///
/// A schema "has one" if it carries a schema definition or any root
/// operation type.
pub fn lone_schema_definition(walker: &mut Walker<'_, ValidationContext<'_>>) {
    walker.add_schema_definition_enter_handler(|ctx, _schema_def| {
        let already_defined = ctx.schema().is_some_and(|schema| {
            schema.definition().is_some()
                || schema.query_type().is_some()
                || schema.mutation_type().is_some()
                || schema.subscription_type().is_some()
        });
        if already_defined {
            ctx.report(ValidationError::SchemaAlreadyDefined);
            return;
        }

        if ctx.schema_definition_count > 0 {
            ctx.report(ValidationError::SchemaDefinitionNotAlone);
        }
        ctx.schema_definition_count += 1;
    });
}
