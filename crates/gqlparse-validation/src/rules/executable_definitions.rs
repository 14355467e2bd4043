use crate::ValidationContext;
use crate::ValidationError;
use crate::Walker;
use gqlparse::ast::Definition;
use gqlparse::ast::TypeSystemDefinition;
use gqlparse::ast::TypeSystemExtension;

/// Reports every type system definition or extension in a document that is
/// meant for execution.
pub fn executable_definitions(walker: &mut Walker<'_, ValidationContext<'_>>) {
    walker.add_definition_enter_handler(|ctx, definition| {
        let name = match definition {
            Definition::Executable(_) => return,
            Definition::TypeSystem(TypeSystemDefinition::Schema(_))
            | Definition::TypeSystemExtension(TypeSystemExtension::Schema(_)) => "schema",
            Definition::TypeSystem(TypeSystemDefinition::Type(type_def))
            | Definition::TypeSystemExtension(TypeSystemExtension::Type(type_def)) => {
                type_def.name()
            },
            Definition::TypeSystem(TypeSystemDefinition::Directive(directive_def)) => {
                &*directive_def.name
            },
        };
        ctx.report(ValidationError::NonExecutableDefinition {
            name: name.to_string(),
        });
    });
}
