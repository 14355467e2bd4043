use crate::ValidationContext;
use crate::ValidationError;
use crate::Walker;
use gqlparse::ast::TypeDefinition;
use gqlparse::ast::TypeDefinitionKind;

/// A type extension must extend a type defined in the same document (before
/// or after the extension) or in the existing schema, using the same kind
/// keyword as that type.
pub fn possible_type_extensions(walker: &mut Walker<'_, ValidationContext<'_>>) {
    walker.add_document_enter_handler(|ctx, document| {
        for type_def in document.type_definitions() {
            ctx.defined_type_kinds
                .entry(type_def.name().to_string())
                .or_insert(type_def.kind());
        }
    });

    walker.add_type_extension_enter_handler(|ctx, type_ext| {
        let name = type_ext.name();
        let defined_kind = ctx.defined_type_kinds.get(name).copied().or_else(|| {
            ctx.schema()
                .and_then(|schema| schema.type_definition(name))
                .map(TypeDefinition::kind)
        });

        match defined_kind {
            None => ctx.report(ValidationError::ExtendedTypeNotDefined {
                name: name.to_string(),
            }),
            Some(kind) if kind != type_ext.kind() => {
                ctx.report(ValidationError::ExtendedTypeKindMismatch {
                    name: name.to_string(),
                    kind: kind_name(type_ext.kind()),
                })
            },
            Some(_) => {},
        }
    });
}

fn kind_name(kind: TypeDefinitionKind) -> &'static str {
    match kind {
        TypeDefinitionKind::Scalar => "scalar",
        TypeDefinitionKind::Object => "object",
        TypeDefinitionKind::Interface => "interface",
        TypeDefinitionKind::Union => "union",
        TypeDefinitionKind::Enum => "enum",
        TypeDefinitionKind::InputObject => "input object",
    }
}
