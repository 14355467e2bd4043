use crate::ValidationError;
use crate::Walker;
use crate::validate_sdl;
use gqlparse::ast::DirectiveDefinition;
use gqlparse::ast::Document;
use gqlparse::ast::OperationType;
use gqlparse::ast::SchemaDefinition;
use gqlparse::ast::TypeDefinition;
use indexmap::IndexMap;

/// Named type and directive definitions collected from schema documents.
///
/// Definitions are kept as AST nodes, in the order they were first
/// registered. Type extensions are merged into the definition they extend.
#[derive(Clone, Debug, Default)]
pub struct Schema<'src> {
    definition: Option<SchemaDefinition<'src>>,
    query_type: Option<String>,
    mutation_type: Option<String>,
    subscription_type: Option<String>,
    types: IndexMap<String, TypeDefinition<'src>>,
    directives: IndexMap<String, DirectiveDefinition<'src>>,
}

impl<'src> Schema<'src> {
    /// The explicit `schema { ... }` definition, with any schema extensions
    /// merged in.
    pub fn definition(&self) -> Option<&SchemaDefinition<'src>> {
        self.definition.as_ref()
    }

    pub fn query_type(&self) -> Option<&str> {
        self.query_type.as_deref()
    }

    pub fn mutation_type(&self) -> Option<&str> {
        self.mutation_type.as_deref()
    }

    pub fn subscription_type(&self) -> Option<&str> {
        self.subscription_type.as_deref()
    }

    pub fn root_operation_type(&self, operation_type: OperationType) -> Option<&str> {
        match operation_type {
            OperationType::Query => self.query_type(),
            OperationType::Mutation => self.mutation_type(),
            OperationType::Subscription => self.subscription_type(),
        }
    }

    pub fn type_definition(&self, name: &str) -> Option<&TypeDefinition<'src>> {
        self.types.get(name)
    }

    pub fn types(&self) -> &IndexMap<String, TypeDefinition<'src>> {
        &self.types
    }

    pub fn directive(&self, name: &str) -> Option<&DirectiveDefinition<'src>> {
        self.directives.get(name)
    }

    pub fn directives(&self) -> &IndexMap<String, DirectiveDefinition<'src>> {
        &self.directives
    }

    fn set_root_operation_types(&mut self, schema_def: &SchemaDefinition<'src>) {
        for root in &schema_def.root_operation_types {
            let slot = match root.operation_type {
                OperationType::Query => &mut self.query_type,
                OperationType::Mutation => &mut self.mutation_type,
                OperationType::Subscription => &mut self.subscription_type,
            };
            *slot = Some(root.named_type.to_string());
        }
    }

    fn extend_schema(&mut self, schema_ext: SchemaDefinition<'src>) {
        self.set_root_operation_types(&schema_ext);
        match &mut self.definition {
            Some(schema_def) => {
                schema_def.directives.join(schema_ext.directives);
                schema_def.root_operation_types.join(schema_ext.root_operation_types);
            },
            None => self.definition = Some(schema_ext),
        }
    }

    /// Appends an extension's members to the type it extends.
    ///
    /// Extensions of unknown types or of a different kind are skipped; the
    /// SDL rules reject both before a schema is built.
    fn extend_type(&mut self, type_ext: TypeDefinition<'src>) {
        let Some(type_def) = self.types.get_mut(type_ext.name()) else {
            log::debug!("skipping extension of unknown type `{}`", type_ext.name());
            return;
        };

        match (type_def, type_ext) {
            (TypeDefinition::Scalar(def), TypeDefinition::Scalar(ext)) => {
                def.directives.join(ext.directives);
            },
            (TypeDefinition::Object(def), TypeDefinition::Object(ext)) => {
                def.interfaces.join(ext.interfaces);
                def.directives.join(ext.directives);
                def.fields.join(ext.fields);
            },
            (TypeDefinition::Interface(def), TypeDefinition::Interface(ext)) => {
                def.interfaces.join(ext.interfaces);
                def.directives.join(ext.directives);
                def.fields.join(ext.fields);
            },
            (TypeDefinition::Union(def), TypeDefinition::Union(ext)) => {
                def.directives.join(ext.directives);
                def.members.join(ext.members);
            },
            (TypeDefinition::Enum(def), TypeDefinition::Enum(ext)) => {
                def.directives.join(ext.directives);
                def.values.join(ext.values);
            },
            (TypeDefinition::InputObject(def), TypeDefinition::InputObject(ext)) => {
                def.directives.join(ext.directives);
                def.fields.join(ext.fields);
            },
            (type_def, type_ext) => log::debug!(
                "skipping `{}` extension of {} type `{}`",
                type_ext.kind().keyword(),
                type_def.kind().keyword(),
                type_def.name(),
            ),
        }
    }

    /// Without an explicit schema definition, root operation types default
    /// to the types named `Query`, `Mutation` and `Subscription`.
    fn apply_default_root_operation_types(&mut self) {
        if self.definition.is_some() {
            return;
        }
        for (slot, name) in [
            (&mut self.query_type, "Query"),
            (&mut self.mutation_type, "Mutation"),
            (&mut self.subscription_type, "Subscription"),
        ] {
            if slot.is_none() && self.types.contains_key(name) {
                *slot = Some(name.to_string());
            }
        }
    }
}

/// Walk state while registering one document's definitions.
///
/// Extensions are applied after the walk so that they may precede the
/// definition they extend.
#[derive(Default)]
struct SchemaBuildContext<'src> {
    schema: Schema<'src>,
    schema_extensions: Vec<SchemaDefinition<'src>>,
    type_extensions: Vec<TypeDefinition<'src>>,
}

fn register_definitions<'src>(walker: &mut Walker<'src, SchemaBuildContext<'src>>) {
    walker.add_schema_definition_enter_handler(|ctx, schema_def| {
        ctx.schema.set_root_operation_types(schema_def);
        ctx.schema.definition = Some(schema_def.clone());
    });

    walker.add_type_definition_enter_handler(|ctx, type_def| {
        ctx.schema
            .types
            .insert(type_def.name().to_string(), type_def.clone());
    });

    walker.add_directive_definition_enter_handler(|ctx, directive_def| {
        ctx.schema
            .directives
            .insert(directive_def.name.to_string(), directive_def.clone());
    });

    walker.add_schema_extension_enter_handler(|ctx, schema_ext| {
        ctx.schema_extensions.push(schema_ext.clone());
    });

    walker.add_type_extension_enter_handler(|ctx, type_ext| {
        ctx.type_extensions.push(type_ext.clone());
    });
}

/// Validates `document` with the SDL rules and registers its definitions
/// on top of `existing` (or an empty schema).
///
/// `existing` is never modified. On failure, every validation error is
/// returned and no schema is built.
pub fn build_schema<'src>(
    existing: Option<&Schema<'src>>,
    document: &Document<'src>,
) -> Result<Schema<'src>, Vec<ValidationError>> {
    let errors = validate_sdl(document, existing);
    if !errors.is_empty() {
        log::debug!("schema document rejected with {} error(s)", errors.len());
        return Err(errors);
    }

    let mut ctx = SchemaBuildContext {
        schema: existing.cloned().unwrap_or_default(),
        ..SchemaBuildContext::default()
    };
    // Handlers clone nodes into the schema, so the walker's lifetime is tied
    // to `'src` and this cannot be a `VisitFn`.
    let mut walker = Walker::default();
    register_definitions(&mut walker);
    walker.walk(&mut ctx, document);

    let SchemaBuildContext {
        mut schema,
        schema_extensions,
        type_extensions,
    } = ctx;
    for schema_ext in schema_extensions {
        schema.extend_schema(schema_ext);
    }
    for type_ext in type_extensions {
        schema.extend_type(type_ext);
    }
    schema.apply_default_root_operation_types();

    log::debug!(
        "built schema with {} type(s) and {} directive(s)",
        schema.types.len(),
        schema.directives.len(),
    );
    Ok(schema)
}
