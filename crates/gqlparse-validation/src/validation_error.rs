/// A semantic problem found in a syntactically valid document.
///
/// Messages follow the wording of the GraphQL reference implementation.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A type system definition or extension in a document meant for
    /// execution. `name` is `"schema"` for schema definitions and
    /// extensions.
    #[error("The {name} definition is not executable.")]
    NonExecutableDefinition { name: String },

    #[error("This anonymous operation must be the only defined operation.")]
    AnonymousOperationNotAlone,

    #[error("There can be only one operation named \"{name}\".")]
    DuplicateOperationName { name: String },

    #[error("There can be only one fragment named \"{name}\".")]
    DuplicateFragmentName { name: String },

    #[error("There can be only one variable named \"${name}\".")]
    DuplicateVariableName { name: String },

    #[error("There can be only one argument named \"{name}\".")]
    DuplicateArgumentName { name: String },

    #[error("Must provide only one schema definition.")]
    SchemaDefinitionNotAlone,

    #[error("Cannot define a new schema within a schema extension.")]
    SchemaAlreadyDefined,

    /// Two type definitions in the same document share a name.
    #[error("There can be only one type named \"{name}\".")]
    DuplicateTypeName { name: String },

    /// A type definition reuses the name of a type in the existing schema.
    #[error(
        "Type \"{name}\" already exists in the schema. It cannot also be defined in this \
         type definition."
    )]
    ExistedTypeName { name: String },

    #[error("There can be only one directive named \"@{name}\".")]
    DuplicateDirectiveName { name: String },

    #[error("Directive \"@{name}\" already exists in the schema. It cannot be redefined.")]
    ExistedDirectiveName { name: String },

    #[error("Cannot extend type \"{name}\" because it is not defined.")]
    ExtendedTypeNotDefined { name: String },

    /// A type extension whose keyword does not match the extended type's
    /// kind. `kind` names the extension's kind, e.g. `"input object"`.
    #[error("Cannot extend non-{kind} type \"{name}\".")]
    ExtendedTypeKindMismatch { name: String, kind: &'static str },
}
