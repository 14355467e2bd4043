use crate::ast::DirectiveDefinition;
use crate::ast::FragmentDefinition;
use crate::ast::IndexedList;
use crate::ast::OperationDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::TypeDefinition;

/// The root of a parsed GraphQL document.
#[derive(Clone, Debug, PartialEq)]
pub struct Document<'src> {
    pub definitions: IndexedList<Definition<'src>>,
}

impl<'src> Document<'src> {
    /// Iterates the document's operation definitions in list order.
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition<'src>> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Executable(ExecutableDefinition::Operation(op)) => Some(op),
            _ => None,
        })
    }

    /// Iterates the document's fragment definitions in list order.
    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition<'src>> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Executable(ExecutableDefinition::Fragment(frag)) => Some(frag),
            _ => None,
        })
    }

    /// Iterates the document's type definitions (not extensions) in list
    /// order.
    pub fn type_definitions(&self) -> impl Iterator<Item = &TypeDefinition<'src>> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::TypeSystem(TypeSystemDefinition::Type(type_def)) => Some(type_def),
            _ => None,
        })
    }
}

/// A top-level definition.
#[derive(Clone, Debug, PartialEq)]
pub enum Definition<'src> {
    Executable(ExecutableDefinition<'src>),
    TypeSystem(TypeSystemDefinition<'src>),
    TypeSystemExtension(TypeSystemExtension<'src>),
}

/// Discriminant of [`Definition`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DefinitionKind {
    Executable,
    TypeSystem,
    TypeSystemExtension,
}

impl<'src> Definition<'src> {
    pub fn kind(&self) -> DefinitionKind {
        match self {
            Self::Executable(_) => DefinitionKind::Executable,
            Self::TypeSystem(_) => DefinitionKind::TypeSystem,
            Self::TypeSystemExtension(_) => DefinitionKind::TypeSystemExtension,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExecutableDefinition<'src> {
    Operation(OperationDefinition<'src>),
    Fragment(FragmentDefinition<'src>),
}

/// Discriminant of [`ExecutableDefinition`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ExecutableDefinitionKind {
    Operation,
    Fragment,
}

impl<'src> ExecutableDefinition<'src> {
    pub fn kind(&self) -> ExecutableDefinitionKind {
        match self {
            Self::Operation(_) => ExecutableDefinitionKind::Operation,
            Self::Fragment(_) => ExecutableDefinitionKind::Fragment,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TypeSystemDefinition<'src> {
    Schema(SchemaDefinition<'src>),
    Type(TypeDefinition<'src>),
    Directive(DirectiveDefinition<'src>),
}

/// Discriminant of [`TypeSystemDefinition`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TypeSystemDefinitionKind {
    Schema,
    Type,
    Directive,
}

impl<'src> TypeSystemDefinition<'src> {
    pub fn kind(&self) -> TypeSystemDefinitionKind {
        match self {
            Self::Schema(_) => TypeSystemDefinitionKind::Schema,
            Self::Type(_) => TypeSystemDefinitionKind::Type,
            Self::Directive(_) => TypeSystemDefinitionKind::Directive,
        }
    }
}

/// `extend schema ...` or `extend <type kind> Name ...`.
///
/// Extensions reuse the definition payloads. Their `description` is always
/// `None`.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeSystemExtension<'src> {
    Schema(SchemaDefinition<'src>),
    Type(TypeDefinition<'src>),
}

/// Discriminant of [`TypeSystemExtension`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TypeSystemExtensionKind {
    Schema,
    Type,
}

impl<'src> TypeSystemExtension<'src> {
    pub fn kind(&self) -> TypeSystemExtensionKind {
        match self {
            Self::Schema(_) => TypeSystemExtensionKind::Schema,
            Self::Type(_) => TypeSystemExtensionKind::Type,
        }
    }
}
