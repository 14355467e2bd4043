use crate::Schema;
use crate::ValidationError;
use gqlparse::ast::TypeDefinitionKind;
use indexmap::IndexMap;
use indexmap::IndexSet;

/// State shared by all rules during one validation walk.
///
/// Holds the optional pre-existing [`Schema`] that rules validate against,
/// the ordered list of errors found so far, and per-document bookkeeping
/// tables that rules fill in as the walk proceeds.
pub struct ValidationContext<'a> {
    schema: Option<&'a Schema<'a>>,
    errors: Vec<ValidationError>,

    pub(crate) operation_count: usize,
    pub(crate) schema_definition_count: usize,
    pub(crate) known_operation_names: IndexSet<String>,
    pub(crate) known_fragment_names: IndexSet<String>,
    pub(crate) known_type_names: IndexSet<String>,
    pub(crate) known_directive_names: IndexSet<String>,

    /// Kinds of every type defined anywhere in the document, first
    /// definition wins.
    pub(crate) defined_type_kinds: IndexMap<String, TypeDefinitionKind>,
}

impl<'a> ValidationContext<'a> {
    pub fn new(schema: Option<&'a Schema<'a>>) -> Self {
        Self {
            schema,
            errors: vec![],
            operation_count: 0,
            schema_definition_count: 0,
            known_operation_names: IndexSet::new(),
            known_fragment_names: IndexSet::new(),
            known_type_names: IndexSet::new(),
            known_directive_names: IndexSet::new(),
            defined_type_kinds: IndexMap::new(),
        }
    }

    pub fn schema(&self) -> Option<&'a Schema<'a>> {
        self.schema
    }

    /// Errors reported so far, in detection order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    /// Records an error. Validation continues after every report.
    pub fn report(&mut self, error: ValidationError) {
        log::debug!("validation error: {error}");
        self.errors.push(error);
    }
}
