use crate::Schema;
use crate::ValidationContext;
use crate::ValidationError;
use crate::Walker;
use crate::rules::Rule;
use crate::rules::SPECIFIED_EXECUTABLE_RULES;
use crate::rules::SPECIFIED_SDL_RULES;
use gqlparse::ast::Document;

/// Runs `rules` over `document` in a single walk and returns every error
/// they report, in detection order.
///
/// An empty result means the document is valid with respect to `rules`.
pub fn validate<'a>(
    document: &Document<'a>,
    schema: Option<&'a Schema<'a>>,
    rules: &[Rule],
) -> Vec<ValidationError> {
    log::debug!(
        "validating document with {} definition(s) against {} rule(s)",
        document.definitions.len(),
        rules.len(),
    );

    let mut walker = Walker::new(&[]);
    for rule in rules {
        rule(&mut walker);
    }

    let mut ctx = ValidationContext::new(schema);
    walker.walk(&mut ctx, document);
    ctx.into_errors()
}

/// Validates a document meant for execution with
/// [`SPECIFIED_EXECUTABLE_RULES`].
pub fn validate_executable(document: &Document<'_>) -> Vec<ValidationError> {
    validate(document, None, SPECIFIED_EXECUTABLE_RULES)
}

/// Validates a schema definition document with [`SPECIFIED_SDL_RULES`],
/// optionally on top of an existing schema.
pub fn validate_sdl<'a>(
    document: &Document<'a>,
    schema: Option<&'a Schema<'a>>,
) -> Vec<ValidationError> {
    validate(document, schema, SPECIFIED_SDL_RULES)
}
