use crate::Schema;
use crate::build_schema;
use gqlparse::ast::Document;

/// Parses `source`, panicking with a detailed diagnostic on failure.
pub(crate) fn parse_ok(source: &str) -> Document<'_> {
    match gqlparse::parse(source) {
        Ok(doc) => doc,
        Err(err) => panic!("failed to parse:\n{}", err.format_detailed(Some(source))),
    }
}

/// Builds a schema from a single SDL document, panicking on any error.
pub(crate) fn schema_from(source: &'static str) -> Schema<'static> {
    let doc = parse_ok(source);
    match build_schema(None, &doc) {
        Ok(schema) => schema,
        Err(errors) => panic!("failed to build schema from {source:?}: {errors:?}"),
    }
}
