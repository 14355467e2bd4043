//! Enter/leave traversal and validation rules for documents parsed by
//! [`gqlparse`].
//!
//! A [`Walker`] dispatches per-node-kind events during a depth-first walk of
//! a [`Document`](gqlparse::ast::Document). Validation rules are functions
//! that register handlers on a shared walker, so any number of rules run in
//! a single traversal. Problems accumulate in a [`ValidationContext`] and
//! never stop the walk.
//!
//! ```rust
//! use gqlparse_validation::ValidationError;
//!
//! let doc = gqlparse::parse("{ hello }\ntype Foo").unwrap();
//! let errors = gqlparse_validation::validate_executable(&doc);
//! assert_eq!(
//!     errors,
//!     vec![ValidationError::NonExecutableDefinition { name: "Foo".to_string() }],
//! );
//! ```

pub mod rules;
mod schema;
mod validate;
mod validation_context;
mod validation_error;
mod walker;

pub use rules::Rule;
pub use rules::SPECIFIED_EXECUTABLE_RULES;
pub use rules::SPECIFIED_SDL_RULES;
pub use schema::Schema;
pub use schema::build_schema;
pub use validate::validate;
pub use validate::validate_executable;
pub use validate::validate_sdl;
pub use validation_context::ValidationContext;
pub use validation_error::ValidationError;
pub use walker::VisitFn;
pub use walker::Walker;

#[cfg(test)]
mod tests;
