//! A GraphQL lexer and fail-fast parser for schema documents, executable
//! documents, and documents that mix both together.
//!
//! The parser consumes any [`TokenSource`](token_source::TokenSource) and
//! produces an [`ast::Document`] whose repeated children are stored in
//! [`ast::IndexedList`]s.
//!
//! ```rust
//! let doc = gqlparse::parse("query Hero { hero { name } }").unwrap();
//! assert_eq!(doc.operations().count(), 1);
//! ```

pub mod ast;
mod error_note;
mod parser;
pub mod printer;
mod syntax_error;
mod syntax_error_kind;
pub mod token;
pub mod token_source;
mod token_stream;

pub use error_note::ErrorNote;
pub use error_note::ErrorNoteKind;
pub use error_note::ErrorNotes;
pub use parser::Parser;
pub use parser::parse;
pub use parser::parse_bytes;
pub use printer::print_document;
pub use smallvec::SmallVec;
pub use smallvec::smallvec;
pub use syntax_error::SyntaxError;
pub use syntax_error_kind::SyntaxErrorKind;
pub use token_stream::TokenStream;

#[cfg(test)]
mod tests;
