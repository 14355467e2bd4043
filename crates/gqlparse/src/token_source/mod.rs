//! Token source trait and the `&str` lexer.

mod lexer;
mod token_source_trait;

pub use lexer::Lexer;
pub(crate) use lexer::describe_char;
pub use token_source_trait::TokenSource;

#[cfg(test)]
mod tests;
