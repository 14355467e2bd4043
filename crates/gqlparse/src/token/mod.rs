//! This module provides the token types produced by the lexer and consumed by
//! the parser.

mod lexed_token;
mod punctuator;
mod token_kind;

pub use lexed_token::Token;
pub use punctuator::Punctuator;
pub use token_kind::TokenKind;
