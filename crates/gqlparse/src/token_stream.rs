//! Bounded lookahead over a [`TokenSource`].

use crate::token::Token;
use crate::token::TokenKind;
use crate::token_source::TokenSource;
use std::collections::VecDeque;

/// Buffers tokens pulled from a [`TokenSource`] so the parser can peek before
/// consuming.
///
/// If the underlying source runs dry without producing an `Eof` token, the
/// stream synthesizes one positioned just after the last consumed token, so
/// [`peek`](Self::peek) always has something to return.
pub struct TokenStream<'src, TTokenSource: TokenSource<'src>> {
    token_source: TTokenSource,
    buffer: VecDeque<Token<'src>>,
    last_line: usize,
    last_position: usize,
}

impl<'src, TTokenSource: TokenSource<'src>> TokenStream<'src, TTokenSource> {
    pub fn new(token_source: TTokenSource) -> Self {
        Self {
            token_source,
            buffer: VecDeque::new(),
            last_line: 1,
            last_position: 1,
        }
    }

    fn ensure_buffer_has(&mut self, count: usize) {
        while self.buffer.len() < count {
            match self.token_source.next() {
                Some(token) => self.buffer.push_back(token),
                None => break,
            }
        }
    }

    fn synthetic_eof(&self) -> Token<'src> {
        Token::new(TokenKind::Eof, "", self.last_line, self.last_position)
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> &Token<'src> {
        self.ensure_buffer_has(1);
        if self.buffer.is_empty() {
            let eof = self.synthetic_eof();
            self.buffer.push_back(eof);
        }
        &self.buffer[0]
    }

    /// Consumes and returns the next token.
    pub fn consume(&mut self) -> Token<'src> {
        self.ensure_buffer_has(1);
        let token = self.buffer
            .pop_front()
            .unwrap_or_else(|| self.synthetic_eof());
        self.last_line = token.line;
        self.last_position = token.position + token.literal.chars().count();
        token
    }

    pub fn is_at_end(&mut self) -> bool {
        self.peek().kind == TokenKind::Eof
    }
}
