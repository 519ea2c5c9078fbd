//! Token stream wrapper for the hand-written parser.

use crate::lexer::{Token, TokenKind};

/// Token cursor with bounded backtracking and line tracking.
///
/// Owns an integer position into the token list and a 1-based line
/// counter. The counter advances by the newlines in each consumed token's
/// trivia and rewinds symmetrically on `unconsume`, so diagnostics always
/// report the line of the token the parser is looking at.
pub struct TokenStream<'t> {
    tokens: &'t [Token],
    pos: usize,
    line: u32,
}

impl<'t> TokenStream<'t> {
    /// Create a new token stream.
    pub fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            line: 1,
        }
    }

    /// Peek at the current token without consuming it.
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Check whether the next token has the given kind. No side effect.
    pub fn probe(&self, kind: TokenKind) -> bool {
        matches!(self.peek(), Some(token) if token.kind == kind)
    }

    /// Consume the next token if it has the given kind.
    pub fn consume(&mut self, kind: TokenKind) -> Option<Token> {
        self.consume_any(&[kind])
    }

    /// Consume the next token if its kind is any of the given kinds.
    ///
    /// Advances past the token, adds its trivia newlines to the line
    /// counter, and returns an owned copy.
    pub fn consume_any(&mut self, kinds: &[TokenKind]) -> Option<Token> {
        let token = self.tokens.get(self.pos)?;
        if !kinds.contains(&token.kind) {
            return None;
        }
        self.pos += 1;
        self.line += newline_count(&token.trivia);
        Some(token.clone())
    }

    /// The current cursor position, for later `unconsume`.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Roll back to a previously saved position.
    ///
    /// Decrements the line counter by the trivia newlines of every token
    /// stepped back over.
    pub fn unconsume(&mut self, position: usize) {
        while self.pos > position {
            self.pos -= 1;
            self.line -= newline_count(&self.tokens[self.pos].trivia);
        }
    }

    /// The 1-based line of the current position.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Up to `n` upcoming tokens, for diagnostics.
    pub fn upcoming(&self, n: usize) -> &[Token] {
        let end = (self.pos + n).min(self.tokens.len());
        &self.tokens[self.pos..end]
    }
}

fn newline_count(trivia: &str) -> u32 {
    trivia.bytes().filter(|byte| *byte == b'\n').count() as u32
}
