//! Parse error type.

use std::fmt;

use crate::lexer::Token;

/// A parse failure with location and token context.
///
/// Raised by the first production that cannot proceed; there is no
/// recovery, the error unwinds straight to the `parse` entry point.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    /// Human-readable description, prefixed with the definition under
    /// construction when one was in focus
    pub message: String,
    /// 1-based line of the position the parser stopped at
    pub line: u32,
    /// Up to five upcoming tokens rejoined with their trivia
    pub input: String,
    /// The same tokens as records
    pub tokens: Vec<Token>,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // serde_json can only fail on non-string keys or failing
        // Serialize impls; neither exists here.
        let input = serde_json::to_string(&self.input).map_err(|_| fmt::Error)?;
        let tokens = serde_json::to_string_pretty(&self.tokens).map_err(|_| fmt::Error)?;
        write!(
            f,
            "{}, line {} (tokens: {})\n{}",
            self.message, self.line, input, tokens
        )
    }
}

impl std::error::Error for ParseError {}
