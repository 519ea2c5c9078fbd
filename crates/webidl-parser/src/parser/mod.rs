//! Hand-written recursive descent parser for WebIDL.
//!
//! ## Architecture
//!
//! - `stream`: TokenStream cursor with bounded backtracking
//! - `error`: ParseError construction
//! - `decl`: top-level definition parsers (keyword-dispatched)
//! - `members`: interface/mixin/namespace member parsers
//! - `types`: type, const-value, and default parsers
//! - `attrs`: extended attributes and argument lists
//!
//! Productions are free functions over a shared [`Parser`] context. Each
//! either returns a node with the cursor past the consumed tokens, returns
//! `None` with the cursor unchanged, or raises a [`ParseError`] that
//! unwinds to the entry point.

mod error;
mod stream;

pub use error::ParseError;
use stream::TokenStream;

mod attrs;
mod decl;
mod members;
mod types;

use indexmap::IndexMap;

use crate::ast::Definition;
use crate::lexer::Token;

/// Number of upcoming tokens captured into diagnostics.
const MAX_ERROR_TOKENS: usize = 5;

/// Parse a token stream into a list of definitions.
///
/// # Parameters
/// - `tokens`: Token stream produced by [`crate::lexer::tokenise`],
///   terminated by an `eof` token.
///
/// # Returns
/// Definitions in source order, ending with a [`Definition::Eof`] node.
///
/// # Errors
/// Returns the first structural or semantic error encountered; the name
/// registry and cursor state are local to this call.
pub fn parse_definitions(tokens: &[Token]) -> Result<Vec<Definition>, ParseError> {
    let mut parser = Parser::new(tokens);
    decl::definitions(&mut parser)
}

/// Mutable state owned by one `parse` call.
struct Parser<'t> {
    stream: TokenStream<'t>,
    /// Unescaped top-level name to variant tag, insertion-ordered.
    /// Partial definitions are never registered.
    names: IndexMap<String, &'static str>,
    /// Definition under construction, used to prefix diagnostics
    current: Option<CurrentDefinition>,
}

struct CurrentDefinition {
    kind: &'static str,
    name: String,
}

impl<'t> Parser<'t> {
    fn new(tokens: &'t [Token]) -> Self {
        Self {
            stream: TokenStream::new(tokens),
            names: IndexMap::new(),
            current: None,
        }
    }

    /// Build a parse error at the current position.
    ///
    /// Captures the next five tokens verbatim, both rejoined with their
    /// trivia (`input`) and as records (`tokens`).
    fn error(&self, message: impl Into<String>) -> ParseError {
        let message = message.into();
        let message = match &self.current {
            Some(current) => format!("{} {}: {}", current.kind, current.name, message),
            None => message,
        };
        let tokens = self.stream.upcoming(MAX_ERROR_TOKENS).to_vec();
        let input = tokens
            .iter()
            .map(|token| [token.trivia.as_str(), token.value.as_str()].concat())
            .collect();
        ParseError {
            message,
            line: self.stream.line(),
            input,
            tokens,
        }
    }

    /// Point diagnostics at the definition under construction.
    fn focus(&mut self, kind: &'static str, name: &str) {
        self.current = Some(CurrentDefinition {
            kind,
            name: name.to_owned(),
        });
    }

    /// Register a non-partial top-level name, rejecting duplicates.
    fn register(&mut self, kind: &'static str, name: &str) -> Result<(), ParseError> {
        if let Some(previous) = self.names.get(name) {
            return Err(self.error(format!(
                "The name \"{}\" of type \"{}\" was already seen",
                name, previous
            )));
        }
        self.names.insert(name.to_owned(), kind);
        Ok(())
    }
}

/// Strip a single leading underscore escape from an identifier.
pub(crate) fn unescape(name: &str) -> &str {
    name.strip_prefix('_').unwrap_or(name)
}
