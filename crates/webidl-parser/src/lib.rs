//! # WebIDL parser
//!
//! Two-stage front end for the Web Interface Definition Language: a
//! tokeniser that classifies lexemes while preserving whitespace and
//! comments as trivia, and a hand-written recursive descent parser that
//! builds a definition tree from the token stream.
//!
//! ## Architecture
//!
//! ```text
//! lexer      - logos-based tokeniser, trivia folding, eof synthesis
//!     |
//! parser     - TokenStream cursor + recursive descent productions
//!     |
//! ast        - tagged definition/member tree with per-slot trivia
//! ```
//!
//! Data flow is strictly one-way: raw text to tokens to tree. The parser
//! never re-reads source text; every position and trivia it needs is
//! embedded in the tokens.
//!
//! ## Round-tripping
//!
//! Every consumed terminal keeps the trivia that preceded it, so walking
//! the tree in document order and concatenating `trivia + text` for each
//! terminal (plus the final eof trivia) reproduces the input exactly.
//!
//! ## Usage
//!
//! ```
//! let definitions = webidl_parser::parse("interface Foo { };").unwrap();
//! // the list ends with the synthetic eof node
//! assert_eq!(definitions.len(), 2);
//! ```

pub mod ast;
pub mod lexer;
pub mod parser;

pub use ast::{Definition, Member};
pub use lexer::{tokenise, Token, TokenKind};
pub use parser::ParseError;

use tracing::{debug, trace};

/// Parse a WebIDL fragment into a list of definitions.
///
/// # Parameters
/// - `input`: WebIDL source text. No trailing newline is required.
///
/// # Returns
/// Definitions in source order, terminated by one [`Definition::Eof`]
/// node carrying the trailing trivia.
///
/// # Errors
/// Returns a [`ParseError`] on the first structural or semantic failure;
/// there is no recovery and no partial tree. All mutable state (cursor,
/// line counter, name registry) is owned by the call, so independent
/// `parse` calls may run concurrently.
pub fn parse(input: &str) -> Result<Vec<Definition>, ParseError> {
    let tokens = lexer::tokenise(input);
    trace!(tokens = tokens.len(), "tokenised WebIDL fragment");
    let definitions = parser::parse_definitions(&tokens)?;
    debug!(
        definitions = definitions.len() - 1,
        "parsed WebIDL fragment"
    );
    Ok(definitions)
}

/// Parser version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
