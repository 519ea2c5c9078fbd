//! Property-based tests for the tokeniser.
//!
//! The tokeniser must be total: every input string terminates with a
//! final `eof` token, and concatenating `trivia + value` over the stream
//! reproduces the input exactly. Neither law depends on the input being
//! valid WebIDL.

use proptest::prelude::*;
use webidl_parser::lexer::{tokenise, TokenKind};
use webidl_parser::parse;

/// Characters that commonly appear in WebIDL fragments, valid or not.
const SOUP: &str = "[a-zA-Z0-9_ \\t\\n/{};:,<>()=?*.\"-]{0,200}";

proptest! {
    #[test]
    fn prop_tokenise_terminates_with_eof(input in ".*") {
        let tokens = tokenise(&input);
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
    }

    #[test]
    fn prop_tokenise_preserves_every_byte(input in ".*") {
        let rebuilt: String = tokenise(&input)
            .iter()
            .map(|t| format!("{}{}", t.trivia, t.value))
            .collect();
        prop_assert_eq!(rebuilt, input);
    }

    #[test]
    fn prop_tokenise_preserves_webidl_soup(input in SOUP) {
        let rebuilt: String = tokenise(&input)
            .iter()
            .map(|t| format!("{}{}", t.trivia, t.value))
            .collect();
        prop_assert_eq!(rebuilt, input);
    }

    #[test]
    fn prop_whitespace_and_comments_never_surface(input in SOUP) {
        let tokens = tokenise(&input);
        prop_assert!(tokens
            .iter()
            .all(|t| t.kind != TokenKind::Whitespace && t.kind != TokenKind::Comment));
    }

    /// The parser returns a tree or an error; it never panics.
    #[test]
    fn prop_parse_never_panics(input in SOUP) {
        let _ = parse(&input);
    }
}
