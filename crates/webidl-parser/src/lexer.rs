//! Lexical analysis for Web IDL source text.
//!
//! This module provides tokenization of WebIDL fragments using logos.
//!
//! # Design
//!
//! - `TokenKind` — all WebIDL token kinds (reserved terminals, punctuation, literals)
//! - `Token` — a kind paired with the matched text and its preceding trivia
//! - Whitespace and comments are *not* skipped: they are folded into the
//!   `trivia` of the next significant token so the source can be rebuilt
//!   byte-for-byte
//! - Token strings defined once in `TOKEN_STRINGS` table (single source of truth for Display)
//!
//! # Examples
//!
//! ```
//! use webidl_parser::lexer::{tokenise, TokenKind};
//!
//! let tokens = tokenise("interface Foo { };");
//! assert_eq!(tokens[0].kind, TokenKind::Interface);
//! assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
//! ```

use logos::Logos;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// WebIDL token kind.
///
/// Covers the reserved terminal vocabulary (identifier spellings the parser
/// treats as keywords), punctuation, and the lexical classes `float`,
/// `integer`, `identifier`, `string`, and `other`.
///
/// Keyword kinds carry `#[token]` rules; because logos prefers the longest
/// match and breaks length ties in favour of `#[token]` over `#[regex]`,
/// `interface` lexes as a keyword while `interfaces` and `interface-like`
/// stay identifiers. This reproduces the reclassification step of the
/// reference tokeniser (match an identifier, then overwrite its type) in a
/// single pass.
///
/// # Layout
///
/// Uses `#[repr(u16)]` to guarantee discriminant values are stable and
/// can be safely used to index into `TOKEN_STRINGS`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum TokenKind {
    // === Argument-name keywords ===
    //
    // Reserved spellings that may still appear as an argument name.
    /// Keyword `attribute`
    #[token("attribute")]
    Attribute,
    /// Keyword `callback`
    #[token("callback")]
    Callback,
    /// Keyword `const`
    #[token("const")]
    Const,
    /// Keyword `deleter`
    #[token("deleter")]
    Deleter,
    /// Keyword `dictionary`
    #[token("dictionary")]
    Dictionary,
    /// Keyword `enum`
    #[token("enum")]
    Enum,
    /// Keyword `getter`
    #[token("getter")]
    Getter,
    /// Keyword `includes`
    #[token("includes")]
    Includes,
    /// Keyword `inherit`
    #[token("inherit")]
    Inherit,
    /// Keyword `interface`
    #[token("interface")]
    Interface,
    /// Keyword `iterable`
    #[token("iterable")]
    Iterable,
    /// Keyword `maplike`
    #[token("maplike")]
    Maplike,
    /// Keyword `namespace`
    #[token("namespace")]
    Namespace,
    /// Keyword `partial`
    #[token("partial")]
    Partial,
    /// Keyword `required`
    #[token("required")]
    Required,
    /// Keyword `setlike`
    #[token("setlike")]
    Setlike,
    /// Keyword `setter`
    #[token("setter")]
    Setter,
    /// Keyword `static`
    #[token("static")]
    Static,
    /// Keyword `stringifier`
    #[token("stringifier")]
    Stringifier,
    /// Keyword `typedef`
    #[token("typedef")]
    Typedef,
    /// Keyword `unrestricted`
    #[token("unrestricted")]
    Unrestricted,

    // === Other reserved terminals ===
    /// Keyword `FrozenArray`
    #[token("FrozenArray")]
    FrozenArray,
    /// Keyword `Infinity`
    #[token("Infinity")]
    Infinity,
    /// Keyword `NaN`
    #[token("NaN")]
    NaN,
    /// Keyword `Promise`
    #[token("Promise")]
    Promise,
    /// Keyword `boolean`
    #[token("boolean")]
    Boolean,
    /// Keyword `byte`
    #[token("byte")]
    Byte,
    /// Keyword `double`
    #[token("double")]
    Double,
    /// Keyword `false`
    #[token("false")]
    False,
    /// Keyword `float`
    #[token("float")]
    Float,
    /// Keyword `implements`
    #[token("implements")]
    Implements,
    /// Keyword `legacyiterable`
    #[token("legacyiterable")]
    Legacyiterable,
    /// Keyword `long`
    #[token("long")]
    Long,
    /// Keyword `mixin`
    #[token("mixin")]
    Mixin,
    /// Keyword `null`
    #[token("null")]
    Null,
    /// Keyword `octet`
    #[token("octet")]
    Octet,
    /// Keyword `optional`
    #[token("optional")]
    Optional,
    /// Keyword `or`
    #[token("or")]
    Or,
    /// Keyword `readonly`
    #[token("readonly")]
    Readonly,
    /// Keyword `record`
    #[token("record")]
    Record,
    /// Keyword `sequence`
    #[token("sequence")]
    Sequence,
    /// Keyword `short`
    #[token("short")]
    Short,
    /// Keyword `true`
    #[token("true")]
    True,
    /// Keyword `unsigned`
    #[token("unsigned")]
    Unsigned,
    /// Keyword `void`
    #[token("void")]
    Void,

    // === String types ===
    /// Keyword `ByteString`
    #[token("ByteString")]
    ByteString,
    /// Keyword `DOMString`
    #[token("DOMString")]
    DOMString,
    /// Keyword `USVString`
    #[token("USVString")]
    USVString,

    // === Punctuation ===
    /// Punctuation `(`
    #[token("(")]
    OpenParen,
    /// Punctuation `)`
    #[token(")")]
    CloseParen,
    /// Punctuation `,`
    #[token(",")]
    Comma,
    /// Punctuation `-Infinity`
    ///
    /// A single token despite the embedded hyphen. The numeric rules only
    /// match when digits follow the sign, so a bare `-Infinity` always
    /// lands here, while `-1` lands in `Integer`.
    #[token("-Infinity")]
    NegativeInfinity,
    /// Punctuation `...`
    #[token("...")]
    Ellipsis,
    /// Punctuation `:`
    #[token(":")]
    Colon,
    /// Punctuation `;`
    #[token(";")]
    Semicolon,
    /// Punctuation `<`
    #[token("<")]
    Less,
    /// Punctuation `=`
    #[token("=")]
    Equals,
    /// Punctuation `>`
    #[token(">")]
    Greater,
    /// Punctuation `?`
    #[token("?")]
    Question,
    /// Punctuation `[`
    #[token("[")]
    OpenBracket,
    /// Punctuation `]`
    #[token("]")]
    CloseBracket,
    /// Punctuation `{`
    #[token("{")]
    OpenBrace,
    /// Punctuation `}`
    #[token("}")]
    CloseBrace,

    // === Lexical classes ===
    /// Float literal (e.g. `3.14`, `-.5`, `1e10`)
    ///
    /// Requires a fraction or an exponent, so pure integers never land
    /// here. Displays as `float`; the keyword of the same spelling is
    /// [`TokenKind::Float`].
    #[regex(r"-?(([0-9]+\.[0-9]*|[0-9]*\.[0-9]+)([Ee][+-]?[0-9]+)?|[0-9]+[Ee][+-]?[0-9]+)")]
    Decimal,
    /// Integer literal: decimal, octal (leading `0`), or hex (`0x`/`0X`)
    #[regex(r"-?(0([Xx][0-9A-Fa-f]+|[0-7]*)|[1-9][0-9]*)")]
    Integer,
    /// Identifier (e.g. `Foo`, `_escaped`, `aria-label`)
    #[regex(r"_?[A-Za-z][0-9A-Za-z_-]*")]
    Identifier,
    /// String literal: double-quoted, no embedded quotes, no escapes
    #[regex(r#""[^"]*""#)]
    String,
    /// Whitespace run (folded into trivia by `tokenise`)
    #[regex(r"[\t\n\r ]+")]
    Whitespace,
    /// Comment, `// ...` or `/* ... */` (folded into trivia by `tokenise`)
    #[regex(r"//[^\n]*")]
    #[regex(r"/\*([^*]+|\*+[^*/])*\*+/")]
    Comment,
    /// Any other single non-whitespace, non-alphanumeric character
    #[regex(r"[^\t\n\r 0-9A-Za-z]", priority = 1)]
    Other,
    /// Synthetic end-of-input token carrying the trailing trivia.
    ///
    /// Never produced by the lexer itself: the pattern cannot win against
    /// `Other` (priority 1 vs 0). `tokenise` appends it after the last
    /// real token.
    #[token("\0", priority = 0)]
    Eof,
}

/// Token string lookup table.
///
/// Maps discriminant indices to their display representation: the literal
/// spelling for keywords and punctuation, the lexical class name otherwise.
/// This is the single source of truth for token display strings, indexed
/// by the enum discriminant order.
///
/// NOTE: The `#[token("...")]` attributes above must match these strings.
const TOKEN_STRINGS: &[&str] = &[
    // argument-name keywords
    "attribute",
    "callback",
    "const",
    "deleter",
    "dictionary",
    "enum",
    "getter",
    "includes",
    "inherit",
    "interface",
    "iterable",
    "maplike",
    "namespace",
    "partial",
    "required",
    "setlike",
    "setter",
    "static",
    "stringifier",
    "typedef",
    "unrestricted",
    // other reserved terminals
    "FrozenArray",
    "Infinity",
    "NaN",
    "Promise",
    "boolean",
    "byte",
    "double",
    "false",
    "float",
    "implements",
    "legacyiterable",
    "long",
    "mixin",
    "null",
    "octet",
    "optional",
    "or",
    "readonly",
    "record",
    "sequence",
    "short",
    "true",
    "unsigned",
    "void",
    // string types
    "ByteString",
    "DOMString",
    "USVString",
    // punctuation
    "(",
    ")",
    ",",
    "-Infinity",
    "...",
    ":",
    ";",
    "<",
    "=",
    ">",
    "?",
    "[",
    "]",
    "{",
    "}",
    // lexical classes
    "float",
    "integer",
    "identifier",
    "string",
    "whitespace",
    "comment",
    "other",
    "eof",
];

/// Reserved spellings that remain legal as argument names.
///
/// The `argument` production accepts any of these in the name position, in
/// addition to plain identifiers.
pub const ARGUMENT_NAME_KEYWORDS: &[TokenKind] = &[
    TokenKind::Attribute,
    TokenKind::Callback,
    TokenKind::Const,
    TokenKind::Deleter,
    TokenKind::Dictionary,
    TokenKind::Enum,
    TokenKind::Getter,
    TokenKind::Includes,
    TokenKind::Inherit,
    TokenKind::Interface,
    TokenKind::Iterable,
    TokenKind::Maplike,
    TokenKind::Namespace,
    TokenKind::Partial,
    TokenKind::Required,
    TokenKind::Setlike,
    TokenKind::Setter,
    TokenKind::Static,
    TokenKind::Stringifier,
    TokenKind::Typedef,
    TokenKind::Unrestricted,
];

/// The three WebIDL string types.
pub const STRING_TYPES: &[TokenKind] = &[
    TokenKind::ByteString,
    TokenKind::DOMString,
    TokenKind::USVString,
];

impl TokenKind {
    /// The display string for this kind.
    ///
    /// Keywords and punctuation return their literal spelling; lexical
    /// classes return their class name (`"identifier"`, `"float"`, ...).
    pub fn as_str(self) -> &'static str {
        // Safe: TokenKind is fieldless with #[repr(u16)], so the cast is
        // exactly the discriminant used to lay out TOKEN_STRINGS.
        TOKEN_STRINGS[self as usize]
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified token with its matched text and preceding trivia.
///
/// `trivia` is the literal whitespace/comment run between the previous
/// token and this one; concatenating `trivia + value` over a token stream
/// reproduces the tokenised input exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Classification of the matched text
    pub kind: TokenKind,
    /// The matched substring (empty for the synthetic `eof` token)
    pub value: String,
    /// Whitespace and comments immediately preceding the token
    pub trivia: String,
}

impl Serialize for Token {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Token", 3)?;
        state.serialize_field("type", self.kind.as_str())?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("trivia", &self.trivia)?;
        state.end()
    }
}

/// Tokenise a WebIDL fragment.
///
/// A single left-to-right pass. Whitespace and comment matches accumulate
/// into a trivia buffer; every other match emits a token that takes the
/// accumulated trivia with it. The returned stream always ends with an
/// `eof` token holding whatever trivia trailed the last real token.
///
/// Unclassifiable bytes fall into the `other` class, so tokenisation is
/// total: it succeeds for every input string.
///
/// # Panics
///
/// Panics with "Token stream not progressing" if no rule can advance past
/// the current position. The `other` catch-all makes this unreachable; it
/// guards against regressions in the rule set.
pub fn tokenise(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut trivia = String::new();
    let mut lexer = TokenKind::lexer(input);
    while let Some(result) = lexer.next() {
        match result {
            Ok(TokenKind::Whitespace) | Ok(TokenKind::Comment) => {
                trivia.push_str(lexer.slice());
            }
            Ok(kind) => {
                tokens.push(Token {
                    kind,
                    value: lexer.slice().to_owned(),
                    trivia: std::mem::take(&mut trivia),
                });
            }
            Err(()) => panic!("Token stream not progressing"),
        }
    }
    tokens.push(Token {
        kind: TokenKind::Eof,
        value: String::new(),
        trivia,
    });
    tokens
}
