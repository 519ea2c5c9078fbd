//! Extended attributes and argument lists.

use serde::{Deserialize, Serialize};

use super::types::{DefaultValue, Type};
use super::{Marker, Separator};

/// A bracketed extended attribute list: `[A, B=V, C(args)]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtendedAttributes {
    pub items: Vec<ExtendedAttribute>,
    pub trivia: BracketTrivia,
}

/// Trivia slots for the enclosing brackets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketTrivia {
    /// Before `[`
    pub open: String,
    /// Before `]`
    pub close: String,
}

/// One extended attribute.
///
/// Takes one of the forms `Name`, `Name=Rhs`, `Name(args)`,
/// `Name=Rhs(args)`, or `Name=(a, b)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtendedAttribute {
    pub name: String,
    /// `= token` or `= (identifier list)`
    pub rhs: Option<ExtAttrRhs>,
    /// Parenthesised argument list when no identifier list took the parens
    pub arguments: Option<Vec<Argument>>,
    pub trivia: ExtAttrTrivia,
    /// The `,` following this attribute, if any
    pub separator: Option<Separator>,
}

/// Trivia slots for an extended attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtAttrTrivia {
    /// Before the attribute name
    pub name: String,
    /// Before `(` of the argument list
    pub open: Option<String>,
    /// Before `)` of the argument list
    pub close: Option<String>,
}

/// The right-hand side of an extended attribute assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExtAttrRhs {
    /// `= identifier` / `= 2` / `= 3.5` / `= "text"`
    Token(RhsToken),
    /// `= (a, b, c)`
    IdentifierList(RhsIdentifierList),
}

/// A single-token right-hand side, kept as its raw text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RhsToken {
    pub kind: RhsKind,
    /// The token text as written (strings keep their quotes)
    pub value: String,
    pub trivia: RhsTokenTrivia,
}

/// Lexical class of a right-hand-side token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RhsKind {
    #[serde(rename = "identifier")]
    Identifier,
    #[serde(rename = "integer")]
    Integer,
    #[serde(rename = "float")]
    Float,
    #[serde(rename = "string")]
    String,
}

/// Trivia slots for a token right-hand side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RhsTokenTrivia {
    /// Before `=`
    pub assign: String,
    /// Before the value token
    pub value: String,
}

/// An identifier-list right-hand side: `= (a, b)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RhsIdentifierList {
    pub items: Vec<IdentifierItem>,
    pub trivia: RhsListTrivia,
}

/// Trivia slots for an identifier-list right-hand side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RhsListTrivia {
    /// Before `=`
    pub assign: String,
    /// Before `(`
    pub open: String,
    /// Before `)`
    pub close: String,
}

/// One identifier in an identifier list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentifierItem {
    pub value: String,
    /// Before the identifier
    pub trivia: String,
    /// The `,` following this identifier, if any
    pub separator: Option<Separator>,
}

/// One operation, callback, or extended-attribute argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    pub ext_attrs: Option<ExtendedAttributes>,
    /// The `optional` keyword
    pub optional: Option<Marker>,
    pub idl_type: Type,
    /// The `...` variadic marker (never combined with `optional`)
    pub variadic: Option<Marker>,
    pub name: String,
    pub escaped_name: String,
    /// Only optional arguments may carry a default
    pub default: Option<DefaultValue>,
    pub trivia: ArgumentTrivia,
    /// The `,` following this argument, if any
    pub separator: Option<Separator>,
}

/// Trivia slots for an argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgumentTrivia {
    /// Before the argument name
    pub name: String,
}
