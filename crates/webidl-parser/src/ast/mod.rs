//! Abstract syntax tree for parsed WebIDL fragments.
//!
//! Nodes form a closed set of variants: a [`Definition`] enum for top-level
//! constructs and a [`Member`] enum for body members, with shared pieces
//! (extended attributes, types, arguments) composed into each variant's
//! struct.
//!
//! # Trivia
//!
//! Every consumed terminal leaves its preceding whitespace/comments in the
//! tree: fixed trivia structs record one slot per syntactic position
//! (`base`, `name`, `open`, `close`, `termination`, ...), and optional
//! keywords are kept whole as [`Marker`] values. Walking a tree in document
//! order and emitting `trivia + text` for every terminal reproduces the
//! source byte-for-byte.

pub mod attrs;
pub mod definitions;
pub mod members;
pub mod types;

pub use attrs::{
    Argument, ArgumentTrivia, BracketTrivia, ExtAttrRhs, ExtAttrTrivia, ExtendedAttribute,
    ExtendedAttributes, IdentifierItem, RhsIdentifierList, RhsKind, RhsListTrivia, RhsToken,
    RhsTokenTrivia,
};
pub use definitions::{
    CallbackFunction, CallbackTrivia, Definition, DefinitionTrivia, Dictionary, Enumeration,
    EnumValue, Eof, Includes, IncludesTrivia, Inheritance, InheritanceTrivia, Interface, Mixin,
    MixinTrivia, Namespace, Typedef, TypedefTrivia,
};
pub use members::{
    Attribute, AttributeTrivia, ConstMember, ConstTrivia, Field, FieldTrivia, IterableLike,
    IterableTrivia, Member, Operation, OperationName, OperationTrivia, SpecialOp, SpecialOpKind,
    StringifierMember, StringifierTrivia,
};
pub use types::{
    ConstValue, ConstValueNode, DefaultKind, DefaultTrivia, DefaultValue, GenericKind, Type,
    TypeKind, TypeRole, TypeTrivia,
};

use serde::{Deserialize, Serialize};

use crate::lexer::Token;

/// An optional keyword or punctuation retained in the tree.
///
/// Markers record syntax that is present-or-absent (`partial`, `readonly`,
/// `optional`, `...`, the `unsigned` prefix, ...) together with the trivia
/// that preceded it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// The keyword or punctuation spelling as written
    pub value: String,
    /// Whitespace and comments preceding it
    pub trivia: String,
}

impl From<Token> for Marker {
    fn from(token: Token) -> Self {
        Self {
            value: token.value,
            trivia: token.trivia,
        }
    }
}

/// A list separator (`,` or `or`) attached to the item it follows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Separator {
    /// The separator spelling, `,` or `or`
    pub value: String,
    /// Whitespace and comments preceding it
    pub trivia: String,
}

impl From<Token> for Separator {
    fn from(token: Token) -> Self {
        Self {
            value: token.value,
            trivia: token.trivia,
        }
    }
}
