//! Type references, constant values, and dictionary defaults.

use serde::{Deserialize, Serialize};

use super::attrs::ExtendedAttributes;
use super::{Marker, Separator};

/// The syntactic role a type was parsed in.
///
/// Inner types (union alternatives, generic arguments, record keys) carry
/// no role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeRole {
    #[serde(rename = "argument-type")]
    Argument,
    #[serde(rename = "attribute-type")]
    Attribute,
    #[serde(rename = "const-type")]
    Const,
    #[serde(rename = "dictionary-type")]
    Dictionary,
    #[serde(rename = "typedef-type")]
    Typedef,
    #[serde(rename = "return-type")]
    Return,
}

/// The generic wrapper of a parameterised type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenericKind {
    #[serde(rename = "sequence")]
    Sequence,
    #[serde(rename = "record")]
    Record,
    #[serde(rename = "FrozenArray")]
    FrozenArray,
    #[serde(rename = "Promise")]
    Promise,
}

impl GenericKind {
    /// The keyword spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            GenericKind::Sequence => "sequence",
            GenericKind::Record => "record",
            GenericKind::FrozenArray => "FrozenArray",
            GenericKind::Promise => "Promise",
        }
    }
}

/// A type reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Type {
    /// Contextual role, absent on inner types
    pub role: Option<TypeRole>,
    pub ext_attrs: Option<ExtendedAttributes>,
    /// Set when the type is `sequence`, `record`, `FrozenArray`, or `Promise`
    pub generic: Option<GenericKind>,
    /// The `?` suffix
    pub nullable: Option<Marker>,
    /// True for parenthesised union types
    pub union: bool,
    /// Printable base name or the nested alternatives/arguments
    pub idl_type: TypeKind,
    /// The base terminal exactly as written (`long`, `_Promise`-free
    /// identifiers keep their escape here); absent for unions
    pub base_name: Option<String>,
    /// The `unsigned` or `unrestricted` prefix
    pub prefix: Option<Marker>,
    /// The second `long` of `long long`
    pub postfix: Option<Marker>,
    /// Separator following this type in a list (`,` or `or`)
    pub separator: Option<Separator>,
    pub trivia: TypeTrivia,
}

/// Either a printable base name or an ordered list of inner types.
///
/// Lists hold union alternatives or generic arguments; for a `record` the
/// first entry is the key type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeKind {
    Base(String),
    Compound(Vec<Type>),
}

/// Trivia slots for a type reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeTrivia {
    /// Before the base terminal; absent for unions
    pub base: Option<String>,
    /// Before `<` or the union's `(`
    pub open: Option<String>,
    /// Before `>` or the union's `)`
    pub close: Option<String>,
}

impl Type {
    /// A plain named type: one base terminal, no generic, no union.
    pub(crate) fn base(
        role: Option<TypeRole>,
        idl_type: String,
        base_name: String,
        base_trivia: String,
    ) -> Self {
        Self {
            role,
            ext_attrs: None,
            generic: None,
            nullable: None,
            union: false,
            idl_type: TypeKind::Base(idl_type),
            base_name: Some(base_name),
            prefix: None,
            postfix: None,
            separator: None,
            trivia: TypeTrivia {
                base: Some(base_trivia),
                open: None,
                close: None,
            },
        }
    }
}

/// A parsed constant value with the trivia of its literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstValueNode {
    #[serde(flatten)]
    pub value: ConstValue,
    /// Before the literal
    pub trivia: String,
}

/// A constant literal.
///
/// `null` and `NaN` carry no payload; their tag is the whole value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ConstValue {
    #[serde(rename = "boolean")]
    Boolean { value: bool },
    #[serde(rename = "Infinity")]
    Infinity { negative: bool },
    /// Numeric literal, kept as its source text
    #[serde(rename = "number")]
    Number { value: String },
    #[serde(rename = "null")]
    Null,
    #[serde(rename = "NaN")]
    NaN,
}

impl ConstValue {
    /// The literal exactly as it appears in source.
    pub fn text(&self) -> &str {
        match self {
            ConstValue::Boolean { value: true } => "true",
            ConstValue::Boolean { value: false } => "false",
            ConstValue::Infinity { negative: true } => "-Infinity",
            ConstValue::Infinity { negative: false } => "Infinity",
            ConstValue::Number { value } => value,
            ConstValue::Null => "null",
            ConstValue::NaN => "NaN",
        }
    }
}

/// A dictionary field or optional-argument default: `= value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultValue {
    pub kind: DefaultKind,
    pub trivia: DefaultTrivia,
}

/// The value of a default clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DefaultKind {
    /// A constant literal
    Const(ConstValueNode),
    /// A quoted string, stored without its quotes
    String { value: String, trivia: String },
    /// The empty sequence literal `[]`
    EmptySequence { open: String, close: String },
}

/// Trivia slots for a default clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultTrivia {
    /// Before `=`
    pub assign: String,
}
