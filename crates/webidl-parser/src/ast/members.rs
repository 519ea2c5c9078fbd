//! Members of interface, mixin, namespace, and dictionary bodies.

use serde::{Deserialize, Serialize};

use super::attrs::{Argument, ExtendedAttributes};
use super::types::{ConstValueNode, DefaultValue, Type};
use super::Marker;

/// A member of an interface, mixin, or namespace body.
///
/// Dictionary bodies admit only [`Field`]s and carry them directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Member {
    /// `const Type name = value;`
    #[serde(rename = "const")]
    Const(ConstMember),
    /// `attribute Type name;` with optional prefixes
    #[serde(rename = "attribute")]
    Attribute(Attribute),
    /// An operation, possibly special, static, or stringifier
    #[serde(rename = "operation")]
    Operation(Operation),
    /// `iterable<V>;`
    #[serde(rename = "iterable")]
    Iterable(IterableLike),
    /// `maplike<K, V>;`, possibly readonly
    #[serde(rename = "maplike")]
    Maplike(IterableLike),
    /// `setlike<V>;`, possibly readonly
    #[serde(rename = "setlike")]
    Setlike(IterableLike),
    /// A bare `stringifier;`
    #[serde(rename = "stringifier")]
    Stringifier(StringifierMember),
}

impl Member {
    /// Attach extended attributes parsed ahead of the member.
    pub(crate) fn set_ext_attrs(&mut self, ext_attrs: ExtendedAttributes) {
        match self {
            Member::Const(m) => m.ext_attrs = Some(ext_attrs),
            Member::Attribute(m) => m.ext_attrs = Some(ext_attrs),
            Member::Operation(m) => m.ext_attrs = Some(ext_attrs),
            Member::Iterable(m) | Member::Maplike(m) | Member::Setlike(m) => {
                m.ext_attrs = Some(ext_attrs)
            }
            Member::Stringifier(m) => m.ext_attrs = Some(ext_attrs),
        }
    }
}

/// A `const` member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstMember {
    pub ext_attrs: Option<ExtendedAttributes>,
    pub idl_type: Type,
    pub name: String,
    pub escaped_name: String,
    pub value: ConstValueNode,
    pub trivia: ConstTrivia,
}

/// Trivia slots for a const member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstTrivia {
    /// Before `const`
    pub base: String,
    /// Before the const name
    pub name: String,
    /// Before `=`
    pub assign: String,
    /// Before the terminating `;`
    pub termination: String,
}

/// An attribute member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub ext_attrs: Option<ExtendedAttributes>,
    /// The `static` keyword when wrapped by a static member
    #[serde(rename = "static")]
    pub static_: Option<Marker>,
    /// The `stringifier` keyword when wrapped by a stringifier
    pub stringifier: Option<Marker>,
    /// The `inherit` prefix (never set inside mixins or namespaces)
    pub inherit: Option<Marker>,
    pub readonly: Option<Marker>,
    pub idl_type: Type,
    pub name: String,
    pub escaped_name: String,
    pub trivia: AttributeTrivia,
}

/// Trivia slots for an attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeTrivia {
    /// Before `attribute`
    pub base: String,
    /// Before the attribute name
    pub name: String,
    /// Before the terminating `;`
    pub termination: String,
}

/// An operation member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub ext_attrs: Option<ExtendedAttributes>,
    /// The `static` keyword when wrapped by a static member
    #[serde(rename = "static")]
    pub static_: Option<Marker>,
    /// The `stringifier` keyword when wrapped by a stringifier
    pub stringifier: Option<Marker>,
    /// `getter`, `setter`, or `deleter`
    pub special: Option<SpecialOp>,
    pub return_type: Type,
    /// Absent for pure specials like `getter Type (args);`
    pub name: Option<OperationName>,
    pub arguments: Vec<Argument>,
    pub trivia: OperationTrivia,
}

/// Trivia slots for an operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationTrivia {
    /// Before `(`
    pub open: String,
    /// Before `)`
    pub close: String,
    /// Before the terminating `;`
    pub termination: String,
}

/// A special-operation marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialOp {
    pub kind: SpecialOpKind,
    /// Before the special keyword
    pub trivia: String,
}

/// Which special keyword prefixed the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecialOpKind {
    #[serde(rename = "getter")]
    Getter,
    #[serde(rename = "setter")]
    Setter,
    #[serde(rename = "deleter")]
    Deleter,
}

impl SpecialOpKind {
    /// The keyword spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            SpecialOpKind::Getter => "getter",
            SpecialOpKind::Setter => "setter",
            SpecialOpKind::Deleter => "deleter",
        }
    }
}

/// An operation name with its original spelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationName {
    pub name: String,
    pub escaped_name: String,
    /// Before the name
    pub trivia: String,
}

/// An `iterable`, `maplike`, or `setlike` declaration.
///
/// Which of the three it is lives in the [`Member`] variant. `types` holds
/// exactly one entry for iterable/setlike and exactly two for maplike.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterableLike {
    pub ext_attrs: Option<ExtendedAttributes>,
    /// Only maplike and setlike may be readonly
    pub readonly: Option<Marker>,
    pub types: Vec<Type>,
    pub trivia: IterableTrivia,
}

/// Trivia slots for an iterable-like declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterableTrivia {
    /// Before the declaration keyword
    pub base: String,
    /// Before `<`
    pub open: String,
    /// Before `>`
    pub close: String,
    /// Before the terminating `;`
    pub termination: String,
}

/// A standalone `stringifier;` member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringifierMember {
    pub ext_attrs: Option<ExtendedAttributes>,
    pub trivia: StringifierTrivia,
}

/// Trivia slots for a standalone stringifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringifierTrivia {
    /// Before `stringifier`
    pub base: String,
    /// Before the terminating `;`
    pub termination: String,
}

/// A dictionary field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub ext_attrs: Option<ExtendedAttributes>,
    /// The `required` keyword; required fields reject defaults
    pub required: Option<Marker>,
    pub idl_type: Type,
    pub name: String,
    pub escaped_name: String,
    pub default: Option<DefaultValue>,
    pub trivia: FieldTrivia,
}

/// Trivia slots for a dictionary field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldTrivia {
    /// Before the field name
    pub name: String,
    /// Before the terminating `;`
    pub termination: String,
}
