//! Top-level WebIDL definitions.

use serde::{Deserialize, Serialize};

use super::attrs::{Argument, ExtendedAttributes};
use super::members::{Field, Member};
use super::types::Type;
use super::Marker;

/// A top-level definition.
///
/// The list returned by a successful parse holds definitions in source
/// order, terminated by a single [`Definition::Eof`] node carrying the
/// trivia that trailed the last definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Definition {
    /// `interface Name : Parent { ... };`
    #[serde(rename = "interface")]
    Interface(Interface),
    /// `callback interface Name { ... };`
    #[serde(rename = "callback interface")]
    CallbackInterface(Interface),
    /// `interface mixin Name { ... };`
    #[serde(rename = "interface mixin")]
    Mixin(Mixin),
    /// `callback Name = ReturnType (args);`
    #[serde(rename = "callback")]
    Callback(CallbackFunction),
    /// `dictionary Name : Parent { ... };`
    #[serde(rename = "dictionary")]
    Dictionary(Dictionary),
    /// `namespace Name { ... };`
    #[serde(rename = "namespace")]
    Namespace(Namespace),
    /// `enum Name { "a", "b" };`
    #[serde(rename = "enum")]
    Enum(Enumeration),
    /// `typedef Type Name;`
    #[serde(rename = "typedef")]
    Typedef(Typedef),
    /// `Target includes Mixin;`
    #[serde(rename = "includes")]
    Includes(Includes),
    /// End of input, with trailing trivia
    #[serde(rename = "eof")]
    Eof(Eof),
}

impl Definition {
    /// Attach extended attributes parsed ahead of the definition keyword.
    pub(crate) fn set_ext_attrs(&mut self, ext_attrs: ExtendedAttributes) {
        match self {
            Definition::Interface(d) | Definition::CallbackInterface(d) => {
                d.ext_attrs = Some(ext_attrs)
            }
            Definition::Mixin(d) => d.ext_attrs = Some(ext_attrs),
            Definition::Callback(d) => d.ext_attrs = Some(ext_attrs),
            Definition::Dictionary(d) => d.ext_attrs = Some(ext_attrs),
            Definition::Namespace(d) => d.ext_attrs = Some(ext_attrs),
            Definition::Enum(d) => d.ext_attrs = Some(ext_attrs),
            Definition::Typedef(d) => d.ext_attrs = Some(ext_attrs),
            Definition::Includes(d) => d.ext_attrs = Some(ext_attrs),
            // eof is synthesised after the definition loop and never
            // receives attributes
            Definition::Eof(_) => {}
        }
    }
}

/// Trivia slots shared by the braced, name-first definitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefinitionTrivia {
    /// Before the leading keyword
    pub base: String,
    /// Before the definition name
    pub name: String,
    /// Before `{`
    pub open: String,
    /// Before `}`
    pub close: String,
    /// Before the terminating `;`
    pub termination: String,
}

/// An `interface` or `callback interface` definition.
///
/// The two variants share this shape; a callback interface carries the
/// `callback` keyword as a marker and is wrapped in
/// [`Definition::CallbackInterface`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interface {
    pub ext_attrs: Option<ExtendedAttributes>,
    /// The `callback` keyword, for callback interfaces
    pub callback: Option<Marker>,
    /// The `partial` keyword, for partial interfaces
    pub partial: Option<Marker>,
    /// Name with a leading underscore escape stripped
    pub name: String,
    /// Name exactly as written
    pub escaped_name: String,
    /// `: Parent`, absent for partial interfaces
    pub inheritance: Option<Inheritance>,
    pub members: Vec<Member>,
    pub trivia: DefinitionTrivia,
}

/// An `interface mixin` definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mixin {
    pub ext_attrs: Option<ExtendedAttributes>,
    pub partial: Option<Marker>,
    pub name: String,
    pub escaped_name: String,
    pub members: Vec<Member>,
    pub trivia: MixinTrivia,
}

/// Trivia slots for an interface mixin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixinTrivia {
    /// Before `interface`
    pub base: String,
    /// Before `mixin`
    pub mixin: String,
    /// Before the mixin name
    pub name: String,
    /// Before `{`
    pub open: String,
    /// Before `}`
    pub close: String,
    /// Before the terminating `;`
    pub termination: String,
}

/// A `callback` function definition: `callback Name = ReturnType (args);`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallbackFunction {
    pub ext_attrs: Option<ExtendedAttributes>,
    pub name: String,
    pub escaped_name: String,
    pub return_type: Type,
    pub arguments: Vec<Argument>,
    pub trivia: CallbackTrivia,
}

/// Trivia slots for a callback function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallbackTrivia {
    /// Before `callback`
    pub base: String,
    /// Before the callback name
    pub name: String,
    /// Before `=`
    pub assign: String,
    /// Before `(`
    pub open: String,
    /// Before `)`
    pub close: String,
    /// Before the terminating `;`
    pub termination: String,
}

/// A `dictionary` definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dictionary {
    pub ext_attrs: Option<ExtendedAttributes>,
    pub partial: Option<Marker>,
    pub name: String,
    pub escaped_name: String,
    /// `: Parent`, absent for partial dictionaries
    pub inheritance: Option<Inheritance>,
    pub members: Vec<Field>,
    pub trivia: DefinitionTrivia,
}

/// A `namespace` definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Namespace {
    pub ext_attrs: Option<ExtendedAttributes>,
    pub partial: Option<Marker>,
    pub name: String,
    pub escaped_name: String,
    pub members: Vec<Member>,
    pub trivia: DefinitionTrivia,
}

/// An `enum` definition with its ordered value list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enumeration {
    pub ext_attrs: Option<ExtendedAttributes>,
    pub name: String,
    pub escaped_name: String,
    pub values: Vec<EnumValue>,
    pub trivia: DefinitionTrivia,
}

/// One quoted enum value, stored without its quotes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumValue {
    /// The text between the quotes
    pub value: String,
    /// Before the opening quote
    pub trivia: String,
    /// The `,` following this value, if any
    pub separator: Option<super::Separator>,
}

/// A `typedef` definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Typedef {
    pub ext_attrs: Option<ExtendedAttributes>,
    pub idl_type: Type,
    pub name: String,
    pub escaped_name: String,
    pub trivia: TypedefTrivia,
}

/// Trivia slots for a typedef.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypedefTrivia {
    /// Before `typedef`
    pub base: String,
    /// Before the new name
    pub name: String,
    /// Before the terminating `;`
    pub termination: String,
}

/// An includes statement: `Target includes Mixin;`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Includes {
    pub ext_attrs: Option<ExtendedAttributes>,
    /// The interface the mixin is mixed into
    pub target: String,
    pub escaped_target: String,
    /// The mixin being included
    pub includes: String,
    pub escaped_includes: String,
    pub trivia: IncludesTrivia,
}

/// Trivia slots for an includes statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncludesTrivia {
    /// Before the target name
    pub target: String,
    /// Before the `includes` keyword
    pub base: String,
    /// Before the mixin name
    pub mixin: String,
    /// Before the terminating `;`
    pub termination: String,
}

/// The synthetic end-of-input node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Eof {
    /// Trivia trailing the last definition
    pub trivia: String,
}

/// `: Parent` inheritance clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inheritance {
    pub name: String,
    pub escaped_name: String,
    pub trivia: InheritanceTrivia,
}

/// Trivia slots for an inheritance clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InheritanceTrivia {
    /// Before `:`
    pub colon: String,
    /// Before the parent name
    pub name: String,
}
