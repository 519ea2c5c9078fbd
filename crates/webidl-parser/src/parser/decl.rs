//! Top-level definition productions (keyword-dispatched).
//!
//! Implements the parsers for all WebIDL definitions:
//! - callback and callback interface
//! - interface and interface mixin
//! - partial (dictionary / interface / mixin / namespace)
//! - dictionary, enum, typedef, includes, namespace

use super::{unescape, ParseError, Parser};
use crate::ast::{
    CallbackFunction, CallbackTrivia, Definition, DefinitionTrivia, Dictionary, EnumValue,
    Enumeration, Eof, Field, FieldTrivia, Includes, IncludesTrivia, Inheritance, InheritanceTrivia,
    Interface, Marker, Member, Mixin, MixinTrivia, Namespace, Separator, Typedef, TypedefTrivia,
    TypeRole,
};
use crate::lexer::{Token, TokenKind};

/// Parse the whole fragment: a definition list terminated by `eof`.
///
/// Each round parses optional extended attributes and one definition;
/// attributes with no definition behind them are an error, and so are any
/// tokens left over once no definition matches.
pub(super) fn definitions(p: &mut Parser) -> Result<Vec<Definition>, ParseError> {
    let mut definitions = Vec::new();
    loop {
        let ext_attrs = super::attrs::extended_attrs(p)?;
        match definition(p)? {
            Some(mut def) => {
                if let Some(ea) = ext_attrs {
                    def.set_ext_attrs(ea);
                }
                definitions.push(def);
            }
            None => {
                if ext_attrs.is_some() {
                    return Err(p.error("Stray extended attributes"));
                }
                break;
            }
        }
    }
    match p.stream.consume(TokenKind::Eof) {
        Some(eof) => definitions.push(Definition::Eof(Eof { trivia: eof.trivia })),
        None => return Err(p.error("Unrecognised tokens")),
    }
    Ok(definitions)
}

/// First-match dispatch across the definition productions.
fn definition(p: &mut Parser) -> Result<Option<Definition>, ParseError> {
    if let Some(def) = callback(p)? {
        return Ok(Some(def));
    }
    if let Some(def) = interface(p, None, None)? {
        return Ok(Some(def));
    }
    if let Some(def) = partial(p)? {
        return Ok(Some(def));
    }
    if let Some(def) = dictionary(p, None)? {
        return Ok(Some(def));
    }
    if let Some(def) = enumeration(p)? {
        return Ok(Some(def));
    }
    if let Some(def) = typedef(p)? {
        return Ok(Some(def));
    }
    if let Some(def) = includes(p)? {
        return Ok(Some(def));
    }
    namespace(p, None)
}

/// Parse `callback interface ...` or `callback Name = ReturnType (args);`.
fn callback(p: &mut Parser) -> Result<Option<Definition>, ParseError> {
    let Some(base) = p.stream.consume(TokenKind::Callback) else {
        return Ok(None);
    };
    if p.stream.probe(TokenKind::Interface) {
        return interface(p, None, Some(Marker::from(base)));
    }
    let Some(name) = p.stream.consume(TokenKind::Identifier) else {
        return Err(p.error("No name for callback"));
    };
    let unescaped = unescape(&name.value).to_owned();
    p.focus("callback", &unescaped);
    p.register("callback", &unescaped)?;
    let Some(assign) = p.stream.consume(TokenKind::Equals) else {
        return Err(p.error("No assignment in callback"));
    };
    let Some(return_type) = super::types::return_type(p)? else {
        return Err(p.error("Missing return type"));
    };
    let Some(open) = p.stream.consume(TokenKind::OpenParen) else {
        return Err(p.error("No arguments in callback"));
    };
    let arguments = super::attrs::argument_list(p)?;
    let Some(close) = p.stream.consume(TokenKind::CloseParen) else {
        return Err(p.error("Unterminated callback arguments"));
    };
    let Some(term) = p.stream.consume(TokenKind::Semicolon) else {
        return Err(p.error("Unterminated callback"));
    };
    Ok(Some(Definition::Callback(CallbackFunction {
        ext_attrs: None,
        name: unescaped,
        escaped_name: name.value,
        return_type,
        arguments,
        trivia: CallbackTrivia {
            base: base.trivia,
            name: name.trivia,
            assign: assign.trivia,
            open: open.trivia,
            close: close.trivia,
            termination: term.trivia,
        },
    })))
}

/// Parse `interface ...`: a mixin when the `mixin` keyword follows, an
/// ordinary or callback interface otherwise.
fn interface(
    p: &mut Parser,
    partial: Option<Marker>,
    callback: Option<Marker>,
) -> Result<Option<Definition>, ParseError> {
    let Some(base) = p.stream.consume(TokenKind::Interface) else {
        return Ok(None);
    };
    if callback.is_none() {
        if let Some(mixin_keyword) = p.stream.consume(TokenKind::Mixin) {
            return mixin_rest(p, base, mixin_keyword, partial).map(Some);
        }
    }
    interface_rest(p, base, partial, callback).map(Some)
}

/// Parse the rest of an interface or callback interface after `interface`.
fn interface_rest(
    p: &mut Parser,
    base: Token,
    partial: Option<Marker>,
    callback: Option<Marker>,
) -> Result<Definition, ParseError> {
    let kind = if callback.is_some() {
        "callback interface"
    } else {
        "interface"
    };
    let Some(name) = p.stream.consume(TokenKind::Identifier) else {
        return Err(p.error("No name for interface"));
    };
    let unescaped = unescape(&name.value).to_owned();
    p.focus(kind, &unescaped);
    if partial.is_none() {
        p.register(kind, &unescaped)?;
    }
    // Partial interfaces carry no inheritance clause
    let inheritance = if partial.is_none() {
        inheritance(p)?
    } else {
        None
    };
    let Some(open) = p.stream.consume(TokenKind::OpenBrace) else {
        return Err(p.error("Bodyless interface"));
    };
    let mut members = Vec::new();
    let close = loop {
        if let Some(close) = p.stream.consume(TokenKind::CloseBrace) {
            break close;
        }
        if p.stream.probe(TokenKind::Eof) {
            return Err(p.error("Unterminated interface"));
        }
        let ext_attrs = super::attrs::extended_attrs(p)?;
        let mut member = interface_member(p)?;
        if let Some(ea) = ext_attrs {
            member.set_ext_attrs(ea);
        }
        members.push(member);
    };
    let Some(term) = p.stream.consume(TokenKind::Semicolon) else {
        return Err(p.error("Missing semicolon after interface"));
    };
    let node = Interface {
        ext_attrs: None,
        callback,
        partial,
        name: unescaped,
        escaped_name: name.value,
        inheritance,
        members,
        trivia: DefinitionTrivia {
            base: base.trivia,
            name: name.trivia,
            open: open.trivia,
            close: close.trivia,
            termination: term.trivia,
        },
    };
    Ok(if node.callback.is_some() {
        Definition::CallbackInterface(node)
    } else {
        Definition::Interface(node)
    })
}

/// Body member of an ordinary or callback interface.
fn interface_member(p: &mut Parser) -> Result<Member, ParseError> {
    if let Some(member) = super::members::const_member(p)? {
        return Ok(member);
    }
    if let Some(member) = super::members::static_member(p)? {
        return Ok(member);
    }
    if let Some(member) = super::members::stringifier(p)? {
        return Ok(member);
    }
    if let Some(member) = super::members::iterable_like(p)? {
        return Ok(member);
    }
    if let Some(attr) = super::members::attribute(p, false)? {
        return Ok(Member::Attribute(attr));
    }
    if let Some(op) = super::members::operation(p, false)? {
        return Ok(Member::Operation(op));
    }
    Err(p.error("Unknown member"))
}

/// Parse the rest of an interface mixin after `interface mixin`.
///
/// Mixins take no inheritance, no static members, and no iterable-likes;
/// attributes cannot inherit and operations are regular.
fn mixin_rest(
    p: &mut Parser,
    base: Token,
    mixin_keyword: Token,
    partial: Option<Marker>,
) -> Result<Definition, ParseError> {
    let Some(name) = p.stream.consume(TokenKind::Identifier) else {
        return Err(p.error("No name for interface mixin"));
    };
    let unescaped = unescape(&name.value).to_owned();
    p.focus("interface mixin", &unescaped);
    if partial.is_none() {
        p.register("interface mixin", &unescaped)?;
    }
    let Some(open) = p.stream.consume(TokenKind::OpenBrace) else {
        return Err(p.error("Bodyless interface mixin"));
    };
    let mut members = Vec::new();
    let close = loop {
        if let Some(close) = p.stream.consume(TokenKind::CloseBrace) {
            break close;
        }
        if p.stream.probe(TokenKind::Eof) {
            return Err(p.error("Unterminated interface mixin"));
        }
        let ext_attrs = super::attrs::extended_attrs(p)?;
        let mut member = mixin_member(p)?;
        if let Some(ea) = ext_attrs {
            member.set_ext_attrs(ea);
        }
        members.push(member);
    };
    let Some(term) = p.stream.consume(TokenKind::Semicolon) else {
        return Err(p.error("Missing semicolon after interface mixin"));
    };
    Ok(Definition::Mixin(Mixin {
        ext_attrs: None,
        partial,
        name: unescaped,
        escaped_name: name.value,
        members,
        trivia: MixinTrivia {
            base: base.trivia,
            mixin: mixin_keyword.trivia,
            name: name.trivia,
            open: open.trivia,
            close: close.trivia,
            termination: term.trivia,
        },
    }))
}

fn mixin_member(p: &mut Parser) -> Result<Member, ParseError> {
    if let Some(member) = super::members::const_member(p)? {
        return Ok(member);
    }
    if let Some(member) = super::members::stringifier(p)? {
        return Ok(member);
    }
    if let Some(attr) = super::members::attribute(p, true)? {
        return Ok(Member::Attribute(attr));
    }
    if let Some(op) = super::members::operation(p, true)? {
        return Ok(Member::Operation(op));
    }
    Err(p.error("Unknown member"))
}

/// Parse `partial` followed by a dictionary, interface, or namespace.
fn partial(p: &mut Parser) -> Result<Option<Definition>, ParseError> {
    let Some(keyword) = p.stream.consume(TokenKind::Partial) else {
        return Ok(None);
    };
    let marker = Marker::from(keyword);
    if let Some(def) = dictionary(p, Some(marker.clone()))? {
        return Ok(Some(def));
    }
    if let Some(def) = interface(p, Some(marker.clone()), None)? {
        return Ok(Some(def));
    }
    if let Some(def) = namespace(p, Some(marker))? {
        return Ok(Some(def));
    }
    Err(p.error("Partial doesn't apply to anything"))
}

/// Parse a dictionary definition.
fn dictionary(p: &mut Parser, partial: Option<Marker>) -> Result<Option<Definition>, ParseError> {
    let Some(base) = p.stream.consume(TokenKind::Dictionary) else {
        return Ok(None);
    };
    let Some(name) = p.stream.consume(TokenKind::Identifier) else {
        return Err(p.error("No name for dictionary"));
    };
    let unescaped = unescape(&name.value).to_owned();
    p.focus("dictionary", &unescaped);
    if partial.is_none() {
        p.register("dictionary", &unescaped)?;
    }
    let inheritance = if partial.is_none() {
        inheritance(p)?
    } else {
        None
    };
    let Some(open) = p.stream.consume(TokenKind::OpenBrace) else {
        return Err(p.error("Bodyless dictionary"));
    };
    let mut members = Vec::new();
    let close = loop {
        if let Some(close) = p.stream.consume(TokenKind::CloseBrace) {
            break close;
        }
        if p.stream.probe(TokenKind::Eof) {
            return Err(p.error("Unterminated dictionary"));
        }
        let ext_attrs = super::attrs::extended_attrs(p)?;
        let mut member = field(p)?;
        member.ext_attrs = ext_attrs;
        members.push(member);
    };
    let Some(term) = p.stream.consume(TokenKind::Semicolon) else {
        return Err(p.error("Missing semicolon after dictionary"));
    };
    Ok(Some(Definition::Dictionary(Dictionary {
        ext_attrs: None,
        partial,
        name: unescaped,
        escaped_name: name.value,
        inheritance,
        members,
        trivia: DefinitionTrivia {
            base: base.trivia,
            name: name.trivia,
            open: open.trivia,
            close: close.trivia,
            termination: term.trivia,
        },
    })))
}

/// Parse one dictionary field.
fn field(p: &mut Parser) -> Result<Field, ParseError> {
    let required = p.stream.consume(TokenKind::Required).map(Marker::from);
    let Some(idl_type) = super::types::type_with_ext_attrs(p, Some(TypeRole::Dictionary))? else {
        return Err(p.error("No type for dictionary member"));
    };
    let Some(name) = p.stream.consume(TokenKind::Identifier) else {
        return Err(p.error("No name for dictionary member"));
    };
    let default = super::types::default_value(p)?;
    if required.is_some() && default.is_some() {
        return Err(p.error("Required member must not have a default"));
    }
    let Some(term) = p.stream.consume(TokenKind::Semicolon) else {
        return Err(p.error("Unterminated dictionary member, expected ;"));
    };
    Ok(Field {
        ext_attrs: None,
        required,
        idl_type,
        name: unescape(&name.value).to_owned(),
        escaped_name: name.value,
        default,
        trivia: FieldTrivia {
            name: name.trivia,
            termination: term.trivia,
        },
    })
}

/// Parse an enum definition: a non-empty list of quoted values.
fn enumeration(p: &mut Parser) -> Result<Option<Definition>, ParseError> {
    let Some(base) = p.stream.consume(TokenKind::Enum) else {
        return Ok(None);
    };
    let Some(name) = p.stream.consume(TokenKind::Identifier) else {
        return Err(p.error("No name for enum"));
    };
    let unescaped = unescape(&name.value).to_owned();
    p.focus("enum", &unescaped);
    p.register("enum", &unescaped)?;
    let Some(open) = p.stream.consume(TokenKind::OpenBrace) else {
        return Err(p.error("Bodyless enum"));
    };
    let Some(first) = p.stream.consume(TokenKind::String) else {
        return Err(p.error("No value in enum"));
    };
    let mut values = vec![enum_value(first)];
    loop {
        if let Some(comma) = p.stream.consume(TokenKind::Comma) {
            if let Some(last) = values.last_mut() {
                last.separator = Some(Separator::from(comma));
            }
            if let Some(next) = p.stream.consume(TokenKind::String) {
                values.push(enum_value(next));
                continue;
            }
            // trailing comma before the closing brace
            break;
        }
        if p.stream.probe(TokenKind::String) {
            return Err(p.error("No comma between enum values"));
        }
        break;
    }
    let Some(close) = p.stream.consume(TokenKind::CloseBrace) else {
        return Err(p.error("Unterminated enum"));
    };
    let Some(term) = p.stream.consume(TokenKind::Semicolon) else {
        return Err(p.error("No semicolon after enum"));
    };
    Ok(Some(Definition::Enum(Enumeration {
        ext_attrs: None,
        name: unescaped,
        escaped_name: name.value,
        values,
        trivia: DefinitionTrivia {
            base: base.trivia,
            name: name.trivia,
            open: open.trivia,
            close: close.trivia,
            termination: term.trivia,
        },
    })))
}

fn enum_value(token: Token) -> EnumValue {
    EnumValue {
        value: token.value[1..token.value.len() - 1].to_owned(),
        trivia: token.trivia,
        separator: None,
    }
}

/// Parse a typedef definition.
fn typedef(p: &mut Parser) -> Result<Option<Definition>, ParseError> {
    let Some(base) = p.stream.consume(TokenKind::Typedef) else {
        return Ok(None);
    };
    let Some(idl_type) = super::types::type_with_ext_attrs(p, Some(TypeRole::Typedef))? else {
        return Err(p.error("No type in typedef"));
    };
    let Some(name) = p.stream.consume(TokenKind::Identifier) else {
        return Err(p.error("No name in typedef"));
    };
    let unescaped = unescape(&name.value).to_owned();
    p.focus("typedef", &unescaped);
    p.register("typedef", &unescaped)?;
    let Some(term) = p.stream.consume(TokenKind::Semicolon) else {
        return Err(p.error("Unterminated typedef, expected ;"));
    };
    Ok(Some(Definition::Typedef(Typedef {
        ext_attrs: None,
        idl_type,
        name: unescaped,
        escaped_name: name.value,
        trivia: TypedefTrivia {
            base: base.trivia,
            name: name.trivia,
            termination: term.trivia,
        },
    })))
}

/// Speculatively parse `Target includes Mixin;`.
///
/// Consumes an identifier and rolls back unless `includes` follows, so
/// another production can attempt the same prefix.
fn includes(p: &mut Parser) -> Result<Option<Definition>, ParseError> {
    let start = p.stream.position();
    let Some(target) = p.stream.consume(TokenKind::Identifier) else {
        return Ok(None);
    };
    let Some(base) = p.stream.consume(TokenKind::Includes) else {
        p.stream.unconsume(start);
        return Ok(None);
    };
    let Some(mixin) = p.stream.consume(TokenKind::Identifier) else {
        return Err(p.error("Incomplete includes statement"));
    };
    let Some(term) = p.stream.consume(TokenKind::Semicolon) else {
        return Err(p.error("No terminating ; for includes statement"));
    };
    Ok(Some(Definition::Includes(Includes {
        ext_attrs: None,
        target: unescape(&target.value).to_owned(),
        escaped_target: target.value,
        includes: unescape(&mixin.value).to_owned(),
        escaped_includes: mixin.value,
        trivia: IncludesTrivia {
            target: target.trivia,
            base: base.trivia,
            mixin: mixin.trivia,
            termination: term.trivia,
        },
    })))
}

/// Parse a namespace definition.
///
/// Namespaces admit only readonly attributes and regular operations.
fn namespace(p: &mut Parser, partial: Option<Marker>) -> Result<Option<Definition>, ParseError> {
    let Some(base) = p.stream.consume(TokenKind::Namespace) else {
        return Ok(None);
    };
    let Some(name) = p.stream.consume(TokenKind::Identifier) else {
        return Err(p.error("No name for namespace"));
    };
    let unescaped = unescape(&name.value).to_owned();
    p.focus("namespace", &unescaped);
    if partial.is_none() {
        p.register("namespace", &unescaped)?;
    }
    let Some(open) = p.stream.consume(TokenKind::OpenBrace) else {
        return Err(p.error("Bodyless namespace"));
    };
    let mut members = Vec::new();
    let close = loop {
        if let Some(close) = p.stream.consume(TokenKind::CloseBrace) {
            break close;
        }
        if p.stream.probe(TokenKind::Eof) {
            return Err(p.error("Unterminated namespace"));
        }
        let ext_attrs = super::attrs::extended_attrs(p)?;
        let mut member = namespace_member(p)?;
        if let Some(ea) = ext_attrs {
            member.set_ext_attrs(ea);
        }
        members.push(member);
    };
    let Some(term) = p.stream.consume(TokenKind::Semicolon) else {
        return Err(p.error("Missing semicolon after namespace"));
    };
    Ok(Some(Definition::Namespace(Namespace {
        ext_attrs: None,
        partial,
        name: unescaped,
        escaped_name: name.value,
        members,
        trivia: DefinitionTrivia {
            base: base.trivia,
            name: name.trivia,
            open: open.trivia,
            close: close.trivia,
            termination: term.trivia,
        },
    })))
}

fn namespace_member(p: &mut Parser) -> Result<Member, ParseError> {
    if let Some(attr) = super::members::attribute(p, true)? {
        if attr.readonly.is_none() {
            return Err(p.error("Attributes in namespaces must be readonly"));
        }
        return Ok(Member::Attribute(attr));
    }
    if let Some(op) = super::members::operation(p, true)? {
        return Ok(Member::Operation(op));
    }
    Err(p.error("Unknown member"))
}

/// Parse an optional `: Parent` inheritance clause.
fn inheritance(p: &mut Parser) -> Result<Option<Inheritance>, ParseError> {
    let Some(colon) = p.stream.consume(TokenKind::Colon) else {
        return Ok(None);
    };
    let Some(name) = p.stream.consume(TokenKind::Identifier) else {
        return Err(p.error("No type in inheritance"));
    };
    Ok(Some(Inheritance {
        name: unescape(&name.value).to_owned(),
        escaped_name: name.value,
        trivia: InheritanceTrivia {
            colon: colon.trivia,
            name: name.trivia,
        },
    }))
}
