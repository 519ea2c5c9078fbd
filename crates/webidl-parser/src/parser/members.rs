//! Member productions for interface, mixin, and namespace bodies.

use super::{unescape, ParseError, Parser};
use crate::ast::{
    Attribute, AttributeTrivia, ConstMember, ConstTrivia, GenericKind, IterableLike,
    IterableTrivia, Marker, Member, Operation, OperationName, OperationTrivia, Separator,
    SpecialOp, SpecialOpKind, StringifierMember, StringifierTrivia, Type, TypeRole,
};
use crate::lexer::TokenKind;

/// Parse a `const` member.
pub(super) fn const_member(p: &mut Parser) -> Result<Option<Member>, ParseError> {
    let Some(base) = p.stream.consume(TokenKind::Const) else {
        return Ok(None);
    };
    let mut idl_type = match super::types::primitive_type(p, Some(TypeRole::Const))? {
        Some(parsed) => parsed,
        None => {
            let Some(token) = p.stream.consume(TokenKind::Identifier) else {
                return Err(p.error("No type for const"));
            };
            let printable = unescape(&token.value).to_owned();
            Type::base(Some(TypeRole::Const), printable, token.value, token.trivia)
        }
    };
    if let Some(question) = p.stream.consume(TokenKind::Question) {
        idl_type.nullable = Some(Marker::from(question));
    }
    let Some(name) = p.stream.consume(TokenKind::Identifier) else {
        return Err(p.error("No name for const"));
    };
    let Some(assign) = p.stream.consume(TokenKind::Equals) else {
        return Err(p.error("No value assignment"));
    };
    let Some(value) = super::types::const_value(p) else {
        return Err(p.error("No value for const"));
    };
    let Some(term) = p.stream.consume(TokenKind::Semicolon) else {
        return Err(p.error("Unterminated const"));
    };
    Ok(Some(Member::Const(ConstMember {
        ext_attrs: None,
        idl_type,
        name: unescape(&name.value).to_owned(),
        escaped_name: name.value,
        value,
        trivia: ConstTrivia {
            base: base.trivia,
            name: name.trivia,
            assign: assign.trivia,
            termination: term.trivia,
        },
    })))
}

/// Speculatively parse an attribute.
///
/// Consumes the optional `inherit`/`readonly` prefixes and commits on the
/// `attribute` keyword; anything short of that rolls back so another
/// member production can try the same prefix.
pub(super) fn attribute(p: &mut Parser, no_inherit: bool) -> Result<Option<Attribute>, ParseError> {
    let start = p.stream.position();
    let inherit = if no_inherit {
        None
    } else {
        p.stream.consume(TokenKind::Inherit).map(Marker::from)
    };
    let readonly = p.stream.consume(TokenKind::Readonly).map(Marker::from);
    let Some(base) = p.stream.consume(TokenKind::Attribute) else {
        p.stream.unconsume(start);
        return Ok(None);
    };
    let Some(idl_type) = super::types::type_with_ext_attrs(p, Some(TypeRole::Attribute))? else {
        return Err(p.error("No type in attribute"));
    };
    match idl_type.generic {
        Some(GenericKind::Sequence) => {
            return Err(p.error("Attributes cannot accept sequence types"))
        }
        Some(GenericKind::Record) => return Err(p.error("Attributes cannot accept record types")),
        _ => {}
    }
    let Some(name) = p.stream.consume(TokenKind::Identifier) else {
        return Err(p.error("No name in attribute"));
    };
    let Some(term) = p.stream.consume(TokenKind::Semicolon) else {
        return Err(p.error("Unterminated attribute, expected ;"));
    };
    Ok(Some(Attribute {
        ext_attrs: None,
        static_: None,
        stringifier: None,
        inherit,
        readonly,
        idl_type,
        name: unescape(&name.value).to_owned(),
        escaped_name: name.value,
        trivia: AttributeTrivia {
            base: base.trivia,
            name: name.trivia,
            termination: term.trivia,
        },
    }))
}

/// Parse an operation.
///
/// With `regular` set, the `getter`/`setter`/`deleter` specials are not
/// accepted (mixins, namespaces, and the `static`/`stringifier` wrappers).
pub(super) fn operation(p: &mut Parser, regular: bool) -> Result<Option<Operation>, ParseError> {
    let special = if regular {
        None
    } else {
        p.stream
            .consume_any(&[TokenKind::Getter, TokenKind::Setter, TokenKind::Deleter])
            .map(|token| SpecialOp {
                kind: match token.kind {
                    TokenKind::Getter => SpecialOpKind::Getter,
                    TokenKind::Setter => SpecialOpKind::Setter,
                    _ => SpecialOpKind::Deleter,
                },
                trivia: token.trivia,
            })
    };
    let return_type = match super::types::return_type(p)? {
        Some(parsed) => parsed,
        // A special keyword is a commit point; without one, nothing was
        // consumed and the member loop can report the stray token itself.
        None if special.is_some() => return Err(p.error("Missing return type")),
        None => return Ok(None),
    };
    let name = p.stream.consume(TokenKind::Identifier).map(|token| {
        let unescaped = unescape(&token.value).to_owned();
        OperationName {
            name: unescaped,
            escaped_name: token.value,
            trivia: token.trivia,
        }
    });
    let Some(open) = p.stream.consume(TokenKind::OpenParen) else {
        return Err(p.error("Invalid operation"));
    };
    let arguments = super::attrs::argument_list(p)?;
    let Some(close) = p.stream.consume(TokenKind::CloseParen) else {
        return Err(p.error("Unterminated operation"));
    };
    let Some(term) = p.stream.consume(TokenKind::Semicolon) else {
        return Err(p.error("Unterminated operation, expected ;"));
    };
    Ok(Some(Operation {
        ext_attrs: None,
        static_: None,
        stringifier: None,
        special,
        return_type,
        name,
        arguments,
        trivia: OperationTrivia {
            open: open.trivia,
            close: close.trivia,
            termination: term.trivia,
        },
    }))
}

/// Parse a `static` member wrapping an attribute or a regular operation.
pub(super) fn static_member(p: &mut Parser) -> Result<Option<Member>, ParseError> {
    let Some(keyword) = p.stream.consume(TokenKind::Static) else {
        return Ok(None);
    };
    let marker = Marker::from(keyword);
    if let Some(mut attr) = attribute(p, true)? {
        attr.static_ = Some(marker);
        return Ok(Some(Member::Attribute(attr)));
    }
    if let Some(mut op) = operation(p, true)? {
        op.static_ = Some(marker);
        return Ok(Some(Member::Operation(op)));
    }
    Err(p.error("No body in static member"))
}

/// Parse a `stringifier`: standalone `stringifier;`, or a wrapper around
/// an attribute or a regular operation.
pub(super) fn stringifier(p: &mut Parser) -> Result<Option<Member>, ParseError> {
    let Some(keyword) = p.stream.consume(TokenKind::Stringifier) else {
        return Ok(None);
    };
    if let Some(term) = p.stream.consume(TokenKind::Semicolon) {
        return Ok(Some(Member::Stringifier(StringifierMember {
            ext_attrs: None,
            trivia: StringifierTrivia {
                base: keyword.trivia,
                termination: term.trivia,
            },
        })));
    }
    let marker = Marker::from(keyword);
    if let Some(mut attr) = attribute(p, true)? {
        attr.stringifier = Some(marker);
        return Ok(Some(Member::Attribute(attr)));
    }
    if let Some(mut op) = operation(p, true)? {
        op.stringifier = Some(marker);
        return Ok(Some(Member::Operation(op)));
    }
    Err(p.error("Unterminated stringifier"))
}

/// Speculatively parse an `iterable`, `maplike`, or `setlike` declaration.
///
/// `iterable` and `setlike` take exactly one type argument, `maplike`
/// exactly two; only `maplike` and `setlike` may be `readonly`. A
/// `readonly` followed by anything else rolls back so the attribute
/// production can claim it.
pub(super) fn iterable_like(p: &mut Parser) -> Result<Option<Member>, ParseError> {
    let start = p.stream.position();
    let readonly = p.stream.consume(TokenKind::Readonly).map(Marker::from);
    let kinds: &[TokenKind] = if readonly.is_some() {
        &[TokenKind::Maplike, TokenKind::Setlike]
    } else {
        &[TokenKind::Iterable, TokenKind::Maplike, TokenKind::Setlike]
    };
    let Some(base) = p.stream.consume_any(kinds) else {
        p.stream.unconsume(start);
        return Ok(None);
    };
    let keyword = base.kind;
    let Some(open) = p.stream.consume(TokenKind::Less) else {
        return Err(p.error(format!("Error parsing {} declaration", base.value)));
    };
    let mut types = Vec::new();
    let Some(first) = super::types::type_with_ext_attrs(p, None)? else {
        return Err(p.error(format!("Error parsing {} declaration", base.value)));
    };
    types.push(first);
    if keyword == TokenKind::Maplike {
        let Some(comma) = p.stream.consume(TokenKind::Comma) else {
            return Err(p.error("Missing second type argument in maplike declaration"));
        };
        if let Some(key) = types.last_mut() {
            key.separator = Some(Separator::from(comma));
        }
        let Some(second) = super::types::type_with_ext_attrs(p, None)? else {
            return Err(p.error("Error parsing maplike declaration"));
        };
        types.push(second);
    }
    let Some(close) = p.stream.consume(TokenKind::Greater) else {
        return Err(p.error(format!("Unterminated {} declaration", base.value)));
    };
    let Some(term) = p.stream.consume(TokenKind::Semicolon) else {
        return Err(p.error(format!(
            "Missing semicolon after {} declaration",
            base.value
        )));
    };
    let member = IterableLike {
        ext_attrs: None,
        readonly,
        types,
        trivia: IterableTrivia {
            base: base.trivia,
            open: open.trivia,
            close: close.trivia,
            termination: term.trivia,
        },
    };
    Ok(Some(match keyword {
        TokenKind::Iterable => Member::Iterable(member),
        TokenKind::Maplike => Member::Maplike(member),
        _ => Member::Setlike(member),
    }))
}
