//! Type, constant-value, and default-value productions.

use super::{unescape, ParseError, Parser};
use crate::ast::{
    ConstValue, ConstValueNode, DefaultKind, DefaultTrivia, DefaultValue, GenericKind, Marker,
    Separator, Type, TypeKind, TypeRole, TypeTrivia,
};
use crate::lexer::{TokenKind, STRING_TYPES};

/// Parse optional extended attributes followed by a type.
///
/// Rolls the cursor back over the attributes when no type follows, so
/// speculative callers see an untouched stream.
pub(super) fn type_with_ext_attrs(
    p: &mut Parser,
    role: Option<TypeRole>,
) -> Result<Option<Type>, ParseError> {
    let start = p.stream.position();
    let ext_attrs = super::attrs::extended_attrs(p)?;
    let Some(mut parsed) = type_(p, role)? else {
        p.stream.unconsume(start);
        return Ok(None);
    };
    parsed.ext_attrs = ext_attrs;
    Ok(Some(parsed))
}

/// Parse a type: a single type or a parenthesised union.
pub(super) fn type_(p: &mut Parser, role: Option<TypeRole>) -> Result<Option<Type>, ParseError> {
    if let Some(parsed) = single_type(p, role)? {
        return Ok(Some(parsed));
    }
    union_type(p, role)
}

/// Parse a non-union type: generic, primitive, or named.
fn single_type(p: &mut Parser, role: Option<TypeRole>) -> Result<Option<Type>, ParseError> {
    let parsed = if let Some(parsed) = generic_type(p, role)? {
        parsed
    } else if let Some(parsed) = primitive_type(p, role)? {
        parsed
    } else {
        let base = match p.stream.consume(TokenKind::Identifier) {
            Some(base) => base,
            None => match p.stream.consume_any(STRING_TYPES) {
                Some(base) => base,
                None => return Ok(None),
            },
        };
        let printable = if base.kind == TokenKind::Identifier {
            unescape(&base.value).to_owned()
        } else {
            base.value.clone()
        };
        Type::base(role, printable, base.value, base.trivia)
    };
    type_suffix(p, parsed).map(Some)
}

/// Parse a `sequence`, `record`, `FrozenArray`, or `Promise` type.
fn generic_type(p: &mut Parser, role: Option<TypeRole>) -> Result<Option<Type>, ParseError> {
    let Some(base) = p.stream.consume_any(&[
        TokenKind::FrozenArray,
        TokenKind::Promise,
        TokenKind::Sequence,
        TokenKind::Record,
    ]) else {
        return Ok(None);
    };
    let generic = match base.kind {
        TokenKind::FrozenArray => GenericKind::FrozenArray,
        TokenKind::Promise => GenericKind::Promise,
        TokenKind::Sequence => GenericKind::Sequence,
        _ => GenericKind::Record,
    };
    let Some(open) = p.stream.consume(TokenKind::Less) else {
        return Err(p.error(format!("No opening bracket after {}", base.value)));
    };
    let mut inner = Vec::new();
    match generic {
        GenericKind::Promise => {
            // Promise wraps a return type, so Promise<void> is legal
            let Some(subtype) = return_type(p)? else {
                return Err(p.error("Missing Promise subtype"));
            };
            inner.push(subtype);
        }
        GenericKind::Sequence | GenericKind::FrozenArray => {
            let Some(subtype) = type_with_ext_attrs(p, None)? else {
                return Err(p.error(format!("Error parsing generic type {}", base.value)));
            };
            inner.push(subtype);
        }
        GenericKind::Record => {
            if p.stream.probe(TokenKind::OpenBracket) {
                return Err(p.error("Record key cannot have extended attribute"));
            }
            let Some(key) = p.stream.consume_any(STRING_TYPES) else {
                return Err(p.error("Record key must be one of: ByteString, DOMString, USVString"));
            };
            let mut key_type = Type::base(None, key.value.clone(), key.value, key.trivia);
            let Some(comma) = p.stream.consume(TokenKind::Comma) else {
                return Err(p.error("Missing comma after record key type"));
            };
            key_type.separator = Some(Separator::from(comma));
            inner.push(key_type);
            let Some(value_type) = type_with_ext_attrs(p, None)? else {
                return Err(p.error("Error parsing generic type record"));
            };
            inner.push(value_type);
        }
    }
    let Some(close) = p.stream.consume(TokenKind::Greater) else {
        return Err(p.error(format!("Unterminated {}", base.value)));
    };
    Ok(Some(Type {
        role,
        ext_attrs: None,
        generic: Some(generic),
        nullable: None,
        union: false,
        idl_type: TypeKind::Compound(inner),
        base_name: Some(base.value),
        prefix: None,
        postfix: None,
        separator: None,
        trivia: TypeTrivia {
            base: Some(base.trivia),
            open: Some(open.trivia),
            close: Some(close.trivia),
        },
    }))
}

/// Parse a primitive type, handling the `unsigned`/`unrestricted` prefixes
/// and the `long long` postfix.
pub(super) fn primitive_type(
    p: &mut Parser,
    role: Option<TypeRole>,
) -> Result<Option<Type>, ParseError> {
    if let Some(prefix) = p.stream.consume(TokenKind::Unsigned) {
        let Some(base) = p.stream.consume_any(&[TokenKind::Short, TokenKind::Long]) else {
            return Err(p.error("Failed to parse integer type"));
        };
        return Ok(Some(integer_type(p, role, Some(Marker::from(prefix)), base)));
    }
    if let Some(base) = p.stream.consume_any(&[TokenKind::Short, TokenKind::Long]) {
        return Ok(Some(integer_type(p, role, None, base)));
    }
    if let Some(prefix) = p.stream.consume(TokenKind::Unrestricted) {
        let Some(base) = p.stream.consume_any(&[TokenKind::Float, TokenKind::Double]) else {
            return Err(p.error("Failed to parse float type"));
        };
        return Ok(Some(decimal_type(role, Some(Marker::from(prefix)), base)));
    }
    if let Some(base) = p.stream.consume_any(&[TokenKind::Float, TokenKind::Double]) {
        return Ok(Some(decimal_type(role, None, base)));
    }
    if let Some(base) =
        p.stream
            .consume_any(&[TokenKind::Boolean, TokenKind::Byte, TokenKind::Octet])
    {
        return Ok(Some(Type::base(
            role,
            base.value.clone(),
            base.value,
            base.trivia,
        )));
    }
    Ok(None)
}

fn integer_type(
    p: &mut Parser,
    role: Option<TypeRole>,
    prefix: Option<Marker>,
    base: crate::lexer::Token,
) -> Type {
    let postfix = if base.kind == TokenKind::Long {
        p.stream.consume(TokenKind::Long).map(Marker::from)
    } else {
        None
    };
    let mut printable = String::new();
    if prefix.is_some() {
        printable.push_str("unsigned ");
    }
    printable.push_str(&base.value);
    if postfix.is_some() {
        printable.push_str(" long");
    }
    Type {
        role,
        ext_attrs: None,
        generic: None,
        nullable: None,
        union: false,
        idl_type: TypeKind::Base(printable),
        base_name: Some(base.value),
        prefix,
        postfix,
        separator: None,
        trivia: TypeTrivia {
            base: Some(base.trivia),
            open: None,
            close: None,
        },
    }
}

fn decimal_type(role: Option<TypeRole>, prefix: Option<Marker>, base: crate::lexer::Token) -> Type {
    let mut printable = String::new();
    if prefix.is_some() {
        printable.push_str("unrestricted ");
    }
    printable.push_str(&base.value);
    Type {
        role,
        ext_attrs: None,
        generic: None,
        nullable: None,
        union: false,
        idl_type: TypeKind::Base(printable),
        base_name: Some(base.value),
        prefix,
        postfix: None,
        separator: None,
        trivia: TypeTrivia {
            base: Some(base.trivia),
            open: None,
            close: None,
        },
    }
}

/// Parse a parenthesised union of at least two alternatives.
fn union_type(p: &mut Parser, role: Option<TypeRole>) -> Result<Option<Type>, ParseError> {
    let Some(open) = p.stream.consume(TokenKind::OpenParen) else {
        return Ok(None);
    };
    let mut alternatives = Vec::new();
    loop {
        let Some(mut alternative) = type_with_ext_attrs(p, None)? else {
            return Err(p.error("No type after open parenthesis or 'or' in union type"));
        };
        match p.stream.consume(TokenKind::Or) {
            Some(or) => {
                alternative.separator = Some(Separator::from(or));
                alternatives.push(alternative);
            }
            None => {
                alternatives.push(alternative);
                break;
            }
        }
    }
    if alternatives.len() < 2 {
        return Err(p.error(format!(
            "At least two types are expected in a union type but found {}",
            alternatives.len()
        )));
    }
    let Some(close) = p.stream.consume(TokenKind::CloseParen) else {
        return Err(p.error("Unterminated union type"));
    };
    let parsed = Type {
        role,
        ext_attrs: None,
        generic: None,
        nullable: None,
        union: true,
        idl_type: TypeKind::Compound(alternatives),
        base_name: None,
        prefix: None,
        postfix: None,
        separator: None,
        trivia: TypeTrivia {
            base: None,
            open: Some(open.trivia),
            close: Some(close.trivia),
        },
    };
    type_suffix(p, parsed).map(Some)
}

/// Apply the optional `?` suffix, enforcing the nullability rules.
fn type_suffix(p: &mut Parser, mut parsed: Type) -> Result<Type, ParseError> {
    while let Some(question) = p.stream.consume(TokenKind::Question) {
        if parsed.nullable.is_some() {
            return Err(p.error("Can't nullable more than once"));
        }
        if parsed.generic == Some(GenericKind::Promise) {
            return Err(p.error("Promise type cannot be nullable"));
        }
        if matches!(&parsed.idl_type, TypeKind::Base(name) if name == "any") {
            return Err(p.error("Type any cannot be nullable"));
        }
        parsed.nullable = Some(Marker::from(question));
    }
    Ok(parsed)
}

/// Parse a return type: `void` or any type.
pub(super) fn return_type(p: &mut Parser) -> Result<Option<Type>, ParseError> {
    if let Some(void) = p.stream.consume(TokenKind::Void) {
        return Ok(Some(Type::base(
            Some(TypeRole::Return),
            void.value.clone(),
            void.value,
            void.trivia,
        )));
    }
    type_(p, Some(TypeRole::Return))
}

/// Parse a constant literal: `true`, `false`, `null`, `Infinity`,
/// `-Infinity`, `NaN`, or a numeric literal.
pub(super) fn const_value(p: &mut Parser) -> Option<ConstValueNode> {
    if let Some(token) = p.stream.consume_any(&[TokenKind::True, TokenKind::False]) {
        return Some(ConstValueNode {
            value: ConstValue::Boolean {
                value: token.kind == TokenKind::True,
            },
            trivia: token.trivia,
        });
    }
    if let Some(token) = p.stream.consume(TokenKind::NegativeInfinity) {
        return Some(ConstValueNode {
            value: ConstValue::Infinity { negative: true },
            trivia: token.trivia,
        });
    }
    if let Some(token) = p.stream.consume(TokenKind::Infinity) {
        return Some(ConstValueNode {
            value: ConstValue::Infinity { negative: false },
            trivia: token.trivia,
        });
    }
    if let Some(token) = p.stream.consume(TokenKind::NaN) {
        return Some(ConstValueNode {
            value: ConstValue::NaN,
            trivia: token.trivia,
        });
    }
    if let Some(token) = p.stream.consume(TokenKind::Null) {
        return Some(ConstValueNode {
            value: ConstValue::Null,
            trivia: token.trivia,
        });
    }
    if let Some(token) = p
        .stream
        .consume_any(&[TokenKind::Decimal, TokenKind::Integer])
    {
        return Some(ConstValueNode {
            value: ConstValue::Number { value: token.value },
            trivia: token.trivia,
        });
    }
    None
}

/// Parse an optional `= value` default clause.
pub(super) fn default_value(p: &mut Parser) -> Result<Option<DefaultValue>, ParseError> {
    let Some(assign) = p.stream.consume(TokenKind::Equals) else {
        return Ok(None);
    };
    let trivia = DefaultTrivia {
        assign: assign.trivia,
    };
    if let Some(value) = const_value(p) {
        return Ok(Some(DefaultValue {
            kind: DefaultKind::Const(value),
            trivia,
        }));
    }
    if let Some(token) = p.stream.consume(TokenKind::String) {
        let unquoted = token.value[1..token.value.len() - 1].to_owned();
        return Ok(Some(DefaultValue {
            kind: DefaultKind::String {
                value: unquoted,
                trivia: token.trivia,
            },
            trivia,
        }));
    }
    if let Some(open) = p.stream.consume(TokenKind::OpenBracket) {
        let Some(close) = p.stream.consume(TokenKind::CloseBracket) else {
            return Err(p.error("Default sequence value must be empty"));
        };
        return Ok(Some(DefaultValue {
            kind: DefaultKind::EmptySequence {
                open: open.trivia,
                close: close.trivia,
            },
            trivia,
        }));
    }
    Err(p.error("No value for default"))
}
