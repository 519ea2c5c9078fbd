//! Extended attribute and argument-list productions.

use super::{unescape, ParseError, Parser};
use crate::ast::{
    Argument, ArgumentTrivia, BracketTrivia, ExtAttrRhs, ExtAttrTrivia, ExtendedAttribute,
    ExtendedAttributes, IdentifierItem, Marker, RhsIdentifierList, RhsKind, RhsListTrivia,
    RhsToken, RhsTokenTrivia, Separator, TypeRole,
};
use crate::lexer::{TokenKind, ARGUMENT_NAME_KEYWORDS};

/// Parse an optional `[ ... ]` extended attribute list.
pub(super) fn extended_attrs(p: &mut Parser) -> Result<Option<ExtendedAttributes>, ParseError> {
    let Some(open) = p.stream.consume(TokenKind::OpenBracket) else {
        return Ok(None);
    };
    let mut items = Vec::new();
    match simple_extended_attr(p)? {
        Some(item) => items.push(item),
        None => return Err(p.error("Empty extended attribute")),
    }
    loop {
        let Some(comma) = p.stream.consume(TokenKind::Comma) else {
            break;
        };
        if let Some(last) = items.last_mut() {
            last.separator = Some(Separator::from(comma));
        }
        match simple_extended_attr(p)? {
            Some(item) => items.push(item),
            None => return Err(p.error("Trailing comma in extended attribute")),
        }
    }
    let Some(close) = p.stream.consume(TokenKind::CloseBracket) else {
        return Err(p.error("No end of extended attribute"));
    };
    Ok(Some(ExtendedAttributes {
        items,
        trivia: BracketTrivia {
            open: open.trivia,
            close: close.trivia,
        },
    }))
}

/// Parse one extended attribute: `Name`, `Name=Rhs`, `Name(args)`,
/// `Name=Rhs(args)`, or `Name=(a, b)`.
fn simple_extended_attr(p: &mut Parser) -> Result<Option<ExtendedAttribute>, ParseError> {
    let Some(name) = p.stream.consume(TokenKind::Identifier) else {
        return Ok(None);
    };
    let mut attr = ExtendedAttribute {
        name: name.value,
        rhs: None,
        arguments: None,
        trivia: ExtAttrTrivia {
            name: name.trivia,
            open: None,
            close: None,
        },
        separator: None,
    };
    let assign = p.stream.consume(TokenKind::Equals);
    if assign.is_some() {
        if let Some(value) = p.stream.consume_any(&[
            TokenKind::Identifier,
            TokenKind::Decimal,
            TokenKind::Integer,
            TokenKind::String,
        ]) {
            let kind = match value.kind {
                TokenKind::Identifier => RhsKind::Identifier,
                TokenKind::Decimal => RhsKind::Float,
                TokenKind::Integer => RhsKind::Integer,
                _ => RhsKind::String,
            };
            attr.rhs = Some(ExtAttrRhs::Token(RhsToken {
                kind,
                value: value.value,
                trivia: RhsTokenTrivia {
                    assign: assign.as_ref().map(|t| t.trivia.clone()).unwrap_or_default(),
                    value: value.trivia,
                },
            }));
        }
    }
    if let Some(open) = p.stream.consume(TokenKind::OpenParen) {
        if assign.is_some() && attr.rhs.is_none() {
            // `=` directly followed by parens takes an identifier list
            let items = identifier_list(p)?;
            let Some(close) = p.stream.consume(TokenKind::CloseParen) else {
                return Err(p.error("Unterminated identifier list"));
            };
            attr.rhs = Some(ExtAttrRhs::IdentifierList(RhsIdentifierList {
                items,
                trivia: RhsListTrivia {
                    assign: assign.as_ref().map(|t| t.trivia.clone()).unwrap_or_default(),
                    open: open.trivia,
                    close: close.trivia,
                },
            }));
        } else {
            let arguments = argument_list(p)?;
            let Some(close) = p.stream.consume(TokenKind::CloseParen) else {
                return Err(p.error("Unterminated extended attribute arguments"));
            };
            attr.trivia.open = Some(open.trivia);
            attr.trivia.close = Some(close.trivia);
            attr.arguments = Some(arguments);
        }
    }
    if assign.is_some() && attr.rhs.is_none() {
        return Err(p.error("No right hand side to extended attribute assignment"));
    }
    Ok(Some(attr))
}

/// Parse a non-empty comma-separated identifier list.
fn identifier_list(p: &mut Parser) -> Result<Vec<IdentifierItem>, ParseError> {
    let Some(first) = p.stream.consume(TokenKind::Identifier) else {
        return Err(p.error("Expected identifiers but none found"));
    };
    let mut items = vec![IdentifierItem {
        value: first.value,
        trivia: first.trivia,
        separator: None,
    }];
    loop {
        let Some(comma) = p.stream.consume(TokenKind::Comma) else {
            break;
        };
        if let Some(last) = items.last_mut() {
            last.separator = Some(Separator::from(comma));
        }
        let Some(next) = p.stream.consume(TokenKind::Identifier) else {
            return Err(p.error("Trailing comma in identifier list"));
        };
        items.push(IdentifierItem {
            value: next.value,
            trivia: next.trivia,
            separator: None,
        });
    }
    Ok(items)
}

/// Parse a possibly empty comma-separated argument list.
pub(super) fn argument_list(p: &mut Parser) -> Result<Vec<Argument>, ParseError> {
    let mut arguments = Vec::new();
    let Some(first) = argument(p)? else {
        return Ok(arguments);
    };
    arguments.push(first);
    loop {
        let Some(comma) = p.stream.consume(TokenKind::Comma) else {
            break;
        };
        if let Some(last) = arguments.last_mut() {
            last.separator = Some(Separator::from(comma));
        }
        let Some(next) = argument(p)? else {
            return Err(p.error("Trailing comma in arguments list"));
        };
        arguments.push(next);
    }
    Ok(arguments)
}

/// Speculatively parse one argument.
///
/// Rolls back and returns `None` when the type or the name cannot be
/// parsed, leaving the stream untouched for the caller.
fn argument(p: &mut Parser) -> Result<Option<Argument>, ParseError> {
    let start = p.stream.position();
    let ext_attrs = extended_attrs(p)?;
    let optional = p.stream.consume(TokenKind::Optional).map(Marker::from);
    let Some(idl_type) = super::types::type_with_ext_attrs(p, Some(TypeRole::Argument))? else {
        p.stream.unconsume(start);
        return Ok(None);
    };
    let variadic = if optional.is_none() {
        p.stream.consume(TokenKind::Ellipsis).map(Marker::from)
    } else {
        None
    };
    // An argument name may be an identifier or any argument-name keyword
    let name_token = match p.stream.consume(TokenKind::Identifier) {
        Some(token) => token,
        None => match p.stream.consume_any(ARGUMENT_NAME_KEYWORDS) {
            Some(token) => token,
            None => {
                p.stream.unconsume(start);
                return Ok(None);
            }
        },
    };
    let default = if optional.is_some() {
        super::types::default_value(p)?
    } else {
        None
    };
    Ok(Some(Argument {
        ext_attrs,
        optional,
        idl_type,
        variadic,
        name: unescape(&name_token.value).to_owned(),
        escaped_name: name_token.value,
        default,
        trivia: ArgumentTrivia {
            name: name_token.trivia,
        },
        separator: None,
    }))
}
