//! Test support: a document-order tree walker.
//!
//! Writers are not part of the library surface; the round-trip and
//! idempotence laws still need one, so the tests carry their own. The
//! walker emits `trivia + text` for every terminal position in document
//! order, which must reproduce the parsed source byte-for-byte.

use webidl_parser::ast::{
    Argument, ConstValueNode, DefaultKind, DefaultValue, Definition, ExtAttrRhs,
    ExtendedAttributes, Inheritance, Marker, Member, Separator, Type, TypeKind,
};

/// Regenerate source text from a parsed definition list.
pub fn write(definitions: &[Definition]) -> String {
    let mut out = String::new();
    for definition in definitions {
        write_definition(&mut out, definition);
    }
    out
}

fn write_definition(out: &mut String, definition: &Definition) {
    match definition {
        Definition::Interface(node) | Definition::CallbackInterface(node) => {
            write_ext_attrs(out, &node.ext_attrs);
            write_marker(out, &node.callback);
            write_marker(out, &node.partial);
            push(out, &node.trivia.base, "interface");
            push(out, &node.trivia.name, &node.escaped_name);
            write_inheritance(out, &node.inheritance);
            push(out, &node.trivia.open, "{");
            for member in &node.members {
                write_member(out, member);
            }
            push(out, &node.trivia.close, "}");
            push(out, &node.trivia.termination, ";");
        }
        Definition::Mixin(node) => {
            write_ext_attrs(out, &node.ext_attrs);
            write_marker(out, &node.partial);
            push(out, &node.trivia.base, "interface");
            push(out, &node.trivia.mixin, "mixin");
            push(out, &node.trivia.name, &node.escaped_name);
            push(out, &node.trivia.open, "{");
            for member in &node.members {
                write_member(out, member);
            }
            push(out, &node.trivia.close, "}");
            push(out, &node.trivia.termination, ";");
        }
        Definition::Callback(node) => {
            write_ext_attrs(out, &node.ext_attrs);
            push(out, &node.trivia.base, "callback");
            push(out, &node.trivia.name, &node.escaped_name);
            push(out, &node.trivia.assign, "=");
            write_type(out, &node.return_type);
            push(out, &node.trivia.open, "(");
            for argument in &node.arguments {
                write_argument(out, argument);
            }
            push(out, &node.trivia.close, ")");
            push(out, &node.trivia.termination, ";");
        }
        Definition::Dictionary(node) => {
            write_ext_attrs(out, &node.ext_attrs);
            write_marker(out, &node.partial);
            push(out, &node.trivia.base, "dictionary");
            push(out, &node.trivia.name, &node.escaped_name);
            write_inheritance(out, &node.inheritance);
            push(out, &node.trivia.open, "{");
            for member in &node.members {
                write_ext_attrs(out, &member.ext_attrs);
                write_marker(out, &member.required);
                write_type(out, &member.idl_type);
                push(out, &member.trivia.name, &member.escaped_name);
                write_default(out, &member.default);
                push(out, &member.trivia.termination, ";");
            }
            push(out, &node.trivia.close, "}");
            push(out, &node.trivia.termination, ";");
        }
        Definition::Namespace(node) => {
            write_ext_attrs(out, &node.ext_attrs);
            write_marker(out, &node.partial);
            push(out, &node.trivia.base, "namespace");
            push(out, &node.trivia.name, &node.escaped_name);
            push(out, &node.trivia.open, "{");
            for member in &node.members {
                write_member(out, member);
            }
            push(out, &node.trivia.close, "}");
            push(out, &node.trivia.termination, ";");
        }
        Definition::Enum(node) => {
            write_ext_attrs(out, &node.ext_attrs);
            push(out, &node.trivia.base, "enum");
            push(out, &node.trivia.name, &node.escaped_name);
            push(out, &node.trivia.open, "{");
            for value in &node.values {
                out.push_str(&value.trivia);
                out.push('"');
                out.push_str(&value.value);
                out.push('"');
                write_separator(out, &value.separator);
            }
            push(out, &node.trivia.close, "}");
            push(out, &node.trivia.termination, ";");
        }
        Definition::Typedef(node) => {
            write_ext_attrs(out, &node.ext_attrs);
            push(out, &node.trivia.base, "typedef");
            write_type(out, &node.idl_type);
            push(out, &node.trivia.name, &node.escaped_name);
            push(out, &node.trivia.termination, ";");
        }
        Definition::Includes(node) => {
            write_ext_attrs(out, &node.ext_attrs);
            push(out, &node.trivia.target, &node.escaped_target);
            push(out, &node.trivia.base, "includes");
            push(out, &node.trivia.mixin, &node.escaped_includes);
            push(out, &node.trivia.termination, ";");
        }
        Definition::Eof(node) => out.push_str(&node.trivia),
    }
}

fn write_member(out: &mut String, member: &Member) {
    match member {
        Member::Const(node) => {
            write_ext_attrs(out, &node.ext_attrs);
            push(out, &node.trivia.base, "const");
            write_type(out, &node.idl_type);
            push(out, &node.trivia.name, &node.escaped_name);
            push(out, &node.trivia.assign, "=");
            write_const_value(out, &node.value);
            push(out, &node.trivia.termination, ";");
        }
        Member::Attribute(node) => {
            write_ext_attrs(out, &node.ext_attrs);
            write_marker(out, &node.static_);
            write_marker(out, &node.stringifier);
            write_marker(out, &node.inherit);
            write_marker(out, &node.readonly);
            push(out, &node.trivia.base, "attribute");
            write_type(out, &node.idl_type);
            push(out, &node.trivia.name, &node.escaped_name);
            push(out, &node.trivia.termination, ";");
        }
        Member::Operation(node) => {
            write_ext_attrs(out, &node.ext_attrs);
            write_marker(out, &node.static_);
            write_marker(out, &node.stringifier);
            if let Some(special) = &node.special {
                push(out, &special.trivia, special.kind.as_str());
            }
            write_type(out, &node.return_type);
            if let Some(name) = &node.name {
                push(out, &name.trivia, &name.escaped_name);
            }
            push(out, &node.trivia.open, "(");
            for argument in &node.arguments {
                write_argument(out, argument);
            }
            push(out, &node.trivia.close, ")");
            push(out, &node.trivia.termination, ";");
        }
        Member::Iterable(node) | Member::Maplike(node) | Member::Setlike(node) => {
            let keyword = match member {
                Member::Iterable(_) => "iterable",
                Member::Maplike(_) => "maplike",
                _ => "setlike",
            };
            write_ext_attrs(out, &node.ext_attrs);
            write_marker(out, &node.readonly);
            push(out, &node.trivia.base, keyword);
            push(out, &node.trivia.open, "<");
            for inner in &node.types {
                write_type(out, inner);
            }
            push(out, &node.trivia.close, ">");
            push(out, &node.trivia.termination, ";");
        }
        Member::Stringifier(node) => {
            write_ext_attrs(out, &node.ext_attrs);
            push(out, &node.trivia.base, "stringifier");
            push(out, &node.trivia.termination, ";");
        }
    }
}

fn write_type(out: &mut String, parsed: &Type) {
    write_ext_attrs(out, &parsed.ext_attrs);
    if parsed.union {
        push(out, parsed.trivia.open.as_deref().unwrap_or(""), "(");
        if let TypeKind::Compound(alternatives) = &parsed.idl_type {
            for alternative in alternatives {
                write_type(out, alternative);
            }
        }
        push(out, parsed.trivia.close.as_deref().unwrap_or(""), ")");
    } else if parsed.generic.is_some() {
        push(
            out,
            parsed.trivia.base.as_deref().unwrap_or(""),
            parsed.base_name.as_deref().unwrap_or(""),
        );
        push(out, parsed.trivia.open.as_deref().unwrap_or(""), "<");
        if let TypeKind::Compound(arguments) = &parsed.idl_type {
            for argument in arguments {
                write_type(out, argument);
            }
        }
        push(out, parsed.trivia.close.as_deref().unwrap_or(""), ">");
    } else {
        write_marker(out, &parsed.prefix);
        push(
            out,
            parsed.trivia.base.as_deref().unwrap_or(""),
            parsed.base_name.as_deref().unwrap_or(""),
        );
        write_marker(out, &parsed.postfix);
    }
    write_marker(out, &parsed.nullable);
    write_separator(out, &parsed.separator);
}

fn write_argument(out: &mut String, argument: &Argument) {
    write_ext_attrs(out, &argument.ext_attrs);
    write_marker(out, &argument.optional);
    write_type(out, &argument.idl_type);
    write_marker(out, &argument.variadic);
    push(out, &argument.trivia.name, &argument.escaped_name);
    write_default(out, &argument.default);
    write_separator(out, &argument.separator);
}

fn write_ext_attrs(out: &mut String, ext_attrs: &Option<ExtendedAttributes>) {
    let Some(ext_attrs) = ext_attrs else { return };
    push(out, &ext_attrs.trivia.open, "[");
    for item in &ext_attrs.items {
        push(out, &item.trivia.name, &item.name);
        match &item.rhs {
            Some(ExtAttrRhs::Token(rhs)) => {
                push(out, &rhs.trivia.assign, "=");
                push(out, &rhs.trivia.value, &rhs.value);
            }
            Some(ExtAttrRhs::IdentifierList(rhs)) => {
                push(out, &rhs.trivia.assign, "=");
                push(out, &rhs.trivia.open, "(");
                for identifier in &rhs.items {
                    push(out, &identifier.trivia, &identifier.value);
                    write_separator(out, &identifier.separator);
                }
                push(out, &rhs.trivia.close, ")");
            }
            None => {}
        }
        if let Some(arguments) = &item.arguments {
            push(out, item.trivia.open.as_deref().unwrap_or(""), "(");
            for argument in arguments {
                write_argument(out, argument);
            }
            push(out, item.trivia.close.as_deref().unwrap_or(""), ")");
        }
        write_separator(out, &item.separator);
    }
    push(out, &ext_attrs.trivia.close, "]");
}

fn write_inheritance(out: &mut String, inheritance: &Option<Inheritance>) {
    let Some(inheritance) = inheritance else { return };
    push(out, &inheritance.trivia.colon, ":");
    push(out, &inheritance.trivia.name, &inheritance.escaped_name);
}

fn write_default(out: &mut String, default: &Option<DefaultValue>) {
    let Some(default) = default else { return };
    push(out, &default.trivia.assign, "=");
    match &default.kind {
        DefaultKind::Const(value) => write_const_value(out, value),
        DefaultKind::String { value, trivia } => {
            out.push_str(trivia);
            out.push('"');
            out.push_str(value);
            out.push('"');
        }
        DefaultKind::EmptySequence { open, close } => {
            push(out, open, "[");
            push(out, close, "]");
        }
    }
}

fn write_const_value(out: &mut String, value: &ConstValueNode) {
    out.push_str(&value.trivia);
    out.push_str(value.value.text());
}

fn write_marker(out: &mut String, marker: &Option<Marker>) {
    if let Some(marker) = marker {
        push(out, &marker.trivia, &marker.value);
    }
}

fn write_separator(out: &mut String, separator: &Option<Separator>) {
    if let Some(separator) = separator {
        push(out, &separator.trivia, &separator.value);
    }
}

fn push(out: &mut String, trivia: &str, text: &str) {
    out.push_str(trivia);
    out.push_str(text);
}
