//! Round-trip and idempotence laws.
//!
//! Every token carries the trivia that preceded it, so regenerating a
//! parsed tree in document order must reproduce the source byte-for-byte,
//! and reparsing the regenerated text must yield a structurally identical
//! tree.

mod common;

use common::write;
use proptest::prelude::*;
use webidl_parser::parse;

fn assert_roundtrip(source: &str) {
    let definitions = parse(source).expect("Parse should succeed");
    assert_eq!(write(&definitions), source, "regenerated source must match");
}

fn assert_idempotent(source: &str) {
    let first = parse(source).expect("Parse should succeed");
    let regenerated = write(&first);
    let second = parse(&regenerated).expect("Reparse should succeed");
    assert_eq!(first, second, "reparsing regenerated source must not drift");
}

#[test]
fn test_roundtrip_empty_and_whitespace() {
    assert_roundtrip("");
    assert_roundtrip("   \t\n  ");
    assert_roundtrip("// only a comment\n/* and another */");
}

#[test]
fn test_roundtrip_simple_interface() {
    assert_roundtrip("interface Foo { };");
    assert_roundtrip("interface Foo:Bar{attribute long x;};");
    assert_roundtrip("  interface  Foo \n {\n  };  // tail\n");
}

#[test]
fn test_roundtrip_kitchen_sink() {
    let source = r#"// kitchen sink
[Exposed=Window, Global=(Window,Worker)]
interface _Node : EventTarget {
  const unsigned long long MAX = 0xFF;
  const double RATIO = -1.5e3;
  const float NEG = -Infinity;
  const boolean FLAG = true;
  const octet ZERO = 0; /* inline */
  readonly attribute DOMString? name;
  inherit attribute long size;
  static attribute long count;
  static void reset();
  stringifier attribute DOMString label;
  stringifier;
  getter Item (unsigned long index);
  setter void (unsigned long index, Item value);
  deleter void (unsigned long index);
  void draw(Canvas target, optional double scale = 1.0, long... rest);
  iterable<long>;
  readonly maplike<DOMString, sequence<long>>;
};

dictionary Options : BaseOptions {
  required [EnforceRange] long count;
  DOMString mode = "auto";
  sequence<long> seeds = [];
  any extra = null;
};

enum Mode {
  "auto", // the default
  "manual",
};

typedef [EnforceRange] (DOMString or sequence<long> or FrozenArray<Item?>) Thing;
typedef record<ByteString, long> Counters;

callback Done = void (optional DOMString reason = "ok");
callback interface Listener { void handle(Event e); };

interface mixin Extras {
  const short S = 7;
  stringifier;
  readonly attribute DOMString tag;
  void run();
};

namespace Utils {
  readonly attribute double unit;
  double dot(double a, double b);
};

partial interface _Node { attribute long extra; };
Window includes Extras;
/* trailing comment */"#;
    assert_roundtrip(source);
    assert_idempotent(source);
}

#[test]
fn test_roundtrip_named_constructor_form() {
    assert_roundtrip("[NamedConstructor=Audio(DOMString src)] interface Audio2 { };");
}

#[test]
fn test_roundtrip_escaped_names() {
    assert_roundtrip("interface _interface { attribute _long _x; };");
    assert_roundtrip("typedef _Foo _Bar;");
}

#[test]
fn test_roundtrip_promise_and_unions() {
    assert_roundtrip("interface I { Promise<void> wait(); };");
    assert_roundtrip("typedef ((long or DOMString) or sequence<(double or ByteString)>) Deep;");
}

#[test]
fn test_roundtrip_preserves_odd_spacing() {
    assert_roundtrip("interface/*x*/Foo/*y*/{/*z*/}/*w*/;");
    assert_roundtrip("enum\tE\t{\t\"a\"\t,\t\"b\"\t}\t;");
    assert_roundtrip("A\n\nincludes\n\nB\n\n;");
}

#[test]
fn test_idempotence_simple_cases() {
    for source in [
        "interface Foo { };",
        "dictionary D { required long x; };",
        "enum E { \"a\", \"b\" };",
        "typedef (DOMString or long) StrOrInt;",
        "A includes B;",
    ] {
        assert_idempotent(source);
    }
}

proptest! {
    /// Generated flat fragments always round-trip.
    #[test]
    fn prop_generated_fragments_roundtrip(
        // initial letters chosen so no reserved terminal can be generated
        name in "N[a-z0-9]{0,8}",
        member in "q[a-z0-9]{0,8}",
        pad in "[ \\t\\n]{0,5}",
    ) {
        let source = format!(
            "interface {name} {{{pad}attribute long {member};{pad}}};{pad}"
        );
        let definitions = parse(&source).expect("Parse should succeed");
        prop_assert_eq!(write(&definitions), source);
    }
}
