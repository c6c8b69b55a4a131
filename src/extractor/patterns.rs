//! Declaration matcher
//!
//! The matcher is assembled from independent sub-patterns joined by ordered
//! alternation: method signature first, then enum declaration, then generic
//! attribute. Each alternative owns its capture groups (`method_*`, `enum_*`,
//! `attribute_*`) so a match says unambiguously which shape it is.
//!
//! The `regex` crate has neither look-around nor back-references, so the parts
//! of the grammar that need them (doc block above, hide marker, block end) are
//! handled by the scanner instead.

use std::sync::LazyLock;

use regex::Regex;

/// Access modifiers. A declaration without one of these never matches.
const VISIBILITY: &str = r"(?P<visibility>public|private|protected)";

/// Optional `static`, kept apart from the other modifiers.
const STATIC: &str = r"(?P<static>static[ \t]+)?";

/// Member modifiers that may sit between visibility/static and the type.
const MODIFIERS: &str = r"(?P<modifiers>(?:(?:ref|readonly|const|virtual|override|abstract|async|sealed|new|extern|unsafe|volatile|event|partial|required)[ \t]+)*)";

/// A type: dotted name, optional generic arguments, array ranks, nullable mark.
/// Identifiers may start with any Unicode letter.
const TYPE: &str = r"[\p{L}_][\w.]*(?:<[^()=;{}\n]*>)?(?:\[[, \t]*\])*\??";

/// A member name.
const NAME: &str = r"[\p{L}_]\w*";

/// An indexer name with its bracketed parameter list.
const INDEXER: &str = r"this[ \t]*\[[^\]\n]*\]";

/// A method name: identifier with optional generic parameters, or an operator.
const METHOD_NAME: &str = r"operator[ \t]*[^\s(]+|[\p{L}_]\w*(?:<[^()\n]*?>)?";

/// Parameter list on one line, allowing one level of nested parentheses.
const PARAMS: &str = r"\((?:[^()\n]|\([^()\n]*\))*\)";

/// Keywords that start a type definition. A match whose type slot holds one
/// of these is a type, not a member, and is rejected.
pub const TYPE_DEFINITION_KEYWORDS: &[&str] = &[
    "class",
    "struct",
    "interface",
    "record",
    "delegate",
    "namespace",
];

fn method_alternative() -> String {
    format!(
        r"(?P<method>(?P<method_type>{TYPE})[ \t]+(?P<method_name>{METHOD_NAME})[ \t]*(?:(?P<method_params>{PARAMS})|=>(?P<method_expr>[^\n]*)))"
    )
}

fn enum_alternative() -> String {
    format!(r"(?P<enum>enum[ \t]+(?P<enum_name>{NAME}))")
}

fn attribute_alternative() -> String {
    format!(r"(?P<attribute>(?P<attribute_type>{TYPE})[ \t]+(?P<attribute_name>{INDEXER}|{NAME}))")
}

/// Assemble the full declaration pattern.
///
/// Pure: the same rules always give the same pattern text.
pub fn declaration_pattern() -> String {
    format!(
        r"(?m)^(?P<indent>[ \t]*){VISIBILITY}[ \t]+{STATIC}{MODIFIERS}(?:{}|{}|{})",
        method_alternative(),
        enum_alternative(),
        attribute_alternative(),
    )
}

/// The compiled declaration matcher, shared by every scan in the process.
pub static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&declaration_pattern()).expect("DECLARATION regex is invalid")
});

/// A brace pair closing on the same line, greedy to the last `}`.
pub static SAME_LINE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ \t]*\{(?P<content>.*)\}").expect("SAME_LINE_BLOCK regex is invalid")
});

/// Runs of whitespace, including newlines.
pub static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE regex is invalid"));

/// Whether `type_token` opens a type definition rather than a member.
pub fn is_type_definition(type_token: &str) -> bool {
    TYPE_DEFINITION_KEYWORDS.contains(&type_token)
}
