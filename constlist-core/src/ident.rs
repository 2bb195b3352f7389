//! Validation utilities for Go identifiers

/// Go reserved keywords that cannot be used as identifiers
/// Source: https://go.dev/ref/spec#Keywords
pub const GO_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// The blank identifier.
pub const BLANK: &str = "_";

/// Check if a name is a Go reserved keyword
pub fn is_go_keyword(name: &str) -> bool {
    GO_KEYWORDS.contains(&name)
}

/// Whether `c` may start a Go identifier.
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// Whether `c` may continue a Go identifier.
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Validate that a name can be referenced as a Go identifier.
/// Returns None if valid, Some(reason) if invalid
///
/// The blank identifier is rejected: it declares nothing that could be
/// referenced from generated code.
pub fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if !is_ident_start(c) => {
            return Some("name must start with a letter or underscore");
        }
        Some(_) => {}
    }

    if !chars.all(is_ident_continue) {
        return Some("name must contain only letters, digits, and underscores");
    }

    if name == BLANK {
        return Some("the blank identifier cannot be referenced");
    }

    if is_go_keyword(name) {
        return Some("name is a Go reserved keyword");
    }

    None
}
