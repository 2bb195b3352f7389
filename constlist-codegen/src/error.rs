use miette::Diagnostic;
use thiserror::Error;

/// Result type for rendering (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Which user-supplied name failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Package,
    Type,
}

impl std::fmt::Display for NameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameKind::Package => write!(f, "package"),
            NameKind::Type => write!(f, "type"),
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("invalid {kind} name '{name}': {reason}")]
    #[diagnostic(
        code(constlist::invalid_identifier),
        help("{kind} names must be Go identifiers: a letter or underscore followed by letters, digits or underscores, not a keyword")
    )]
    InvalidIdentifier {
        kind: NameKind,
        name: String,
        reason: &'static str,
    },
}

impl Error {
    pub fn invalid_identifier(kind: NameKind, name: &str, reason: &'static str) -> Box<Self> {
        Box::new(Self::InvalidIdentifier {
            kind,
            name: name.to_string(),
            reason,
        })
    }
}
