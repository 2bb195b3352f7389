//! Token types for Go source.
//!
//! Tokens are the output of the lexer and input to the parser.

use std::fmt;

use crate::span::Span;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// The kind of this token.
    pub kind: TokenKind,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns the text this token covers in the given source.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }

    /// Returns true if this token opens a delimited run.
    #[must_use]
    pub const fn is_open_delimiter(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace
        )
    }

    /// Returns true if this token closes a delimited run.
    #[must_use]
    pub const fn is_close_delimiter(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace
        )
    }

    /// Returns true for names, keywords and literals.
    ///
    /// Used when re-assembling type text: two adjacent word-like tokens need a
    /// separating space.
    #[must_use]
    pub const fn is_word(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Ident
                | TokenKind::Keyword(_)
                | TokenKind::Int
                | TokenKind::Float
                | TokenKind::Imag
                | TokenKind::Char
                | TokenKind::String
        )
    }
}

/// Token kinds for Go source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// An identifier.
    Ident,
    /// A reserved keyword.
    Keyword(Keyword),

    // Literals
    /// Integer literal.
    Int,
    /// Floating-point literal.
    Float,
    /// Imaginary literal.
    Imag,
    /// Rune literal.
    Char,
    /// Interpreted or raw string literal.
    String,

    // Delimiters
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `=`
    Assign,
    /// `;`, either written or inserted at a line end.
    Semicolon {
        /// True when the semicolon was inserted automatically.
        inserted: bool,
    },
    /// `++`
    Inc,
    /// `--`
    Dec,
    /// Any other operator or punctuation.
    Operator,

    /// End of input.
    Eof,
}

impl TokenKind {
    /// Whether a newline directly after this token inserts a semicolon.
    #[must_use]
    pub const fn ends_statement(&self) -> bool {
        match self {
            TokenKind::Ident
            | TokenKind::Int
            | TokenKind::Float
            | TokenKind::Imag
            | TokenKind::Char
            | TokenKind::String
            | TokenKind::Inc
            | TokenKind::Dec
            | TokenKind::RParen
            | TokenKind::RBracket
            | TokenKind::RBrace => true,
            TokenKind::Keyword(kw) => matches!(
                kw,
                Keyword::Break | Keyword::Continue | Keyword::Fallthrough | Keyword::Return
            ),
            _ => false,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Ident => write!(f, "identifier"),
            TokenKind::Keyword(kw) => write!(f, "keyword {}", kw.as_str()),
            TokenKind::Int
            | TokenKind::Float
            | TokenKind::Imag
            | TokenKind::Char
            | TokenKind::String => write!(f, "literal"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::LBracket => write!(f, "'['"),
            TokenKind::RBracket => write!(f, "']'"),
            TokenKind::LBrace => write!(f, "'{{'"),
            TokenKind::RBrace => write!(f, "'}}'"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::Dot => write!(f, "'.'"),
            TokenKind::Assign => write!(f, "'='"),
            TokenKind::Semicolon { inserted: true } => write!(f, "newline"),
            TokenKind::Semicolon { inserted: false } => write!(f, "';'"),
            TokenKind::Inc => write!(f, "'++'"),
            TokenKind::Dec => write!(f, "'--'"),
            TokenKind::Operator => write!(f, "operator"),
            TokenKind::Eof => write!(f, "EOF"),
        }
    }
}

/// Go keywords.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    Break,
    Case,
    Chan,
    Const,
    Continue,
    Default,
    Defer,
    Else,
    Fallthrough,
    For,
    Func,
    Go,
    Goto,
    If,
    Import,
    Interface,
    Map,
    Package,
    Range,
    Return,
    Select,
    Struct,
    Switch,
    Type,
    Var,
}

impl Keyword {
    /// Look up the keyword spelled `word`.
    pub fn from_word(word: &str) -> Option<Self> {
        let kw = match word {
            "break" => Self::Break,
            "case" => Self::Case,
            "chan" => Self::Chan,
            "const" => Self::Const,
            "continue" => Self::Continue,
            "default" => Self::Default,
            "defer" => Self::Defer,
            "else" => Self::Else,
            "fallthrough" => Self::Fallthrough,
            "for" => Self::For,
            "func" => Self::Func,
            "go" => Self::Go,
            "goto" => Self::Goto,
            "if" => Self::If,
            "import" => Self::Import,
            "interface" => Self::Interface,
            "map" => Self::Map,
            "package" => Self::Package,
            "range" => Self::Range,
            "return" => Self::Return,
            "select" => Self::Select,
            "struct" => Self::Struct,
            "switch" => Self::Switch,
            "type" => Self::Type,
            "var" => Self::Var,
            _ => return None,
        };
        Some(kw)
    }

    /// The keyword as written in source.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Break => "break",
            Self::Case => "case",
            Self::Chan => "chan",
            Self::Const => "const",
            Self::Continue => "continue",
            Self::Default => "default",
            Self::Defer => "defer",
            Self::Else => "else",
            Self::Fallthrough => "fallthrough",
            Self::For => "for",
            Self::Func => "func",
            Self::Go => "go",
            Self::Goto => "goto",
            Self::If => "if",
            Self::Import => "import",
            Self::Interface => "interface",
            Self::Map => "map",
            Self::Package => "package",
            Self::Range => "range",
            Self::Return => "return",
            Self::Select => "select",
            Self::Struct => "struct",
            Self::Switch => "switch",
            Self::Type => "type",
            Self::Var => "var",
        }
    }
}
