//! Renderable trait and CodeFragment.
//!
//! Go syntax nodes describe themselves as fragments; [`CodeBuilder`]
//! turns fragments into indented text.
//!
//! [`CodeBuilder`]: super::CodeBuilder

/// A fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A blank line, never indented.
    Blank,
    /// A header line, a body indented one level, and an optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// Fragments applied in order at the current indentation.
    Sequence(Vec<CodeFragment>),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }
}

/// A node that can be lowered into code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}
