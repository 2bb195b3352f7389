//! A whole Go source file.

use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// Header comment lines, a package clause, and top-level items separated
/// by one blank line each.
#[derive(Debug, Clone)]
pub struct GoFile {
    header: Vec<String>,
    package: String,
    items: Vec<Vec<CodeFragment>>,
}

impl GoFile {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            header: Vec::new(),
            package: package.into(),
            items: Vec::new(),
        }
    }

    /// Lines written verbatim above the package clause.
    pub fn header<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Append a top-level item.
    pub fn item(mut self, node: impl Renderable) -> Self {
        self.items.push(node.to_fragments());
        self
    }

    /// Render the file.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for GoFile {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> =
            self.header.iter().cloned().map(CodeFragment::Line).collect();
        fragments.push(CodeFragment::line(format!("package {}", self.package)));

        for item in &self.items {
            fragments.push(CodeFragment::Blank);
            fragments.push(CodeFragment::Sequence(item.clone()));
        }

        fragments
    }
}
