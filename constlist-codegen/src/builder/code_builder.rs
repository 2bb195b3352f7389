//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Renderable};

/// One indentation level; `gofmt` only accepts tabs.
const INDENT: &str = "\t";

/// Applies code fragments to a buffer, tracking indentation.
///
/// # Example
///
/// ```
/// use constlist_codegen::builder::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::new();
/// builder.apply_fragment(CodeFragment::Block {
///     header: "func main() {".to_string(),
///     body: vec![CodeFragment::line("println(\"hello\")")],
///     close: Some("}".to_string()),
/// });
///
/// assert_eq!(builder.build(), "func main() {\n\tprintln(\"hello\")\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_is_not_indented() {
        let mut builder = CodeBuilder::new();
        builder
            .push_indent()
            .push_line("list := []Color{}")
            .push_blank()
            .push_line("return list");

        assert_eq!(builder.build(), "\tlist := []Color{}\n\n\treturn list\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::new();
        builder.push_dedent().push_line("package p");
        assert_eq!(builder.build(), "package p\n");
    }

    #[test]
    fn test_emit_nested_blocks() {
        struct Node;
        impl Renderable for Node {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::Block {
                    header: "func F() {".to_string(),
                    body: vec![CodeFragment::Block {
                        header: "if ok {".to_string(),
                        body: vec![CodeFragment::line("return")],
                        close: Some("}".to_string()),
                    }],
                    close: Some("}".to_string()),
                }]
            }
        }

        let mut builder = CodeBuilder::new();
        builder.emit(&Node);
        assert_eq!(
            builder.build(),
            "func F() {\n\tif ok {\n\t\treturn\n\t}\n}\n"
        );
    }

    #[test]
    fn test_sequence_keeps_indentation() {
        let mut builder = CodeBuilder::new();
        builder.push_indent().apply_fragment(CodeFragment::Sequence(vec![
            CodeFragment::line("a"),
            CodeFragment::Blank,
            CodeFragment::line("b"),
        ]));
        assert_eq!(builder.build(), "\ta\n\n\tb\n");
    }
}
