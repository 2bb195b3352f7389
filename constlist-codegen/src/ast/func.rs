//! Go function declaration builder.

use crate::builder::{CodeFragment, Renderable};

/// Builder for parameterless top-level Go functions.
///
/// Body entries are fragments so statements can be separated by blank
/// lines the way `gofmt` keeps them.
#[derive(Debug, Clone)]
pub struct Func {
    name: String,
    result: Option<String>,
    body: Vec<CodeFragment>,
}

impl Func {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            result: None,
            body: Vec::new(),
        }
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.result = Some(ty.into());
        self
    }

    /// Add a statement line to the body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::Line(line.into()));
        self
    }

    /// Add an empty line between body statements.
    pub fn body_blank(mut self) -> Self {
        self.body.push(CodeFragment::Blank);
        self
    }

    fn signature(&self) -> String {
        match &self.result {
            Some(result) => format!("func {}() {} {{", self.name, result),
            None => format!("func {}() {{", self.name),
        }
    }
}

impl Renderable for Func {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Block {
            header: self.signature(),
            body: self.body.clone(),
            close: Some("}".to_string()),
        }]
    }
}
