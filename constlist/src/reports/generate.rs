//! Generate report data structures.

use std::path::PathBuf;

use constlist_codegen::Diagnostic;

use super::output::{Output, Report};

/// Outcome of writing one list.
#[derive(Debug)]
pub struct GenerateReport {
    /// Name of the generated Go function.
    pub function_name: String,
    /// Number of listed constants.
    pub count: usize,
    /// File written, `None` when printed to stdout.
    pub destination: Option<PathBuf>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Report for GenerateReport {
    // Stdout may carry the generated code, so only diagnostics are rendered.
    fn render(&self, out: &mut dyn Output) {
        for diag in &self.diagnostics {
            out.diagnostic(&diag.to_string());
        }
    }
}
