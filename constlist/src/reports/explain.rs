//! Explain report data structures.

use std::path::PathBuf;

use constlist_codegen::{Diagnostic, SpecTrace};
use serde::Serialize;

use super::output::{Output, Report};

/// How every constant spec of one file was resolved.
#[derive(Debug, Serialize)]
pub struct ExplainReport {
    pub source: PathBuf,
    pub package: String,
    pub target_type: String,
    /// One entry per constant spec, in source order.
    pub specs: Vec<SpecTrace>,
    /// Names that would be listed.
    pub matches: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ExplainReport {
    fn describe(spec: &SpecTrace) -> String {
        let mut names = spec.name.clone();
        for extra in &spec.extra_names {
            names.push_str(", ");
            names.push_str(extra);
        }

        let effective = spec.effective_type.as_deref().unwrap_or("untyped");
        let marker = if spec.matched { " (listed)" } else { "" };

        format!(
            "{} {}: {} -> {}{}",
            spec.location, names, spec.transition, effective, marker
        )
    }
}

impl Report for ExplainReport {
    fn render(&self, out: &mut dyn Output) {
        out.title("Constant Type Resolution");
        out.newline();

        out.key_value("Source", &self.source.display().to_string());
        out.key_value("Package", &self.package);
        out.key_value("Type", &self.target_type);
        out.newline();

        let mut current_group = None;
        for spec in &self.specs {
            if current_group != Some(spec.group) {
                if current_group.is_some() {
                    out.newline();
                }
                out.section(&format!("Group {}", spec.group + 1));
                current_group = Some(spec.group);
            }
            out.list_item(&Self::describe(spec));
        }
        if current_group.is_some() {
            out.newline();
        }

        if self.matches.is_empty() {
            out.key_value("Listed", "(none)");
        } else {
            out.key_value("Listed", &self.matches.join(", "));
        }

        for diag in &self.diagnostics {
            out.diagnostic(&diag.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::{ops, reports::output::BufferOutput};

    fn report(src: &str, type_name: &str) -> ExplainReport {
        let file = constlist_syntax::parse_str(src, "p.go").unwrap();
        ops::explain(&file, Path::new("p.go"), type_name)
    }

    #[test]
    fn test_render_groups_and_matches() {
        let report = report(
            "package p\n\nconst (\n\tA T = 1\n\tB, C\n)\n\nconst D = 2\n",
            "T",
        );

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.stdout,
            vec![
                "Constant Type Resolution",
                "",
                "Source: p.go",
                "Package: p",
                "Type: T",
                "",
                "Group 1:",
                "- 4:2 A: explicit -> T (listed)",
                "- 5:2 B, C: inherited -> T (listed)",
                "",
                "Group 2:",
                "- 8:7 D: reset -> untyped",
                "",
                "Listed: A, B",
            ]
        );
        assert_eq!(
            out.stderr,
            vec!["warning: spec binds 2 names; only B is listed (at 5:2)"]
        );
    }

    #[test]
    fn test_render_without_matches() {
        let report = report("package p\n", "T");

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(out.stdout.last().map(String::as_str), Some("Listed: (none)"));
        assert_eq!(out.stderr, vec!["info: no constants of type T found"]);
    }
}
