//! Explain operation - show how constant types were resolved.

use std::path::Path;

use constlist_codegen::Scanner;
use constlist_syntax::SourceFile;

use crate::reports::ExplainReport;

/// Resolve every constant spec in `file` against `type_name`.
pub fn explain(file: &SourceFile, source: &Path, type_name: &str) -> ExplainReport {
    let scanner = Scanner::new(type_name);
    let scan = scanner.scan(file);

    ExplainReport {
        source: source.to_path_buf(),
        package: file.package.name.clone(),
        target_type: type_name.to_string(),
        specs: scanner.explain(file),
        matches: scan.names,
        diagnostics: scan.diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explain_collects_specs_and_matches() {
        let file = constlist_syntax::parse_str(
            "package p\n\nconst (\n\tA T = 1\n\tB\n\tC = 2\n)\n",
            "p.go",
        )
        .unwrap();

        let report = explain(&file, Path::new("p.go"), "T");

        assert_eq!(report.package, "p");
        assert_eq!(report.specs.len(), 3);
        assert_eq!(report.matches, vec!["A", "B"]);
        assert!(report.diagnostics.is_empty());
    }
}
