//! Declaration scanner.
//!
//! Collects, in source order, the first name of every constant spec whose
//! effective type is the target type.

mod resolve;

use constlist_syntax::SourceFile;
use serde::Serialize;

pub use resolve::{EffectiveType, Resolution, Transition, resolve_file, resolve_group};

use crate::diagnostic::Diagnostic;

/// Names of the matched constants, plus what the scan noticed on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub names: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ScanReport {
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// How one constant spec was resolved, for `--explain`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecTrace {
    pub group: usize,
    pub name: String,
    /// Names bound after the first one.
    pub extra_names: Vec<String>,
    pub location: String,
    pub transition: Transition,
    /// `None` when the spec is untyped.
    pub effective_type: Option<String>,
    pub matched: bool,
}

/// Scans a parsed file for constants of one type.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'t> {
    target: &'t str,
}

impl<'t> Scanner<'t> {
    pub fn new(target: &'t str) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &str {
        self.target
    }

    /// Collect matching names in declaration order.
    pub fn scan(&self, file: &SourceFile) -> ScanReport {
        let mut report = ScanReport::default();

        for resolution in resolve_file(file) {
            if !resolution.effective.is(self.target) {
                continue;
            }

            let spec = resolution.spec;
            let first = spec.first_name();
            let location = first.span.location();

            if first.is_blank() {
                report.diagnostics.push(
                    Diagnostic::info(format!(
                        "blank constant of type {} is not listed",
                        self.target
                    ))
                    .at(location),
                );
                continue;
            }

            if spec.names.len() > 1 {
                report.diagnostics.push(
                    Diagnostic::warning(format!(
                        "spec binds {} names; only {} is listed",
                        spec.names.len(),
                        first.name
                    ))
                    .at(location),
                );
            }

            report.names.push(first.name.clone());
        }

        if report.names.is_empty() {
            report.diagnostics.push(Diagnostic::info(format!(
                "no constants of type {} found",
                display_target(self.target)
            )));
        }

        tracing::debug!(
            target_type = self.target,
            matches = report.names.len(),
            diagnostics = report.diagnostics.len(),
            "scanned constants"
        );
        report
    }

    /// Describe how every constant spec was resolved.
    pub fn explain(&self, file: &SourceFile) -> Vec<SpecTrace> {
        resolve_file(file)
            .into_iter()
            .map(|r| {
                let first = r.spec.first_name();
                SpecTrace {
                    group: r.group,
                    name: first.name.clone(),
                    extra_names: r.spec.names[1..].iter().map(|n| n.name.clone()).collect(),
                    location: first.span.location(),
                    transition: r.transition,
                    effective_type: r.effective.name().map(str::to_string),
                    matched: r.effective.is(self.target) && !first.is_blank(),
                }
            })
            .collect()
    }
}

fn display_target(target: &str) -> &str {
    if target.is_empty() { "\"\"" } else { target }
}

/// Names of the constants in `file` whose effective type is `target`.
pub fn scan(file: &SourceFile, target: &str) -> Vec<String> {
    Scanner::new(target).scan(file).names
}

#[cfg(test)]
mod tests {
    use constlist_syntax::parse_str;

    use super::*;
    use crate::diagnostic::Severity;

    fn parse(src: &str) -> SourceFile {
        parse_str(src, "test.go").unwrap()
    }

    #[test]
    fn test_explicit_types_only() {
        let file = parse(
            "package p\n\nconst (\n\tA Color = 1\n\tB Shape = 2\n\tC Color = 3\n)\n",
        );
        assert_eq!(scan(&file, "Color"), vec!["A", "C"]);
        assert_eq!(scan(&file, "Shape"), vec!["B"]);
    }

    #[test]
    fn test_iota_propagation() {
        let file = parse("package colors\n\nconst (\n\tRed Color = iota\n\tGreen\n\tBlue\n)\n");
        assert_eq!(scan(&file, "Color"), vec!["Red", "Green", "Blue"]);
    }

    #[test]
    fn test_propagation_reset() {
        let file = parse("package p\nconst (\n\tA T = 1\n\tB = 2\n\tC\n)\n");
        assert_eq!(scan(&file, "T"), vec!["A"]);
    }

    #[test]
    fn test_no_leak_across_groups() {
        let file = parse("package p\nconst (\n\tA T = iota\n\tB\n)\n\nconst (\n\tC = 5\n\tD\n)\n");
        assert_eq!(scan(&file, "T"), vec!["A", "B"]);
    }

    #[test]
    fn test_single_const_declarations() {
        let file = parse("package p\nconst A T = 1\nconst B = 2\nconst C T = 3\n");
        assert_eq!(scan(&file, "T"), vec!["A", "C"]);
    }

    #[test]
    fn test_unknown_type_is_empty() {
        let file = parse("package p\nconst (\n\tA T = 1\n)\n");
        let report = Scanner::new("Missing").scan(&file);

        assert!(report.is_empty());
        assert_eq!(
            report.diagnostics,
            vec![Diagnostic::info("no constants of type Missing found")]
        );
    }

    #[test]
    fn test_empty_target_never_matches() {
        let file = parse("package p\nconst (\n\tA = 1\n\tB\n)\n");
        let report = Scanner::new("").scan(&file);
        assert!(report.is_empty());
        assert_eq!(
            report.diagnostics[0].message,
            "no constants of type \"\" found"
        );
    }

    #[test]
    fn test_qualified_and_composite_types() {
        let file = parse(
            "package p\nimport \"time\"\nconst (\n\tA time.Duration = 1\n\tB\n\tC Color = 2\n)\n",
        );
        assert_eq!(scan(&file, "time.Duration"), vec!["A", "B"]);
        assert!(scan(&file, "Duration").is_empty());
    }

    #[test]
    fn test_parenthesized_type_matches() {
        let file = parse("package p\nconst (\n\tA (C) = 1\n\tB\n\tD ((C)) = 2\n)\n");
        assert_eq!(scan(&file, "C"), vec!["A", "B", "D"]);
    }

    #[test]
    fn test_other_declarations_do_not_interfere() {
        let file = parse(
            "package p\n\ntype Color int\n\nvar X Color = 1\n\nfunc (c Color) String() string { return \"\" }\n\nconst (\n\tRed Color = iota\n\tGreen\n)\n",
        );
        assert_eq!(scan(&file, "Color"), vec!["Red", "Green"]);
    }

    #[test]
    fn test_blank_constant_is_skipped_but_propagates() {
        let file = parse("package p\nconst (\n\t_ Color = iota\n\tRed\n\tGreen\n)\n");
        let report = Scanner::new("Color").scan(&file);

        assert_eq!(report.names, vec!["Red", "Green"]);
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.diagnostics[0].severity, Severity::Info);
        assert_eq!(report.diagnostics[0].location.as_deref(), Some("3:2"));
    }

    #[test]
    fn test_multiple_names_warn_and_keep_first() {
        let file = parse("package p\nconst (\n\tA, B Color = 1, 2\n\tC, D\n)\n");
        let report = Scanner::new("Color").scan(&file);

        assert_eq!(report.names, vec!["A", "C"]);
        assert_eq!(report.diagnostics.len(), 2);
        assert!(report.diagnostics.iter().all(|d| d.severity.is_warning()));
        assert_eq!(
            report.diagnostics[0].message,
            "spec binds 2 names; only A is listed"
        );
    }

    #[test]
    fn test_scan_is_deterministic() {
        let file = parse("package p\nconst (\n\tA T = iota\n\tB\n\tC\n)\n");
        assert_eq!(scan(&file, "T"), scan(&file, "T"));
    }

    #[test]
    fn test_explain_traces_every_spec() {
        let file = parse("package p\nconst (\n\tA T = 1\n\tB, C\n\tD = 2\n)\n");
        let traces = Scanner::new("T").explain(&file);

        assert_eq!(traces.len(), 3);
        assert_eq!(traces[0].transition, Transition::Explicit);
        assert!(traces[0].matched);
        assert_eq!(traces[1].extra_names, vec!["C"]);
        assert_eq!(traces[1].effective_type.as_deref(), Some("T"));
        assert_eq!(traces[1].location, "4:2");
        assert_eq!(traces[2].transition, Transition::Reset);
        assert_eq!(traces[2].effective_type, None);
        assert!(!traces[2].matched);
    }
}
