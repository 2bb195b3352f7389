//! Generate operation - scan, render and route the list.

use std::{io::Write, path::Path};

use constlist_codegen::{ConstList, Diagnostic, ListFile, OutputTarget, Scanner, output::source_dir};
use constlist_core::GeneratedFile;
use constlist_syntax::SourceFile;
use eyre::{Context, Result};

use crate::reports::GenerateReport;

/// Options resolved from the command line.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub type_name: String,
    pub output: OutputTarget,
}

/// A validated list waiting for its destination.
#[derive(Debug)]
pub struct Generation {
    list: ConstList,
    diagnostics: Vec<Diagnostic>,
}

/// Scan `file` and validate the names the document is built from.
///
/// Fails with a render error when the package or type name is not a
/// usable Go identifier. Nothing has been written at that point.
pub fn prepare(file: &SourceFile, options: &GenerateOptions) -> constlist_codegen::Result<Generation> {
    let report = Scanner::new(&options.type_name).scan(file);
    let list = ConstList::new(&file.package.name, &options.type_name, report.names)?;

    Ok(Generation {
        list,
        diagnostics: report.diagnostics,
    })
}

/// Write a prepared list to standard output or next to `source`.
pub fn generate(
    generation: Generation,
    source: &Path,
    options: &GenerateOptions,
) -> Result<GenerateReport> {
    let Generation { list, diagnostics } = generation;

    let destination = match options.output.file_name(list.type_name()) {
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(list.render().as_bytes())
                .and_then(|()| stdout.flush())
                .wrap_err("failed to write to stdout")?;
            None
        }
        Some(file_name) => {
            let path = ListFile::new(&list, file_name)
                .write(source_dir(source))
                .wrap_err("failed to write generated list")?;
            Some(path)
        }
    };

    Ok(GenerateReport {
        function_name: list.function_name(),
        count: list.names().len(),
        destination,
        diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use constlist_codegen::Error;
    use tempfile::TempDir;

    use super::*;

    const COLORS: &str = "package colors\n\nconst (\n\tRed Color = iota\n\tGreen\n\tBlue\n)\n";

    fn options(type_name: &str, output: &str) -> GenerateOptions {
        GenerateOptions {
            type_name: type_name.to_string(),
            output: OutputTarget::from_flag(output),
        }
    }

    fn setup() -> (TempDir, std::path::PathBuf, SourceFile) {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("colors.go");
        fs::write(&source, COLORS).unwrap();
        let file = constlist_syntax::parse_file(&source).unwrap();
        (temp, source, file)
    }

    #[test]
    fn test_generate_derived_file() {
        let (temp, source, file) = setup();
        let opts = options("Color", "");

        let generation = prepare(&file, &opts).unwrap();
        let report = generate(generation, &source, &opts).unwrap();

        let expected = temp.path().join("color_list.go");
        assert_eq!(report.destination.as_deref(), Some(expected.as_path()));
        assert_eq!(report.count, 3);
        assert_eq!(report.function_name, "ColorList");
        let written = fs::read_to_string(expected).unwrap();
        assert!(written.contains("list := []Color{Red, Green, Blue}"));
    }

    #[test]
    fn test_generate_named_file() {
        let (temp, source, file) = setup();
        let opts = options("Color", "all_colors.go");

        let generation = prepare(&file, &opts).unwrap();
        generate(generation, &source, &opts).unwrap();

        assert!(temp.path().join("all_colors.go").exists());
        assert!(!temp.path().join("color_list.go").exists());
    }

    #[test]
    fn test_prepare_rejects_empty_type_before_writing() {
        let (temp, _source, file) = setup();

        let err = prepare(&file, &options("", "")).unwrap_err();

        assert!(matches!(*err, Error::InvalidIdentifier { .. }));
        assert!(!temp.path().join("_list.go").exists());
    }

    #[test]
    fn test_prepare_keeps_scan_diagnostics() {
        let (_temp, _source, file) = setup();
        let generation = prepare(&file, &options("Shape", "")).unwrap();

        assert!(generation.list.names().is_empty());
        assert_eq!(generation.diagnostics.len(), 1);
    }

    #[test]
    fn test_uncreatable_destination_is_an_error() {
        let (temp, source, file) = setup();
        fs::write(temp.path().join("blocker"), "").unwrap();
        let opts = options("Color", "blocker/out.go");

        let generation = prepare(&file, &opts).unwrap();
        let err = generate(generation, &source, &opts).unwrap_err();

        assert_eq!(err.to_string(), "failed to write generated list");
    }
}
