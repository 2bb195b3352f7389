//! Test utilities for generated Go code.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{path::Path, process::Command};

use eyre::Result;

/// Error from compile checking.
#[derive(Debug)]
pub struct CompileError {
    pub message: String,
    pub output: String,
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n\nOutput:\n{}", self.message, self.output)
    }
}

impl std::error::Error for CompileError {}

/// Verifies that generated code in a directory compiles.
pub trait CompileChecker {
    fn check(&self, dir: &Path) -> Result<(), CompileError>;
}

/// Go compile checker using `go build`.
///
/// The directory must be a module root; see [`write_go_mod`].
pub struct GoChecker;

impl CompileChecker for GoChecker {
    fn check(&self, dir: &Path) -> Result<(), CompileError> {
        let output = Command::new("go")
            .args(["build", "./..."])
            .current_dir(dir)
            .output()
            .map_err(|e| CompileError {
                message: format!("Failed to run go build: {}", e),
                output: String::new(),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            Err(CompileError {
                message: "go build failed".to_string(),
                output: format!("stderr:\n{}\n\nstdout:\n{}", stderr, stdout),
            })
        }
    }
}

/// Write a minimal `go.mod` so `dir` builds as a module.
pub fn write_go_mod(dir: &Path, module: &str) -> Result<()> {
    std::fs::write(dir.join("go.mod"), format!("module {}\n\ngo 1.21\n", module))?;
    Ok(())
}

/// Assert that two strings are equal, with a line diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {:?}\n", exp));
                diff.push_str(&format!("  actual:   {:?}\n", act));
            }
        }

        if diff.is_empty() {
            diff.push_str("  (line endings differ)\n");
        }

        panic!("Content mismatch:\n{}", diff);
    }
}
