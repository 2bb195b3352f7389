//! Constant scanning and list emission for the constlist generator.
//!
//! # Module Organization
//!
//! - [`scan`] - Effective type resolution and constant collection
//! - [`emit`] - The generated `<Type>List` document
//! - [`output`] - Output routing (stdout, derived or named file)
//! - [`ast`] - Go syntax nodes used by the emitter
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`testing`] - Test utilities (feature-gated)
//!
//! # Example
//!
//! ```
//! use constlist_codegen::{emit, scan};
//!
//! let file = constlist_syntax::parse_str(
//!     "package colors\n\nconst (\n\tRed Color = iota\n\tGreen\n)\n",
//!     "colors.go",
//! )
//! .unwrap();
//!
//! let names = scan(&file, "Color");
//! let code = emit(&file.package.name, "Color", &names).unwrap();
//! assert!(code.contains("list := []Color{Red, Green}"));
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod ast;
pub mod builder;
mod diagnostic;
pub mod emit;
mod error;
pub mod output;
pub mod scan;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use diagnostic::{Diagnostic, Severity};
pub use emit::{ConstList, emit};
pub use error::{Error, NameKind, Result};
pub use output::{ListFile, OutputTarget};
pub use scan::{ScanReport, Scanner, SpecTrace, scan};
