//! Go source front end for the constlist generator.
//!
//! Turns one Go source file into a declaration-level [`SourceFile`]:
//! package name, imports, and every top-level `const`, `var`, `type` and
//! `func` declaration. Constant and variable specs keep their names, the
//! written type, and the spans of their value expressions.
//!
//! # Example
//!
//! ```
//! let file = constlist_syntax::parse_str(
//!     "package colors\n\nconst (\n\tRed Color = iota\n\tGreen\n)\n",
//!     "colors.go",
//! )
//! .unwrap();
//!
//! assert_eq!(file.package.name, "colors");
//! assert_eq!(file.const_decls().count(), 1);
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod ast;
mod error;
mod lexer;
mod parser;
mod span;
mod token;

use std::path::Path;

pub use ast::{
    Decl, FuncDecl, Ident, ImportSpec, SourceFile, TypeDecl, TypeExpr, ValueDecl, ValueSpec,
};
pub use error::{Error, Result, SourceContext};
pub use lexer::{LexError, Lexer};
pub use parser::{Parser, SyntaxError};
pub use span::Span;
pub use token::{Keyword, Token, TokenKind};

/// Read and parse the Go source file at `path`.
pub fn parse_file(path: impl AsRef<Path>) -> Result<SourceFile> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source,
        })
    })?;
    let src = String::from_utf8(bytes).map_err(|_| {
        Box::new(Error::Encoding {
            path: path.to_path_buf(),
        })
    })?;

    parse_str(&src, &path.display().to_string())
}

/// Parse Go source text. `filename` is only used for diagnostics.
pub fn parse_str(src: &str, filename: &str) -> Result<SourceFile> {
    let ctx = SourceContext::new(src, filename);

    let tokens = Lexer::new(src)
        .tokenize()
        .map_err(|e| ctx.lex_error(e))?;
    let file = Parser::new(src, tokens)
        .parse_file()
        .map_err(|e| ctx.syntax_error(e))?;

    tracing::debug!(
        file = filename,
        package = %file.package.name,
        decls = file.decls.len(),
        "parsed Go source"
    );
    Ok(file)
}
