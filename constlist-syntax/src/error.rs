use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::{lexer::LexError, parser::SyntaxError};

/// Result type for parsing operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename so lexer and parser errors
/// can be turned into labelled diagnostics.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create an error from a lexer failure.
    pub fn lex_error(&self, err: LexError) -> Box<Error> {
        Box::new(Error::Lex {
            src: self.named_source(),
            span: err.span.into(),
            location: err.span.location(),
            message: err.message,
        })
    }

    /// Create an error from a parser failure.
    pub fn syntax_error(&self, err: SyntaxError) -> Box<Error> {
        Box::new(Error::Syntax {
            src: self.named_source(),
            span: err.span.into(),
            location: err.span.location(),
            message: err.message,
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(constlist::io), help("check that the Go source file exists and is readable"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}' is not valid UTF-8")]
    #[diagnostic(code(constlist::encoding), help("Go source files must be UTF-8 encoded"))]
    Encoding { path: PathBuf },

    #[error("{location}: {message}")]
    #[diagnostic(code(constlist::lex_error))]
    Lex {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: SourceSpan,
        location: String,
        message: String,
    },

    #[error("{location}: {message}")]
    #[diagnostic(code(constlist::syntax_error))]
    Syntax {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: SourceSpan,
        location: String,
        message: String,
    },
}
