//! Core utilities and types for the constlist generator.
//!
//! This crate provides the pieces shared by the syntax front end, the code
//! generator, and the command-line tool.

mod file;
mod ident;
mod marker;

// File operations
pub use file::{GeneratedFile, write_file};
// Go identifier rules
pub use ident::{
    BLANK, GO_KEYWORDS, is_go_keyword, is_ident_continue, is_ident_start, validate_identifier,
};
pub use marker::GENERATION_MARKER;
