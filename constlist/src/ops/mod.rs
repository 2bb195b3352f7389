//! Core operations.
//!
//! This module contains the work behind each mode of the command line,
//! separated from argument parsing and output rendering.

pub mod explain;
pub mod generate;

pub use explain::explain;
pub use generate::{GenerateOptions, generate, prepare};
