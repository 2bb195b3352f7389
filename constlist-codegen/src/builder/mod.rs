//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Turns fragments into tab-indented Go text
//! - [`CodeFragment`] - Intermediate representation for code pieces
//! - [`Renderable`] - Trait for nodes that lower into code fragments

mod code_builder;
mod renderable;

pub use code_builder::CodeBuilder;
pub use renderable::{CodeFragment, Renderable};
