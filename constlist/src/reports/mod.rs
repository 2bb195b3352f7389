//! Report data structures.
//!
//! Operations build reports, then render them to an Output target.

mod explain;
mod generate;
mod output;

pub use explain::ExplainReport;
pub use generate::GenerateReport;
pub use output::{Report, TerminalOutput};
