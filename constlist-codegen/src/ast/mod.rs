//! Go syntax nodes used by the list emitter.

mod file;
mod func;
mod slice;

pub use file::GoFile;
pub use func::Func;
pub use slice::SliceLit;
