//! Where the generated document goes.

use std::path::{Component, Path, PathBuf};

use constlist_core::GeneratedFile;

use crate::emit::ConstList;

/// The `--output` value that selects standard output.
pub const STDOUT: &str = "stdout";

/// Suffix of the file name derived from the type name.
pub const LIST_FILE_SUFFIX: &str = "_list.go";

/// Destination selected by the `--output` flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputTarget {
    /// Print to standard output.
    Stdout,
    /// `<lowercase type>_list.go` next to the source file.
    #[default]
    Derived,
    /// A file name resolved against the source file's directory.
    File(PathBuf),
}

impl OutputTarget {
    pub fn from_flag(value: &str) -> Self {
        match value {
            STDOUT => Self::Stdout,
            "" => Self::Derived,
            other => Self::File(PathBuf::from(other)),
        }
    }

    /// File name relative to the source directory, `None` for stdout.
    ///
    /// A literal name is always placed under the source directory, even when
    /// written as an absolute path.
    pub fn file_name(&self, type_name: &str) -> Option<PathBuf> {
        match self {
            Self::Stdout => None,
            Self::Derived => Some(PathBuf::from(derived_file_name(type_name))),
            Self::File(name) => Some(strip_root(name)),
        }
    }

    /// Full destination path for `source`, `None` for stdout.
    pub fn destination(&self, source: &Path, type_name: &str) -> Option<PathBuf> {
        self.file_name(type_name)
            .map(|name| source_dir(source).join(name))
    }
}

impl From<&str> for OutputTarget {
    fn from(value: &str) -> Self {
        Self::from_flag(value)
    }
}

/// `<lowercase type>_list.go`.
pub fn derived_file_name(type_name: &str) -> String {
    format!("{}{}", type_name.to_lowercase(), LIST_FILE_SUFFIX)
}

fn strip_root(name: &Path) -> PathBuf {
    name.components()
        .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
        .collect()
}

/// Directory containing `source`; empty for a bare file name.
pub fn source_dir(source: &Path) -> &Path {
    source.parent().unwrap_or_else(|| Path::new(""))
}

/// A rendered list bound to its file name.
#[derive(Debug)]
pub struct ListFile<'a> {
    list: &'a ConstList,
    file_name: PathBuf,
}

impl<'a> ListFile<'a> {
    pub fn new(list: &'a ConstList, file_name: impl Into<PathBuf>) -> Self {
        Self {
            list,
            file_name: file_name.into(),
        }
    }
}

impl GeneratedFile for ListFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.file_name)
    }

    fn render(&self) -> String {
        self.list.render()
    }
}
