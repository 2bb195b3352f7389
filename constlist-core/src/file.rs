use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use eyre::{Context, Result};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk and return the path that was written
    fn write(&self, base: &Path) -> Result<PathBuf> {
        let path = self.path(base);
        write_file(&path, &self.render())?;
        Ok(path)
    }
}

/// Create (or truncate) `path` and write `content` into it.
///
/// The parent directory must already exist. Failing to create the
/// destination is reported before anything is written.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    let mut file =
        fs::File::create(path).wrap_err_with(|| format!("failed to create '{}'", path.display()))?;
    file.write_all(content.as_bytes())
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote generated file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Hello;

    impl GeneratedFile for Hello {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("hello.go")
        }

        fn render(&self) -> String {
            "package hello\n".to_string()
        }
    }

    #[test]
    fn test_write_file_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_file(&path, "hello").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_write_file_fails_on_missing_parent() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("test.txt");

        let err = write_file(&path, "nested").unwrap_err();

        assert!(err.to_string().starts_with("failed to create"));
        assert!(!temp.path().join("missing").exists());
    }

    #[test]
    fn test_write_file_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_file(&path, "first").unwrap();
        write_file(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_write_file_reports_uncreatable_destination() {
        let temp = TempDir::new().unwrap();
        // A regular file cannot act as a parent directory.
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let err = write_file(&blocker.join("out.go"), "x").unwrap_err();
        assert!(format!("{:#}", err).contains("failed to create"));
    }

    #[test]
    fn test_generated_file_write_returns_path() {
        let temp = TempDir::new().unwrap();

        let written = Hello.write(temp.path()).unwrap();

        assert_eq!(written, temp.path().join("hello.go"));
        assert_eq!(fs::read_to_string(&written).unwrap(), "package hello\n");
    }
}
