// Source file identity shared by the collector, the use case and the sinks.

use std::path::{Path, PathBuf};

/// A discovered source file together with the root it was found under.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceFile {
    pub root: PathBuf,
    pub path: PathBuf,
}

impl SourceFile {
    pub fn new(root: impl Into<PathBuf>, path: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            path: path.into(),
        }
    }

    /// Path relative to the root; the full path if it is not below the root.
    pub fn relative_path(&self) -> &Path {
        self.path.strip_prefix(&self.root).unwrap_or(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path() {
        let file = SourceFile::new("/work/src", "/work/src/org/example/Foo.java");
        assert_eq!(file.relative_path(), Path::new("org/example/Foo.java"));
    }

    #[test]
    fn test_relative_path_outside_root() {
        let file = SourceFile::new("/work/src", "/elsewhere/Foo.java");
        assert_eq!(file.relative_path(), Path::new("/elsewhere/Foo.java"));
    }
}
