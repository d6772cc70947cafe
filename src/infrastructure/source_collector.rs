use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::domain::source::SourceFile;
use crate::error::MinimizeError;

/// A root that could not be scanned.
#[derive(Debug)]
pub struct RootFailure {
    pub root: PathBuf,
    pub error: MinimizeError,
}

#[derive(Debug, Default)]
pub struct CollectedSources {
    pub files: Vec<SourceFile>,
    pub failures: Vec<RootFailure>,
}

pub struct SourceCollector {
    extensions: Vec<String>,
    exclude_dirs: Vec<String>,
}

impl SourceCollector {
    pub fn new(extensions: &[String], exclude_dirs: &[String]) -> Self {
        Self {
            extensions: extensions.iter().map(|e| e.trim_start_matches('.').to_lowercase()).collect(),
            exclude_dirs: exclude_dirs.to_vec(),
        }
    }

    /// Collect all matching source files below every root.
    /// A failing root is recorded and skipped; the other roots still proceed.
    pub fn collect(&self, roots: &[PathBuf]) -> CollectedSources {
        let mut collected = CollectedSources::default();

        for root in roots {
            match self.collect_root(root) {
                Ok(files) => {
                    debug!("Collected {} files under {}", files.len(), root.display());
                    collected.files.extend(files);
                }
                Err(error) => {
                    warn!("Skipping source root: {}", error);
                    collected.failures.push(RootFailure {
                        root: root.clone(),
                        error,
                    });
                }
            }
        }

        // Roots are canonical, so overlapping roots (`a/b/..`, `.`) yield identical paths.
        collected.files.sort_by(|a, b| a.path.cmp(&b.path));
        collected.files.dedup_by(|a, b| a.path == b.path);
        collected
    }

    fn collect_root(&self, root: &Path) -> Result<Vec<SourceFile>, MinimizeError> {
        if !root.exists() {
            return Err(MinimizeError::Root {
                path: root.to_path_buf(),
                message: "path does not exist".to_string(),
            });
        }
        if !root.is_dir() {
            return Err(MinimizeError::Root {
                path: root.to_path_buf(),
                message: "not a directory".to_string(),
            });
        }

        let root = fs::canonicalize(root).map_err(|e| MinimizeError::Root {
            path: root.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut files = Vec::new();
        let walker = WalkDir::new(&root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !self.is_excluded(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(MinimizeError::Root {
                        path: root.to_path_buf(),
                        message: e.to_string(),
                    });
                }
                Err(e) => {
                    warn!("Cannot read entry below {}: {}", root.display(), e);
                    continue;
                }
            };
            if entry.file_type().is_file() && self.has_source_extension(entry.path()) {
                files.push(SourceFile::new(&root, entry.path()));
            }
        }

        Ok(files)
    }

    fn is_excluded(&self, entry: &DirEntry) -> bool {
        entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .map(|name| self.exclude_dirs.iter().any(|d| d == name))
                .unwrap_or(false)
    }

    fn has_source_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
            .unwrap_or(false)
    }
}
