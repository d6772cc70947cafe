// Output sinks: where pruned units end up.

use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::domain::source::SourceFile;
use crate::ports::UnitSink;

/// Writes results to the file system, either over the originals or into a
/// mirror directory.
#[derive(Debug, Clone)]
pub struct FsSink {
    output_dir: Option<PathBuf>,
}

impl FsSink {
    pub fn in_place() -> Self {
        Self { output_dir: None }
    }

    pub fn mirrored(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: Some(output_dir.into()),
        }
    }

    /// Where the result for `file` is written.
    pub fn target(&self, file: &SourceFile) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.join(file.relative_path()),
            None => file.path.clone(),
        }
    }
}

impl UnitSink for FsSink {
    fn write(&self, file: &SourceFile, contents: &str) -> io::Result<()> {
        let target = self.target(file);
        if let Some(parent) = target.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&target, contents)?;
        debug!("Wrote {}", target.display());
        Ok(())
    }

    /// In mirror mode only a stale mirrored copy is removed; originals are never touched.
    fn delete(&self, file: &SourceFile) -> io::Result<()> {
        let target = self.target(file);
        match fs::remove_file(&target) {
            Ok(()) => {
                debug!("Deleted {}", target.display());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound && self.output_dir.is_some() => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// Reports what would happen without touching the file system.
#[derive(Debug, Clone, Default)]
pub struct DryRunSink;

impl UnitSink for DryRunSink {
    fn write(&self, file: &SourceFile, contents: &str) -> io::Result<()> {
        info!("[dry-run] would rewrite {} ({} bytes)", file.path.display(), contents.len());
        Ok(())
    }

    fn delete(&self, file: &SourceFile) -> io::Result<()> {
        info!("[dry-run] would delete {}", file.path.display());
        Ok(())
    }
}
