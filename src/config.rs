/// Minimizer configuration.
///
/// Loaded from a TOML file (every key optional) and then overridden by CLI
/// flags. Only `marker_annotation` reaches the pruner; the rest drives the
/// collector, the printer and the sinks.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::pruner::DEFAULT_MARKER;
use crate::error::MinimizeError;

pub const MAX_INDENT_WIDTH: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MinimizerConfig {
    /// Directories scanned for sources.
    pub root_paths: Vec<PathBuf>,
    /// Annotation whose arguments are cleared.
    pub marker_annotation: String,
    /// Delete files left without any top-level type.
    pub delete_empty_files: bool,
    /// Skip collecting comments in the front-end. Output never contains comments either way.
    pub strip_comments: bool,
    pub extensions: Vec<String>,
    /// Directory names never descended into.
    pub exclude_dirs: Vec<String>,
    pub threads: Option<usize>,
    pub dry_run: bool,
    /// Mirror output here instead of rewriting sources in place.
    pub output_dir: Option<PathBuf>,
    pub indent_width: usize,
}

impl Default for MinimizerConfig {
    fn default() -> Self {
        Self {
            root_paths: Vec::new(),
            marker_annotation: DEFAULT_MARKER.to_string(),
            delete_empty_files: true,
            strip_comments: true,
            extensions: vec!["java".to_string()],
            exclude_dirs: [".git", "target", "build", "out", "node_modules"]
                .iter()
                .map(|d| d.to_string())
                .collect(),
            threads: None,
            dry_run: false,
            output_dir: None,
            indent_width: 4,
        }
    }
}

impl MinimizerConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: MinimizerConfig = toml::from_str(content).context("Invalid minimizer config")?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("In config file {}", path.display()))
    }

    pub fn validate(&self) -> crate::error::Result<()> {
        if self.root_paths.is_empty() {
            return Err(MinimizeError::config("no source roots configured"));
        }
        if self.marker_annotation.trim().is_empty() {
            return Err(MinimizeError::config("marker_annotation must not be empty"));
        }
        if self.extensions.is_empty() {
            return Err(MinimizeError::config("extensions must list at least one file extension"));
        }
        if self.indent_width == 0 || self.indent_width > MAX_INDENT_WIDTH {
            return Err(MinimizeError::config(format!(
                "indent_width must be between 1 and {}, got {}",
                MAX_INDENT_WIDTH, self.indent_width
            )));
        }
        if self.threads == Some(0) {
            return Err(MinimizeError::config("threads must be at least 1"));
        }
        Ok(())
    }
}
