use std::fs;
use std::path::PathBuf;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::domain::pruner::{Minimizer, PruneStats};
use crate::domain::source::SourceFile;
use crate::ports::{SourceParser, UnitPrinter, UnitSink};

/// What happened to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Rewritten,
    /// No public type was left and the file was removed.
    Deleted,
    /// Unparsable source, left untouched.
    Skipped(String),
    /// Reading or writing failed.
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
    pub stats: PruneStats,
}

#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub reports: Vec<FileReport>,
    pub stats: PruneStats,
    pub rewritten: usize,
    pub deleted: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunSummary {
    fn from_reports(reports: Vec<FileReport>) -> Self {
        let mut summary = RunSummary::default();
        for report in &reports {
            summary.stats.merge(&report.stats);
            match report.outcome {
                FileOutcome::Rewritten => summary.rewritten += 1,
                FileOutcome::Deleted => summary.deleted += 1,
                FileOutcome::Skipped(_) => summary.skipped += 1,
                FileOutcome::Failed(_) => summary.failed += 1,
            }
        }
        summary.reports = reports;
        summary
    }

    pub fn processed(&self) -> usize {
        self.reports.len()
    }
}

pub struct MinimizeUsecase<'a> {
    pub parser: &'a dyn SourceParser,
    pub printer: &'a dyn UnitPrinter,
    pub sink: &'a dyn UnitSink,
    pub minimizer: &'a Minimizer,
    pub delete_empty_files: bool,
}

impl<'a> MinimizeUsecase<'a> {
    /// Minimize every file in parallel. Reports keep the order of `files`.
    pub fn run(&self, files: &[SourceFile]) -> RunSummary {
        let reports: Vec<FileReport> = files.par_iter().map(|file| self.process(file)).collect();
        RunSummary::from_reports(reports)
    }

    pub fn process(&self, file: &SourceFile) -> FileReport {
        info!("Minimizing {}", file.path.display());
        let (outcome, stats) = self.minimize(file);
        FileReport {
            path: file.path.clone(),
            outcome,
            stats,
        }
    }

    fn minimize(&self, file: &SourceFile) -> (FileOutcome, PruneStats) {
        let source = match fs::read_to_string(&file.path) {
            Ok(source) => source,
            Err(e) => {
                warn!("Cannot read {}: {}", file.path.display(), e);
                return (FileOutcome::Failed(e.to_string()), PruneStats::default());
            }
        };

        let mut unit = match self.parser.parse(&source) {
            Ok(unit) => unit,
            Err(e) => {
                warn!("Skipping {}: {}", file.path.display(), e);
                return (FileOutcome::Skipped(e.to_string()), PruneStats::default());
            }
        };

        let outcome = self.minimizer.prune(&mut unit);
        debug!("{}: {:?}", file.path.display(), outcome.stats);

        let result = if outcome.is_empty && self.delete_empty_files {
            self.sink.delete(file).map(|_| FileOutcome::Deleted)
        } else {
            let text = self.printer.print(&unit);
            self.sink.write(file, &text).map(|_| FileOutcome::Rewritten)
        };

        match result {
            Ok(done) => (done, outcome.stats),
            Err(e) => {
                warn!("Cannot update {}: {}", file.path.display(), e);
                (FileOutcome::Failed(e.to_string()), outcome.stats)
            }
        }
    }
}
