use serde::{Deserialize, Serialize};

use crate::application::{FileOutcome, RunSummary};
use crate::domain::pruner::PruneStats;
use crate::infrastructure::RootFailure;

#[derive(Debug, Serialize, Deserialize)]
pub struct RunReportDto {
    pub processed: usize,
    pub rewritten: usize,
    pub deleted: usize,
    pub skipped: usize,
    pub failed: usize,
    pub removed: RemovedDto,
    pub files: Vec<FileDto>,
    pub root_failures: Vec<RootFailureDto>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RemovedDto {
    pub types: usize,
    pub constructors: usize,
    pub methods: usize,
    pub fields: usize,
    pub initializer_blocks: usize,
    pub bodies: usize,
    pub field_initializers: usize,
    pub marker_arguments: usize,
    pub comments: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FileDto {
    pub path: String,
    pub outcome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RootFailureDto {
    pub root: String,
    pub message: String,
}

impl From<&PruneStats> for RemovedDto {
    fn from(stats: &PruneStats) -> Self {
        RemovedDto {
            types: stats.types_removed,
            constructors: stats.constructors_removed,
            methods: stats.methods_removed,
            fields: stats.fields_removed,
            initializer_blocks: stats.initializer_blocks_removed,
            bodies: stats.bodies_stripped,
            field_initializers: stats.field_initializers_cleared,
            marker_arguments: stats.markers_cleared,
            comments: stats.comments_removed,
        }
    }
}

impl RunReportDto {
    pub fn new(summary: &RunSummary, root_failures: &[RootFailure]) -> Self {
        let files = summary
            .reports
            .iter()
            .map(|r| {
                let (outcome, reason) = match &r.outcome {
                    FileOutcome::Rewritten => ("rewritten", None),
                    FileOutcome::Deleted => ("deleted", None),
                    FileOutcome::Skipped(why) => ("skipped", Some(why.clone())),
                    FileOutcome::Failed(why) => ("failed", Some(why.clone())),
                };
                FileDto {
                    path: r.path.display().to_string(),
                    outcome: outcome.to_string(),
                    reason,
                }
            })
            .collect();

        let root_failures = root_failures
            .iter()
            .map(|f| RootFailureDto {
                root: f.root.display().to_string(),
                message: f.error.to_string(),
            })
            .collect();

        RunReportDto {
            processed: summary.processed(),
            rewritten: summary.rewritten,
            deleted: summary.deleted,
            skipped: summary.skipped,
            failed: summary.failed,
            removed: RemovedDto::from(&summary.stats),
            files,
            root_failures,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::FileReport;
    use crate::error::MinimizeError;
    use std::path::PathBuf;

    #[test]
    fn test_report_serializes_outcomes() {
        let summary = RunSummary {
            reports: vec![
                FileReport {
                    path: PathBuf::from("a/A.java"),
                    outcome: FileOutcome::Rewritten,
                    stats: PruneStats::default(),
                },
                FileReport {
                    path: PathBuf::from("a/B.java"),
                    outcome: FileOutcome::Skipped("parse error at 1:1: unexpected input".to_string()),
                    stats: PruneStats::default(),
                },
            ],
            rewritten: 1,
            skipped: 1,
            ..Default::default()
        };
        let failures = vec![RootFailure {
            root: PathBuf::from("missing"),
            error: MinimizeError::Root {
                path: PathBuf::from("missing"),
                message: "path does not exist".to_string(),
            },
        }];

        let dto = RunReportDto::new(&summary, &failures);
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["processed"], 2);
        assert_eq!(json["files"][0]["outcome"], "rewritten");
        assert!(json["files"][0].get("reason").is_none());
        assert_eq!(json["files"][1]["outcome"], "skipped");
        assert_eq!(json["root_failures"][0]["root"], "missing");
    }
}
