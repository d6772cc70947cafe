// Command-line entry point for the Java minimizer.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use java_minimizer::api::dto::RunReportDto;
use java_minimizer::application::{MinimizeUsecase, RunSummary};
use java_minimizer::config::MinimizerConfig;
use java_minimizer::domain::pruner::Minimizer;
use java_minimizer::infrastructure::concurrency::init_thread_pool;
use java_minimizer::infrastructure::{
    DryRunSink, FsSink, JavaParser, JavaPrinter, ParserOptions, RootFailure, SourceCollector,
};
use java_minimizer::ports::UnitSink;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Source root directories (replace the configured roots)
    roots: Vec<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Annotation whose arguments are cleared
    #[arg(long)]
    marker: Option<String>,

    /// Rewrite files left without public types instead of deleting them
    #[arg(long)]
    keep_empty_files: bool,

    /// Collect comments in the front-end (they are still removed from the output)
    #[arg(long)]
    keep_comments: bool,

    /// Report what would change without touching any file
    #[arg(long)]
    dry_run: bool,

    /// Mirror minimized sources into this directory instead of rewriting in place
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Worker threads (default: all cores)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Spaces per indentation level in the output
    #[arg(long)]
    indent: Option<usize>,

    /// Summary format
    #[arg(short, long, value_enum, default_value = "text")]
    format: Format,

    /// Log every file's pruning statistics
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> Result<(MinimizerConfig, Format)> {
        let mut config = match &self.config {
            Some(path) => MinimizerConfig::from_file(path)?,
            None => MinimizerConfig::default(),
        };
        if !self.roots.is_empty() {
            config.root_paths = self.roots;
        }
        if let Some(marker) = self.marker {
            config.marker_annotation = marker;
        }
        if self.keep_empty_files {
            config.delete_empty_files = false;
        }
        if self.keep_comments {
            config.strip_comments = false;
        }
        if self.dry_run {
            config.dry_run = true;
        }
        if self.output_dir.is_some() {
            config.output_dir = self.output_dir;
        }
        if self.threads.is_some() {
            config.threads = self.threads;
        }
        if let Some(indent) = self.indent {
            config.indent_width = indent;
        }
        config.validate().context("Invalid configuration")?;
        Ok((config, self.format))
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_summary(summary: &RunSummary, failures: &[RootFailure], format: Format) -> Result<()> {
    match format {
        Format::Json => {
            let dto = RunReportDto::new(summary, failures);
            println!("{}", serde_json::to_string_pretty(&dto)?);
        }
        Format::Text => {
            println!(
                "Minimized {} files: {} rewritten, {} deleted, {} skipped, {} failed",
                summary.processed(),
                summary.rewritten,
                summary.deleted,
                summary.skipped,
                summary.failed
            );
            println!(
                "Removed {} declarations, {} bodies, {} field initializers, {} comments; cleared {} marker annotations",
                summary.stats.declarations_removed(),
                summary.stats.bodies_stripped,
                summary.stats.field_initializers_cleared,
                summary.stats.comments_removed,
                summary.stats.markers_cleared
            );
            for failure in failures {
                println!("Root skipped: {}", failure.error);
            }
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<ExitCode> {
    let (config, format) = cli.into_config()?;
    init_thread_pool(config.threads)?;

    let collector = SourceCollector::new(&config.extensions, &config.exclude_dirs);
    let collected = collector.collect(&config.root_paths);
    if collected.failures.len() == config.root_paths.len() {
        for failure in &collected.failures {
            error!("{}", failure.error);
        }
        anyhow::bail!("None of the configured source roots could be scanned");
    }
    info!("Found {} source files", collected.files.len());

    let parser = JavaParser::new(ParserOptions {
        attach_comments: !config.strip_comments,
    });
    let printer = JavaPrinter::new(config.indent_width);
    let minimizer = Minimizer::new(config.marker_annotation.clone());
    let sink: Box<dyn UnitSink> = if config.dry_run {
        Box::new(DryRunSink)
    } else if let Some(dir) = &config.output_dir {
        Box::new(FsSink::mirrored(dir))
    } else {
        Box::new(FsSink::in_place())
    };

    let usecase = MinimizeUsecase {
        parser: &parser,
        printer: &printer,
        sink: sink.as_ref(),
        minimizer: &minimizer,
        delete_empty_files: config.delete_empty_files,
    };
    let summary = usecase.run(&collected.files);

    if summary.failed > 0 {
        warn!("{} files could not be updated", summary.failed);
    }
    print_summary(&summary, &collected.failures, format)?;

    Ok(if summary.failed > 0 || !collected.failures.is_empty() {
        ExitCode::from(2)
    } else {
        ExitCode::SUCCESS
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
