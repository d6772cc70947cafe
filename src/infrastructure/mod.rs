// Infrastructure implementations for the Java minimizer.

pub mod concurrency;
pub mod java_parser;
pub mod printer;
pub mod sink;
pub mod source_collector;

pub use java_parser::{JavaParser, ParserOptions};
pub use printer::JavaPrinter;
pub use sink::{DryRunSink, FsSink};
pub use source_collector::{CollectedSources, RootFailure, SourceCollector};
