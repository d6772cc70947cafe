use crate::domain::ast::CompilationUnit;
use crate::domain::source::SourceFile;
use crate::error::Result;

/// Turns source text into a syntax tree.
/// Implementations must be thread-safe (Send + Sync).
pub trait SourceParser: Send + Sync {
    fn parse(&self, source: &str) -> Result<CompilationUnit>;
}

/// Serializes a syntax tree back to source text.
pub trait UnitPrinter: Send + Sync {
    fn print(&self, unit: &CompilationUnit) -> String;
}

/// Receives the result for one source file.
pub trait UnitSink: Send + Sync {
    fn write(&self, file: &SourceFile, contents: &str) -> std::io::Result<()>;
    fn delete(&self, file: &SourceFile) -> std::io::Result<()>;
}
