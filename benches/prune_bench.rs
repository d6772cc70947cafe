/// Benchmarks for the Java minimizer.
///
/// Run with: `cargo bench`
///
/// Covers:
/// - Parse, prune and print of one file at various sizes
/// - Pruning alone on an already parsed unit
/// - The parallel pipeline over a directory of files

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::fs;
use tempfile::tempdir;

use java_minimizer::application::MinimizeUsecase;
use java_minimizer::domain::pruner::Minimizer;
use java_minimizer::infrastructure::{DryRunSink, JavaParser, JavaPrinter, SourceCollector};
use java_minimizer::ports::{SourceParser, UnitPrinter};

// ═══════════════════════════════════════════════════════════════════════════
// Synthetic Data Generators
// ═══════════════════════════════════════════════════════════════════════════

/// Create a synthetic Java class with a mix of public and private members.
fn create_synthetic_class(name: &str, members: usize) -> String {
    let mut src = String::from("package bench.generated;\n\nimport java.util.List;\n\n");
    src.push_str(&format!("/** Generated. */\npublic class {} {{\n", name));

    for i in 0..members {
        match i % 5 {
            0 => src.push_str(&format!("    public static final int CONST_{} = {};\n", i, i)),
            1 => src.push_str(&format!("    private List<String> items{} = new java.util.ArrayList<>();\n", i)),
            2 => src.push_str(&format!(
                "    @Deprecated(since = \"{}\")\n    public int compute{}(int a, int b) {{\n        int c = a * b + {};\n        return c;\n    }}\n",
                i, i, i
            )),
            3 => src.push_str(&format!("    void helper{}() {{ items1.clear(); }}\n", i)),
            _ => src.push_str(&format!(
                "    protected static class Nested{} {{\n        public void run() {{ }}\n        private int hidden;\n    }}\n",
                i
            )),
        }
    }

    src.push_str("    static { System.loadLibrary(\"x\"); }\n}\n");
    src
}

// ═══════════════════════════════════════════════════════════════════════════
// Single File Benchmarks
// ═══════════════════════════════════════════════════════════════════════════

fn bench_minimize_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimize/file");
    let parser = JavaParser::default();
    let printer = JavaPrinter::default();
    let minimizer = Minimizer::default();

    for members in [10, 50, 200, 1000].iter() {
        let src = create_synthetic_class("Bench", *members);
        group.throughput(Throughput::Bytes(src.len() as u64));

        group.bench_with_input(BenchmarkId::new("members", members), &src, |b, src| {
            b.iter(|| {
                let mut unit = parser.parse(black_box(src)).unwrap();
                minimizer.prune(&mut unit);
                printer.print(&unit)
            })
        });
    }

    group.finish();
}

fn bench_prune_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimize/prune_only");
    let minimizer = Minimizer::default();

    for members in [50, 1000].iter() {
        let src = create_synthetic_class("Bench", *members);
        let unit = JavaParser::default().parse(&src).unwrap();

        group.bench_with_input(BenchmarkId::new("members", members), &unit, |b, unit| {
            b.iter(|| {
                let mut unit = unit.clone();
                minimizer.prune(black_box(&mut unit))
            })
        });
    }

    group.finish();
}

// ═══════════════════════════════════════════════════════════════════════════
// Pipeline Benchmarks
// ═══════════════════════════════════════════════════════════════════════════

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimize/pipeline");
    group.sample_size(20);

    for num_files in [10, 100].iter() {
        let dir = tempdir().unwrap();
        let pkg = dir.path().join("bench/generated");
        fs::create_dir_all(&pkg).unwrap();
        for i in 0..*num_files {
            let name = format!("Class{}", i);
            fs::write(pkg.join(format!("{}.java", name)), create_synthetic_class(&name, 40)).unwrap();
        }

        let collected = SourceCollector::new(&["java".to_string()], &[]).collect(&[dir.path().to_path_buf()]);
        let parser = JavaParser::default();
        let printer = JavaPrinter::default();
        let minimizer = Minimizer::default();
        // Dry run keeps the inputs intact between iterations.
        let usecase = MinimizeUsecase {
            parser: &parser,
            printer: &printer,
            sink: &DryRunSink,
            minimizer: &minimizer,
            delete_empty_files: true,
        };

        group.throughput(Throughput::Elements(*num_files as u64));
        group.bench_with_input(BenchmarkId::new("files", num_files), &collected.files, |b, files| {
            b.iter(|| usecase.run(black_box(files)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_minimize_file, bench_prune_only, bench_pipeline);
criterion_main!(benches);
