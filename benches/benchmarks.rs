//! Performance benchmarks for stripdoc

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use stripdoc::test_utils::{TestProject, generated_class};
use stripdoc::{
    BlockBoundary, Document, ExtractionMode, FilterKind, PipelineConfig, ScanOptions,
    extract_from_source, scan,
};

fn bench_scan(c: &mut Criterion) {
    let small = generated_class(10);
    let large = generated_class(500);
    let indentation = ScanOptions::default();
    let brace_depth = ScanOptions {
        boundary: BlockBoundary::BraceDepth,
        ..Default::default()
    };

    let mut group = c.benchmark_group("scan");

    group.bench_function("small_class_indentation", |b| {
        b.iter(|| scan(black_box(&small), &indentation))
    });

    group.bench_function("large_class_indentation", |b| {
        b.iter(|| scan(black_box(&large), &indentation))
    });

    group.bench_function("large_class_brace_depth", |b| {
        b.iter(|| scan(black_box(&large), &brace_depth))
    });

    group.finish();
}

fn bench_listing(c: &mut Criterion) {
    let source = generated_class(200);
    let options = ScanOptions::default();

    let mut group = c.benchmark_group("listing");

    for mode in [
        ExtractionMode::Methods,
        ExtractionMode::Attributes,
        ExtractionMode::Enum,
    ] {
        group.bench_function(mode.directive_name(), |b| {
            b.iter(|| extract_from_source(black_box(&source), "Sample.cs", mode, &options))
        });
    }

    group.finish();
}

fn bench_insert_code(c: &mut Criterion) {
    let project = TestProject::new();
    let directives: Vec<String> = (0..20)
        .map(|i| {
            project.add_file(&format!("src/Sample{}.cs", i), &generated_class(20));
            format!(
                r#"{{"t":"RawBlock","c":["html","<!-- insertClassMethods, src/Sample{}.cs -->"]}}"#,
                i
            )
        })
        .collect();
    let json = format!(
        r#"{{"pandoc-api-version":[1,23,1],"meta":{{}},"blocks":[{}]}}"#,
        directives.join(",")
    );
    let config = PipelineConfig {
        root: project.path().to_path_buf(),
        filters: vec![FilterKind::InsertCode],
        ..Default::default()
    };

    c.bench_function("insert_code_20_directives", |b| {
        b.iter(|| {
            let mut doc = Document::from_json(&json).unwrap();
            stripdoc::run(&mut doc, &config).unwrap();
            doc
        })
    });
}

criterion_group!(benches, bench_scan, bench_listing, bench_insert_code);
criterion_main!(benches);
