//! Report generation benchmarks
//!
//! Measures story assembly, layout and PDF rendering of the guide separately.

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use runbook::report::{self, ReportContext};
use runbook::{PipelineBuilder, ReportConfig};
use std::hint::black_box;

fn context() -> ReportContext {
    let generated_at = NaiveDate::from_ymd_opt(2024, 1, 15)
        .and_then(|d| d.and_hms_opt(10, 30, 0))
        .expect("valid date");
    ReportContext::new(generated_at)
}

fn benchmark_story_assembly(c: &mut Criterion) {
    let ctx = context();
    c.bench_function("story_assembly", |b| {
        b.iter(|| report::build_story(black_box(&ctx)))
    });
}

fn benchmark_layout(c: &mut Criterion) {
    let ctx = context();
    let story = report::build_story(&ctx);
    let pipeline = PipelineBuilder::from_config(&ReportConfig::default(), ctx.generated_at)
        .build()
        .expect("Failed to build pipeline");

    c.bench_function("layout", |b| {
        b.iter(|| pipeline.layout(black_box(&story)).expect("Failed to lay out report"))
    });
}

fn benchmark_full_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_generation");
    let ctx = context();
    let story = report::build_story(&ctx);

    for compress in [true, false] {
        let pipeline = PipelineBuilder::from_config(&ReportConfig::default(), ctx.generated_at)
            .with_compression(compress)
            .build()
            .expect("Failed to build pipeline");

        group.bench_with_input(
            BenchmarkId::new("compress", compress),
            &compress,
            |b, _| {
                b.iter(|| {
                    let mut buffer = Vec::<u8>::new();
                    pipeline
                        .generate(&story, &mut buffer)
                        .expect("Failed to generate PDF");
                    buffer
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_story_assembly,
    benchmark_layout,
    benchmark_full_generation
);
criterion_main!(benches);
