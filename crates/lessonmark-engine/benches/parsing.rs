use criterion::{Criterion, criterion_group, criterion_main};
use lessonmark_engine::{AnnotationView, ChapterAnnotations, MathRenderer, parse_str};
mod common;

fn bench_tokenizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = common::generate_markup(400);
    group.bench_function("tokenize_plain", |b| {
        b.iter(|| {
            let segments = parse_str(
                std::hint::black_box(&content),
                "el-0-cont",
                &AnnotationView::empty(),
            );
            std::hint::black_box(segments);
        });
    });

    let mut chapter = ChapterAnnotations::default();
    for i in (0..40).step_by(2) {
        chapter.toggle_highlight(&format!("el-0-cont-0-l-0-p-0-t-0-w-{i}"));
    }
    group.bench_function("tokenize_annotated", |b| {
        b.iter(|| {
            let segments = parse_str(std::hint::black_box(&content), "el-0-cont", &chapter.view());
            std::hint::black_box(segments);
        });
    });

    group.finish();
}

fn bench_math(c: &mut Criterion) {
    let mut group = c.benchmark_group("math");
    group.sample_size(10);

    let expressions = common::generate_expressions(50);
    group.bench_function("render_cold", |b| {
        b.iter(|| {
            let renderer = MathRenderer::new();
            for expression in &expressions {
                std::hint::black_box(renderer.render(expression, true));
            }
        });
    });

    let warm = MathRenderer::new();
    for expression in &expressions {
        warm.render(expression, true);
    }
    group.bench_function("render_memoized", |b| {
        b.iter(|| {
            for expression in &expressions {
                std::hint::black_box(warm.render(expression, true));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_tokenizer, bench_math);
criterion_main!(benches);
