use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use dioxus::dioxus_core::VirtualDom;
use dioxus::prelude::*;
use lessonmark_dioxus::ui::components::{AnnotationProps, LessonView};
use lessonmark_engine::{ChapterAnnotations, LessonDocument, io};
use serde_json::json;

/// A lesson of `sections` sections, each with definition, paragraph and
/// table elements full of blanks, math and words.
fn generate_lesson(sections: usize) -> LessonDocument {
    let section = json!({
        "title": "Section $n$",
        "subsections": [{
            "title": "Sous-section",
            "elements": [
                {"type": "definition-box", "title": "Fonction",
                 "content": "Une **fonction** $f$ associe à tout réel $x$ un ___unique___ réel $f(x)$."},
                {"type": "p", "content": [
                    ">> Vocabulaire",
                    "Le réel $f(x)$ est l'___image___ de $x$ par la fonction $f$.",
                    "On a $$f(3) = 2 \\times 3 + 1 = ___7___$$"
                ]},
                {"type": "table", "tableData": [
                    {"cells": ["$x$", "$0$", "$1$"], "isHeader": true},
                    {"cells": ["$f(x)$", "___1___", "___3___"]}
                ]}
            ]
        }]
    });
    let document = json!({
        "header": {"title": "Bench", "classe": "2nde", "chapter": "Chapitre 1"},
        "sections": vec![section; sections]
    });
    io::parse_lesson(&document.to_string()).unwrap()
}

#[derive(Props, Clone, PartialEq)]
struct HarnessProps {
    lesson: LessonDocument,
}

#[allow(non_snake_case)]
fn Harness(props: HarnessProps) -> Element {
    rsx! {
        LessonView {
            lesson: props.lesson,
            annotations: AnnotationProps::detached(ChapterAnnotations::default()),
        }
    }
}

fn bench_lesson_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("lesson_render");
    group.sample_size(10);

    for sections in [1, 5, 20] {
        let lesson = generate_lesson(sections);
        group.throughput(Throughput::Elements(sections as u64));
        group.bench_with_input(
            BenchmarkId::new("ssr", sections),
            &lesson,
            |b, lesson| {
                b.iter(|| {
                    let mut dom = VirtualDom::new_with_props(
                        Harness,
                        HarnessProps {
                            lesson: lesson.clone(),
                        },
                    );
                    dom.rebuild_in_place();
                    std::hint::black_box(dioxus_ssr::render(&dom));
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_lesson_render);
criterion_main!(benches);
