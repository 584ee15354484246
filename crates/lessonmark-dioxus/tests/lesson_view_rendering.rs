//! Renders the sample lesson end to end and checks what a reader's stored
//! annotations depend on: identifiers, numbering and initial states.

use dioxus::dioxus_core::VirtualDom;
use dioxus::prelude::*;
use dioxus_ssr::render;
use lessonmark_dioxus::ui::components::{AnnotationProps, LessonView};
use lessonmark_engine::io;
use lessonmark_engine::{ChapterAnnotations, LessonDocument};

const LESSON_JSON: &str = include_str!("../../lessonmark-engine/test_data/fonctions_lesson.json");

#[derive(Props, Clone, PartialEq)]
struct HarnessProps {
    lesson: LessonDocument,
    chapter: ChapterAnnotations,
}

#[allow(non_snake_case)]
fn Harness(props: HarnessProps) -> Element {
    rsx! {
        LessonView {
            lesson: props.lesson,
            annotations: AnnotationProps::detached(props.chapter),
        }
    }
}

fn render_lesson(chapter: ChapterAnnotations) -> String {
    let lesson = io::parse_lesson(LESSON_JSON).unwrap();
    let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { lesson, chapter });
    dom.rebuild_in_place();
    render(&dom)
}

#[test]
fn sections_are_lettered_and_subsections_numbered() {
    let html = render_lesson(ChapterAnnotations::default());

    assert!(html.contains(r#"id="section-0""#));
    assert!(html.contains(r#"<span class="section-letter">A.</span>"#), "{html}");
    assert!(html.contains(r#"<span class="subsection-number">2.</span>"#));
    assert!(html.contains(r#"id="sub-0-1""#));
}

#[test]
fn boxes_are_numbered_per_kind() {
    let html = render_lesson(ChapterAnnotations::default());

    assert!(html.contains(r#"id="el-0""#));
    assert!(html.contains(r#"id="el-102""#));
    assert_eq!(html.matches(r#"<span class="box-number"> 1</span>"#).count(), 3, "{html}");
}

#[test]
fn identifiers_follow_element_positions() {
    let html = render_lesson(ChapterAnnotations::default());

    // text blank after four inline formulas in the definition
    assert!(html.contains(r#"id="el-0-cont-8-l-0-p-0-b-1""#), "{html}");
    // body cell of the table element
    assert!(html.contains(r#"id="el-101-tr-0-td-1-0-l-0-p-0-b-1""#));
    // list item of the property box
    assert!(html.contains(r#"id="el-100-list-li-0-0-l-0-p-0-t-0-w-0""#));
    // blank inside display math
    assert!(html.contains(r#"id="el-2-cont-3-m-0""#));
}

#[test]
fn rendering_is_stable_across_passes() {
    assert_eq!(
        render_lesson(ChapterAnnotations::default()),
        render_lesson(ChapterAnnotations::default())
    );
}

#[test]
fn stored_annotations_set_initial_state() {
    let mut chapter = ChapterAnnotations::default();
    chapter.toggle_blank("el-101-tr-0-td-1-0-l-0-p-0-b-1");
    chapter.toggle_highlight("el-1-cont-0-q-0-p-0-t-0-w-0");

    let html = render_lesson(chapter);

    assert!(html.contains("blank-revealed"), "{html}");
    assert!(html.contains("word word-highlighted"));
}

#[test]
fn promoted_preamble_appears_once() {
    let html = render_lesson(ChapterAnnotations::default());
    assert_eq!(html.matches("Calcul d").count(), 1, "{html}");
}
