use super::{AnnotationProps, ElementRenderer, MathText};
use dioxus::prelude::*;
use lessonmark_engine::{LessonDocument, element_index, section_letter};

/// A whole lesson: header, then lettered sections and numbered subsections.
#[component]
pub fn LessonView(lesson: LessonDocument, annotations: AnnotationProps) -> Element {
    let numbers = lesson.box_numbers();
    let info = lesson.header;

    rsx! {
        article {
            class: "lesson",
            header {
                class: "lesson-header",
                span { class: "lesson-class", "{info.class_label}" }
                span { class: "lesson-chapter", "{info.chapter_label}" }
                h1 { MathText { text: info.title } }
                if !info.subtitle.is_empty() {
                    p { class: "lesson-subtitle", "{info.subtitle}" }
                }
            }
            for (s, lesson_section) in lesson.sections.into_iter().enumerate() {
                section {
                    id: "section-{s}",
                    class: "lesson-section",
                    h2 {
                        span { class: "section-letter", {format!("{}.", section_letter(s))} }
                        MathText { text: lesson_section.title }
                    }
                    for (sub, subsection) in lesson_section.subsections.into_iter().enumerate() {
                        div {
                            id: "sub-{s}-{sub}",
                            class: "lesson-subsection",
                            h3 {
                                span { class: "subsection-number", {format!("{}.", sub + 1)} }
                                MathText { text: subsection.title }
                            }
                            for (i, element) in subsection.elements.into_iter().enumerate() {
                                ElementRenderer {
                                    element,
                                    index: element_index(s, sub, i),
                                    number: numbers.get(&(s, sub, i)).copied(),
                                    annotations: annotations.clone(),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
