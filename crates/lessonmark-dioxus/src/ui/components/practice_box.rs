use super::{AnnotationProps, ListRenderer, ProcessedContent};
use dioxus::prelude::*;
use lessonmark_engine::{ElementIds, LessonElement, ListType, MarkupText};

/// Exercise inside a lesson. The solution stays out of the tree until the
/// reader asks for it.
#[component]
pub fn PracticeBox(element: LessonElement, index: usize, annotations: AnnotationProps) -> Element {
    let mut show_solution = use_signal(|| false);
    let ids = ElementIds::new(index);
    let root = ids.root().to_string();
    let statement = MarkupText::from(element.statement.clone().unwrap_or_default());

    rsx! {
        div {
            id: "{root}",
            class: "practice-box",
            div {
                class: "practice-header",
                span { class: "practice-badge", "Exercice d'application" }
                if element.solution.is_some() {
                    button {
                        class: "practice-toggle",
                        title: "Voir la solution",
                        onclick: move |_| show_solution.toggle(),
                        if show_solution() { "Masquer" } else { "Correction" }
                    }
                }
            }
            ProcessedContent {
                text: statement,
                id_prefix: ids.statement(),
                annotations: annotations.clone(),
                class: "practice-statement",
            }
            if let Some((list_type, items)) = element.list_items() {
                ListRenderer {
                    items: items.to_vec(),
                    list_type,
                    id_prefix: ids.list(),
                    columns: element.columns,
                    annotations: annotations.clone(),
                }
            } else if let Some(content) = element.content.clone() {
                ProcessedContent {
                    text: content,
                    id_prefix: ids.content(),
                    annotations: annotations.clone(),
                }
            }
            if show_solution() {
                if let Some(solution) = element.solution.clone() {
                    div {
                        class: "practice-solution",
                        h4 { "Correction détaillée" }
                        {solution_body(solution, element.list_type, element.columns, &ids, &annotations)}
                        button {
                            class: "practice-close",
                            onclick: move |_| show_solution.set(false),
                            "Fermer"
                        }
                    }
                }
            }
        }
    }
}

/// Multi-line solutions are lists, numbered unless the element says otherwise.
fn solution_body(
    solution: MarkupText,
    list_type: Option<ListType>,
    columns: Option<u8>,
    ids: &ElementIds,
    annotations: &AnnotationProps,
) -> Element {
    match solution {
        MarkupText::Lines(items) => rsx! {
            ListRenderer {
                items,
                list_type: list_type.unwrap_or(ListType::Numbered),
                id_prefix: ids.solution(),
                columns,
                annotations: annotations.clone(),
            }
        },
        single => rsx! {
            ProcessedContent {
                text: single,
                id_prefix: ids.solution(),
                annotations: annotations.clone(),
            }
        },
    }
}
