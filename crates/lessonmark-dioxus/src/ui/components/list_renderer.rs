use super::{AnnotationProps, ProcessedContent};
use dioxus::prelude::*;
use lessonmark_engine::{ListType, MarkupText, list_entries, list_item_id};

/// Bullet or numbered list; `>>` items hang under the previous one.
#[component]
pub fn ListRenderer(
    items: Vec<String>,
    list_type: ListType,
    id_prefix: String,
    columns: Option<u8>,
    annotations: AnnotationProps,
) -> Element {
    let style = match columns {
        Some(n) if n > 1 => format!("grid-template-columns: repeat({n}, minmax(0, 1fr));"),
        _ => String::new(),
    };
    let layout = if style.is_empty() { "list" } else { "list list-grid" };
    let entries: Vec<(&str, Option<String>, MarkupText)> = list_entries(&items, list_type)
        .into_iter()
        .map(|entry| {
            let class = if entry.marker.is_some() {
                "list-item"
            } else {
                "list-item list-item-unmarked"
            };
            (class, entry.marker, MarkupText::from(entry.text))
        })
        .collect();

    rsx! {
        div {
            class: "{layout}",
            style: "{style}",
            for (idx, (item_class, marker, text)) in entries.into_iter().enumerate() {
                div {
                    class: "{item_class}",
                    if let Some(marker) = marker {
                        span { class: "list-marker", "{marker}" }
                    }
                    ProcessedContent {
                        text,
                        id_prefix: list_item_id(&id_prefix, idx),
                        annotations: annotations.clone(),
                    }
                }
            }
        }
    }
}
