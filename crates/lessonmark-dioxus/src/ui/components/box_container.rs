use super::{
    AnnotationProps, GeoGebraEmbed, GraphPlot, ImageRenderer, ListRenderer, MathText,
    ProcessedContent, TableRenderer,
};
use dioxus::prelude::*;
use lessonmark_engine::{BoxStyle, ElementIds, ImagePosition, LessonElement, MarkupText};

/// A titled box (definition, theorem, proof...): badge with its running
/// number, optional header text, then the body with any media beside it.
#[component]
pub fn BoxContainer(
    element: LessonElement,
    style: BoxStyle,
    index: usize,
    number: Option<usize>,
    annotations: AnnotationProps,
) -> Element {
    let ids = ElementIds::new(index);
    let root = ids.root().to_string();
    let header = element.header_text(&style).map(str::to_string);
    let show_preamble = !element.preamble_in_header(&style);
    let has_media = element.image.is_some() || element.graph2d.is_some();
    let image_left = element
        .image
        .as_ref()
        .is_some_and(|image| image.position == ImagePosition::Left);
    let layout = if image_left {
        "box-layout box-layout-reversed"
    } else {
        "box-layout"
    };

    rsx! {
        div {
            id: "{root}",
            class: "box {style.class}",
            if let Some(geogebra) = element.geogebra.clone() {
                div {
                    class: "box-action",
                    GeoGebraEmbed { config: geogebra, id_prefix: ids.geogebra() }
                }
            }
            div {
                class: "box-header",
                span {
                    class: "box-badge",
                    "{style.title}"
                    if let Some(number) = number {
                        span { class: "box-number", " {number}" }
                    }
                }
                if let Some(header) = header {
                    span { class: "box-separator" }
                    span { class: "box-title", MathText { text: header } }
                }
                if style.demonstration {
                    span { class: "box-qed", title: "Q.E.D." }
                }
            }
            if show_preamble {
                if let Some(preamble) = element.preamble.clone() {
                    ProcessedContent {
                        text: MarkupText::from(preamble),
                        id_prefix: ids.preamble(),
                        annotations: annotations.clone(),
                        read_only: true,
                        class: "box-preamble",
                    }
                }
            }
            div {
                class: "{layout}",
                div {
                    class: "box-body",
                    {box_body(&element, &ids, &annotations)}
                }
                if has_media {
                    div {
                        class: "box-media",
                        if let Some(image) = element.image.clone() {
                            ImageRenderer { image, in_box: true }
                        }
                        if let Some(graph) = element.graph2d.clone() {
                            GraphPlot { graph, id_prefix: ids.plot() }
                        }
                    }
                }
            }
        }
    }
}

/// Table, list, or plain content, in that order of preference.
fn box_body(element: &LessonElement, ids: &ElementIds, annotations: &AnnotationProps) -> Element {
    if let Some(rows) = element.table_data.clone() {
        return rsx! {
            TableRenderer { rows, id_prefix: ids.table(), annotations: annotations.clone() }
        };
    }

    if let Some((list_type, items)) = element.list_items() {
        return rsx! {
            ListRenderer {
                items: items.to_vec(),
                list_type,
                id_prefix: ids.list(),
                columns: element.columns,
                annotations: annotations.clone(),
            }
        };
    }

    rsx! {
        ProcessedContent {
            text: element.content.clone().unwrap_or_default(),
            id_prefix: ids.content(),
            annotations: annotations.clone(),
        }
    }
}
