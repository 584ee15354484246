use super::{
    AnnotationProps, BoxContainer, GeoGebraEmbed, GraphPlot, ImageRenderer, PracticeBox,
    ProcessedContent, TableRenderer,
};
use dioxus::prelude::*;
use lessonmark_engine::{ElementIds, LessonElement, RenderStrategy};

/// Dispatches an element to the renderer of its kind. `index` is the flat
/// element index that roots every identifier inside.
#[component]
pub fn ElementRenderer(
    element: LessonElement,
    index: usize,
    number: Option<usize>,
    annotations: AnnotationProps,
) -> Element {
    let ids = ElementIds::new(index);

    match element.kind.strategy() {
        RenderStrategy::Boxed(style) => rsx! {
            BoxContainer { element, style, index, number, annotations }
        },
        RenderStrategy::Practice => rsx! {
            PracticeBox { element, index, annotations }
        },
        RenderStrategy::Table => match element.table_data {
            Some(rows) => rsx! {
                TableRenderer { rows, id_prefix: ids.root().to_string(), annotations }
            },
            None => rsx! {},
        },
        RenderStrategy::Image => match element.image {
            Some(image) => rsx! {
                ImageRenderer { image }
            },
            None => rsx! {},
        },
        RenderStrategy::Graph => match element.graph2d {
            Some(graph) => rsx! {
                GraphPlot { graph, id_prefix: ids.root().to_string() }
            },
            None => rsx! {},
        },
        RenderStrategy::GeoGebra => match element.geogebra {
            Some(config) => rsx! {
                GeoGebraEmbed { config, id_prefix: ids.root().to_string() }
            },
            None => rsx! {},
        },
        RenderStrategy::Paragraph => rsx! {
            div {
                class: "paragraph",
                ProcessedContent {
                    text: element.content.unwrap_or_default(),
                    id_prefix: ids.content(),
                    annotations,
                }
            }
        },
    }
}
