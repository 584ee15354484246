//! Figures whose drawing is left to an external viewer: the component shows
//! what would be plotted so the lesson stays readable without it.

use dioxus::prelude::*;
use lessonmark_engine::{GeoGebraConfig, Graph2d};

const GEOGEBRA_MATERIAL_URL: &str = "https://www.geogebra.org/m/";

fn domain(label: &str, range: Option<(f64, f64)>) -> Option<String> {
    range.map(|(from, to)| format!("{label} ∈ [{from} ; {to}]"))
}

#[component]
pub fn GraphPlot(graph: Graph2d, id_prefix: String) -> Element {
    let domains: Vec<String> = [domain("x", graph.x_domain), domain("y", graph.y_domain)]
        .into_iter()
        .flatten()
        .collect();

    rsx! {
        figure {
            id: "{id_prefix}",
            class: "graph-2d",
            if let Some(title) = &graph.title {
                figcaption { "{title}" }
            }
            ul {
                class: "graph-functions",
                for function in &graph.functions {
                    li {
                        style: function.color.as_deref().map(|c| format!("color: {c};")).unwrap_or_default(),
                        code { "y = {function.expression}" }
                    }
                }
            }
            if !domains.is_empty() {
                p { class: "graph-domain", {domains.join(", ")} }
            }
        }
    }
}

#[component]
pub fn GeoGebraEmbed(config: GeoGebraConfig, id_prefix: String) -> Element {
    let title = config.title.clone().unwrap_or_else(|| "GeoGebra".to_string());

    rsx! {
        div {
            id: "{id_prefix}",
            class: "geogebra",
            if let Some(material) = &config.material_id {
                a {
                    class: "geogebra-link",
                    href: "{GEOGEBRA_MATERIAL_URL}{material}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "{title}"
                }
            } else {
                span { class: "geogebra-title", "{title}" }
            }
            if !config.commands.is_empty() {
                pre { class: "geogebra-commands", {config.commands.join("\n")} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    #[test]
    fn graph_lists_functions_and_domain() {
        let graph: Graph2d = serde_json::from_str(
            r#"{"functions": [{"fn": "x^2", "color": "red"}], "xDomain": [-2, 2], "title": "Parabole"}"#,
        )
        .unwrap();
        let mut dom = VirtualDom::new_with_props(
            GraphPlot,
            GraphPlotProps {
                graph,
                id_prefix: "el-5-plot".to_string(),
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains(r#"id="el-5-plot""#), "{html}");
        assert!(html.contains("y = x^2"));
        assert!(html.contains("Parabole"));
        assert!(html.contains("x ∈ [-2 ; 2]"), "{html}");
    }

    #[test]
    fn geogebra_links_to_material() {
        let config: GeoGebraConfig =
            serde_json::from_str(r#"{"materialId": "abc123", "title": "Cercle"}"#).unwrap();
        let mut dom = VirtualDom::new_with_props(
            GeoGebraEmbed,
            GeoGebraEmbedProps {
                config,
                id_prefix: "el-1-ggb".to_string(),
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("https://www.geogebra.org/m/abc123"), "{html}");
        assert!(html.contains("Cercle"));
    }
}
