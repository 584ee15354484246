use dioxus::prelude::*;
use lessonmark_engine::MathRenderer;
use lessonmark_engine::math::directive;
use lessonmark_engine::markup::{MathBlank, MathSegment};
use std::ops::Deref;
use std::rc::Rc;

/// The math renderer shared by every formula of the tree, provided once at
/// the root so its cache outlives single renders.
#[derive(Clone, Default)]
pub struct MathContext(Rc<MathRenderer>);

impl MathContext {
    pub fn new(renderer: MathRenderer) -> Self {
        Self(Rc::new(renderer))
    }
}

impl Deref for MathContext {
    type Target = MathRenderer;

    fn deref(&self) -> &MathRenderer {
        &self.0
    }
}

/// The provided renderer, or a fresh trusting one when the tree has none.
fn use_math_renderer() -> MathContext {
    try_use_context::<MathContext>().unwrap_or_default()
}

/// DOM id of a formula holding blanks, derived from its first blank.
fn formula_dom_id(blanks: &[MathBlank]) -> Option<String> {
    blanks.first().map(|blank| format!("{}-math", blank.id))
}

/// The blank of this formula a click landed on, from the id the listener
/// reported.
pub fn clicked_blank<'a>(blanks: &'a [MathBlank], target_id: &str) -> Option<&'a MathBlank> {
    blanks.iter().find(|blank| blank.id == target_id)
}

/// Typeset formulas are raw markup, outside the reach of rsx handlers. This
/// listener sits on the formula span and reports the id of the blank
/// (`<mrow id class>` spliced by the renderer) that was clicked.
pub fn blank_click_script(formula_id: &str) -> String {
    let selector = format!(
        ".{}[id], .{}[id]",
        directive::HIDDEN_CLASS,
        directive::REVEALED_CLASS
    );
    format!(
        r#"(function() {{
            var root = document.getElementById({root_js});
            if (!root || root.dataset.blankListener) return;
            root.dataset.blankListener = "1";
            root.addEventListener("click", function(e) {{
                var blank = e.target.closest({selector_js});
                if (!blank || !root.contains(blank)) return;
                e.stopPropagation();
                dioxus.send(blank.id);
            }});
        }})();"#,
        root_js = js_string(formula_id),
        selector_js = js_string(&selector),
    )
}

fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

#[component]
pub fn MathSpan(segment: MathSegment, on_reveal_blank: Callback<String>) -> Element {
    let renderer = use_math_renderer();
    let html = renderer.render(&segment.raw, segment.display).html().into_owned();
    let formula_id = formula_dom_id(&segment.blanks);

    use_effect({
        let formula_id = formula_id.clone();
        let blanks = segment.blanks.clone();
        move || {
            let Some(formula_id) = formula_id.clone() else {
                return;
            };
            let blanks = blanks.clone();
            let mut listener = document::eval(&blank_click_script(&formula_id));
            spawn(async move {
                while let Ok(target_id) = listener.recv::<String>().await {
                    match clicked_blank(&blanks, &target_id) {
                        Some(blank) => on_reveal_blank.call(blank.id.clone()),
                        None => log::debug!("click on unknown math blank {target_id}"),
                    }
                }
            });
        }
    });

    let mut class = String::from(if segment.display {
        "math math-display"
    } else {
        "math math-inline"
    });
    if !segment.blanks.is_empty() {
        class.push_str(" math-with-blanks");
    }

    rsx! {
        span {
            id: formula_id,
            class: "{class}",
            dangerous_inner_html: "{html}",
        }
    }
}

/// Titles and headers: escaped text with its `$...$` runs typeset.
#[component]
pub fn MathText(text: String) -> Element {
    let renderer = use_math_renderer();
    let html = renderer.render_text(&text);

    rsx! {
        span { class: "math-text", dangerous_inner_html: "{html}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use lessonmark_engine::markup::math::math_segment;
    use lessonmark_engine::markup::id::IdPath;
    use lessonmark_engine::{AnnotationView, ChapterAnnotations};
    use pretty_assertions::assert_eq;

    fn blank(id: &str, revealed: bool) -> MathBlank {
        MathBlank {
            id: id.to_string(),
            answer: "5".to_string(),
            revealed,
        }
    }

    #[test]
    fn click_targets_only_the_blank_under_the_pointer() {
        let blanks = [blank("c-1-m-0", true), blank("c-1-m-1", false)];

        let second = clicked_blank(&blanks, "c-1-m-1").unwrap();
        assert_eq!(second.id, "c-1-m-1");
        let first = clicked_blank(&blanks, "c-1-m-0").unwrap();
        assert_eq!(first.id, "c-1-m-0");
        assert!(clicked_blank(&blanks, "c-1-m-2").is_none());
    }

    #[test]
    fn click_script_is_scoped_to_its_formula() {
        let script = blank_click_script("c-1-m-0-math");

        assert!(script.contains(r#"getElementById("c-1-m-0-math")"#), "{script}");
        assert!(script.contains(".blank-hidden[id], .blank-revealed[id]"), "{script}");
        assert!(script.contains("dioxus.send(blank.id)"));
    }

    #[component]
    fn Harness(segment: MathSegment, trusted: bool) -> Element {
        use_context_provider(|| MathContext::new(MathRenderer::new().trust_directives(trusted)));
        rsx! {
            MathSpan { segment, on_reveal_blank: move |_| {} }
        }
    }

    fn render_math(inner: &str, display: bool, chapter: &ChapterAnnotations, trusted: bool) -> String {
        let segment = math_segment(inner, display, &IdPath::root("c-1"), &AnnotationView::new(chapter));
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { segment, trusted });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn trusted_blank_is_addressable_inside_formula() {
        let html = render_math("a + ___5___ = b", false, &ChapterAnnotations::default(), true);

        assert!(html.contains("math math-inline math-with-blanks"), "{html}");
        assert!(html.contains(r#"id="c-1-m-0-math""#), "{html}");
        assert!(html.contains(r#"id="c-1-m-0""#), "{html}");
        assert!(html.contains("blank-hidden"));
    }

    #[test]
    fn revealed_math_blank_shows_answer_class() {
        let mut chapter = ChapterAnnotations::default();
        chapter.toggle_blank("c-1-m-0");

        let html = render_math("a + ___5___ = b", false, &chapter, true);
        assert!(html.contains("blank-revealed"), "{html}");
    }

    #[test]
    fn untrusted_formula_drops_identifiers() {
        let html = render_math("a + ___5___ = b", false, &ChapterAnnotations::default(), false);
        assert!(!html.contains(r#"id="c-1-m-0""#), "{html}");
        assert!(!html.contains("blank-hidden"));
    }

    #[test]
    fn math_text_escapes_plain_runs() {
        #[component]
        fn Title() -> Element {
            rsx! { MathText { text: "Si <x> alors $x^2$".to_string() } }
        }
        let mut dom = VirtualDom::new(Title);
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("Si &lt;x&gt; alors"), "{html}");
        assert!(html.contains("<math"), "{html}");
    }
}
