use dioxus::prelude::*;
use lessonmark_engine::markup::BlankSegment;

/// A fill-in blank. The answer is always in the markup; while hidden the
/// stylesheet paints it transparent over a dotted rule, so the blank keeps the
/// width of its answer.
#[component]
pub fn RevealableBlank(blank: BlankSegment, on_reveal_blank: Callback<String>) -> Element {
    let (state, title) = if blank.revealed {
        ("blank-revealed", "Cliquez pour cacher")
    } else {
        ("blank-hidden", "Cliquez pour révéler")
    };
    let id = blank.id.clone();

    rsx! {
        span {
            id: "{blank.id}",
            class: "blank {state}",
            title: "{title}",
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                on_reveal_blank.call(id.clone());
            },
            "{blank.answer}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    #[component]
    fn Harness(blank: BlankSegment) -> Element {
        rsx! {
            RevealableBlank { blank, on_reveal_blank: move |_| {} }
        }
    }

    fn render_blank(revealed: bool) -> String {
        let blank = BlankSegment {
            id: "el-0-cont-0-l-0-p-0-b-1".to_string(),
            answer: "image".to_string(),
            revealed,
        };
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { blank });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn hidden_blank_carries_its_identifier() {
        let html = render_blank(false);
        assert!(html.contains(r#"id="el-0-cont-0-l-0-p-0-b-1""#), "{html}");
        assert!(html.contains("blank-hidden"));
        assert!(html.contains("Cliquez pour révéler"));
    }

    #[test]
    fn revealed_blank_shows_answer_state() {
        let html = render_blank(true);
        assert!(html.contains("blank-revealed"), "{html}");
        assert!(!html.contains("blank-hidden"));
        assert!(html.contains(">image</span>"));
    }
}
