use super::{AnnotationProps, HighlightableWord, MathSpan, RevealableBlank};
use dioxus::prelude::*;
use lessonmark_engine::markup::{Inline, Line, Segment};
use lessonmark_engine::{MarkupText, parse};

/// One markup field, tokenized and rendered with its interactive spans.
///
/// `read_only` fields (box preambles) render words as plain text; their
/// blanks still reveal.
#[component]
pub fn ProcessedContent(
    text: MarkupText,
    id_prefix: String,
    annotations: AnnotationProps,
    #[props(default)] read_only: bool,
    #[props(default)] class: String,
) -> Element {
    let view = annotations.chapter.view();
    let view = if read_only { view.read_only() } else { view };
    let segments = parse(&text, &id_prefix, &view);

    rsx! {
        div {
            class: "processed-content {class}",
            for segment in segments {
                {render_segment(segment, &annotations)}
            }
        }
    }
}

fn render_segment(segment: Segment, annotations: &AnnotationProps) -> Element {
    match segment {
        Segment::Math(math) => rsx! {
            MathSpan { segment: math, on_reveal_blank: annotations.on_reveal_blank }
        },
        Segment::Text(run) => rsx! {
            span {
                class: "text-run",
                for line in run.lines {
                    {render_line(line, annotations)}
                }
            }
        },
    }
}

fn render_line(line: Line, annotations: &AnnotationProps) -> Element {
    let Line {
        quote,
        inlines,
        break_after,
    } = line;

    if quote {
        return rsx! {
            div { class: "quote-line", {render_inlines(inlines, annotations)} }
        };
    }

    rsx! {
        {render_inlines(inlines, annotations)}
        if break_after {
            br {}
        }
    }
}

fn render_inlines(inlines: Vec<Inline>, annotations: &AnnotationProps) -> Element {
    rsx! {
        for inline in inlines {
            {render_inline(inline, annotations)}
        }
    }
}

fn render_inline(inline: Inline, annotations: &AnnotationProps) -> Element {
    match inline {
        Inline::Plain(text) => rsx! { span { "{text}" } },
        Inline::Bold(children) => rsx! {
            strong { class: "bold", {render_inlines(children, annotations)} }
        },
        Inline::Blank(blank) => rsx! {
            RevealableBlank { blank, on_reveal_blank: annotations.on_reveal_blank }
        },
        Inline::Word(word) => rsx! {
            HighlightableWord { word, on_toggle_highlight: annotations.on_toggle_highlight }
        },
    }
}
