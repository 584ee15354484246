use dioxus::prelude::*;
use lessonmark_engine::markup::WordSegment;

/// Class list of a word. Highlighted words that touch a highlighted
/// neighbour drop the rounded edge and margin on that side so a phrase reads
/// as one marker stroke.
pub fn word_classes(word: &WordSegment) -> String {
    let mut classes = String::from("word");
    if word.highlighted {
        classes.push_str(" word-highlighted");
    }
    if word.joins_left() {
        classes.push_str(" joins-left");
    }
    if word.joins_right() {
        classes.push_str(" joins-right");
    }
    classes
}

/// A word that toggles its highlight on double click only, so single clicks
/// and text selection stay free.
#[component]
pub fn HighlightableWord(word: WordSegment, on_toggle_highlight: Callback<String>) -> Element {
    let classes = word_classes(&word);
    let id = word.id.clone();

    rsx! {
        span {
            id: "{word.id}",
            class: "{classes}",
            ondoubleclick: move |evt: MouseEvent| {
                evt.prevent_default();
                on_toggle_highlight.call(id.clone());
            },
            "{word.text}"
        }
    }
}
