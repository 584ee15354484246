//! Annotation state: which blanks are revealed and which words are highlighted.
//!
//! The store is owned by the caller and keyed by chapter id. The tokenizer
//! only ever sees a read-only [`AnnotationView`]; all writes go through
//! [`AnnotationStore::apply`] with an [`AnnotationAction`].

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

static NO_IDS: BTreeSet<String> = BTreeSet::new();

/// The two identifier sets recorded for one chapter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterAnnotations {
    #[serde(default)]
    pub highlighted_words: BTreeSet<String>,
    #[serde(default)]
    pub revealed_blanks: BTreeSet<String>,
}

impl ChapterAnnotations {
    /// Flips the highlight of a word, returning the new state.
    pub fn toggle_highlight(&mut self, word_id: &str) -> bool {
        toggle(&mut self.highlighted_words, word_id)
    }

    /// Flips the revealed state of a blank, returning the new state.
    pub fn toggle_blank(&mut self, blank_id: &str) -> bool {
        toggle(&mut self.revealed_blanks, blank_id)
    }

    pub fn is_highlighted(&self, word_id: &str) -> bool {
        self.highlighted_words.contains(word_id)
    }

    pub fn is_revealed(&self, blank_id: &str) -> bool {
        self.revealed_blanks.contains(blank_id)
    }

    pub fn view(&self) -> AnnotationView<'_> {
        AnnotationView::new(self)
    }
}

fn toggle(set: &mut BTreeSet<String>, id: &str) -> bool {
    if set.remove(id) {
        false
    } else {
        set.insert(id.to_string());
        true
    }
}

/// Read-only view handed to the tokenizer for one render pass.
#[derive(Debug, Clone, Copy)]
pub struct AnnotationView<'a> {
    highlighted: &'a BTreeSet<String>,
    revealed: &'a BTreeSet<String>,
    interactive: bool,
}

impl<'a> AnnotationView<'a> {
    pub fn new(chapter: &'a ChapterAnnotations) -> Self {
        Self {
            highlighted: &chapter.highlighted_words,
            revealed: &chapter.revealed_blanks,
            interactive: true,
        }
    }

    /// A view with nothing highlighted or revealed.
    pub fn empty() -> AnnotationView<'static> {
        AnnotationView {
            highlighted: &NO_IDS,
            revealed: &NO_IDS,
            interactive: true,
        }
    }

    /// Same sets, but words are not split out for highlighting.
    pub fn read_only(self) -> Self {
        Self {
            interactive: false,
            ..self
        }
    }

    pub fn interactive(&self) -> bool {
        self.interactive
    }

    pub fn is_highlighted(&self, word_id: &str) -> bool {
        self.highlighted.contains(word_id)
    }

    pub fn is_revealed(&self, blank_id: &str) -> bool {
        self.revealed.contains(blank_id)
    }
}

/// The only mutations the engine emits towards the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationAction {
    ToggleHighlight { chapter_id: String, word_id: String },
    RevealBlank { chapter_id: String, blank_id: String },
}

/// Annotation state for every chapter, persisted between sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationStore {
    #[serde(default)]
    chapters: BTreeMap<String, ChapterAnnotations>,
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chapter(&self, chapter_id: &str) -> Option<&ChapterAnnotations> {
        self.chapters.get(chapter_id)
    }

    /// Annotations of a chapter, empty when nothing was recorded yet.
    pub fn chapter_or_default(&self, chapter_id: &str) -> ChapterAnnotations {
        self.chapter(chapter_id).cloned().unwrap_or_default()
    }

    /// Applies one action; returns the new state of the toggled span.
    ///
    /// `RevealBlank` toggles, so a second click hides the blank again.
    pub fn apply(&mut self, action: AnnotationAction) -> bool {
        match action {
            AnnotationAction::ToggleHighlight {
                chapter_id,
                word_id,
            } => self
                .chapters
                .entry(chapter_id)
                .or_default()
                .toggle_highlight(&word_id),
            AnnotationAction::RevealBlank {
                chapter_id,
                blank_id,
            } => self
                .chapters
                .entry(chapter_id)
                .or_default()
                .toggle_blank(&blank_id),
        }
    }

    pub fn chapter_ids(&self) -> impl Iterator<Item = &str> {
        self.chapters.keys().map(String::as_str)
    }
}
