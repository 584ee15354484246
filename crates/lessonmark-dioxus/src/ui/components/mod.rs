pub mod box_container;
pub mod element_renderer;
pub mod error_screen;
pub mod exercise_card;
pub mod highlightable_word;
pub mod image_renderer;
pub mod lesson_view;
pub mod list_renderer;
pub mod math_span;
pub mod media_embed;
pub mod practice_box;
pub mod processed_content;
pub mod quiz_view;
pub mod revealable_blank;
pub mod table_renderer;

pub use box_container::BoxContainer;
pub use element_renderer::ElementRenderer;
pub use error_screen::ErrorScreen;
pub use exercise_card::{ExerciseCard, ExercisesView};
pub use highlightable_word::HighlightableWord;
pub use image_renderer::ImageRenderer;
pub use lesson_view::LessonView;
pub use list_renderer::ListRenderer;
pub use math_span::{MathContext, MathSpan, MathText};
pub use media_embed::{GeoGebraEmbed, GraphPlot};
pub use practice_box::PracticeBox;
pub use processed_content::ProcessedContent;
pub use quiz_view::QuizView;
pub use revealable_blank::RevealableBlank;
pub use table_renderer::TableRenderer;

use dioxus::prelude::*;
use lessonmark_engine::ChapterAnnotations;

/// Annotation state of the open chapter together with the two callbacks that
/// change it. Threaded from the lesson view down to every span.
#[derive(Clone, PartialEq)]
pub struct AnnotationProps {
    pub chapter: ChapterAnnotations,
    pub on_toggle_highlight: Callback<String>,
    pub on_reveal_blank: Callback<String>,
}

impl AnnotationProps {
    /// Fixed state that ignores interaction, for previews and tests.
    pub fn detached(chapter: ChapterAnnotations) -> Self {
        Self {
            chapter,
            on_toggle_highlight: Callback::new(|_: String| {}),
            on_reveal_blank: Callback::new(|_: String| {}),
        }
    }
}
