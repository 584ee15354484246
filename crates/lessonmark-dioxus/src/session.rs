use lessonmark_config::Config;
use lessonmark_engine::io::{self, IoError};
use lessonmark_engine::{
    AnnotationAction, AnnotationStore, ChapterAnnotations, ExercisesDocument, LessonDocument,
    QuizDocument,
};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Aucun chapitre actif pour la classe '{0}'.")]
    NoActiveChapter(String),
    #[error(transparent)]
    Content(#[from] IoError),
}

impl SessionError {
    /// What the reader is told; the error text itself goes in the details.
    pub fn summary(&self) -> &'static str {
        match self {
            SessionError::NoActiveChapter(_) => {
                "Aucun chapitre n'est disponible pour cette classe. Vérifiez le programme ou la configuration."
            }
            SessionError::Content(IoError::NotFound(_)) => {
                "Le fichier de leçon pour ce chapitre est introuvable."
            }
            SessionError::Content(IoError::Syntax(_) | IoError::Structure(_)) => {
                "Le fichier de leçon pour ce chapitre contient des erreurs et ne peut pas être affiché."
            }
            SessionError::Content(IoError::Io(_) | IoError::InvalidContentDir(_)) => {
                "Le contenu n'a pas pu être lu depuis le disque."
            }
        }
    }
}

/// The chapter being read and the annotation store it writes to.
#[derive(Debug)]
pub struct LessonSession {
    pub chapter_id: String,
    pub lesson: LessonDocument,
    /// Chapters may ship without a quiz or exercise sheet.
    pub quiz: Option<QuizDocument>,
    pub exercises: Option<ExercisesDocument>,
    store: AnnotationStore,
    state_path: PathBuf,
}

impl LessonSession {
    /// Loads the configured chapter, or the first active chapter of the class
    /// when none is configured.
    pub fn open(config: &Config) -> Result<Self, SessionError> {
        let chapter_id = match &config.chapter_id {
            Some(chapter_id) => chapter_id.clone(),
            None => first_active_chapter(config)?,
        };

        let lesson = io::load_lesson(&config.content_root, &config.class_id, &chapter_id)?;
        let quiz = optional(
            "quiz",
            io::load_quiz(&config.content_root, &config.class_id, &chapter_id),
        );
        let exercises = optional(
            "exercises",
            io::load_exercises(&config.content_root, &config.class_id, &chapter_id),
        );
        let state_path = config.annotations_path();
        let store = io::load_annotations(&state_path);
        log::info!(
            "opened chapter {chapter_id} of {} with state at {}",
            config.class_id,
            state_path.display()
        );

        Ok(Self {
            chapter_id,
            lesson,
            quiz,
            exercises,
            store,
            state_path,
        })
    }

    pub fn annotations(&self) -> ChapterAnnotations {
        self.store.chapter_or_default(&self.chapter_id)
    }

    /// Returns whether the word is highlighted afterwards.
    pub fn toggle_highlight(&mut self, word_id: String) -> bool {
        self.apply(AnnotationAction::ToggleHighlight {
            chapter_id: self.chapter_id.clone(),
            word_id,
        })
    }

    /// Returns whether the blank is revealed afterwards.
    pub fn toggle_blank(&mut self, blank_id: String) -> bool {
        self.apply(AnnotationAction::RevealBlank {
            chapter_id: self.chapter_id.clone(),
            blank_id,
        })
    }

    fn apply(&mut self, action: AnnotationAction) -> bool {
        let now_set = self.store.apply(action);
        // A failed save keeps the change in memory; the next toggle retries.
        if let Err(e) = io::save_annotations(&self.state_path, &self.store) {
            log::error!(
                "could not save annotations to {}: {e}",
                self.state_path.display()
            );
        }
        now_set
    }
}

/// A missing companion document is normal; a broken one is logged and left
/// out so the lesson still opens.
fn optional<T>(what: &str, loaded: Result<T, IoError>) -> Option<T> {
    match loaded {
        Ok(document) => Some(document),
        Err(IoError::NotFound(_)) => {
            log::info!("no {what} for this chapter");
            None
        }
        Err(e) => {
            log::warn!("{what} left out: {e}");
            None
        }
    }
}

fn first_active_chapter(config: &Config) -> Result<String, SessionError> {
    let curriculum = io::load_curriculum(&config.content_root)?;
    curriculum
        .active_chapters(&config.class_id)
        .next()
        .map(|chapter| chapter.id.clone())
        .ok_or_else(|| SessionError::NoActiveChapter(config.class_id.clone()))
}
