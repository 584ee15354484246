use crate::annotations::AnnotationStore;
use crate::content::{Curriculum, ExercisesDocument, LessonDocument, QuizDocument};
use crate::validation::validate;
use relative_path::{RelativePath, RelativePathBuf};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Fichier introuvable : {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(
        "Erreur de Syntaxe JSON dans le fichier : {0}. Vérifiez les virgules et les guillemets."
    )]
    Syntax(serde_json::Error),
    #[error("Erreur de Structure JSON : {0}")]
    Structure(String),
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
}

/// The three documents published for each chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Lesson,
    Quiz,
    Exercises,
}

impl ContentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::Lesson => "lesson",
            ContentKind::Quiz => "quiz",
            ContentKind::Exercises => "exercises",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const CURRICULUM_FILE: &str = "curriculum.json";

/// `content/{class}/{chapter}/{kind}/{chapter}_{kind}.json`, relative to the
/// content root.
pub fn content_path(class_id: &str, chapter_id: &str, kind: ContentKind) -> RelativePathBuf {
    RelativePathBuf::from(format!(
        "content/{class_id}/{chapter_id}/{kind}/{chapter_id}_{kind}.json"
    ))
}

/// Read a content file and return its text
pub fn read_file(relative_path: &RelativePath, content_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(content_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Parse a lesson: JSON syntax, then the structural check, then the typed model.
pub fn parse_lesson(text: &str) -> Result<LessonDocument, IoError> {
    let value: Value = serde_json::from_str(text).map_err(IoError::Syntax)?;
    validate(&value).into_result().map_err(IoError::Structure)?;
    serde_json::from_value(value).map_err(|e| IoError::Structure(e.to_string()))
}

pub fn load_lesson(
    content_root: &Path,
    class_id: &str,
    chapter_id: &str,
) -> Result<LessonDocument, IoError> {
    let path = content_path(class_id, chapter_id, ContentKind::Lesson);
    log::info!("loading lesson {path}");
    parse_lesson(&read_file(&path, content_root)?)
}

pub fn load_quiz(
    content_root: &Path,
    class_id: &str,
    chapter_id: &str,
) -> Result<QuizDocument, IoError> {
    load_json(&content_path(class_id, chapter_id, ContentKind::Quiz), content_root)
}

pub fn load_exercises(
    content_root: &Path,
    class_id: &str,
    chapter_id: &str,
) -> Result<ExercisesDocument, IoError> {
    load_json(
        &content_path(class_id, chapter_id, ContentKind::Exercises),
        content_root,
    )
}

pub fn load_curriculum(content_root: &Path) -> Result<Curriculum, IoError> {
    load_json(RelativePath::new(CURRICULUM_FILE), content_root)
}

fn load_json<T: DeserializeOwned>(
    relative_path: &RelativePath,
    content_root: &Path,
) -> Result<T, IoError> {
    log::info!("loading {relative_path}");
    parse_document(&read_file(relative_path, content_root)?)
}

/// Parse a quiz, exercise sheet or curriculum. Only lessons go through the
/// structural validator.
pub fn parse_document<T: DeserializeOwned>(text: &str) -> Result<T, IoError> {
    let value: Value = serde_json::from_str(text).map_err(IoError::Syntax)?;
    serde_json::from_value(value).map_err(|e| IoError::Structure(e.to_string()))
}

/// Load the annotation store. A missing file is an empty store. An
/// unreadable one is logged and replaced by an empty store so the reader is
/// never locked out; when it does not parse, it is first moved aside to
/// [`corrupt_path`] so the next save cannot destroy it.
pub fn load_annotations(path: &Path) -> AnnotationStore {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return AnnotationStore::new(),
        Err(e) => {
            log::error!("could not read annotations at {}: {e}", path.display());
            return AnnotationStore::new();
        }
    };

    match serde_json::from_str(&text) {
        Ok(store) => store,
        Err(e) => {
            log::error!("annotations at {} are corrupted: {e}", path.display());
            let backup = corrupt_path(path);
            match fs::rename(path, &backup) {
                Ok(()) => log::warn!("corrupted annotations kept at {}", backup.display()),
                Err(e) => log::error!("could not move corrupted annotations aside: {e}"),
            }
            AnnotationStore::new()
        }
    }
}

/// Where an unparseable annotation file is kept: `annotations.json.corrupt`.
pub fn corrupt_path(path: &Path) -> PathBuf {
    with_suffix(path, ".corrupt")
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

/// Writes the store next to `path` first and renames it into place, so a
/// crash mid-save leaves the previous file intact.
pub fn save_annotations(path: &Path, store: &AnnotationStore) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(store).map_err(IoError::Syntax)?;
    let staging = with_suffix(path, ".tmp");
    fs::write(&staging, json)?;
    fs::rename(&staging, path)?;
    Ok(())
}

pub fn validate_content_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidContentDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
