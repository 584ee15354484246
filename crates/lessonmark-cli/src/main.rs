use anyhow::{Context, Result};
use lessonmark_config::Config;
use lessonmark_engine::io::{self, ContentKind, IoError};
use lessonmark_engine::markup::Segment;
use lessonmark_engine::{
    AnnotationStore, ChapterAnnotations, ExerciseIds, ExercisesDocument, LessonDocument,
    MarkupField, QuizDocument, QuizIds, ValidationResult, element_index, parse, validate,
};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use std::{env, fs, process};

const USAGE: &str = "Usage:
  lessonmark-cli validate <content.json>
  lessonmark-cli segments <content.json> [chapter-id]";

#[derive(Debug)]
enum Document {
    Lesson(LessonDocument),
    Quiz(QuizDocument),
    Exercises(ExercisesDocument),
}

#[derive(Debug, Serialize)]
struct FieldReport {
    prefix: String,
    read_only: bool,
    segments: Vec<Segment>,
}

/// One lesson element, quiz question or exercise.
#[derive(Debug, Serialize)]
struct ItemReport {
    id: String,
    kind: String,
    fields: Vec<FieldReport>,
}

/// Quiz and exercise files are told apart from lessons by their top-level key.
fn kind_of(value: &Value) -> ContentKind {
    if value.get("questions").is_some() {
        ContentKind::Quiz
    } else if value.get("exercises").is_some() {
        ContentKind::Exercises
    } else {
        ContentKind::Lesson
    }
}

fn load(text: &str) -> Result<Document, IoError> {
    let value: Value = serde_json::from_str(text).map_err(IoError::Syntax)?;
    Ok(match kind_of(&value) {
        ContentKind::Lesson => Document::Lesson(io::parse_lesson(text)?),
        ContentKind::Quiz => Document::Quiz(io::parse_document(text)?),
        ContentKind::Exercises => Document::Exercises(io::parse_document(text)?),
    })
}

/// `Err` carries the message shown to the author: the validator's own for
/// lessons, the parse error otherwise.
fn check(text: &str) -> Result<String, String> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| IoError::Syntax(e).to_string())?;
    if kind_of(&value) == ContentKind::Lesson
        && let ValidationResult::Invalid(message) = validate(&value)
    {
        return Err(message);
    }

    match load(text).map_err(|e| e.to_string())? {
        Document::Lesson(lesson) => Ok(format!(
            "OK: \"{}\" ({} sections, {} subsections)",
            lesson.header.title,
            lesson.sections.len(),
            lesson.subsection_count()
        )),
        Document::Quiz(quiz) => {
            for question in quiz.questions.iter().filter(|q| q.correct_option().is_none()) {
                log::warn!("question {} has no correct option", question.id);
            }
            Ok(format!("OK: quiz ({} questions)", quiz.questions.len()))
        }
        Document::Exercises(sheet) => Ok(format!("OK: {} exercises", sheet.exercises.len())),
    }
}

fn field_reports(fields: Vec<MarkupField>, chapter: &ChapterAnnotations) -> Vec<FieldReport> {
    fields
        .into_iter()
        .map(|field| {
            let view = chapter.view();
            let view = if field.read_only { view.read_only() } else { view };
            FieldReport {
                segments: parse(&field.text, &field.prefix, &view),
                prefix: field.prefix,
                read_only: field.read_only,
            }
        })
        .collect()
}

/// Every interactive field of the document with its segment tree.
fn segment_report(document: &Document, chapter: &ChapterAnnotations) -> Vec<ItemReport> {
    match document {
        Document::Lesson(lesson) => lesson
            .elements()
            .map(|((s, sub, i), element)| {
                let index = element_index(s, sub, i);
                ItemReport {
                    id: format!("el-{index}"),
                    kind: serde_json::to_value(element.kind)
                        .ok()
                        .and_then(|kind| kind.as_str().map(str::to_string))
                        .unwrap_or_else(|| "unknown".to_string()),
                    fields: field_reports(element.markup_fields(index), chapter),
                }
            })
            .collect(),
        Document::Quiz(quiz) => quiz
            .questions
            .iter()
            .enumerate()
            .map(|(i, question)| ItemReport {
                id: QuizIds::new(i).root().to_string(),
                kind: question.kind.clone(),
                fields: field_reports(question.markup_fields(i), chapter),
            })
            .collect(),
        Document::Exercises(sheet) => sheet
            .exercises
            .iter()
            .enumerate()
            .map(|(i, exercise)| ItemReport {
                id: ExerciseIds::new(i).root().to_string(),
                kind: "exercise".to_string(),
                fields: field_reports(exercise.markup_fields(i), chapter),
            })
            .collect(),
    }
}

/// Annotations of `chapter_id` from the configured state file, if any.
fn stored_annotations(chapter_id: Option<&str>) -> Result<ChapterAnnotations> {
    let Some(chapter_id) = chapter_id else {
        return Ok(ChapterAnnotations::default());
    };
    let store = match Config::load()? {
        Some(config) => io::load_annotations(&config.annotations_path()),
        None => {
            log::warn!("no config file, showing {chapter_id} without annotations");
            AnnotationStore::new()
        }
    };
    Ok(store.chapter_or_default(chapter_id))
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["validate", file] => match check(&read(Path::new(file))?) {
            Ok(summary) => println!("{summary}"),
            Err(message) => {
                eprintln!("{message}");
                process::exit(1);
            }
        },
        ["segments", file, rest @ ..] if rest.len() <= 1 => {
            let document = load(&read(Path::new(file))?)?;
            let chapter = stored_annotations(rest.first().copied())?;
            let report = segment_report(&document, &chapter);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            eprintln!("{USAGE}");
            process::exit(1);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LESSON: &str = r#"{
        "header": {"title": "Suites", "classe": "1ere", "chapter": "Chapitre 2"},
        "sections": [{"title": "Définition", "subsections": [{"title": "Terme", "elements": [
            {"type": "theorem-box", "title": "Récurrence", "content": "Si $u_0 = ___1___$ alors"},
            {"type": "image", "image": {"src": "suite.png"}}
        ]}]}]
    }"#;

    #[test]
    fn valid_lesson_is_summarized() {
        assert_eq!(
            check(LESSON),
            Ok("OK: \"Suites\" (1 sections, 1 subsections)".to_string())
        );
    }

    #[test]
    fn validator_message_is_verbatim() {
        let error = check(r#"{"header": {"title": "T", "classe": "1ere"}, "sections": []}"#);
        assert_eq!(
            error,
            Err("L'en-tête (header) doit contenir le champ : 'chapter'.".to_string())
        );
    }

    #[test]
    fn syntax_errors_are_reported() {
        let error = check("{").unwrap_err();
        assert!(error.starts_with("Erreur de Syntaxe JSON"), "{error}");
    }

    #[test]
    fn report_lists_fields_with_segments() {
        let lesson = load(LESSON).unwrap();
        let mut chapter = ChapterAnnotations::default();
        chapter.toggle_blank("el-0-cont-1-m-0");

        let report = segment_report(&lesson, &chapter);

        assert_eq!(report.len(), 2);
        assert_eq!(report[0].kind, "theorem-box");
        assert_eq!(report[0].fields[0].prefix, "el-0-cont");
        let math = report[0].fields[0].segments[1].as_math().unwrap();
        assert!(math.blanks[0].revealed);
        assert_eq!(report[1].id, "el-1");
        assert!(report[1].fields.is_empty());
    }

    #[test]
    fn report_serializes_to_json() {
        let lesson = load(LESSON).unwrap();
        let report = segment_report(&lesson, &ChapterAnnotations::default());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json[0]["id"], "el-0");
        assert_eq!(json[0]["fields"][0]["read_only"], false);
    }

    const QUIZ: &str = r#"{"questions": [{
        "id": "q1",
        "question": "Que vaut $u_1$ ?",
        "options": [
            {"text": "___2___"},
            {"text": "3", "is_correct": true, "explanation": "On ajoute la raison."}
        ]
    }]}"#;

    const EXERCISES: &str = r#"{"exercises": [{
        "id": "ex1",
        "title": "Suite arithmétique",
        "statement": "Soit $u_0 = 1$ et $r = 2$.",
        "sub_questions": [{"text": "Calculer ___u_1___.", "questionNumber": "1"}],
        "hint": [{"text": "Ajouter $r$.", "questionNumber": "1"}],
        "solution": ["u_1 = 3"]
    }]}"#;

    #[test]
    fn quiz_and_exercise_files_are_recognized() {
        assert_eq!(check(QUIZ), Ok("OK: quiz (1 questions)".to_string()));
        assert_eq!(check(EXERCISES), Ok("OK: 1 exercises".to_string()));
    }

    #[test]
    fn wrong_quiz_shape_is_a_structure_error() {
        let error = check(r#"{"questions": {}}"#).unwrap_err();
        assert!(error.starts_with("Erreur de Structure JSON"), "{error}");
    }

    #[test]
    fn quiz_report_lists_read_only_fields() {
        let quiz = load(QUIZ).unwrap();
        let report = segment_report(&quiz, &ChapterAnnotations::default());

        assert_eq!(report[0].id, "quiz-0");
        assert_eq!(report[0].kind, "mcq");
        let prefixes: Vec<_> = report[0].fields.iter().map(|f| f.prefix.as_str()).collect();
        assert_eq!(prefixes, vec!["quiz-0-q", "quiz-0-opt-0", "quiz-0-opt-1", "quiz-0-expl"]);
        assert!(report[0].fields.iter().all(|f| f.read_only));
    }

    #[test]
    fn exercise_report_addresses_blanks() {
        let sheet = load(EXERCISES).unwrap();
        let mut chapter = ChapterAnnotations::default();
        chapter.toggle_blank("ex-0-q-0-0-l-0-p-0-b-1");

        let report = segment_report(&sheet, &chapter);
        let json = serde_json::to_string(&report).unwrap();

        assert_eq!(report[0].id, "ex-0");
        assert_eq!(report[0].fields.len(), 4);
        assert!(json.contains(r#""id":"ex-0-q-0-0-l-0-p-0-b-1""#), "{json}");
        assert!(json.contains(r#""revealed":true"#), "{json}");
    }
}
