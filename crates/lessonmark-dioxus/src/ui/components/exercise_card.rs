use super::{AnnotationProps, ImageRenderer, ProcessedContent};
use dioxus::prelude::*;
use lessonmark_engine::{
    Exercise, ExerciseIds, ExercisesDocument, MarkupText, SubQuestion, sub_question_label,
};

#[component]
pub fn ExercisesView(sheet: ExercisesDocument, annotations: AnnotationProps) -> Element {
    rsx! {
        div {
            class: "exercises",
            if sheet.exercises.is_empty() {
                div { class: "exercises-empty", "Aucun exercice pour ce chapitre." }
            }
            for (index, exercise) in sheet.exercises.into_iter().enumerate() {
                ExerciseCard { key: "{index}", exercise, index, annotations: annotations.clone() }
            }
        }
    }
}

/// Statement, questions with their hints, and a solution kept hidden until
/// asked for.
#[component]
pub fn ExerciseCard(exercise: Exercise, index: usize, annotations: AnnotationProps) -> Element {
    let mut show_solution = use_signal(|| false);
    let ids = ExerciseIds::new(index);
    let root = ids.root().to_string();
    let number = format!("{:02}", index + 1);

    rsx! {
        div {
            id: "{root}",
            class: "exercise-card",
            div {
                class: "exercise-header",
                span { class: "exercise-number", "{number}" }
                h3 { class: "exercise-title", "{exercise.title}" }
            }
            ProcessedContent {
                text: MarkupText::from(exercise.statement.clone()),
                id_prefix: ids.statement(),
                annotations: annotations.clone(),
                class: "exercise-statement",
            }
            if !exercise.images.is_empty() {
                div {
                    class: "exercise-images",
                    for image in exercise.images.iter().cloned() {
                        ImageRenderer { image, in_box: true }
                    }
                }
            }
            div {
                class: "exercise-questions",
                for (j, question) in exercise.sub_questions.iter().enumerate() {
                    QuestionLine {
                        key: "{j}",
                        question: question.clone(),
                        hints: exercise
                            .hints_for(&question.number(j))
                            .map(|(h, hint)| (ids.hint(h), hint.text.clone()))
                            .collect::<Vec<_>>(),
                        exercise_index: index,
                        index: j,
                        annotations: annotations.clone(),
                    }
                }
            }
            if !exercise.solution.is_empty() {
                button {
                    class: "exercise-solution-toggle",
                    onclick: move |_| show_solution.toggle(),
                    if show_solution() { "Masquer" } else { "Correction" }
                }
                if show_solution() {
                    div {
                        class: "exercise-solution",
                        for (s, line) in exercise.solution.iter().enumerate() {
                            ProcessedContent {
                                key: "{s}",
                                text: MarkupText::from(line.clone()),
                                id_prefix: ids.solution(s),
                                annotations: annotations.clone(),
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One numbered question. `hints` pairs each hint's identifier prefix with
/// its text.
#[component]
fn QuestionLine(
    question: SubQuestion,
    hints: Vec<(String, String)>,
    exercise_index: usize,
    index: usize,
    annotations: AnnotationProps,
) -> Element {
    let mut show_hints = use_signal(|| false);
    let ids = ExerciseIds::new(exercise_index);
    let label = format!("{}.", question.number(index));

    rsx! {
        div {
            class: "exercise-question",
            span { class: "exercise-question-label", "{label}" }
            div {
                class: "exercise-question-body",
                ProcessedContent {
                    text: MarkupText::from(question.text.clone()),
                    id_prefix: ids.question(index),
                    annotations: annotations.clone(),
                }
                if let Some(image) = question.image.clone() {
                    ImageRenderer { image, in_box: true }
                }
                for (k, sub) in question.sub_sub_questions.iter().enumerate() {
                    div {
                        key: "{k}",
                        class: "exercise-sub-question",
                        span { class: "exercise-sub-label", {sub_question_label(k)} }
                        ProcessedContent {
                            text: MarkupText::from(sub.text.clone()),
                            id_prefix: ids.sub_question(index, k),
                            annotations: annotations.clone(),
                        }
                    }
                }
                if !hints.is_empty() {
                    button {
                        class: "exercise-hint-toggle",
                        onclick: move |_| show_hints.toggle(),
                        if show_hints() { "Masquer l'indice" } else { "Indice" }
                    }
                    if show_hints() {
                        for (prefix, text) in hints.iter().cloned() {
                            ProcessedContent {
                                key: "{prefix}",
                                text: MarkupText::from(text),
                                id_prefix: prefix,
                                annotations: annotations.clone(),
                                class: "exercise-hint",
                            }
                        }
                    }
                }
            }
        }
    }
}
