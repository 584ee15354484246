use super::{AnnotationProps, ProcessedContent};
use dioxus::prelude::*;
use lessonmark_engine::{MarkupText, QuizDocument, QuizIds, option_letter};

/// Class of one option: the pick before validation, then correct / wrong /
/// dimmed once the answer is shown.
pub fn option_class(
    option: usize,
    correct: Option<usize>,
    selected: Option<usize>,
    answered: bool,
) -> &'static str {
    let picked = selected == Some(option);
    match (answered, correct == Some(option), picked) {
        (false, _, true) => "quiz-option quiz-option-selected",
        (false, _, false) => "quiz-option",
        (true, true, _) => "quiz-option quiz-option-correct",
        (true, false, true) => "quiz-option quiz-option-wrong",
        (true, false, false) => "quiz-option quiz-option-dimmed",
    }
}

/// One question at a time: pick, validate, read the explanation, move on.
/// The score is shown after the last question.
#[component]
pub fn QuizView(quiz: QuizDocument, annotations: AnnotationProps) -> Element {
    let mut current = use_signal(|| 0usize);
    let mut selected = use_signal(|| None::<usize>);
    let mut answered = use_signal(|| false);
    let mut score = use_signal(|| 0usize);
    let total = quiz.questions.len();

    if total == 0 {
        return rsx! {
            div { class: "quiz-empty", "Aucune question pour ce chapitre." }
        };
    }

    let index = current();
    let Some(question) = quiz.questions.get(index).cloned() else {
        return rsx! {
            div {
                class: "quiz-results",
                h2 { "Quiz terminé" }
                p { class: "quiz-score", "Score : {score} / {total}" }
                button {
                    class: "quiz-restart",
                    onclick: move |_| {
                        current.set(0);
                        selected.set(None);
                        answered.set(false);
                        score.set(0);
                    },
                    "Recommencer"
                }
            }
        };
    };

    let ids = QuizIds::new(index);
    let root = ids.root().to_string();
    let correct = question.correct_option();
    let explanation = question.explanation().map(str::to_string);
    let last = index + 1 == total;
    let progress = format!("Question {} / {total}", index + 1);

    rsx! {
        div {
            id: "{root}",
            class: "quiz-question",
            div { class: "quiz-progress", "{progress}" }
            ProcessedContent {
                text: MarkupText::from(question.question.clone()),
                id_prefix: ids.question(),
                annotations: annotations.clone(),
                read_only: true,
                class: "quiz-statement",
            }
            div {
                class: "quiz-options",
                for (j, option) in question.options.iter().enumerate() {
                    div {
                        key: "{j}",
                        class: option_class(j, correct, selected(), answered()),
                        onclick: move |_| {
                            if !answered() {
                                selected.set(Some(j));
                            }
                        },
                        span { class: "quiz-option-letter", {option_letter(j).to_string()} }
                        ProcessedContent {
                            text: MarkupText::from(option.text.clone()),
                            id_prefix: ids.option(j),
                            annotations: annotations.clone(),
                            read_only: true,
                        }
                    }
                }
            }
            if answered() {
                if let Some(explanation) = explanation {
                    div {
                        class: "quiz-explanation",
                        span { class: "quiz-explanation-title", "Éclairage" }
                        ProcessedContent {
                            text: MarkupText::from(explanation),
                            id_prefix: ids.explanation(),
                            annotations: annotations.clone(),
                            read_only: true,
                        }
                    }
                }
                button {
                    class: "quiz-next",
                    onclick: move |_| {
                        current += 1;
                        selected.set(None);
                        answered.set(false);
                    },
                    if last { "Terminer le Quiz" } else { "Question Suivante" }
                }
            } else {
                button {
                    class: "quiz-validate",
                    disabled: selected().is_none(),
                    onclick: move |_| {
                        let Some(pick) = selected() else {
                            return;
                        };
                        if Some(pick) == correct {
                            score += 1;
                        }
                        answered.set(true);
                    },
                    "Valider la réponse"
                }
            }
        }
    }
}
