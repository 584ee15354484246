use super::components::{
    AnnotationProps, ErrorScreen, ExercisesView, LessonView, MathContext, QuizView,
};
use crate::session::LessonSession;
use dioxus::prelude::*;
use lessonmark_config::Config;
use lessonmark_engine::MathRenderer;

const LESSONMARK_CSS: &str = include_str!("assets/lessonmark.css");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Lesson,
    Quiz,
    Exercises,
}

impl Tab {
    fn label(self) -> &'static str {
        match self {
            Tab::Lesson => "Leçon",
            Tab::Quiz => "Quiz",
            Tab::Exercises => "Exercices",
        }
    }
}

#[component]
pub fn App(config: Config) -> Element {
    use_context_provider(|| {
        MathContext::new(MathRenderer::new().trust_directives(config.trust_math_directives))
    });

    let mut tab = use_signal(|| Tab::Lesson);
    let mut session = use_signal({
        let config = config.clone();
        move || LessonSession::open(&config)
    });

    // Clone what the view needs so no read guard outlives this render.
    let loaded = match &*session.read() {
        Ok(open) => Ok((
            open.lesson.clone(),
            open.quiz.clone(),
            open.exercises.clone(),
            open.annotations(),
        )),
        Err(e) => Err((e.summary(), e.to_string())),
    };

    let body = match loaded {
        Ok((lesson, quiz, exercises, chapter)) => {
            let annotations = AnnotationProps {
                chapter,
                on_toggle_highlight: Callback::new(move |word_id: String| {
                    if let Ok(open) = &mut *session.write() {
                        open.toggle_highlight(word_id);
                    }
                }),
                on_reveal_blank: Callback::new(move |blank_id: String| {
                    if let Ok(open) = &mut *session.write() {
                        open.toggle_blank(blank_id);
                    }
                }),
            };
            let mut tabs = vec![Tab::Lesson];
            if quiz.is_some() {
                tabs.push(Tab::Quiz);
            }
            if exercises.is_some() {
                tabs.push(Tab::Exercises);
            }
            let view = match (tab(), quiz, exercises) {
                (Tab::Quiz, Some(quiz), _) => rsx! { QuizView { quiz, annotations } },
                (Tab::Exercises, _, Some(sheet)) => rsx! { ExercisesView { sheet, annotations } },
                _ => rsx! { LessonView { lesson, annotations } },
            };
            rsx! {
                if tabs.len() > 1 {
                    nav {
                        class: "tabs",
                        for t in tabs {
                            button {
                                key: "{t:?}",
                                class: if tab() == t { "tab tab-active" } else { "tab" },
                                onclick: move |_| tab.set(t),
                                {t.label()}
                            }
                        }
                    }
                }
                {view}
            }
        }
        Err((summary, message)) => {
            log::error!("lesson could not be opened: {message}");
            rsx! {
                ErrorScreen {
                    title: "Erreur de Contenu",
                    message: summary.to_string(),
                    details: message,
                    on_retry: Some(Callback::new(move |_| {
                        log::info!("retrying lesson load");
                        session.set(LessonSession::open(&config));
                    })),
                }
            }
        }
    };

    rsx! {
        style { {LESSONMARK_CSS} }
        div { class: "app-container", {body} }
    }
}
