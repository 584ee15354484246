//! Dioxus reader for lessonmark lessons: the interactive span components,
//! the element renderers built on them, and the session that loads a chapter
//! and persists what the reader reveals and highlights.

pub mod session;
pub mod ui;
