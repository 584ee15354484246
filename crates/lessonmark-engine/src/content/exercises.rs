use serde::{Deserialize, Serialize};

use super::element::LessonImage;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubSubQuestion {
    pub text: String,
    #[serde(default)]
    pub image: Option<LessonImage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubQuestion {
    pub text: String,
    #[serde(rename = "questionNumber", default)]
    pub question_number: Option<String>,
    #[serde(default)]
    pub sub_sub_questions: Vec<SubSubQuestion>,
    #[serde(default)]
    pub image: Option<LessonImage>,
}

impl SubQuestion {
    /// The number hints refer to: `questionNumber`, or the 1-based position.
    pub fn number(&self, index: usize) -> String {
        self.question_number
            .clone()
            .unwrap_or_else(|| (index + 1).to_string())
    }
}

/// `a.`, `b.`, ... in front of nested questions.
pub fn sub_question_label(index: usize) -> String {
    let letter = u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map_or('?', |i| char::from(b'a' + i));
    format!("{letter}.")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    pub text: String,
    #[serde(rename = "questionNumber", default)]
    pub question_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub title: String,
    pub statement: String,
    #[serde(default)]
    pub images: Vec<LessonImage>,
    #[serde(default)]
    pub sub_questions: Vec<SubQuestion>,
    #[serde(default)]
    pub hint: Vec<Hint>,
    #[serde(default)]
    pub solution: Vec<String>,
}

impl Exercise {
    /// Hints attached to one question number, with their position in the
    /// exercise's hint list.
    pub fn hints_for<'a>(
        &'a self,
        question_number: &'a str,
    ) -> impl Iterator<Item = (usize, &'a Hint)> {
        self.hint
            .iter()
            .enumerate()
            .filter(move |(_, h)| h.question_number == question_number)
    }
}

/// Identifier prefixes inside one exercise, rooted at `ex-{index}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseIds(String);

impl ExerciseIds {
    pub fn new(index: usize) -> Self {
        Self(format!("ex-{index}"))
    }

    pub fn root(&self) -> &str {
        &self.0
    }

    pub fn statement(&self) -> String {
        format!("{}-stmt", self.0)
    }

    pub fn question(&self, index: usize) -> String {
        format!("{}-q-{index}", self.0)
    }

    pub fn sub_question(&self, question: usize, index: usize) -> String {
        format!("{}-q-{question}-s-{index}", self.0)
    }

    /// Hints are numbered over the whole exercise, not per question.
    pub fn hint(&self, index: usize) -> String {
        format!("{}-hint-{index}", self.0)
    }

    pub fn solution(&self, index: usize) -> String {
        format!("{}-sol-{index}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExercisesDocument {
    pub exercises: Vec<Exercise>,
}
