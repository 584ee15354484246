use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub question: String,
    #[serde(rename = "type", default = "multiple_choice")]
    pub kind: String,
    pub options: Vec<QuizOption>,
}

fn multiple_choice() -> String {
    "mcq".to_string()
}

impl QuizQuestion {
    pub fn correct_option(&self) -> Option<usize> {
        self.options.iter().position(|o| o.is_correct)
    }

    /// Explanation of the correct option, shown once the question is answered.
    pub fn explanation(&self) -> Option<&str> {
        self.correct_option()
            .map(|idx| self.options[idx].explanation.as_str())
            .filter(|text| !text.is_empty())
    }

    /// Whether picking `option` answers the question correctly.
    pub fn is_correct(&self, option: usize) -> bool {
        self.options.get(option).is_some_and(|o| o.is_correct)
    }
}

/// `A`, `B`, ... in front of each option.
pub fn option_letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map_or('?', |i| char::from(b'A' + i))
}

/// Identifier prefixes of one quiz question, rooted at `quiz-{index}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizIds(String);

impl QuizIds {
    pub fn new(index: usize) -> Self {
        Self(format!("quiz-{index}"))
    }

    pub fn root(&self) -> &str {
        &self.0
    }

    pub fn question(&self) -> String {
        format!("{}-q", self.0)
    }

    pub fn option(&self, index: usize) -> String {
        format!("{}-opt-{index}", self.0)
    }

    pub fn explanation(&self) -> String {
        format!("{}-expl", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizDocument {
    pub questions: Vec<QuizQuestion>,
}
