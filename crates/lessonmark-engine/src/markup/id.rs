//! Positional identifiers for interactive spans.
//!
//! An identifier is the caller's prefix followed by one `-{tag}-{index}` pair
//! per stage boundary the span went through, e.g.
//! `el-3-cont-0-l-1-p-0-t-0-w-4` for the third word of the second line of the
//! first text run of element 3's content. Only structural positions go into an
//! identifier, never text, so a blank keeps its identifier when its answer is
//! edited.

use std::fmt;

/// Which stage boundary a path segment records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Blank occurrence inside a math run.
    MathBlank,
    /// Body line of a text run.
    Line,
    /// Quote line (`>>`) of a text run.
    Quote,
    /// Part of a line after bold extraction (odd = bold).
    Part,
    /// Text piece between blanks.
    Text,
    /// Blank occurrence in plain text.
    Blank,
    /// Token in the whitespace-inclusive word sequence.
    Word,
}

impl Stage {
    pub fn tag(self) -> &'static str {
        match self {
            Stage::MathBlank => "m",
            Stage::Line => "l",
            Stage::Quote => "q",
            Stage::Part => "p",
            Stage::Text => "t",
            Stage::Blank => "b",
            Stage::Word => "w",
        }
    }
}

/// A structural path that renders as a stable identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdPath(String);

impl IdPath {
    pub fn root(prefix: &str) -> Self {
        Self(prefix.to_string())
    }

    /// Path of the `index`-th run produced by math segmentation.
    pub fn run(&self, index: usize) -> Self {
        Self(format!("{}-{index}", self.0))
    }

    pub fn child(&self, stage: Stage, index: usize) -> Self {
        Self(format!("{}-{}-{index}", self.0, stage.tag()))
    }

    /// Identifier of the sibling word `offset` tokens away, if it can exist.
    pub fn word_sibling(&self, index: usize, offset: isize) -> Option<Self> {
        index
            .checked_add_signed(offset)
            .map(|sibling| self.child(Stage::Word, sibling))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for IdPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Distance between two neighbouring words in the whitespace-inclusive
/// token sequence: one word, one whitespace run, one word.
pub const NEIGHBOR_DISTANCE: usize = 2;

/// Whether two word positions of the same run are visually adjacent.
pub fn are_neighbors(a: usize, b: usize) -> bool {
    a.abs_diff(b) == NEIGHBOR_DISTANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chains_stage_tags() {
        let id = IdPath::root("el-0-cont")
            .run(2)
            .child(Stage::Line, 1)
            .child(Stage::Part, 0)
            .child(Stage::Text, 0)
            .child(Stage::Word, 4);
        assert_eq!(id.as_str(), "el-0-cont-2-l-1-p-0-t-0-w-4");
    }

    #[test]
    fn word_sibling_stops_at_start() {
        let text = IdPath::root("x");
        assert_eq!(text.word_sibling(0, -2), None);
        assert_eq!(
            text.word_sibling(2, -2).map(IdPath::into_string),
            Some("x-w-0".to_string())
        );
        assert_eq!(
            text.word_sibling(2, 2).map(IdPath::into_string),
            Some("x-w-4".to_string())
        );
    }

    #[test]
    fn neighbors_are_two_tokens_apart() {
        assert!(are_neighbors(2, 4));
        assert!(are_neighbors(4, 2));
        assert!(!are_neighbors(0, 4));
        assert!(!are_neighbors(2, 3));
    }
}
