//! # Markup Tokenizer
//!
//! Turns one markup field into a tree of [`Segment`]s. Stages run in a fixed
//! order, each blind to the others:
//!
//! 1. math runs (`$$...$$`, `$...$`)
//! 2. blanks inside math, rewritten as embedding directives
//! 3. lines, with `>>` quote lines set apart
//! 4. bold runs (`**...**`)
//! 5. blanks in text (`___answer___`)
//! 6. words, split on whitespace runs
//!
//! Every interactive span gets a positional identifier (see [`id`]). Parsing
//! is pure: the same text, prefix and annotation view always give the same
//! tree. Malformed markup never fails, it degrades to literal text.

pub mod cursor;
pub mod id;
pub mod math;
pub mod segment;

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::annotations::AnnotationView;
use cursor::{split_delimited, split_whitespace_runs};
use id::{IdPath, Stage};
use math::{RawRun, math_segment, split_math};
pub use segment::*;

const QUOTE_MARKER: &str = ">>";
const BOLD: &str = "**";
const BLANK: &str = "___";

/// A textual field of a content element: one string or a list of lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MarkupText {
    Single(String),
    Lines(Vec<String>),
}

impl MarkupText {
    /// The field as one string, lines joined with `\n`.
    pub fn joined(&self) -> Cow<'_, str> {
        match self {
            MarkupText::Single(text) => Cow::Borrowed(text),
            MarkupText::Lines(lines) => Cow::Owned(lines.join("\n")),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            MarkupText::Single(text) => text.is_empty(),
            MarkupText::Lines(lines) => lines.iter().all(String::is_empty),
        }
    }
}

impl Default for MarkupText {
    fn default() -> Self {
        MarkupText::Single(String::new())
    }
}

impl From<&str> for MarkupText {
    fn from(text: &str) -> Self {
        MarkupText::Single(text.to_string())
    }
}

impl From<String> for MarkupText {
    fn from(text: String) -> Self {
        MarkupText::Single(text)
    }
}

impl From<Vec<String>> for MarkupText {
    fn from(lines: Vec<String>) -> Self {
        MarkupText::Lines(lines)
    }
}

/// Tokenizes `text`, addressing every interactive span under `id_prefix`.
pub fn parse(text: &MarkupText, id_prefix: &str, annotations: &AnnotationView<'_>) -> Vec<Segment> {
    parse_str(&text.joined(), id_prefix, annotations)
}

pub fn parse_str(text: &str, id_prefix: &str, annotations: &AnnotationView<'_>) -> Vec<Segment> {
    let root = IdPath::root(id_prefix);

    split_math(text)
        .into_iter()
        .enumerate()
        .filter_map(|(index, run)| match run {
            RawRun::Math { inner, display } => Some(Segment::Math(math_segment(
                inner,
                display,
                &root.run(index),
                annotations,
            ))),
            RawRun::Text("") => None,
            RawRun::Text(text) => Some(Segment::Text(text_run(
                text,
                &root.run(index),
                annotations,
            ))),
        })
        .collect()
}

fn text_run(text: &str, path: &IdPath, annotations: &AnnotationView<'_>) -> TextRun {
    let raw_lines: Vec<&str> = text.split('\n').collect();
    let last = raw_lines.len() - 1;

    let lines = raw_lines
        .into_iter()
        .enumerate()
        .map(|(idx, line)| match line.trim_start().strip_prefix(QUOTE_MARKER) {
            Some(quoted) => Line {
                quote: true,
                inlines: inlines(quoted.trim_start(), &path.child(Stage::Quote, idx), annotations),
                break_after: false,
            },
            None => Line {
                quote: false,
                inlines: inlines(line, &path.child(Stage::Line, idx), annotations),
                break_after: idx != last,
            },
        })
        .collect();

    TextRun { lines }
}

/// Bold runs first, then blanks and words inside each part.
fn inlines(line: &str, path: &IdPath, annotations: &AnnotationView<'_>) -> Vec<Inline> {
    let mut out = vec![];
    for (b, part) in split_delimited(line, BOLD).into_iter().enumerate() {
        if part.is_empty() {
            continue;
        }
        let children = blanks_and_words(part, &path.child(Stage::Part, b), annotations);
        if b % 2 == 1 {
            out.push(Inline::Bold(children));
        } else {
            out.extend(children);
        }
    }
    out
}

fn blanks_and_words(part: &str, path: &IdPath, annotations: &AnnotationView<'_>) -> Vec<Inline> {
    let mut out = vec![];
    for (i, piece) in split_delimited(part, BLANK).into_iter().enumerate() {
        if i % 2 == 1 {
            let id = path.child(Stage::Blank, i).into_string();
            out.push(Inline::Blank(BlankSegment {
                revealed: annotations.is_revealed(&id),
                answer: piece.to_string(),
                id,
            }));
        } else if piece.is_empty() {
            continue;
        } else if annotations.interactive() {
            push_words(piece, &path.child(Stage::Text, i), annotations, &mut out);
        } else {
            out.push(Inline::Plain(piece.to_string()));
        }
    }
    out
}

fn push_words(piece: &str, path: &IdPath, annotations: &AnnotationView<'_>, out: &mut Vec<Inline>) {
    let is_highlighted = |sibling: Option<IdPath>| {
        sibling.is_some_and(|sibling| annotations.is_highlighted(sibling.as_str()))
    };

    for (index, token) in split_whitespace_runs(piece).into_iter().enumerate() {
        if token.is_empty() {
            continue;
        }
        if index % 2 == 1 {
            out.push(Inline::Plain(token.to_string()));
            continue;
        }
        let id = path.child(Stage::Word, index).into_string();
        out.push(Inline::Word(WordSegment {
            highlighted: annotations.is_highlighted(&id),
            left_highlighted: is_highlighted(path.word_sibling(index, -(id::NEIGHBOR_DISTANCE as isize))),
            right_highlighted: is_highlighted(path.word_sibling(index, id::NEIGHBOR_DISTANCE as isize)),
            text: token.to_string(),
            index,
            id,
        }));
    }
}
