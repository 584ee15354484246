use serde::Serialize;

use super::id::are_neighbors;

/// Top-level output of the tokenizer: the math / non-math runs of a markup
/// string, in source order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Segment {
    Math(MathSegment),
    Text(TextRun),
}

/// A `$...$` or `$$...$$` expression, ready for the math renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MathSegment {
    /// Expression after cleanup and blank substitution (embedding directives).
    pub raw: String,
    /// Block-level (`$$`) rather than inline (`$`).
    pub display: bool,
    /// Blanks embedded in `raw`, in occurrence order.
    pub blanks: Vec<MathBlank>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MathBlank {
    pub id: String,
    pub answer: String,
    pub revealed: bool,
}

/// A non-math run split into lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRun {
    pub lines: Vec<Line>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    /// Header-weight `>>` line; rendered as its own block.
    pub quote: bool,
    pub inlines: Vec<Inline>,
    /// Explicit line break after this line (every body line but the last).
    pub break_after: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Inline {
    /// Non-interactive text: whitespace, or whole pieces when interactions are off.
    Plain(String),
    Bold(Vec<Inline>),
    Blank(BlankSegment),
    Word(WordSegment),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlankSegment {
    pub id: String,
    pub answer: String,
    pub revealed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordSegment {
    pub id: String,
    pub text: String,
    /// Position in the whitespace-inclusive token sequence of its run.
    pub index: usize,
    pub highlighted: bool,
    /// The word two tokens to the left is highlighted.
    pub left_highlighted: bool,
    /// The word two tokens to the right is highlighted.
    pub right_highlighted: bool,
}

impl WordSegment {
    /// Identifier of the run this word belongs to (everything before `-w-`).
    pub fn run_id(&self) -> &str {
        self.id
            .rsplit_once("-w-")
            .map(|(run, _)| run)
            .unwrap_or(&self.id)
    }

    /// Whether `other` is directly next to this word, one whitespace run away.
    pub fn is_neighbor_of(&self, other: &WordSegment) -> bool {
        self.run_id() == other.run_id() && are_neighbors(self.index, other.index)
    }

    /// Merge with the left neighbour when both are highlighted.
    pub fn joins_left(&self) -> bool {
        self.highlighted && self.left_highlighted
    }

    /// Merge with the right neighbour when both are highlighted.
    pub fn joins_right(&self) -> bool {
        self.highlighted && self.right_highlighted
    }
}

impl Segment {
    pub fn as_math(&self) -> Option<&MathSegment> {
        match self {
            Segment::Math(math) => Some(math),
            Segment::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextRun> {
        match self {
            Segment::Text(run) => Some(run),
            Segment::Math(_) => None,
        }
    }
}

/// Every blank of a parsed tree (math and plain text), in source order.
pub fn blank_ids(segments: &[Segment]) -> Vec<&str> {
    let mut out = vec![];
    for segment in segments {
        match segment {
            Segment::Math(math) => out.extend(math.blanks.iter().map(|b| b.id.as_str())),
            Segment::Text(run) => {
                for line in &run.lines {
                    collect_blank_ids(&line.inlines, &mut out);
                }
            }
        }
    }
    out
}

/// Every word of a parsed tree, in source order.
pub fn words(segments: &[Segment]) -> Vec<&WordSegment> {
    let mut out = vec![];
    for run in segments.iter().filter_map(Segment::as_text) {
        for line in &run.lines {
            collect_words(&line.inlines, &mut out);
        }
    }
    out
}

fn collect_blank_ids<'a>(inlines: &'a [Inline], out: &mut Vec<&'a str>) {
    for inline in inlines {
        match inline {
            Inline::Bold(children) => collect_blank_ids(children, out),
            Inline::Blank(blank) => out.push(&blank.id),
            Inline::Plain(_) | Inline::Word(_) => {}
        }
    }
}

fn collect_words<'a>(inlines: &'a [Inline], out: &mut Vec<&'a WordSegment>) {
    for inline in inlines {
        match inline {
            Inline::Bold(children) => collect_words(children, out),
            Inline::Word(word) => out.push(word),
            Inline::Plain(_) | Inline::Blank(_) => {}
        }
    }
}
