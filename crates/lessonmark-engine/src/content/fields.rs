//! Every markup field of an element together with the identifier prefix it
//! is tokenized under. The renderers and the inspector both walk elements
//! this way, so a stored identifier means the same span in both.

use super::element::{
    ElementIds, LessonElement, ListType, RenderStrategy, TableRow, list_item_id, table_cell_id,
    table_header_id,
};
use super::exercises::{Exercise, ExerciseIds};
use super::quiz::{QuizIds, QuizQuestion};
use crate::markup::MarkupText;

const UNMARKED: &str = ">>";

/// One list item after marker assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry<'a> {
    pub marker: Option<String>,
    pub text: &'a str,
}

/// Items starting with `>>` continue the previous item: no marker, and they
/// don't advance the numbering.
pub fn list_entries(items: &[String], list_type: ListType) -> Vec<ListEntry<'_>> {
    let mut counter = 0;
    items
        .iter()
        .map(|item| match item.trim_start().strip_prefix(UNMARKED) {
            Some(rest) => ListEntry {
                marker: None,
                text: rest.trim_start(),
            },
            None => {
                let marker = match list_type {
                    ListType::Numbered => {
                        counter += 1;
                        format!("{counter}.")
                    }
                    ListType::Bullet => "◆".to_string(),
                };
                ListEntry {
                    marker: Some(marker),
                    text: item,
                }
            }
        })
        .collect()
}

/// A markup field and where its identifiers are rooted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupField {
    pub prefix: String,
    pub text: MarkupText,
    /// Rendered without highlightable words.
    pub read_only: bool,
}

impl MarkupField {
    fn new(prefix: String, text: impl Into<MarkupText>) -> Self {
        Self {
            prefix,
            text: text.into(),
            read_only: false,
        }
    }

    fn read_only(prefix: String, text: impl Into<MarkupText>) -> Self {
        Self {
            read_only: true,
            ..Self::new(prefix, text)
        }
    }
}

impl QuizQuestion {
    /// Question, options and explanation. Options are picked by clicking, so
    /// none of the quiz text is highlightable.
    pub fn markup_fields(&self, index: usize) -> Vec<MarkupField> {
        let ids = QuizIds::new(index);
        let mut fields = vec![MarkupField::read_only(ids.question(), self.question.as_str())];
        for (j, option) in self.options.iter().enumerate() {
            fields.push(MarkupField::read_only(ids.option(j), option.text.as_str()));
        }
        if let Some(explanation) = self.explanation() {
            fields.push(MarkupField::read_only(ids.explanation(), explanation));
        }
        fields
    }
}

impl Exercise {
    /// Statement, questions with their nested questions and hints, then the
    /// solution lines.
    pub fn markup_fields(&self, index: usize) -> Vec<MarkupField> {
        let ids = ExerciseIds::new(index);
        let mut fields = vec![MarkupField::new(ids.statement(), self.statement.as_str())];
        for (j, question) in self.sub_questions.iter().enumerate() {
            fields.push(MarkupField::new(ids.question(j), question.text.as_str()));
            for (k, sub) in question.sub_sub_questions.iter().enumerate() {
                fields.push(MarkupField::new(ids.sub_question(j, k), sub.text.as_str()));
            }
            for (h, hint) in self.hints_for(&question.number(j)) {
                fields.push(MarkupField::new(ids.hint(h), hint.text.as_str()));
            }
        }
        for (s, line) in self.solution.iter().enumerate() {
            fields.push(MarkupField::new(ids.solution(s), line.as_str()));
        }
        fields
    }
}

impl LessonElement {
    /// The interactive fields of this element, in rendering order.
    pub fn markup_fields(&self, index: usize) -> Vec<MarkupField> {
        let ids = ElementIds::new(index);
        let mut fields = vec![];

        match self.kind.strategy() {
            RenderStrategy::Boxed(style) => {
                if let Some(preamble) = &self.preamble
                    && !self.preamble_in_header(&style)
                {
                    fields.push(MarkupField::read_only(ids.preamble(), preamble.as_str()));
                }
                if let Some(rows) = &self.table_data {
                    table_fields(rows, &ids.table(), &mut fields);
                } else if let Some((list_type, items)) = self.list_items() {
                    list_fields(items, list_type, &ids.list(), &mut fields);
                } else {
                    fields.push(MarkupField::new(
                        ids.content(),
                        self.content.clone().unwrap_or_default(),
                    ));
                }
            }
            RenderStrategy::Practice => {
                fields.push(MarkupField::new(
                    ids.statement(),
                    self.statement.clone().unwrap_or_default(),
                ));
                if let Some((list_type, items)) = self.list_items() {
                    list_fields(items, list_type, &ids.list(), &mut fields);
                } else if let Some(content) = &self.content {
                    fields.push(MarkupField::new(ids.content(), content.clone()));
                }
                match &self.solution {
                    Some(MarkupText::Lines(items)) => list_fields(
                        items,
                        self.list_type.unwrap_or(ListType::Numbered),
                        &ids.solution(),
                        &mut fields,
                    ),
                    Some(single) => fields.push(MarkupField::new(ids.solution(), single.clone())),
                    None => {}
                }
            }
            RenderStrategy::Table => {
                if let Some(rows) = &self.table_data {
                    table_fields(rows, ids.root(), &mut fields);
                }
            }
            RenderStrategy::Paragraph => fields.push(MarkupField::new(
                ids.content(),
                self.content.clone().unwrap_or_default(),
            )),
            RenderStrategy::Image | RenderStrategy::Graph | RenderStrategy::GeoGebra => {}
        }

        fields
    }
}

fn list_fields(items: &[String], list_type: ListType, prefix: &str, out: &mut Vec<MarkupField>) {
    for (idx, entry) in list_entries(items, list_type).into_iter().enumerate() {
        out.push(MarkupField::new(list_item_id(prefix, idx), entry.text));
    }
}

/// Header and body rows are numbered separately.
fn table_fields(rows: &[TableRow], prefix: &str, out: &mut Vec<MarkupField>) {
    let header = rows.iter().filter(|row| row.is_header);
    for (r, row) in header.enumerate() {
        for (c, cell) in row.cells.iter().enumerate() {
            out.push(MarkupField::new(table_header_id(prefix, r, c), cell.as_str()));
        }
    }
    let body = rows.iter().filter(|row| !row.is_header);
    for (r, row) in body.enumerate() {
        for (c, cell) in row.cells.iter().enumerate() {
            out.push(MarkupField::new(table_cell_id(prefix, r, c), cell.as_str()));
        }
    }
}
