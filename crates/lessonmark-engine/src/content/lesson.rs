use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::element::{ElementKind, LessonElement};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonHeader {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(rename = "classe")]
    pub class_label: String,
    #[serde(rename = "chapter")]
    pub chapter_label: String,
    #[serde(default)]
    pub academic_year: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonSubsection {
    pub title: String,
    pub elements: Vec<LessonElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonSection {
    pub title: String,
    pub subsections: Vec<LessonSubsection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonDocument {
    pub header: LessonHeader,
    pub sections: Vec<LessonSection>,
}

/// Position of an element: section, subsection, element.
pub type ElementPosition = (usize, usize, usize);

/// Flat index of an element, the base of its identifier prefix.
///
/// Unique while a subsection holds fewer than 100 elements and a section
/// fewer than 10 subsections.
pub fn element_index(section: usize, subsection: usize, element: usize) -> usize {
    section * 1000 + subsection * 100 + element
}

/// `A`, `B`, ... for section headings.
pub fn section_letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .and_then(|i| b'A'.checked_add(i))
        .map(char::from)
        .filter(char::is_ascii_uppercase)
        .unwrap_or('?')
}

impl LessonDocument {
    /// Every element with its position, in document order.
    pub fn elements(&self) -> impl Iterator<Item = (ElementPosition, &LessonElement)> {
        self.sections.iter().enumerate().flat_map(|(s, section)| {
            section
                .subsections
                .iter()
                .enumerate()
                .flat_map(move |(sub, subsection)| {
                    subsection
                        .elements
                        .iter()
                        .enumerate()
                        .map(move |(i, element)| ((s, sub, i), element))
                })
        })
    }

    /// Running number of each numbered box, counted per kind over the whole
    /// lesson.
    pub fn box_numbers(&self) -> HashMap<ElementPosition, usize> {
        let mut counts: HashMap<ElementKind, usize> = HashMap::new();
        let mut numbers = HashMap::new();

        for (position, element) in self.elements() {
            let numbered = element
                .kind
                .box_style()
                .is_some_and(|style| style.numbered);
            if numbered {
                let count = counts.entry(element.kind).or_default();
                *count += 1;
                numbers.insert(position, *count);
            }
        }
        numbers
    }

    /// Number of subsections, the unit a reader ticks off.
    pub fn subsection_count(&self) -> usize {
        self.sections.iter().map(|s| s.subsections.len()).sum()
    }
}
