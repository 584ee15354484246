use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurriculumChapter {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub version: String,
    /// ISO 8601 timestamps of the class sessions for this chapter.
    #[serde(rename = "session_dates", default)]
    pub session_dates: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurriculumLevel {
    pub title: String,
    #[serde(default)]
    pub chapters: Vec<CurriculumChapter>,
}

/// Chapters available per class, keyed by class id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Curriculum {
    #[serde(default)]
    pub version: String,
    pub levels: BTreeMap<String, CurriculumLevel>,
}

impl Curriculum {
    pub fn level(&self, class_id: &str) -> Option<&CurriculumLevel> {
        self.levels.get(class_id)
    }

    /// Active chapters of a class, in curriculum order.
    pub fn active_chapters<'a>(
        &'a self,
        class_id: &str,
    ) -> impl Iterator<Item = &'a CurriculumChapter> + use<'a> {
        self.level(class_id)
            .into_iter()
            .flat_map(|level| level.chapters.iter())
            .filter(|chapter| chapter.is_active)
    }
}
