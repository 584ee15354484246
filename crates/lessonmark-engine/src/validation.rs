//! Structural check of a lesson document before anything else reads it.
//!
//! Messages are meant for the content author and are shown verbatim.

use serde_json::{Map, Value};

pub const REQUIRED_HEADER_FIELDS: [&str; 3] = ["title", "classe", "chapter"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(String),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(message) => Some(message),
        }
    }

    pub fn into_result(self) -> Result<(), String> {
        match self {
            ValidationResult::Valid => Ok(()),
            ValidationResult::Invalid(message) => Err(message),
        }
    }
}

/// Checks the minimal shape of a lesson: header fields, then every section
/// and subsection. Stops at the first problem.
pub fn validate(document: &Value) -> ValidationResult {
    match check(document) {
        Ok(()) => ValidationResult::Valid,
        Err(message) => ValidationResult::Invalid(message),
    }
}

fn check(document: &Value) -> Result<(), String> {
    if document.is_null() {
        return Err("Le fichier JSON est vide ou null.".to_string());
    }
    let Some(root) = document.as_object() else {
        return Err("Le contenu n'est pas un objet JSON valide.".to_string());
    };

    let Some(header) = root.get("header").and_then(Value::as_object) else {
        return Err("L'objet 'header' est manquant.".to_string());
    };
    for field in REQUIRED_HEADER_FIELDS {
        if !present(header, field) {
            return Err(format!(
                "L'en-tête (header) doit contenir le champ : '{field}'."
            ));
        }
    }

    let Some(sections) = root.get("sections").and_then(Value::as_array) else {
        return Err("La propriété 'sections' doit être un tableau (array).".to_string());
    };
    if sections.is_empty() {
        return Err("La leçon ne contient aucune section.".to_string());
    }

    let no_fields = Map::new();
    for (i, section) in sections.iter().enumerate() {
        let section = section.as_object().unwrap_or(&no_fields);
        if !present(section, "title") {
            return Err(format!("La section {} n'a pas de titre.", i + 1));
        }
        let section_title = label(&section["title"]);

        let Some(subsections) = section.get("subsections").and_then(Value::as_array) else {
            return Err(format!(
                "La section '{section_title}' doit avoir un tableau 'subsections'."
            ));
        };

        for (j, subsection) in subsections.iter().enumerate() {
            let subsection = subsection.as_object().unwrap_or(&no_fields);
            if !present(subsection, "title") {
                return Err(format!(
                    "Dans '{section_title}', la sous-section {} n'a pas de titre.",
                    j + 1
                ));
            }
            if !subsection.get("elements").is_some_and(Value::is_array) {
                return Err(format!(
                    "La sous-section '{}' doit avoir un tableau 'elements'.",
                    label(&subsection["title"])
                ));
            }
        }
    }

    Ok(())
}

/// A field counts as present when it holds a non-empty, non-zero value.
fn present(object: &Map<String, Value>, field: &str) -> bool {
    match object.get(field) {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

fn label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
