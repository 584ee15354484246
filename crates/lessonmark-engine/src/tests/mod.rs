use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary content root for io tests
pub fn create_test_content_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Write a test file (creating parent folders) under the content root
pub fn create_test_file(content_dir: &TempDir, relative: &str, content: &str) -> PathBuf {
    let file_path = content_dir.path().join(relative);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&file_path, content).unwrap();
    file_path
}

/// A small lesson document that passes validation
pub const VALID_LESSON: &str = r#"{
  "header": {
    "title": "Les fonctions",
    "subtitle": "Introduction",
    "classe": "2nde",
    "chapter": "Chapitre 3",
    "academicYear": "2025-2026"
  },
  "sections": [
    {
      "title": "Définitions",
      "subsections": [
        {
          "title": "Image et antécédent",
          "elements": [
            { "type": "definition-box", "title": "Fonction", "content": "Une **fonction** associe à $x$ un ___unique___ nombre." },
            { "type": "p", "content": ["Soit $f(x) = ___2x___ + 1$.", ">> À retenir"] }
          ]
        }
      ]
    }
  ]
}"#;
