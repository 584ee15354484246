//! Typed content documents: lessons, quizzes, exercise sheets and the
//! curriculum that lists chapters per class.

pub mod curriculum;
pub mod element;
pub mod exercises;
pub mod fields;
pub mod lesson;
pub mod quiz;

pub use curriculum::{Curriculum, CurriculumChapter, CurriculumLevel};
pub use element::{
    BoxStyle, ElementIds, ElementKind, GeoGebraConfig, Graph2d, GraphFunction, ImagePosition,
    LessonElement, LessonImage, ListType, RenderStrategy, TableRow, list_item_id, table_cell_id,
    table_header_id,
};
pub use exercises::{
    Exercise, ExerciseIds, ExercisesDocument, Hint, SubQuestion, SubSubQuestion,
    sub_question_label,
};
pub use fields::{ListEntry, MarkupField, list_entries};
pub use lesson::{
    ElementPosition, LessonDocument, LessonHeader, LessonSection, LessonSubsection,
    element_index, section_letter,
};
pub use quiz::{QuizDocument, QuizIds, QuizOption, QuizQuestion, option_letter};
