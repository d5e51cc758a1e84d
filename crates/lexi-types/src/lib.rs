pub mod types;

pub use types::{AppEvent, QuizQuestion, VocabularyEntry, WordRecord};
