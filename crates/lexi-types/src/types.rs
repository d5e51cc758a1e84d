use serde::{Deserialize, Serialize};

/// Normalized dictionary lookup result. Lives only in session state,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRecord {
    pub word: String,
    pub phonetic: String,
    pub definition: String,
    /// Up to three usage examples, in dictionary order.
    pub examples: Vec<String>,
}

/// One saved word + translation pair. The persisted vocabulary is a
/// newest-first list of these, rewritten wholesale on every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    /// Creation time in Unix milliseconds, doubles as the entry id.
    pub id: i64,
    pub word: String,
    pub definition: String,
    pub phonetic: String,
    /// May be empty when the user saved the word without translating it.
    pub translation: String,
}

/// One multiple-choice question, derived from a vocabulary snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub word: String,
    pub prompt: String,
    pub correct_answer: String,
    /// 2..=4 options containing `correct_answer` exactly once.
    pub options: Vec<String>,
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    // UI -> core
    RequestRandomWord,
    SearchWord(String),
    /// Translate the currently displayed word. An empty language code
    /// falls back to the configured target language.
    TranslateCurrent {
        target_lang: String,
    },
    SaveCurrentWord,
    DeleteEntry {
        id: i64,
    },
    StartQuiz,
    SubmitAnswer(String),
    NextQuestion,

    // core -> UI
    ShowWord(WordRecord),
    ShowTranslation {
        word: String,
        text: String,
    },
    VocabularyUpdated(Vec<VocabularyEntry>),
    ShowQuestion {
        index: usize,
        total: usize,
        question: QuizQuestion,
    },
    AnswerResult {
        is_correct: bool,
        correct_answer: String,
        score: usize,
    },
    QuizFinished {
        score: usize,
        total: usize,
    },
    /// Single user-visible surface for adapter failures and notices.
    StatusUpdate {
        message: String,
    },
}
