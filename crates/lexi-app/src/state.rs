use std::sync::Arc;

use lexi_config::Config;
use lexi_quiz::QuizSession;
use lexi_types::WordRecord;
use tokio::sync::RwLock;

/// Per-session UI-facing state: the word currently on screen, its
/// translation, and the quiz in progress, if any. Replaces what the
/// presentation layer would otherwise keep in globals.
#[derive(Default)]
pub struct SessionState {
    pub current_word: Option<WordRecord>,
    pub current_translation: Option<String>,
    pub quiz: Option<QuizSession>,
}

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub session: RwLock<SessionState>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            session: RwLock::new(SessionState::default()),
        }
    }
}
