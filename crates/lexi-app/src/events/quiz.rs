use std::sync::Arc;

use kanal::AsyncSender;
use lexi_quiz::{MIN_ENTRIES, QuizSession};
use lexi_store::VocabularyStore;
use lexi_types::AppEvent;

use crate::state::AppState;

pub async fn handle_quiz_start(
    state: Arc<AppState>,
    store: &VocabularyStore,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let entries = store.load().entries;
    let session = QuizSession::build(&entries);

    if session.is_empty() {
        app_to_ui_tx
            .send(AppEvent::StatusUpdate {
                message: format!("Save at least {MIN_ENTRIES} words to start a quiz"),
            })
            .await?;
        return Ok(());
    }

    tracing::info!(questions = session.questions.len(), "quiz started");

    let first = ShownQuestion::from(&session, 0);
    {
        let mut app_session = state.session.write().await;
        app_session.quiz = Some(session);
    }
    first.send(app_to_ui_tx).await
}

pub async fn handle_answer(
    state: Arc<AppState>,
    option: &str,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let outcome = {
        let mut session = state.session.write().await;
        session.quiz.as_mut().and_then(|quiz| quiz.record_answer(option))
    };

    let Some(outcome) = outcome else {
        app_to_ui_tx
            .send(AppEvent::StatusUpdate {
                message: "No quiz in progress".to_string(),
            })
            .await?;
        return Ok(());
    };

    app_to_ui_tx
        .send(AppEvent::AnswerResult {
            is_correct: outcome.is_correct,
            correct_answer: outcome.correct_answer,
            score: outcome.score,
        })
        .await?;
    Ok(())
}

pub async fn handle_next_question(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    enum Step {
        NoQuiz,
        Next(ShownQuestion),
        Finished { score: usize, total: usize },
    }

    let step = {
        let mut session = state.session.write().await;
        match session.quiz.take() {
            None => Step::NoQuiz,
            Some(mut quiz) => {
                if quiz.advance() {
                    // A finished session is terminal; it stays discarded.
                    Step::Finished {
                        score: quiz.score,
                        total: quiz.questions.len(),
                    }
                } else {
                    let shown = ShownQuestion::from(&quiz, quiz.current_index);
                    session.quiz = Some(quiz);
                    Step::Next(shown)
                }
            }
        }
    };

    match step {
        Step::NoQuiz => {
            app_to_ui_tx
                .send(AppEvent::StatusUpdate {
                    message: "No quiz in progress".to_string(),
                })
                .await?;
        }
        Step::Next(shown) => shown.send(app_to_ui_tx).await?,
        Step::Finished { score, total } => {
            app_to_ui_tx
                .send(AppEvent::QuizFinished { score, total })
                .await?;
        }
    }

    Ok(())
}

/// A question snapshot taken while the session lock is held, sent after
/// the lock is released.
struct ShownQuestion {
    index: usize,
    total: usize,
    question: lexi_types::QuizQuestion,
}

impl ShownQuestion {
    fn from(session: &QuizSession, index: usize) -> Self {
        Self {
            index,
            total: session.questions.len(),
            question: session.questions[index].clone(),
        }
    }

    async fn send(self, app_to_ui_tx: &AsyncSender<AppEvent>) -> anyhow::Result<()> {
        app_to_ui_tx
            .send(AppEvent::ShowQuestion {
                index: self.index,
                total: self.total,
                question: self.question,
            })
            .await?;
        Ok(())
    }
}
