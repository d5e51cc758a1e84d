use std::sync::Arc;

use kanal::AsyncSender;
use lexi_dictionary::{DictionaryClient, LookupError};
use lexi_types::AppEvent;

use crate::state::AppState;

pub async fn handle_search(
    state: Arc<AppState>,
    dictionary: &DictionaryClient,
    word: &str,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let word = word.trim();
    if word.is_empty() {
        app_to_ui_tx
            .send(AppEvent::StatusUpdate {
                message: "Type a word to search for".to_string(),
            })
            .await?;
        return Ok(());
    }

    lookup_and_show(state, dictionary, word, app_to_ui_tx).await
}

pub async fn handle_random_word(
    state: Arc<AppState>,
    dictionary: &DictionaryClient,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    match dictionary.random().await {
        Ok(record) => show_word(state, record, app_to_ui_tx).await,
        Err(e) => report_lookup_failure(e, app_to_ui_tx).await,
    }
}

async fn lookup_and_show(
    state: Arc<AppState>,
    dictionary: &DictionaryClient,
    word: &str,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    match dictionary.lookup(word).await {
        Ok(record) => show_word(state, record, app_to_ui_tx).await,
        Err(e) => report_lookup_failure(e, app_to_ui_tx).await,
    }
}

/// Whatever lookup resolves last becomes the current word; overlapping
/// requests are not guarded.
async fn show_word(
    state: Arc<AppState>,
    record: lexi_types::WordRecord,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    {
        let mut session = state.session.write().await;
        session.current_word = Some(record.clone());
        session.current_translation = None;
    }

    app_to_ui_tx.send(AppEvent::ShowWord(record)).await?;
    Ok(())
}

async fn report_lookup_failure(
    error: LookupError,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    tracing::warn!("lookup failed: {error}");

    let message = match error {
        LookupError::NotFound { word } => format!("No definition found for \"{word}\""),
        LookupError::Network(_) => "Could not reach the dictionary service".to_string(),
    };
    app_to_ui_tx.send(AppEvent::StatusUpdate { message }).await?;
    Ok(())
}
