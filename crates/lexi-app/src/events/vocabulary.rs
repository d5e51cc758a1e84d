use std::sync::Arc;

use kanal::AsyncSender;
use lexi_store::VocabularyStore;
use lexi_types::AppEvent;

use crate::state::AppState;

pub async fn handle_save(
    state: Arc<AppState>,
    store: &VocabularyStore,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let current = {
        let session = state.session.read().await;
        session
            .current_word
            .clone()
            .map(|record| (record, session.current_translation.clone().unwrap_or_default()))
    };
    let Some((record, translation)) = current else {
        app_to_ui_tx
            .send(AppEvent::StatusUpdate {
                message: "Look up a word before saving".to_string(),
            })
            .await?;
        return Ok(());
    };

    let outcome = store.add(&record, &translation)?;
    if !outcome.added {
        app_to_ui_tx
            .send(AppEvent::StatusUpdate {
                message: format!("\"{}\" is already in your vocabulary", record.word),
            })
            .await?;
        return Ok(());
    }

    tracing::info!(word = %record.word, "saved vocabulary entry");
    app_to_ui_tx
        .send(AppEvent::VocabularyUpdated(outcome.entries))
        .await?;
    Ok(())
}

pub async fn handle_delete(
    store: &VocabularyStore,
    id: i64,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let entries = store.remove(id)?;
    app_to_ui_tx
        .send(AppEvent::VocabularyUpdated(entries))
        .await?;
    Ok(())
}
