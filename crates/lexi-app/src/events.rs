use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lexi_dictionary::DictionaryClient;
use lexi_store::VocabularyStore;
use lexi_translator::LibreTranslator;
use lexi_types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod lookup;
pub mod quiz;
pub mod translate;
pub mod vocabulary;

use lookup::{handle_random_word, handle_search};
use quiz::{handle_answer, handle_next_question, handle_quiz_start};
use translate::handle_translate;
use vocabulary::{handle_delete, handle_save};

/// App's main loop: builds the adapters from config, then serves
/// presentation-layer events one at a time until cancelled.
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let (dictionary, translator, store) = {
        let config = state.config.read().await;
        (
            DictionaryClient::new(config.dictionary.api_url.clone()),
            LibreTranslator::new(
                config.translator.api_url.clone(),
                config.translator.source_lang.clone(),
            ),
            VocabularyStore::new(config.storage.path.clone()),
        )
    };

    // Hand the UI its initial vocabulary list.
    let loaded = store.load();
    if loaded.recovered {
        app_to_ui_tx
            .send(AppEvent::StatusUpdate {
                message: "Saved vocabulary was unreadable and has been reset".to_string(),
            })
            .await?;
    }
    app_to_ui_tx
        .send(AppEvent::VocabularyUpdated(loaded.entries))
        .await?;

    tracing::info!("event loop started");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("event loop cancelled");
                return Ok(());
            }
            event = ui_to_app_rx.recv() => event?,
        };

        handle_event(
            state.clone(),
            &dictionary,
            &translator,
            &store,
            &app_to_ui_tx,
            event,
        )
        .await?;
    }
}

async fn handle_event(
    state: Arc<AppState>,
    dictionary: &DictionaryClient,
    translator: &LibreTranslator,
    store: &VocabularyStore,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::RequestRandomWord => {
            handle_random_word(state, dictionary, app_to_ui_tx).await?;
        }
        AppEvent::SearchWord(word) => {
            handle_search(state, dictionary, &word, app_to_ui_tx).await?;
        }
        AppEvent::TranslateCurrent { target_lang } => {
            handle_translate(state, translator, target_lang, app_to_ui_tx).await?;
        }
        AppEvent::SaveCurrentWord => {
            handle_save(state, store, app_to_ui_tx).await?;
        }
        AppEvent::DeleteEntry { id } => {
            handle_delete(store, id, app_to_ui_tx).await?;
        }
        AppEvent::StartQuiz => {
            handle_quiz_start(state, store, app_to_ui_tx).await?;
        }
        AppEvent::SubmitAnswer(option) => {
            handle_answer(state, &option, app_to_ui_tx).await?;
        }
        AppEvent::NextQuestion => {
            handle_next_question(state, app_to_ui_tx).await?;
        }
        // core -> UI events are not valid input; ignore them.
        other => {
            tracing::debug!("ignoring non-request event: {:?}", std::mem::discriminant(&other));
        }
    }

    Ok(())
}
