use std::sync::Arc;

use kanal::AsyncSender;
use lexi_translator::{LibreTranslator, Translator};
use lexi_types::AppEvent;

use crate::state::AppState;

pub async fn handle_translate(
    state: Arc<AppState>,
    translator: &LibreTranslator,
    target_lang: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(word) = ({
        let session = state.session.read().await;
        session.current_word.as_ref().map(|w| w.word.clone())
    }) else {
        app_to_ui_tx
            .send(AppEvent::StatusUpdate {
                message: "Look up a word before translating".to_string(),
            })
            .await?;
        return Ok(());
    };

    let target = if target_lang.is_empty() {
        let config = state.config.read().await;
        config.translator.target_lang.clone()
    } else {
        target_lang
    };

    match translator.translate(&word, target).await {
        Ok(text) => {
            {
                let mut session = state.session.write().await;
                session.current_translation = Some(text.clone());
            }
            app_to_ui_tx
                .send(AppEvent::ShowTranslation { word, text })
                .await?;
        }
        Err(e) => {
            tracing::warn!("translation failed: {e}");
            app_to_ui_tx
                .send(AppEvent::StatusUpdate {
                    message: "Translation failed, try again".to_string(),
                })
                .await?;
        }
    }

    Ok(())
}
