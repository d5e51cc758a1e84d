use serde::{Deserialize, Serialize};

pub type LanguageCode = String;

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate text into the target language
    async fn translate(&self, text: &str, target: LanguageCode) -> Result<String, TranslateError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("API error: {0}")]
    Api(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// LibreTranslate-style provider: a single JSON POST per call,
/// no retries, no caching.
#[derive(Clone)]
pub struct LibreTranslator {
    client: reqwest::Client,
    api_url: String,
    source_lang: String,
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
}

#[derive(Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

impl LibreTranslator {
    pub fn new(api_url: String, source_lang: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            source_lang,
        }
    }
}

#[async_trait::async_trait]
impl Translator for LibreTranslator {
    async fn translate(&self, text: &str, target: LanguageCode) -> Result<String, TranslateError> {
        let body = TranslateRequest {
            q: text,
            source: &self.source_lang,
            target: &target,
            format: "text",
        };

        let response = self.client.post(&self.api_url).json(&body).send().await?;

        if !response.status().is_success() {
            return Err(TranslateError::Api(format!("HTTP {}", response.status())));
        }

        let parsed: TranslateResponse = response
            .json()
            .await
            .map_err(|e| TranslateError::Api(format!("failed to parse response: {e}")))?;

        Ok(parsed.translated_text)
    }
}
