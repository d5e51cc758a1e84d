use lexi_types::WordRecord;
use rand::Rng;

use crate::normalize::{RawEntry, to_word_record};
use crate::words::FALLBACK_WORDS;

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("no dictionary entry for \"{word}\"")]
    NotFound { word: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Client for the free dictionary API
/// (`GET <base>/<word>` returning a JSON array of entries).
#[derive(Clone)]
pub struct DictionaryClient {
    base_url: String,
    client: reqwest::Client,
}

impl DictionaryClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Look up a word and normalize the first returned entry.
    pub async fn lookup(&self, word: &str) -> Result<WordRecord, LookupError> {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(word)
        );

        let response = self.client.get(&url).send().await?;
        let payload: serde_json::Value = response.json().await?;

        parse_payload(payload, word)
    }

    /// Look up a word picked uniformly from the fallback list.
    pub async fn random(&self) -> Result<WordRecord, LookupError> {
        let word = FALLBACK_WORDS[rand::rng().random_range(0..FALLBACK_WORDS.len())];
        self.lookup(word).await
    }
}

/// Unknown words come back as a JSON error object rather than an array;
/// both that and an empty array mean the word has no usable entry.
fn parse_payload(payload: serde_json::Value, word: &str) -> Result<WordRecord, LookupError> {
    let entries: Vec<RawEntry> = match serde_json::from_value(payload) {
        Ok(entries) => entries,
        Err(_) => {
            return Err(LookupError::NotFound {
                word: word.to_string(),
            });
        }
    };

    let first = entries.into_iter().next().ok_or_else(|| LookupError::NotFound {
        word: word.to_string(),
    })?;

    Ok(to_word_record(first))
}
