use std::env;

use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://libretranslate.de/translate".to_string()
}

fn default_source_lang() -> String {
    "en".to_string()
}

fn default_target_lang() -> String {
    "es".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    /// Target language used when the UI does not pick one.
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            source_lang: default_source_lang(),
            target_lang: default_target_lang(),
        }
    }
}

impl TranslatorConfig {
    pub fn new() -> Self {
        let api_url = env::var("TRANSLATOR_API_URL").unwrap_or_else(|_| default_api_url());
        let source_lang = env::var("TRANSLATOR_SOURCE_LANG").unwrap_or_else(|_| default_source_lang());
        let target_lang = env::var("TRANSLATOR_TARGET_LANG").unwrap_or_else(|_| default_target_lang());

        Self {
            api_url,
            source_lang,
            target_lang,
        }
    }
}
