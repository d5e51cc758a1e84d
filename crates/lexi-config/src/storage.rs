use std::env;

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "vocabulary.json".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    /// Path of the JSON file holding the whole vocabulary list.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl StorageConfig {
    pub fn new() -> Self {
        let path = env::var("VOCABULARY_PATH").unwrap_or_else(|_| default_path());

        Self { path }
    }
}
