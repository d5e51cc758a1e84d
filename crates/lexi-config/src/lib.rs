use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::storage::StorageConfig;
use self::translator::TranslatorConfig;

pub mod dictionary;
pub mod storage;
pub mod translator;

#[derive(Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub translator: TranslatorConfig,
    pub storage: StorageConfig,
}

impl Config {
    /// Build a config from defaults plus environment overrides.
    pub fn new() -> Self {
        Config {
            dictionary: DictionaryConfig::new(),
            translator: TranslatorConfig::new(),
            storage: StorageConfig::new(),
        }
    }
}
