use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use lexi_types::{VocabularyEntry, WordRecord};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to write vocabulary file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode vocabulary: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Result of loading the persisted vocabulary.
#[derive(Debug)]
pub struct LoadedStore {
    pub entries: Vec<VocabularyEntry>,
    /// True when the persisted blob was unreadable and replaced by an
    /// empty list. The UI stays usable either way.
    pub recovered: bool,
}

#[derive(Debug)]
pub struct AddOutcome {
    pub added: bool,
    pub entries: Vec<VocabularyEntry>,
}

/// Durable vocabulary list backed by a single JSON file. Every mutation
/// loads the whole list, changes it, and rewrites the file wholesale;
/// all mutations happen on the one event-loop task, so there is no
/// locking.
pub struct VocabularyStore {
    path: PathBuf,
}

impl VocabularyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole persisted list. A missing file is an empty store;
    /// a malformed blob is treated the same but flagged as recovered.
    pub fn load(&self) -> LoadedStore {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => {
                return LoadedStore {
                    entries: Vec::new(),
                    recovered: false,
                };
            }
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => LoadedStore {
                entries,
                recovered: false,
            },
            Err(e) => {
                tracing::warn!("vocabulary file unreadable, starting empty: {e}");
                LoadedStore {
                    entries: Vec::new(),
                    recovered: true,
                }
            }
        }
    }

    /// Overwrite the persisted list wholesale.
    pub fn save(&self, entries: &[VocabularyEntry]) -> Result<(), StoreError> {
        let blob = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, blob)?;
        Ok(())
    }

    /// Save a looked-up word, newest first. A word already present under
    /// any casing is rejected and leaves the store untouched.
    pub fn add(&self, record: &WordRecord, translation: &str) -> Result<AddOutcome, StoreError> {
        let mut entries = self.load().entries;

        let needle = record.word.to_lowercase();
        if entries.iter().any(|e| e.word.to_lowercase() == needle) {
            return Ok(AddOutcome {
                added: false,
                entries,
            });
        }

        // Same-millisecond adds would collide on the timestamp id.
        let mut id = now_millis();
        while entries.iter().any(|e| e.id == id) {
            id += 1;
        }

        entries.insert(
            0,
            VocabularyEntry {
                id,
                word: record.word.clone(),
                definition: record.definition.clone(),
                phonetic: record.phonetic.clone(),
                translation: translation.to_string(),
            },
        );
        self.save(&entries)?;

        Ok(AddOutcome {
            added: true,
            entries,
        })
    }

    /// Delete by id. Unknown ids are a no-op, not an error.
    pub fn remove(&self, id: i64) -> Result<Vec<VocabularyEntry>, StoreError> {
        let mut entries = self.load().entries;
        entries.retain(|e| e.id != id);
        self.save(&entries)?;
        Ok(entries)
    }
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(word: &str) -> WordRecord {
        WordRecord {
            word: word.to_string(),
            phonetic: format!("/{word}/"),
            definition: format!("definition of {word}"),
            examples: vec![],
        }
    }

    fn store_in(dir: &tempfile::TempDir) -> VocabularyStore {
        VocabularyStore::new(dir.path().join("vocabulary.json"))
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let loaded = store.load();
        assert!(loaded.entries.is_empty());
        assert!(!loaded.recovered);
    }

    #[test]
    fn malformed_blob_recovers_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{not json").unwrap();

        let loaded = store.load();
        assert!(loaded.entries.is_empty());
        assert!(loaded.recovered);
    }

    #[test]
    fn add_prepends_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.add(&record("cat"), "gato").unwrap();
        let outcome = store.add(&record("dog"), "perro").unwrap();

        assert!(outcome.added);
        assert_eq!(outcome.entries.len(), 2);
        assert_eq!(outcome.entries[0].word, "dog");
        assert_eq!(outcome.entries[1].word, "cat");

        let reloaded = store.load();
        assert_eq!(reloaded.entries, outcome.entries);
    }

    #[test]
    fn duplicate_word_is_rejected_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.add(&record("Cat"), "gato").unwrap();
        let outcome = store.add(&record("cAT"), "chat").unwrap();

        assert!(!outcome.added);
        assert_eq!(outcome.entries.len(), 1);
        assert_eq!(outcome.entries[0].translation, "gato");
        assert_eq!(store.load().entries.len(), 1);
    }

    #[test]
    fn remove_deletes_only_the_matching_id() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.add(&record("cat"), "gato").unwrap();
        let outcome = store.add(&record("dog"), "perro").unwrap();
        let dog_id = outcome.entries[0].id;

        let entries = store.remove(dog_id).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word, "cat");
    }

    #[test]
    fn remove_with_unknown_id_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let before = store.add(&record("cat"), "gato").unwrap().entries;
        let after = store.remove(-1).unwrap();
        assert_eq!(after, before);
    }
}
