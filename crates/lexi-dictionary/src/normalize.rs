use lexi_types::WordRecord;
use serde::Deserialize;

/// Cap on usage examples carried into a `WordRecord`.
pub const MAX_EXAMPLES: usize = 3;

#[derive(Debug, Deserialize)]
pub struct RawEntry {
    pub word: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub phonetics: Vec<RawPhonetic>,
    #[serde(default)]
    pub meanings: Vec<RawMeaning>,
}

#[derive(Debug, Deserialize)]
pub struct RawPhonetic {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawMeaning {
    #[serde(default)]
    pub definitions: Vec<RawDefinition>,
}

#[derive(Debug, Deserialize)]
pub struct RawDefinition {
    #[serde(default)]
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
}

/// Flatten a raw API entry into a display-ready record: phonetic falls back
/// to the first phonetics item, the definition is the first flattened sense,
/// and examples are the first few senses that carry one.
pub fn to_word_record(entry: RawEntry) -> WordRecord {
    let phonetic = entry
        .phonetic
        .filter(|p| !p.is_empty())
        .or_else(|| entry.phonetics.into_iter().next().and_then(|p| p.text))
        .unwrap_or_default();

    let senses: Vec<RawDefinition> = entry
        .meanings
        .into_iter()
        .flat_map(|m| m.definitions)
        .collect();

    let definition = senses
        .first()
        .map(|s| s.definition.clone())
        .unwrap_or_default();

    let examples: Vec<String> = senses
        .into_iter()
        .filter_map(|s| s.example)
        .filter(|e| !e.is_empty())
        .take(MAX_EXAMPLES)
        .collect();

    WordRecord {
        word: entry.word,
        phonetic,
        definition,
        examples,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn entry(value: serde_json::Value) -> RawEntry {
        serde_json::from_value(value).expect("test fixture should deserialize")
    }

    #[test]
    fn phonetic_falls_back_to_first_phonetics_item() {
        let record = to_word_record(entry(json!({
            "word": "hello",
            "phonetics": [
                { "text": "/həˈləʊ/" },
                { "text": "/hɛˈloʊ/" }
            ],
            "meanings": []
        })));

        assert_eq!(record.phonetic, "/həˈləʊ/");
    }

    #[test]
    fn missing_phonetics_yield_empty_string() {
        let record = to_word_record(entry(json!({
            "word": "hello",
            "meanings": []
        })));

        assert_eq!(record.phonetic, "");
    }

    #[test]
    fn definition_is_first_flattened_sense() {
        let record = to_word_record(entry(json!({
            "word": "run",
            "meanings": [
                {
                    "partOfSpeech": "verb",
                    "definitions": [
                        { "definition": "To move quickly on foot." },
                        { "definition": "To operate." }
                    ]
                },
                {
                    "partOfSpeech": "noun",
                    "definitions": [
                        { "definition": "An act of running." }
                    ]
                }
            ]
        })));

        assert_eq!(record.definition, "To move quickly on foot.");
    }

    #[test]
    fn entry_without_definitions_has_empty_definition() {
        let record = to_word_record(entry(json!({ "word": "hm" })));
        assert_eq!(record.definition, "");
        assert!(record.examples.is_empty());
    }

    #[test]
    fn examples_keep_order_and_cap_at_three() {
        let record = to_word_record(entry(json!({
            "word": "run",
            "meanings": [
                {
                    "definitions": [
                        { "definition": "a", "example": "first" },
                        { "definition": "b" },
                        { "definition": "c", "example": "" },
                        { "definition": "d", "example": "second" }
                    ]
                },
                {
                    "definitions": [
                        { "definition": "e", "example": "third" },
                        { "definition": "f", "example": "fourth" }
                    ]
                }
            ]
        })));

        assert_eq!(record.examples, vec!["first", "second", "third"]);
    }
}
