//! JSON wire format for a generated starfield.
//!
//! Field names are camelCase so a browser front end can consume the export
//! directly.

use serde::{Deserialize, Serialize};

use crate::floating::FloatingWord;
use crate::keyword::KeywordStat;

pub const CURRENT_VERSION: &str = "1.0";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: String,
    #[serde(rename = "recordCount", default)]
    pub record_count: usize,
    #[serde(default)]
    pub keywords: Vec<KeywordStat>,
    pub words: Vec<FloatingWord>,
}

impl Snapshot {
    pub fn new(record_count: usize, keywords: Vec<KeywordStat>, words: Vec<FloatingWord>) -> Self {
        Self {
            version: CURRENT_VERSION.to_string(),
            record_count,
            keywords,
            words,
        }
    }
}

/// Serialize a snapshot to pretty JSON.
pub fn export_json(snapshot: &Snapshot) -> serde_json::Result<String> {
    serde_json::to_string_pretty(snapshot)
}

/// Parse a snapshot. Keywords and record count are optional on input.
pub fn import_json(json: &str) -> serde_json::Result<Snapshot> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyword::extract_keywords;
    use crate::floating::generate_floating_words;
    use crate::record::Record;
    use crate::vocabulary::Vocabulary;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_export_import() {
        let records = vec![Record::new("夜的寂靜", "藝術與儀式", "星空")];
        let keywords = extract_keywords(&records, &Vocabulary::default());
        let mut rng = SmallRng::seed_from_u64(42);
        let words = generate_floating_words(&records, &keywords, &mut rng);
        let snapshot = Snapshot::new(records.len(), keywords, words);

        let json = export_json(&snapshot).unwrap();
        assert!(json.contains("\"recordCount\": 1"));
        assert!(json.contains("\"fullText\""));

        let back = import_json(&json).unwrap();
        assert_eq!(back.version, CURRENT_VERSION);
        assert_eq!(back.keywords, snapshot.keywords);
        assert_eq!(back.words.len(), snapshot.words.len());
        for (a, b) in back.words.iter().zip(&snapshot.words) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.full_text, b.full_text);
            assert_eq!(a.category, b.category);
            assert!((a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9);
        }
    }

    #[test]
    fn test_import_words_only() {
        let json = r#"{
            "version": "1.0",
            "words": [{
                "id": "word-0", "text": "夜", "x": 10.0, "y": 20.0,
                "speed": 0.3, "size": 20.5, "opacity": 0.9,
                "category": "q2", "responseIndex": 3, "fullText": "夜"
            }]
        }"#;
        let snapshot = import_json(json).unwrap();
        assert_eq!(snapshot.record_count, 0);
        assert!(snapshot.keywords.is_empty());
        assert_eq!(snapshot.words[0].response_index, 3);
    }

    #[test]
    fn test_import_rejects_bad_category() {
        let json = r#"{"version":"1.0","words":[{"id":"w","text":"t","x":1,"y":1,
            "speed":0.3,"size":20,"opacity":0.9,"category":"all","responseIndex":0,"fullText":"t"}]}"#;
        assert!(import_json(json).is_err());
    }
}
