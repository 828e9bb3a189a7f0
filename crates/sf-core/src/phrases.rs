use regex::Regex;
use std::sync::LazyLock;

use crate::constants::{PHRASE_MAX_CHARS, PHRASE_MIN_CHARS};
use crate::record::Record;

static PHRASE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[。，、！？\n]").unwrap());

/// Short phrases cut from every answer at CJK punctuation and newlines.
/// Keeps phrases longer than 3 and shorter than 50 characters, in record order.
pub fn poetry_phrases(records: &[Record]) -> Vec<String> {
    let mut phrases = Vec::new();
    for record in records {
        let all_text = format!("{} {} {}", record.field1, record.field2, record.field3);
        for piece in PHRASE_BREAK.split(&all_text) {
            let trimmed = piece.trim();
            let len = trimmed.chars().count();
            if len > PHRASE_MIN_CHARS && len < PHRASE_MAX_CHARS {
                phrases.push(trimmed.to_string());
            }
        }
    }
    phrases
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_cjk_punctuation() {
        let records = vec![Record::new("海浪的聲音，夜的寂靜。岩石堅實", "", "")];
        let phrases = poetry_phrases(&records);
        assert_eq!(phrases, vec!["海浪的聲音", "夜的寂靜", "岩石堅實"]);
    }

    #[test]
    fn test_length_bounds() {
        let long = "長".repeat(50);
        let records = vec![Record::new("短句、剛好四字！", &long, "")];
        let phrases = poetry_phrases(&records);
        // "短句" (2) dropped, "剛好四字" (4) kept, 50-char run dropped
        assert_eq!(phrases, vec!["剛好四字"]);
    }

    #[test]
    fn test_fields_joined_with_space() {
        // No punctuation between fields: they form one phrase
        let records = vec![Record::new("星空", "月色", "")];
        assert_eq!(poetry_phrases(&records), vec!["星空 月色"]);
    }

    #[test]
    fn test_empty() {
        assert!(poetry_phrases(&[]).is_empty());
        assert!(poetry_phrases(&[Record::default()]).is_empty());
    }
}
