//! Integration tests exercising the full starfield pipeline:
//! raw rows → records → keywords → floating words → session.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use sf_core::{
    Category, Filter, KeywordCategory, MAX_FLOATING_WORDS, QuestionKeys, Record, Session,
    Vocabulary, extract_keywords, generate_floating_words, normalize_rows, poetry_phrases,
};

const SAMPLE: &str = include_str!("../../../data/sample.json");

fn rng() -> SmallRng {
    SmallRng::seed_from_u64(42)
}

fn sample_records() -> Vec<Record> {
    let rows: Vec<serde_json::Value> = serde_json::from_str(SAMPLE).unwrap();
    normalize_rows(&rows, &QuestionKeys::default())
}

#[test]
fn sample_dataset_normalizes() {
    let records = sample_records();
    assert_eq!(records.len(), 6);
    assert!(records[0].field1.starts_with("海浪的聲音"));
    // Last row has no answer for question 2
    assert_eq!(records[5].field2, "");
}

#[test]
fn keyword_exists_iff_term_occurs() {
    let records = sample_records();
    let vocab = Vocabulary::default();
    let stats = extract_keywords(&records, &vocab);
    let found: HashSet<&str> = stats.iter().map(|s| s.text.as_str()).collect();

    for term in vocab.terms() {
        let occurs = records
            .iter()
            .any(|r| r.fields().iter().any(|(_, t)| t.contains(term.as_str())));
        assert_eq!(occurs, found.contains(term.as_str()), "term {term}");
    }
}

#[test]
fn sample_pipeline_invariants() {
    let records = sample_records();
    let keywords = extract_keywords(&records, &Vocabulary::default());
    assert!(keywords.windows(2).all(|w| w[0].frequency >= w[1].frequency));

    let words = generate_floating_words(&records, &keywords, &mut rng());
    // 17 non-empty answers, 16 distinct: every distinct answer gets one word
    assert_eq!(words.len(), 16);
    assert!(words.len() <= MAX_FLOATING_WORDS);
    assert!(words.len() <= keywords.len());

    let mut seen = HashSet::new();
    for w in &words {
        assert!(seen.insert(w.full_text.as_str()), "duplicate paragraph {}", w.full_text);
        assert_eq!(records[w.response_index].field(w.category), w.full_text);
        assert!(w.full_text.contains(&w.text));
    }

    // "寧靜" is a whole answer in two records; only one word may carry it
    let calm = words.iter().filter(|w| w.full_text == "寧靜").count();
    assert_eq!(calm, 1);
}

#[test]
fn mixed_keyword_tagged_all() {
    let records = sample_records();
    let keywords = extract_keywords(&records, &Vocabulary::default());
    // 寧靜 answers both q1 and q3
    let calm = keywords.iter().find(|k| k.text == "寧靜").unwrap();
    assert_eq!(calm.category, KeywordCategory::All);
    assert_eq!(calm.responses, vec![2, 4]);
}

#[test]
fn empty_dataset_yields_nothing() {
    let records = normalize_rows(&[], &QuestionKeys::default());
    let keywords = extract_keywords(&records, &Vocabulary::default());
    let words = generate_floating_words(&records, &keywords, &mut rng());
    assert!(keywords.is_empty());
    assert!(words.is_empty());

    let mut session = Session::new(words);
    assert!(session.field().is_empty());
    assert!(!session.select_id("word-0"));
}

#[test]
fn session_over_generated_words() {
    let records = sample_records();
    let keywords = extract_keywords(&records, &Vocabulary::default());
    let words = generate_floating_words(&records, &keywords, &mut rng());
    let mut session = Session::new(words);

    session.set_filter(Filter::Only(Category::Q2));
    let first_q2 = session
        .field()
        .visible()
        .next()
        .map(|(w, _)| w.id.clone())
        .unwrap();
    assert!(session.select_id(&first_q2));
    assert!(session.is_paused());
    assert_eq!(session.collect_selected(), Some(true));
    session.escape();
    assert!(!session.is_paused());
    assert_eq!(session.collection().len(), 1);
}

#[test]
fn phrases_from_sample() {
    let phrases = poetry_phrases(&sample_records());
    assert!(phrases.contains(&"海浪的聲音".to_string()));
    assert!(phrases.iter().all(|p| {
        let n = p.chars().count();
        n > 3 && n < 50
    }));
}

// --- Properties ---

fn field_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!["海浪", "寧靜", "夜", "星空", "光", "風", "的", "與"]),
        0..5,
    )
    .prop_map(|parts| parts.concat())
}

fn records_strategy() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(
        (field_strategy(), field_strategy(), field_strategy())
            .prop_map(|(a, b, c)| Record::new(&a, &b, &c)),
        0..12,
    )
}

proptest! {
    #[test]
    fn prop_generation_invariants(records in records_strategy(), seed in any::<u64>()) {
        let vocab = Vocabulary::new(["海浪", "寧靜", "夜", "星空", "星", "光", "風", "空"]);
        let keywords = extract_keywords(&records, &vocab);
        prop_assert!(keywords.windows(2).all(|w| w[0].frequency >= w[1].frequency));

        let mut rng = SmallRng::seed_from_u64(seed);
        let words = generate_floating_words(&records, &keywords, &mut rng);
        prop_assert!(words.len() <= keywords.len().min(MAX_FLOATING_WORDS));

        let mut seen = HashSet::new();
        for w in &words {
            prop_assert!(seen.insert(w.full_text.clone()));
            prop_assert_eq!(records[w.response_index].field(w.category), w.full_text.as_str());
        }
    }

    #[test]
    fn prop_keyword_iff_occurs(records in records_strategy()) {
        let vocab = Vocabulary::new(["海浪", "寧靜", "夜", "星空", "光"]);
        let keywords = extract_keywords(&records, &vocab);
        for term in vocab.terms() {
            let occurs = records
                .iter()
                .any(|r| r.fields().iter().any(|(_, t)| t.contains(term.as_str())));
            prop_assert_eq!(occurs, keywords.iter().any(|k| &k.text == term));
        }
    }

    #[test]
    fn prop_double_toggle_restores(texts in prop::collection::vec("[a-c]{1,3}", 0..6), probe in "[a-c]{1,3}") {
        let mut session = Session::new(Vec::new());
        for t in &texts {
            session.toggle_collected(t);
        }
        let before: Vec<String> = session.collection().iter().map(str::to_string).collect();
        session.toggle_collected(&probe);
        session.toggle_collected(&probe);
        let mut after: Vec<String> = session.collection().iter().map(str::to_string).collect();
        let mut before_sorted = before.clone();
        before_sorted.sort();
        after.sort();
        prop_assert_eq!(before_sorted, after);
    }

    #[test]
    fn prop_close_restores_pause(user_paused in any::<bool>(), reselect in any::<bool>()) {
        let records = vec![Record::new("夜", "光", "")];
        let vocab = Vocabulary::new(["夜", "光"]);
        let keywords = extract_keywords(&records, &vocab);
        let words = generate_floating_words(&records, &keywords, &mut SmallRng::seed_from_u64(1));
        let mut session = Session::new(words);
        if user_paused {
            session.toggle_pause();
        }
        prop_assert!(session.select_id("word-0"));
        prop_assert!(session.is_paused());
        if reselect {
            prop_assert!(session.select_id("word-1"));
        }
        session.close();
        prop_assert_eq!(session.is_paused(), user_paused);
    }
}
