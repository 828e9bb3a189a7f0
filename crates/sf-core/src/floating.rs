use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::category::{Category, Filter};
use crate::constants::{
    MAX_FLOATING_WORDS, OPACITY_MAX, OPACITY_MIN, POSITION_MAX, POSITION_MIN, SPEED_MAX,
    SPEED_MIN,
};
use crate::keyword::KeywordStat;
use crate::record::Record;

/// A keyword bound to one concrete source paragraph, with randomized
/// placement and look.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloatingWord {
    pub id: String,
    pub text: String,
    /// Base x position, percent of canvas width.
    pub x: f64,
    /// Base y position, percent of canvas height.
    pub y: f64,
    pub speed: f64,
    pub size: f64,
    pub opacity: f64,
    pub category: Category,
    pub response_index: usize,
    pub full_text: String,
}

/// Generate up to [`MAX_FLOATING_WORDS`] floating words.
pub fn generate_floating_words(
    records: &[Record],
    keywords: &[KeywordStat],
    rng: &mut impl Rng,
) -> Vec<FloatingWord> {
    generate_with_limit(records, keywords, MAX_FLOATING_WORDS, rng)
}

/// Generate at most `limit` floating words, one per keyword at most.
///
/// Keywords are taken in the given order. For each, the first field
/// (records in occurrence order, fields q1..q3) that contains the term and
/// whose exact text is not yet bound to another word becomes its paragraph.
/// Keywords with no unused paragraph are skipped.
pub fn generate_with_limit(
    records: &[Record],
    keywords: &[KeywordStat],
    limit: usize,
    rng: &mut impl Rng,
) -> Vec<FloatingWord> {
    let mut words: Vec<FloatingWord> = Vec::new();
    let mut used: HashSet<&str> = HashSet::new();

    for keyword in keywords {
        if words.len() >= limit {
            break;
        }
        let Some((category, response_index, text)) =
            first_unused_paragraph(records, keyword, &used)
        else {
            continue;
        };
        used.insert(text);
        words.push(FloatingWord {
            id: format!("word-{}", words.len()),
            text: keyword.text.clone(),
            x: rng.random_range(POSITION_MIN..POSITION_MAX),
            y: rng.random_range(POSITION_MIN..POSITION_MAX),
            speed: rng.random_range(SPEED_MIN..SPEED_MAX),
            size: keyword.display_size(),
            opacity: rng.random_range(OPACITY_MIN..OPACITY_MAX),
            category,
            response_index,
            full_text: text.to_string(),
        });
    }

    words
}

fn first_unused_paragraph<'a>(
    records: &'a [Record],
    keyword: &KeywordStat,
    used: &HashSet<&'a str>,
) -> Option<(Category, usize, &'a str)> {
    keyword.responses.iter().find_map(|&index| {
        let record = records.get(index)?;
        record
            .fields()
            .into_iter()
            .find(|(_, text)| text.contains(keyword.text.as_str()) && !used.contains(text))
            .map(|(category, text)| (category, index, text))
    })
}

/// Words visible under `filter`, in generation order.
pub fn filter_words(words: &[FloatingWord], filter: Filter) -> Vec<&FloatingWord> {
    words.iter().filter(|w| filter.matches(w.category)).collect()
}
