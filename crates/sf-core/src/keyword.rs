use serde::{Deserialize, Serialize};

use crate::category::KeywordCategory;
use crate::constants::{SIZE_BASE, SIZE_PER_OCCURRENCE};
use crate::record::Record;
use crate::vocabulary::Vocabulary;

/// Aggregated occurrences of one vocabulary term across all records.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeywordStat {
    pub text: String,
    /// Number of (record, field) pairs whose text contains the term.
    pub frequency: u32,
    pub category: KeywordCategory,
    /// Record indices containing the term, ascending, no repeats.
    pub responses: Vec<usize>,
}

impl KeywordStat {
    /// Display size in px, growing linearly with frequency.
    pub fn display_size(&self) -> f64 {
        SIZE_BASE + SIZE_PER_OCCURRENCE * self.frequency as f64
    }
}

#[derive(Default)]
struct Tally {
    count: u32,
    seen: [bool; 3],
    responses: Vec<usize>,
}

/// Scan every field of every record for every vocabulary term.
///
/// A term that is a substring of another term is counted independently.
/// Output is sorted by descending frequency; equal frequencies keep the
/// order in which terms were first matched.
pub fn extract_keywords(records: &[Record], vocabulary: &Vocabulary) -> Vec<KeywordStat> {
    let terms = vocabulary.terms();
    let mut tallies: Vec<Option<Tally>> = Vec::new();
    tallies.resize_with(terms.len(), || None);
    let mut discovery: Vec<usize> = Vec::new();

    for (index, record) in records.iter().enumerate() {
        for (slot, (_, text)) in record.fields().iter().enumerate() {
            if text.is_empty() {
                continue;
            }
            for (term_idx, term) in terms.iter().enumerate() {
                if !text.contains(term.as_str()) {
                    continue;
                }
                let tally = tallies[term_idx].get_or_insert_with(|| {
                    discovery.push(term_idx);
                    Tally::default()
                });
                tally.count += 1;
                tally.seen[slot] = true;
                if tally.responses.last() != Some(&index) {
                    tally.responses.push(index);
                }
            }
        }
    }

    let mut stats: Vec<KeywordStat> = discovery
        .into_iter()
        .filter_map(|term_idx| {
            let tally = tallies[term_idx].take()?;
            Some(KeywordStat {
                text: terms[term_idx].clone(),
                frequency: tally.count,
                category: KeywordCategory::collapse(tally.seen),
                responses: tally.responses,
            })
        })
        .collect();

    // sort_by is stable
    stats.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    stats
}
