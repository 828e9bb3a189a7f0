use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::category::Category;

/// Question text keyed to field1 in the raw survey export.
pub const QUESTION_1: &str = "在你印象中，當您身處夜晚海岸的自然場域時，您最想探索或感受它哪一種「場域精神」(Genius Loci)？ (例如：時間的痕跡、海浪的聲音、夜的寂靜、岩石堅實等。請簡述)";

/// Question text keyed to field2.
pub const QUESTION_2: &str = "您認為藝術或文化在面對「自然場域」時，最能夠發揮的影響力或連結方式是什麼？ (例如：重新詮釋地景、創造新的儀式、記錄變遷、或促進公眾對話等。請簡述)";

/// Question text keyed to field3.
pub const QUESTION_3: &str = "您希望在本次夜遊的體驗中，獲得什麼樣的靈感啟發？ (請簡述)";

/// The three raw row keys recognized by the normalizer.
/// Matching is exact string equality.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionKeys {
    pub q1: String,
    pub q2: String,
    pub q3: String,
}

impl Default for QuestionKeys {
    fn default() -> Self {
        Self {
            q1: QUESTION_1.to_string(),
            q2: QUESTION_2.to_string(),
            q3: QUESTION_3.to_string(),
        }
    }
}

impl QuestionKeys {
    pub fn key(&self, category: Category) -> &str {
        match category {
            Category::Q1 => &self.q1,
            Category::Q2 => &self.q2,
            Category::Q3 => &self.q3,
        }
    }
}

/// One normalized survey response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub field1: String,
    pub field2: String,
    pub field3: String,
}

impl Record {
    pub fn new(field1: &str, field2: &str, field3: &str) -> Self {
        Self {
            field1: field1.to_string(),
            field2: field2.to_string(),
            field3: field3.to_string(),
        }
    }

    /// Normalize one raw row. Missing keys, non-string answers and
    /// non-object rows all become empty fields; this never fails.
    pub fn from_row(row: &Value, keys: &QuestionKeys) -> Self {
        let answer = |category: Category| -> String {
            row.get(keys.key(category))
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        Self {
            field1: answer(Category::Q1),
            field2: answer(Category::Q2),
            field3: answer(Category::Q3),
        }
    }

    pub fn field(&self, category: Category) -> &str {
        match category {
            Category::Q1 => &self.field1,
            Category::Q2 => &self.field2,
            Category::Q3 => &self.field3,
        }
    }

    /// Fields paired with their field-kind, in fixed order q1, q2, q3.
    pub fn fields(&self) -> [(Category, &str); 3] {
        [
            (Category::Q1, self.field1.as_str()),
            (Category::Q2, self.field2.as_str()),
            (Category::Q3, self.field3.as_str()),
        ]
    }

    pub fn is_blank(&self) -> bool {
        self.fields().iter().all(|(_, text)| text.is_empty())
    }
}

/// Normalize every raw row, preserving order (record index = row index).
pub fn normalize_rows(rows: &[Value], keys: &QuestionKeys) -> Vec<Record> {
    rows.iter().map(|row| Record::from_row(row, keys)).collect()
}
