use std::collections::HashSet;

/// Terms scanned against every survey answer, in tie-break order.
pub const DEFAULT_VOCABULARY: &[&str] = &[
    // time
    "時間", "遺痕", "變遷", "里程", "改變", "歷史", "經年",
    // natural elements
    "海浪", "星空", "夜", "暗", "暗空", "寂靜", "聲音", "聲響", "海洋", "星", "浪",
    "黑", "光", "月", "月色", "風", "風向", "空氣", "潮汐", "礁岩", "沙灘", "石礫",
    "海域", "宇宙", "大地", "地景", "場域", "自然",
    // senses
    "氣味", "味道", "質地", "溫度", "濕度", "紋理", "體感", "觸感",
    "視覺", "聽覺", "感官", "本能", "敏感度", "動能", "身體",
    // abstractions
    "連結", "能量", "生命", "生命力", "精神", "養分", "靈感", "啟發",
    "想像", "想像力", "敬畏", "融合", "一體", "冥想", "沉思", "寧靜",
    "模糊", "流動", "開放", "沉默", "節奏", "層次", "單一性", "宇宙性",
    // art and culture
    "藝術", "創作", "表達", "詮釋", "敘事", "語言", "儀式", "裝置", "表演",
    "體驗", "探索", "感受", "記憶", "對話", "轉化", "力量", "深刻",
    // actions
    "尋找", "打開", "弱化", "強化", "重新", "創造", "記錄", "促進",
    "瞭解", "產生", "提出", "攪動", "融入", "放大", "聽見",
    // compound phrases
    "場域精神", "海盡頭", "星光", "大自然", "大地媽媽",
    "環保議題", "生物本能", "感官經驗", "心情", "當下", "過程",
];

/// Ordered, duplicate-free list of vocabulary terms.
///
/// Order is significant: it decides discovery order, which breaks ties
/// between keywords of equal frequency.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<String>,
}

impl Vocabulary {
    /// Build from any term list. Empty terms and repeats are dropped;
    /// the first occurrence keeps its position.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let terms = terms
            .into_iter()
            .map(Into::into)
            .filter(|t: &String| !t.is_empty() && seen.insert(t.clone()))
            .collect();
        Self { terms }
    }

    /// Append extra terms after the existing ones, skipping repeats.
    pub fn extend<I, S>(&mut self, extra: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let combined = std::mem::take(&mut self.terms)
            .into_iter()
            .chain(extra.into_iter().map(Into::into));
        *self = Self::new(combined);
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_VOCABULARY.iter().copied())
    }
}
