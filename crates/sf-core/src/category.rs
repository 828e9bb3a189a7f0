use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The survey question a paragraph answers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Genius loci of the night coast.
    Q1,
    /// How art and culture connect with natural sites.
    Q2,
    /// Inspiration hoped for from the night walk.
    Q3,
}

impl Category {
    /// All field-kinds in fixed scan order.
    pub const ALL: [Category; 3] = [Category::Q1, Category::Q2, Category::Q3];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Q1 => "q1",
            Self::Q2 => "q2",
            Self::Q3 => "q3",
        }
    }

    /// Short topic title shown on the detail overlay.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Q1 => "場域精神",
            Self::Q2 => "藝術影響",
            Self::Q3 => "靈感啟發",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Q1 => 0,
            Self::Q2 => 1,
            Self::Q3 => 2,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "q1" => Ok(Self::Q1),
            "q2" => Ok(Self::Q2),
            "q3" => Ok(Self::Q3),
            other => Err(format!("unknown category '{other}' (expected q1, q2 or q3)")),
        }
    }
}

/// Category tag of a keyword: the single field-kind it appeared in, or
/// `All` when it appeared under more than one question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordCategory {
    Q1,
    Q2,
    Q3,
    All,
}

impl KeywordCategory {
    /// Collapse a set of matched field-kinds into a single tag.
    /// `seen` is indexed by [`Category::ALL`] order. An empty set maps to `All`.
    pub fn collapse(seen: [bool; 3]) -> Self {
        let mut matched = Category::ALL.into_iter().filter(|c| seen[c.index()]);
        match (matched.next(), matched.next()) {
            (Some(only), None) => only.into(),
            _ => Self::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Q1 => "q1",
            Self::Q2 => "q2",
            Self::Q3 => "q3",
            Self::All => "all",
        }
    }
}

impl From<Category> for KeywordCategory {
    fn from(c: Category) -> Self {
        match c {
            Category::Q1 => Self::Q1,
            Category::Q2 => Self::Q2,
            Category::Q3 => Self::Q3,
        }
    }
}

impl fmt::Display for KeywordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Four-way view filter over floating words.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

impl Filter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => *c == category,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(c) => c.fmt(f),
        }
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<Category>()
            .map(Self::Only)
            .map_err(|_| format!("unknown filter '{}' (expected all, q1, q2 or q3)", s.trim()))
    }
}
