use std::path::Path;

use serde::Deserialize;
use sf_core::{MAX_FLOATING_WORDS, QuestionKeys, Speed, Vocabulary};

use crate::error::{DataError, Result};

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "SF_CONFIG";

/// Starfield settings, read from TOML. Every field is optional.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Cap on generated floating words.
    pub max_words: usize,
    /// Initial drift speed preset.
    pub speed: Speed,
    /// Replaces the built-in vocabulary when set.
    pub vocabulary: Option<Vec<String>>,
    /// Appended after the (built-in or replaced) vocabulary.
    pub extra_vocabulary: Vec<String>,
    /// Raw row keys for the three questions.
    pub questions: QuestionKeys,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_words: MAX_FLOATING_WORDS,
            speed: Speed::default(),
            vocabulary: None,
            extra_vocabulary: Vec::new(),
            questions: QuestionKeys::default(),
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            "loaded config from {} (max_words={}, speed={})",
            path.display(),
            config.max_words,
            config.speed
        );
        Ok(config)
    }

    /// Resolve config: explicit path, then `$SF_CONFIG`, then defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::load(Path::new(&path)),
            _ => {
                tracing::debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Effective vocabulary: replacement list (or the built-in one) plus extras.
    pub fn vocabulary(&self) -> Vocabulary {
        let mut vocab = match &self.vocabulary {
            Some(terms) => Vocabulary::new(terms.iter().cloned()),
            None => Vocabulary::default(),
        };
        vocab.extend(self.extra_vocabulary.iter().cloned());
        vocab
    }
}
