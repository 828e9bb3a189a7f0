use std::path::{Path, PathBuf};

use serde_json::Value;
use sf_core::{QuestionKeys, Record, normalize_rows};

use crate::error::{DataError, Result};

/// Environment variable naming the dataset when `--data` is absent.
pub const DATA_ENV: &str = "SF_DATA";

/// Dataset path used when neither `--data` nor `$SF_DATA` is given.
pub const DEFAULT_DATA_PATH: &str = "data.json";

/// Resolve the dataset path: explicit, then `$SF_DATA`, then `data.json`.
pub fn resolve_data_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    std::env::var_os(DATA_ENV)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH))
}

/// Normalized survey responses loaded from a JSON array of rows.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    pub records: Vec<Record>,
}

impl Dataset {
    /// Parse a JSON array of rows. Individual malformed rows degrade to
    /// blank records; only a non-array top level is an error.
    pub fn from_json_str(json: &str, keys: &QuestionKeys) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Array(rows) = value else {
            return Err(DataError::InvalidData(
                "dataset must be a JSON array of rows".to_string(),
            ));
        };
        let records = normalize_rows(&rows, keys);
        let blank = records.iter().filter(|r| r.is_blank()).count();
        if blank > 0 {
            tracing::debug!("{blank} of {} rows matched no question key", records.len());
        }
        Ok(Self { records })
    }

    pub fn load(path: &Path, keys: &QuestionKeys) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_json_str(&json, keys)?;
        tracing::info!("loaded {} records from {}", dataset.len(), path.display());
        Ok(dataset)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
