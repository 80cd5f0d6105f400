//! JSON-file persistence for the registry and race records
//!
//! Three files under one data directory: the competitor registry, the
//! last race summary, and the last race history. Reading a file that
//! does not exist yet yields the empty value; a fresh deploy has no
//! data. Writes replace the whole file.

use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::engine::{Competitor, Entrant, Snapshot};

const COMPETITORS_FILE: &str = "competitors.json";
const SUMMARY_FILE: &str = "race_summary.json";
const HISTORY_FILE: &str = "race_history.json";

/// Failures reading or writing the data files
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed data file: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Summary record persisted after each race
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceSummary {
    pub total_distance: f64,
    pub hours: u32,
    pub winner: Entrant,
}

/// File-backed store rooted at a data directory
#[derive(Debug, Clone)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The competitor registry, in insertion order
    pub fn load_competitors(&self) -> Result<Vec<Competitor>, StoreError> {
        self.read_or_default(COMPETITORS_FILE)
    }

    pub fn save_competitors(&self, competitors: &[Competitor]) -> Result<(), StoreError> {
        self.write(COMPETITORS_FILE, &competitors)
    }

    /// History of the last run; empty before the first race
    pub fn load_history(&self) -> Result<Vec<Snapshot>, StoreError> {
        self.read_or_default(HISTORY_FILE)
    }

    pub fn save_history(&self, history: &[Snapshot]) -> Result<(), StoreError> {
        self.write(HISTORY_FILE, &history)
    }

    /// Summary of the last run, if any race has been persisted
    pub fn load_summary(&self) -> Result<Option<RaceSummary>, StoreError> {
        let path = self.data_dir.join(SUMMARY_FILE);
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&raw)?))
    }

    pub fn save_summary(&self, summary: &RaceSummary) -> Result<(), StoreError> {
        self.write(SUMMARY_FILE, summary)
    }

    fn read_or_default<T>(&self, file: &str) -> Result<T, StoreError>
    where
        T: DeserializeOwned + Default,
    {
        let path = self.data_dir.join(file);
        if !path.exists() {
            return Ok(T::default());
        }
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn write<T: Serialize>(&self, file: &str, value: &T) -> Result<(), StoreError> {
        fs::create_dir_all(&self.data_dir)?;
        let raw = serde_json::to_string_pretty(value)?;
        fs::write(self.data_dir.join(file), raw)?;
        Ok(())
    }
}
