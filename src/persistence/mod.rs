//! High score persistence
//!
//! Features:
//! - Single JSON record: `{"high_score": <n>}`
//! - Atomic replace (tmp file, then rename)
//! - In-memory store for tests and disk-free sessions
//!
//! Errors are surfaced as `PersistenceError` so callers can decide how to
//! recover; gameplay code never treats them as fatal.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default record location, relative to the working directory
pub const DEFAULT_HIGH_SCORE_PATH: &str = "highscore.json";

/// Failure reading or writing a persisted record
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed record in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("store unavailable")]
    Unavailable,
}

/// On-disk shape of the high score record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    #[serde(default)]
    pub high_score: u64,
}

/// Somewhere a single high score can be kept
pub trait HighScoreStore {
    /// Read the stored value; an absent record is `Ok(0)`
    fn load(&self) -> Result<u64, PersistenceError>;
    /// Replace the stored value
    fn save(&mut self, high_score: u64) -> Result<(), PersistenceError>;
}

/// JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn io_err(&self, source: io::Error) -> PersistenceError {
        PersistenceError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_HIGH_SCORE_PATH)
    }
}

impl HighScoreStore for JsonFileStore {
    fn load(&self) -> Result<u64, PersistenceError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(self.io_err(e)),
        };
        let record: HighScoreRecord =
            serde_json::from_str(&json).map_err(|source| PersistenceError::Parse {
                path: self.path.clone(),
                source,
            })?;
        Ok(record.high_score)
    }

    fn save(&mut self, high_score: u64) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(&HighScoreRecord { high_score }).map_err(|source| {
            PersistenceError::Parse {
                path: self.path.clone(),
                source,
            }
        })?;
        let tmp = self.tmp_path();
        fs::write(&tmp, json).map_err(|e| self.io_err(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_err(e))?;
        log::info!("High score {} saved to {}", high_score, self.path.display());
        Ok(())
    }
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub value: Option<u64>,
    /// Make every `load` fail
    pub fail_reads: bool,
    /// Make every `save` fail
    pub fail_writes: bool,
    /// Successful writes so far
    pub writes: u32,
}

impl MemoryStore {
    pub fn with_value(value: u64) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> Result<u64, PersistenceError> {
        if self.fail_reads {
            return Err(PersistenceError::Unavailable);
        }
        Ok(self.value.unwrap_or(0))
    }

    fn save(&mut self, high_score: u64) -> Result<(), PersistenceError> {
        if self.fail_writes {
            return Err(PersistenceError::Unavailable);
        }
        self.value = Some(high_score);
        self.writes += 1;
        Ok(())
    }
}
