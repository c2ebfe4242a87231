//! Best-score persistence.
//!
//! The storage contract is deliberately tiny: read an optional scalar once at
//! startup, write it at most once per completed round. The controller treats
//! a failing load as "no best score recorded" so the game stays playable
//! without storage.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage failures. Surfaced to the controller, which degrades gracefully.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("best score storage io: {0}")]
    Io(#[from] io::Error),

    #[error("best score format: {0}")]
    Format(#[from] serde_json::Error),
}

/// Where the best score lives between rounds (and processes).
pub trait BestScoreStore {
    /// Read the recorded best score, or `None` if nothing was ever recorded.
    fn load(&self) -> Result<Option<u32>, StoreError>;

    /// Record a new best score.
    fn save(&mut self, best: u32) -> Result<(), StoreError>;
}

/// Process-lifetime storage. The best score does not survive a restart of the
/// process; useful for tests and ephemeral play.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    best: Option<u32>,
}

impl MemoryStore {
    /// Create a store holding a pre-recorded best score.
    #[must_use]
    pub fn with_best(best: u32) -> Self {
        Self { best: Some(best) }
    }
}

impl BestScoreStore for MemoryStore {
    fn load(&self) -> Result<Option<u32>, StoreError> {
        Ok(self.best)
    }

    fn save(&mut self, best: u32) -> Result<(), StoreError> {
        self.best = Some(best);
        Ok(())
    }
}

/// On-disk file format: one JSON object keyed by a fixed name.
#[derive(Debug, Serialize, Deserialize)]
struct ScoreFile {
    #[serde(rename = "bestScore")]
    best_score: u32,
}

/// File-backed storage, e.g. `{"bestScore": 12}`.
///
/// A missing file means no score was ever recorded and is not an error.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given path. The file is created on the
    /// first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl BestScoreStore for JsonFileStore {
    fn load(&self) -> Result<Option<u32>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => {
                let file: ScoreFile = serde_json::from_str(&text)?;
                Ok(Some(file.best_score))
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&mut self, best: u32) -> Result<(), StoreError> {
        let text = serde_json::to_string(&ScoreFile { best_score: best })?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}
