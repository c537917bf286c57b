use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Default number of build operations between cooperative yields
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// A single occurrence of a dictionary word in scanned content.
///
/// `offset` is the position of the first character of the occurrence,
/// counted in Unicode scalar values (`char`), not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Start position of the occurrence, in chars
    pub offset: usize,
    /// The dictionary word that matched
    pub word: String,
}

impl Match {
    /// Create a new match
    pub fn new(offset: usize, word: impl Into<String>) -> Self {
        Self {
            offset,
            word: word.into(),
        }
    }
}

/// Options controlling a single scan
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    /// Stop the entire scan after the first match
    pub quick: bool,
    /// Keep only the longest word per distinct start offset
    pub longest: bool,
}

/// Options controlling automaton construction
#[derive(Debug, Clone, Copy)]
pub struct BuildOptions {
    /// Number of insertion or link operations between cooperative yields
    pub batch_size: usize,
}

impl BuildOptions {
    /// Create build options with the given batch size.
    ///
    /// A batch size of zero would never yield control back to the scheduler,
    /// so it is rejected instead of silently clamped.
    pub fn new(batch_size: usize) -> Result<Self> {
        if batch_size == 0 {
            return Err(EngineError::InvalidBatchSize(batch_size));
        }
        Ok(Self { batch_size })
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}
