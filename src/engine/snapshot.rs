//! Resumable engine progress.
//!
//! A snapshot holds the cursor and every instruction's progress, but not the
//! instructions themselves; it is restored into an engine built from the
//! same tutorial.

use serde::{Deserialize, Serialize};

use crate::core::Result;
use crate::instructions::InstructionProgress;

/// Engine progress at a point in the event stream.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// Index of the active instruction, or the instruction count when complete.
    pub cursor: usize,
    /// One entry per instruction, in tutorial order.
    pub progress: Vec<InstructionProgress>,
}

impl EngineSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot produced by [`EngineSnapshot::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
