//! Per-instruction evaluation progress.
//!
//! Instruction definitions are immutable configuration. The little state
//! that evaluation needs (which objects a repeated instruction has already
//! counted) lives here, owned by the engine alongside each instruction.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Mutable evaluation state for one instruction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionProgress {
    /// Object display names already counted toward a repeated instruction.
    seen: FxHashSet<String>,
}

impl InstructionProgress {
    /// Create empty progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an object name. Returns `false` if it was already counted.
    pub fn record(&mut self, object_name: &str) -> bool {
        if self.seen.contains(object_name) {
            return false;
        }
        self.seen.insert(object_name.to_string())
    }

    /// Has this object name been counted?
    #[must_use]
    pub fn has_seen(&self, object_name: &str) -> bool {
        self.seen.contains(object_name)
    }

    /// Number of distinct names counted.
    #[must_use]
    pub fn count(&self) -> usize {
        self.seen.len()
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.seen.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_is_distinct() {
        let mut progress = InstructionProgress::new();
        assert!(progress.record("Apple"));
        assert!(!progress.record("Apple"));
        assert!(progress.record("Banana"));
        assert_eq!(progress.count(), 2);
        assert!(progress.has_seen("Apple"));

        progress.clear();
        assert_eq!(progress.count(), 0);
    }
}
