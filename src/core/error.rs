//! Error types for building tutorials and decoding engine input.
//!
//! Evaluation itself never fails: an event that lacks what an instruction
//! needs simply does not satisfy it. Errors only come from configuration,
//! metadata decoding and snapshot restore.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RulesError>;

#[derive(Debug, Error)]
pub enum RulesError {
    #[error("invalid pattern {pattern:?}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("instruction {text:?} is missing required field `{field}`")]
    IncompleteInstruction { text: String, field: &'static str },

    #[error("instruction {text:?} does not take field `{field}`")]
    UnexpectedField { text: String, field: &'static str },

    #[error("engine metadata contains no agents")]
    MissingAgent,

    #[error("failed to decode engine metadata")]
    Metadata(#[source] serde_json::Error),

    #[error("failed to load tutorial configuration")]
    Config(#[source] serde_json::Error),

    #[error("failed to encode or decode engine snapshot")]
    Snapshot(#[from] bincode::Error),

    #[error("snapshot covers {found} instructions but the engine has {expected}")]
    SnapshotMismatch { expected: usize, found: usize },
}
