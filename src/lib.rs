//! # tutorial-rules
//!
//! An incremental instruction rule engine for game-action tutorials.
//!
//! A tutorial is an ordered list of instructions ("pick up two different
//! objects", "open the fridge", "put the apple on the shelf"). The game
//! reports one event per completed action; the engine checks it against the
//! active instruction only and advances when it is satisfied.
//!
//! ## Design Principles
//!
//! 1. **No history replay**: each event is evaluated once, against one
//!    instruction. The little state an instruction needs between events is
//!    kept in its `InstructionProgress`.
//!
//! 2. **Configuration Over Code**: instructions are plain data (patterns,
//!    targets, tolerances) and can be loaded from JSON.
//!
//! 3. **Fail fast on config, never on events**: bad patterns are rejected when
//!    a tutorial is built. Events missing data just don't satisfy anything.
//!
//! ## Modules
//!
//! - `core`: Vectors and distance, name patterns, errors
//! - `events`: Normalized action events and raw engine metadata
//! - `instructions`: Instruction kinds and their evaluation
//! - `engine`: The cursor, observers and snapshots
//! - `config`: JSON tutorial definitions and built-in presets

pub mod core;
pub mod events;
pub mod instructions;
pub mod engine;
pub mod config;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    l2_distance, within_tolerance, Axis, Pattern, Result, RulesError, Vec3,
    DEFAULT_LOCATION_TOLERANCE, DEFAULT_POSITION_TOLERANCE,
};

pub use crate::events::{ActionEvent, AgentPose, EngineMetadata, ObjectState};

pub use crate::instructions::{
    ActionFilter, EventCondition, Instruction, InstructionId, InstructionKind,
    InstructionProgress, DEFAULT_REPEAT_TIMES,
};

pub use crate::engine::{
    EngineSnapshot, EngineState, StepOutcome, StepStatus, StepView,
    TransitionLog, TutorialEngine, TutorialObserver,
};

pub use crate::config::{InstructionSpec, SpecKind, TutorialConfig};
