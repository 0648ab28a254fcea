//! Action events fed to the instruction engine.
//!
//! ## Key Components
//!
//! - [`ActionEvent`]: normalized snapshot of the last completed action
//! - [`ObjectState`]: one scene object with its position and status fields
//! - [`EngineMetadata`]: the raw per-action record posted by the game engine
//!
//! Normalization happens once per action, outside the rule engine. The engine
//! only ever sees `ActionEvent`s.

mod event;
mod metadata;

pub use event::{ActionEvent, AgentPose, ObjectState};
pub use metadata::{AgentBody, AgentMetadata, EngineMetadata};
