//! Core types: geometry, name patterns and errors.
//!
//! Everything here is free of tutorial semantics and shared by the event,
//! instruction and engine modules.

pub mod error;
pub mod geometry;
pub mod pattern;

pub use error::{Result, RulesError};
pub use geometry::{
    l2_distance, within_tolerance, Axis, Vec3,
    DEFAULT_LOCATION_TOLERANCE, DEFAULT_POSITION_TOLERANCE,
};
pub use pattern::Pattern;
