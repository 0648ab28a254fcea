//! Event conditions.
//!
//! An action-matching instruction first filters on action and object names,
//! then checks an [`EventCondition`] against the rest of the event. The
//! default condition is "the action succeeded"; tutorials that want the
//! player to push against a limit check for a failed move in a direction.

use serde::{Deserialize, Serialize};

use crate::core::Axis;
use crate::events::ActionEvent;

/// A predicate over an action event.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCondition {
    // === Outcome ===

    /// The engine reported success.
    #[default]
    Succeeded,

    /// The engine reported failure.
    Failed,

    // === Delta Filters ===

    /// Delta component strictly above the threshold.
    DeltaAbove { axis: Axis, threshold: f64 },

    /// Delta component strictly below the threshold.
    DeltaBelow { axis: Axis, threshold: f64 },

    // === Combinators ===

    /// All conditions must be true.
    All(Vec<EventCondition>),

    /// At least one condition must be true.
    Any(Vec<EventCondition>),

    /// Condition must be false.
    Not(Box<EventCondition>),

    /// Always matches.
    Always,
}

impl EventCondition {
    /// Create a "delta above" condition.
    pub fn delta_above(axis: Axis, threshold: f64) -> Self {
        Self::DeltaAbove { axis, threshold }
    }

    /// Create a "delta below" condition.
    pub fn delta_below(axis: Axis, threshold: f64) -> Self {
        Self::DeltaBelow { axis, threshold }
    }

    /// Negate this condition.
    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Add another condition with AND.
    pub fn and(self, other: EventCondition) -> Self {
        match self {
            Self::All(mut conditions) => {
                conditions.push(other);
                Self::All(conditions)
            }
            _ => Self::All(vec![self, other]),
        }
    }

    /// Add another condition with OR.
    pub fn or(self, other: EventCondition) -> Self {
        match self {
            Self::Any(mut conditions) => {
                conditions.push(other);
                Self::Any(conditions)
            }
            _ => Self::Any(vec![self, other]),
        }
    }

    /// Check the condition against an event.
    #[must_use]
    pub fn holds(&self, event: &ActionEvent) -> bool {
        match self {
            Self::Succeeded => event.success,
            Self::Failed => !event.success,
            Self::DeltaAbove { axis, threshold } => event.delta.component(*axis) > *threshold,
            Self::DeltaBelow { axis, threshold } => event.delta.component(*axis) < *threshold,
            Self::All(conditions) => conditions.iter().all(|c| c.holds(event)),
            Self::Any(conditions) => conditions.iter().any(|c| c.holds(event)),
            Self::Not(inner) => !inner.holds(event),
            Self::Always => true,
        }
    }
}
