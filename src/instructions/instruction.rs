//! Instruction definitions and their evaluation.
//!
//! Each instruction is plain configuration: display text, an optional id and
//! an [`InstructionKind`] describing what the player has to do. Evaluation is
//! dispatched on the kind; the only mutable input is the instruction's
//! [`InstructionProgress`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{
    within_tolerance, Pattern, Result, Vec3,
    DEFAULT_LOCATION_TOLERANCE, DEFAULT_POSITION_TOLERANCE,
};
use crate::events::{ActionEvent, ObjectState};

use super::condition::EventCondition;
use super::progress::InstructionProgress;

/// Distinct objects a repeated instruction needs when no count is given.
pub const DEFAULT_REPEAT_TIMES: u32 = 2;

/// Identifier for an instruction, used by the UI to address its text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstructionId(pub String);

impl InstructionId {
    /// Create an id from any string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id assigned to an instruction that was not given one.
    #[must_use]
    pub fn positional(index: usize) -> Self {
        Self(format!("instruction-{index}"))
    }

    /// The raw id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for InstructionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Shared filter for instructions that react to the acted-upon object.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionFilter {
    /// Pattern for the action name.
    pub action: Pattern,
    /// Pattern for the acted-upon object's display name.
    pub object: Pattern,
    /// Extra check on the event; defaults to "the action succeeded".
    pub check: EventCondition,
}

impl ActionFilter {
    /// Create a filter with the default success check.
    pub fn new(action: &str, object: &str) -> Result<Self> {
        Ok(Self {
            action: Pattern::new(action)?,
            object: Pattern::new(object)?,
            check: EventCondition::default(),
        })
    }

    /// Replace the event check (builder pattern).
    #[must_use]
    pub fn with_check(mut self, check: EventCondition) -> Self {
        self.check = check;
        self
    }

    /// Does the event pass the filter?
    #[must_use]
    pub fn matches(&self, event: &ActionEvent) -> bool {
        self.action.matches_opt(event.action())
            && self.object.is_match(&event.object_name)
            && self.check.holds(event)
    }
}

/// What an instruction asks the player to do.
#[derive(Clone, Debug, PartialEq)]
pub enum InstructionKind {
    /// Perform a matching action on a matching object.
    ActionMatch(ActionFilter),

    /// Perform a matching action on `times` objects with distinct names.
    RepeatedActionMatch { filter: ActionFilter, times: u32 },

    /// Perform a matching action that leaves the object near `target`.
    ActionAtPosition {
        filter: ActionFilter,
        target: Vec3,
        tolerance: f64,
    },

    /// Any scene object whose name matches has `status == expected`.
    ObjectStatusCheck {
        object: Pattern,
        status: String,
        expected: Value,
    },

    /// Any scene object whose name matches lies near `target`.
    ObjectNearPosition {
        object: Pattern,
        target: Vec3,
        tolerance: f64,
    },
}

impl InstructionKind {
    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::ActionMatch(_) => "action_match",
            Self::RepeatedActionMatch { .. } => "repeated_action_match",
            Self::ActionAtPosition { .. } => "action_at_position",
            Self::ObjectStatusCheck { .. } => "object_status_check",
            Self::ObjectNearPosition { .. } => "object_near_position",
        }
    }

    /// The action filter, for kinds that have one.
    #[must_use]
    pub fn filter(&self) -> Option<&ActionFilter> {
        match self {
            Self::ActionMatch(filter)
            | Self::RepeatedActionMatch { filter, .. }
            | Self::ActionAtPosition { filter, .. } => Some(filter),
            Self::ObjectStatusCheck { .. } | Self::ObjectNearPosition { .. } => None,
        }
    }
}

/// One tutorial step.
#[derive(Clone, Debug, PartialEq)]
pub struct Instruction {
    /// Identifier. Assigned by position when the engine is built if absent.
    pub id: Option<InstructionId>,

    /// Human-readable text shown to the player.
    pub text: String,

    /// The rule that satisfies this step.
    pub kind: InstructionKind,
}

/// `times` as given by a caller: absent or zero means the default.
fn effective_times(times: Option<u32>) -> u32 {
    times.filter(|&t| t > 0).unwrap_or(DEFAULT_REPEAT_TIMES)
}

impl Instruction {
    /// Create an instruction from a kind.
    pub fn new(text: impl Into<String>, kind: InstructionKind) -> Self {
        Self {
            id: None,
            text: text.into(),
            kind,
        }
    }

    /// Perform `action` on an object whose name matches `object`.
    pub fn action_match(text: impl Into<String>, action: &str, object: &str) -> Result<Self> {
        Ok(Self::new(text, InstructionKind::ActionMatch(ActionFilter::new(action, object)?)))
    }

    /// Perform `action` on `times` differently named objects.
    pub fn repeated_action_match(
        text: impl Into<String>,
        action: &str,
        object: &str,
        times: Option<u32>,
    ) -> Result<Self> {
        Ok(Self::new(
            text,
            InstructionKind::RepeatedActionMatch {
                filter: ActionFilter::new(action, object)?,
                times: effective_times(times),
            },
        ))
    }

    /// Perform `action` and leave the object within `tolerance` of `target`.
    pub fn action_at_position(
        text: impl Into<String>,
        action: &str,
        object: &str,
        target: impl Into<Vec3>,
        tolerance: Option<f64>,
    ) -> Result<Self> {
        Ok(Self::new(
            text,
            InstructionKind::ActionAtPosition {
                filter: ActionFilter::new(action, object)?,
                target: target.into(),
                tolerance: tolerance.unwrap_or(DEFAULT_POSITION_TOLERANCE),
            },
        ))
    }

    /// Get any object whose name matches `object` into `status == expected`.
    pub fn object_status(
        text: impl Into<String>,
        object: &str,
        status: impl Into<String>,
        expected: impl Into<Value>,
    ) -> Result<Self> {
        Ok(Self::new(
            text,
            InstructionKind::ObjectStatusCheck {
                object: Pattern::new(object)?,
                status: status.into(),
                expected: expected.into(),
            },
        ))
    }

    /// Bring any object whose name matches `object` within `tolerance` of `target`.
    pub fn object_near_position(
        text: impl Into<String>,
        object: &str,
        target: impl Into<Vec3>,
        tolerance: Option<f64>,
    ) -> Result<Self> {
        Ok(Self::new(
            text,
            InstructionKind::ObjectNearPosition {
                object: Pattern::new(object)?,
                target: target.into(),
                tolerance: tolerance.unwrap_or(DEFAULT_LOCATION_TOLERANCE),
            },
        ))
    }

    /// Set the id (builder pattern).
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(InstructionId::new(id));
        self
    }

    /// Replace the event check on action-based kinds (builder pattern).
    ///
    /// Scene-scanning kinds have no check and are returned unchanged.
    #[must_use]
    pub fn with_check(mut self, check: EventCondition) -> Self {
        match &mut self.kind {
            InstructionKind::ActionMatch(filter)
            | InstructionKind::RepeatedActionMatch { filter, .. }
            | InstructionKind::ActionAtPosition { filter, .. } => filter.check = check,
            InstructionKind::ObjectStatusCheck { .. } | InstructionKind::ObjectNearPosition { .. } => {}
        }
        self
    }

    /// The id, if one has been given or assigned.
    #[must_use]
    pub fn id(&self) -> Option<&InstructionId> {
        self.id.as_ref()
    }

    /// Check whether `event` satisfies this instruction.
    ///
    /// Only `RepeatedActionMatch` touches `progress`. Missing optional data
    /// in the event counts as "not satisfied".
    pub fn evaluate(&self, event: &ActionEvent, progress: &mut InstructionProgress) -> bool {
        match &self.kind {
            InstructionKind::ActionMatch(filter) => filter.matches(event),

            InstructionKind::RepeatedActionMatch { filter, times } => {
                if !progress.has_seen(&event.object_name) && filter.matches(event) {
                    progress.record(&event.object_name);
                }
                progress.count() >= effective_times(Some(*times)) as usize
            }

            InstructionKind::ActionAtPosition { filter, target, tolerance } => {
                filter.matches(event)
                    && event
                        .object_position()
                        .is_some_and(|position| within_tolerance(position, *target, *tolerance))
            }

            InstructionKind::ObjectStatusCheck { object, status, expected } => {
                matching_objects(object, &event.objects)
                    .any(|o| o.status(status).is_some_and(|actual| status_matches(actual, expected)))
            }

            InstructionKind::ObjectNearPosition { object, target, tolerance } => {
                matching_objects(object, &event.objects)
                    .any(|o| within_tolerance(o.position, *target, *tolerance))
            }
        }
    }
}

/// Compare a reported status value with the expected one.
///
/// Numbers compare by value, so `1` matches `1.0`. Everything else needs
/// exact JSON equality; `true` never matches `1`.
fn status_matches(actual: &Value, expected: &Value) -> bool {
    match (actual.as_f64(), expected.as_f64()) {
        (Some(a), Some(b)) => a == b,
        _ => actual == expected,
    }
}

/// Scene objects whose display name matches `pattern`.
pub fn matching_objects<'a>(
    pattern: &'a Pattern,
    objects: &'a [ObjectState],
) -> impl Iterator<Item = &'a ObjectState> + 'a {
    objects.iter().filter(move |o| pattern.is_match(&o.name))
}
