//! Tutorial configuration.
//!
//! Tutorials can be defined in JSON instead of code. Each entry names its
//! kind and only the fields that kind needs; everything else falls back to
//! the same defaults the builder constructors use.
//!
//! ```json
//! {
//!   "instructions": [
//!     {"kind": "repeated_action", "text": "Pick up two objects", "action": "PickupObject"},
//!     {"kind": "action", "text": "Move it all the way in", "action": "MoveHandDelta",
//!      "check": {"all": ["failed", {"delta_below": {"axis": "z", "threshold": 0.0}}]}},
//!     {"kind": "object_status", "text": "Fill the pot", "object": "Pot",
//!      "status": "isFilledWithLiquid"}
//!   ]
//! }
//! ```
//!
//! Patterns are compiled while loading, so a bad pattern is reported by
//! [`TutorialConfig::from_json`] rather than on the first event.

pub mod presets;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{Pattern, Result, RulesError, Vec3};
use crate::engine::TutorialEngine;
use crate::instructions::{EventCondition, Instruction, InstructionKind};

/// Instruction kinds as they are spelled in configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecKind {
    Action,
    RepeatedAction,
    ActionAtPosition,
    ObjectStatus,
    ObjectNearPosition,
}

fn any_pattern() -> String {
    Pattern::ANY.to_string()
}

/// One instruction as written in configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InstructionSpec {
    pub kind: SpecKind,

    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Object-name pattern.
    #[serde(default = "any_pattern")]
    pub object: String,

    /// Action-name pattern. Required for action kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    #[serde(default)]
    pub check: EventCondition,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub times: Option<u32>,

    /// Target point. Required for position kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<[f64; 3]>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<f64>,

    /// Status field name. Required for `object_status`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Expected status value; `true` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl InstructionSpec {
    fn require<'a, T>(&'a self, field: Option<&'a T>, name: &'static str) -> Result<&'a T>
    where
        T: ?Sized,
    {
        field.ok_or_else(|| RulesError::IncompleteInstruction {
            text: self.text.clone(),
            field: name,
        })
    }

    /// Names of the fields that are set but mean nothing for this kind.
    fn stray_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        let action_kind = matches!(
            self.kind,
            SpecKind::Action | SpecKind::RepeatedAction | SpecKind::ActionAtPosition
        );
        let positional = matches!(self.kind, SpecKind::ActionAtPosition | SpecKind::ObjectNearPosition);
        let status_kind = self.kind == SpecKind::ObjectStatus;

        [
            ("action", !action_kind && self.action.is_some()),
            ("check", !action_kind && self.check != EventCondition::default()),
            ("times", self.kind != SpecKind::RepeatedAction && self.times.is_some()),
            ("position", !positional && self.position.is_some()),
            ("tolerance", !positional && self.tolerance.is_some()),
            ("status", !status_kind && self.status.is_some()),
            ("value", !status_kind && self.value.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, stray)| stray.then_some(name))
    }

    /// Compile this entry into an instruction.
    ///
    /// Fields the kind does not use are rejected rather than ignored.
    pub fn build(&self) -> Result<Instruction> {
        if let Some(field) = self.stray_fields().next() {
            return Err(RulesError::UnexpectedField {
                text: self.text.clone(),
                field,
            });
        }

        let object = self.object.as_str();
        let instruction = match self.kind {
            SpecKind::Action => {
                let action = self.require(self.action.as_deref(), "action")?;
                Instruction::action_match(&self.text, action, object)?
            }
            SpecKind::RepeatedAction => {
                let action = self.require(self.action.as_deref(), "action")?;
                Instruction::repeated_action_match(&self.text, action, object, self.times)?
            }
            SpecKind::ActionAtPosition => {
                let action = self.require(self.action.as_deref(), "action")?;
                let position = self.require(self.position.as_ref(), "position")?;
                Instruction::action_at_position(&self.text, action, object, *position, self.tolerance)?
            }
            SpecKind::ObjectStatus => {
                let status = self.require(self.status.as_deref(), "status")?;
                let expected = self.value.clone().unwrap_or(Value::Bool(true));
                Instruction::object_status(&self.text, object, status, expected)?
            }
            SpecKind::ObjectNearPosition => {
                let position = self.require(self.position.as_ref(), "position")?;
                Instruction::object_near_position(&self.text, object, *position, self.tolerance)?
            }
        };

        let instruction = instruction.with_check(self.check.clone());
        Ok(match &self.id {
            Some(id) => instruction.with_id(id.clone()),
            None => instruction,
        })
    }
}

impl From<&Instruction> for InstructionSpec {
    fn from(instruction: &Instruction) -> Self {
        let mut spec = InstructionSpec {
            kind: SpecKind::Action,
            text: instruction.text.clone(),
            id: instruction.id().map(|id| id.0.clone()),
            object: any_pattern(),
            action: None,
            check: EventCondition::default(),
            times: None,
            position: None,
            tolerance: None,
            status: None,
            value: None,
        };

        if let Some(filter) = instruction.kind.filter() {
            spec.action = Some(filter.action.as_str().to_string());
            spec.object = filter.object.as_str().to_string();
            spec.check = filter.check.clone();
        }

        let position = |target: &Vec3| Some(target.to_array());
        match &instruction.kind {
            InstructionKind::ActionMatch(_) => {}
            InstructionKind::RepeatedActionMatch { times, .. } => {
                spec.kind = SpecKind::RepeatedAction;
                spec.times = Some(*times);
            }
            InstructionKind::ActionAtPosition { target, tolerance, .. } => {
                spec.kind = SpecKind::ActionAtPosition;
                spec.position = position(target);
                spec.tolerance = Some(*tolerance);
            }
            InstructionKind::ObjectStatusCheck { object, status, expected } => {
                spec.kind = SpecKind::ObjectStatus;
                spec.object = object.as_str().to_string();
                spec.status = Some(status.clone());
                spec.value = Some(expected.clone());
            }
            InstructionKind::ObjectNearPosition { object, target, tolerance } => {
                spec.kind = SpecKind::ObjectNearPosition;
                spec.object = object.as_str().to_string();
                spec.position = position(target);
                spec.tolerance = Some(*tolerance);
            }
        }
        spec
    }
}

/// A complete tutorial definition.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TutorialConfig {
    pub instructions: Vec<InstructionSpec>,
}

impl TutorialConfig {
    /// Load and validate a tutorial from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(RulesError::Config)?;
        config.build()?;
        Ok(config)
    }

    /// Serialize the tutorial to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(RulesError::Config)
    }

    /// Capture existing instructions as configuration.
    pub fn from_instructions<'a>(instructions: impl IntoIterator<Item = &'a Instruction>) -> Self {
        Self {
            instructions: instructions.into_iter().map(InstructionSpec::from).collect(),
        }
    }

    /// The built-in hide-and-seek tutorial.
    pub fn hide_and_seek() -> Self {
        Self::from_instructions(&presets::hide_and_seek_tutorial())
    }

    /// Compile every entry, in order.
    pub fn build(&self) -> Result<Vec<Instruction>> {
        self.instructions.iter().map(InstructionSpec::build).collect()
    }

    /// Compile and hand the instructions to a fresh engine.
    pub fn into_engine(self) -> Result<TutorialEngine> {
        Ok(TutorialEngine::new(self.build()?))
    }
}
