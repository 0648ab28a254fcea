//! Normalized action events.
//!
//! The game engine reports a large metadata record after every action. The
//! rule engine only looks at an `ActionEvent`: a flat snapshot of the last
//! action, the object it touched and the objects in the scene.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::Vec3;

/// Snapshot of one scene object.
///
/// Only the id, name and position are typed. Every other field the engine
/// reports (`isOpen`, `isToggled`, `isFilledWithLiquid`, ...) is kept in
/// `status` under its original key.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectState {
    #[serde(rename = "objectId", default)]
    pub object_id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub position: Vec3,

    #[serde(flatten)]
    pub status: FxHashMap<String, Value>,
}

impl ObjectState {
    /// Create a new object snapshot.
    pub fn new(object_id: impl Into<String>, name: impl Into<String>, position: Vec3) -> Self {
        Self {
            object_id: object_id.into(),
            name: name.into(),
            position,
            status: FxHashMap::default(),
        }
    }

    /// Set a status field (builder pattern).
    #[must_use]
    pub fn with_status(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.status.insert(key.into(), value.into());
        self
    }

    /// Look up a status field.
    #[must_use]
    pub fn status(&self, key: &str) -> Option<&Value> {
        self.status.get(key)
    }
}

/// Where the agent stood when the action completed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentPose {
    pub position: Vec3,
    /// Yaw in degrees.
    pub rotation: f64,
    /// Camera pitch in degrees.
    pub horizon: f64,
    pub standing: bool,
}

/// The most recently completed action.
///
/// Created once per action and consumed by a single evaluation pass.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionEvent {
    /// Action name. `None` for the initialization pseudo-event.
    pub action: Option<String>,

    /// Whether the engine reported the action as successful.
    pub success: bool,

    /// Identifier of the acted-upon object (may be empty).
    pub object_id: String,

    /// Display name of the acted-upon object (may be empty).
    pub object_name: String,

    /// Delta for continuous actions such as `MoveHandDelta`.
    /// Only X and Z are populated in practice.
    pub delta: Vec3,

    /// Snapshot of the acted-upon object, if it could be resolved.
    pub object: Option<ObjectState>,

    /// Every object currently known in the scene.
    pub objects: Vec<ObjectState>,

    pub agent: Option<AgentPose>,
}

impl ActionEvent {
    /// Create an event for a named action.
    pub fn new(action: impl Into<String>, success: bool) -> Self {
        Self {
            action: Some(action.into()),
            success,
            ..Self::default()
        }
    }

    /// The initialization pseudo-event: no action, not successful.
    pub fn initialization() -> Self {
        Self::default()
    }

    /// Set the acted-upon object's id and display name (builder pattern).
    #[must_use]
    pub fn on_object(mut self, object_id: impl Into<String>, object_name: impl Into<String>) -> Self {
        self.object_id = object_id.into();
        self.object_name = object_name.into();
        self
    }

    /// Set the action delta (builder pattern).
    #[must_use]
    pub fn with_delta(mut self, delta: Vec3) -> Self {
        self.delta = delta;
        self
    }

    /// Attach the acted-upon object's snapshot (builder pattern).
    #[must_use]
    pub fn with_object_state(mut self, object: ObjectState) -> Self {
        self.object = Some(object);
        self
    }

    /// Add a scene object (builder pattern).
    #[must_use]
    pub fn with_scene_object(mut self, object: ObjectState) -> Self {
        self.objects.push(object);
        self
    }

    /// Set the agent pose (builder pattern).
    #[must_use]
    pub fn with_agent(mut self, agent: AgentPose) -> Self {
        self.agent = Some(agent);
        self
    }

    /// Action name, if any.
    #[must_use]
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// True for the pseudo-event sent before any action.
    #[must_use]
    pub fn is_initialization(&self) -> bool {
        self.action.is_none()
    }

    /// Position of the acted-upon object, if its snapshot is present.
    #[must_use]
    pub fn object_position(&self) -> Option<Vec3> {
        self.object.as_ref().map(|o| o.position)
    }

    /// Short object label and optional instance suffix for display.
    ///
    /// Display names look like `Apple_3`; ids look like `Apple|+1.0|+0.9|-2.1`.
    fn object_label(&self) -> (&str, Option<&str>) {
        if self.object_name.is_empty() {
            let name = self.object_id.split('|').next().unwrap_or_default();
            return (name, None);
        }
        let mut parts = self.object_name.split('_');
        let name = parts.next().unwrap_or_default();
        (name, parts.next().filter(|s| !s.is_empty()))
    }
}

/// One-line summary, as shown in the participant's event log.
impl fmt::Display for ActionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(action) = self.action() else {
            return f.write_str("Initialization");
        };
        let (name, suffix) = self.object_label();
        write!(f, "Action {action} on {name}")?;
        if let Some(suffix) = suffix {
            write!(f, " ({suffix})")?;
        }
        if let Some(agent) = &self.agent {
            write!(f, " at location {}", agent.position)?;
        }
        let verdict = if self.success { "succeeded" } else { "failed" };
        write!(f, " which {verdict}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_builder() {
        let event = ActionEvent::new("PickupObject", true)
            .on_object("Apple|1|2|3", "Apple_1")
            .with_delta(Vec3::new(0.0, 0.0, -1.0))
            .with_object_state(ObjectState::new("Apple|1|2|3", "Apple_1", Vec3::new(1.0, 2.0, 3.0)));

        assert_eq!(event.action(), Some("PickupObject"));
        assert!(event.success);
        assert_eq!(event.object_name, "Apple_1");
        assert_eq!(event.object_position(), Some(Vec3::new(1.0, 2.0, 3.0)));
        assert!(!event.is_initialization());
    }

    #[test]
    fn test_initialization_event() {
        let event = ActionEvent::initialization();
        assert!(event.is_initialization());
        assert!(!event.success);
        assert_eq!(event.object_position(), None);
        assert_eq!(event.to_string(), "Initialization");
    }

    #[test]
    fn test_summary_uses_display_name() {
        let event = ActionEvent::new("OpenObject", true).on_object("Fridge|0|0|0", "Fridge_2");
        assert_eq!(event.to_string(), "Action OpenObject on Fridge (2) which succeeded");
    }

    #[test]
    fn test_summary_falls_back_to_object_id() {
        let event = ActionEvent::new("ThrowObject", false).on_object("Mug|+1.20|+0.90|-2.00", "");
        assert_eq!(event.to_string(), "Action ThrowObject on Mug which failed");
    }

    #[test]
    fn test_summary_with_agent() {
        let event = ActionEvent::new("MoveAhead", true).with_agent(AgentPose {
            position: Vec3::new(1.0, 0.5, -2.0),
            ..AgentPose::default()
        });
        assert_eq!(
            event.to_string(),
            "Action MoveAhead on  at location (1.000, 0.500, -2.000) which succeeded"
        );
    }

    #[test]
    fn test_object_state_keeps_status_fields() {
        let object: ObjectState = serde_json::from_value(json!({
            "objectId": "Pot|1|1|1",
            "name": "Pot_1",
            "position": {"x": 1.0, "y": 1.0, "z": 1.0},
            "isFilledWithLiquid": true,
            "temperature": "RoomTemp"
        }))
        .unwrap();

        assert_eq!(object.object_id, "Pot|1|1|1");
        assert_eq!(object.status("isFilledWithLiquid"), Some(&json!(true)));
        assert_eq!(object.status("temperature"), Some(&json!("RoomTemp")));
        assert_eq!(object.status("isOpen"), None);
    }
}
