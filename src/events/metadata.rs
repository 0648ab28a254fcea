//! Raw engine metadata and its normalization into [`ActionEvent`]s.
//!
//! The engine posts one JSON record per completed action, with one entry per
//! agent. Only the first agent is player-controlled, so only it is normalized.

use serde::Deserialize;

use crate::core::{Result, RulesError, Vec3};

use super::event::{ActionEvent, AgentPose, ObjectState};

/// Full metadata record posted by the engine after an action.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct EngineMetadata {
    #[serde(default)]
    pub agents: Vec<AgentMetadata>,
}

/// Per-agent portion of the metadata.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AgentMetadata {
    pub last_action: Option<String>,
    pub last_action_success: bool,
    pub last_action_object_id: Option<String>,
    pub last_action_object_name: Option<String>,
    #[serde(rename = "lastActionX")]
    pub last_action_x: Option<f64>,
    #[serde(rename = "lastActionY")]
    pub last_action_y: Option<f64>,
    #[serde(rename = "lastActionZ")]
    pub last_action_z: Option<f64>,
    pub error_message: Option<String>,
    pub scene_name: Option<String>,
    pub is_standing: bool,
    pub agent: Option<AgentBody>,
    pub objects: Vec<ObjectState>,
}

/// The agent's body as reported by the engine.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AgentBody {
    pub position: Vec3,
    pub rotation: Vec3,
    pub camera_horizon: f64,
}

impl EngineMetadata {
    /// Decode a metadata record from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(RulesError::Metadata)
    }

    /// The player-controlled agent.
    pub fn primary_agent(&self) -> Result<&AgentMetadata> {
        self.agents.first().ok_or(RulesError::MissingAgent)
    }
}

impl AgentMetadata {
    /// Resolve the acted-upon object in the scene list.
    ///
    /// Returns `None` unless exactly one object carries the acted-upon id.
    pub fn acted_object(&self) -> Option<&ObjectState> {
        let target = self.last_action_object_id.as_deref()?;
        let mut candidates = self.objects.iter().filter(|o| o.object_id == target);
        let first = candidates.next()?;
        if candidates.next().is_some() {
            tracing::warn!(object_id = target, "ambiguous acted-upon object in metadata");
            return None;
        }
        Some(first)
    }

    fn pose(&self) -> Option<AgentPose> {
        self.agent.as_ref().map(|body| AgentPose {
            position: body.position,
            rotation: body.rotation.y,
            horizon: body.camera_horizon,
            standing: self.is_standing,
        })
    }

    /// Normalize this agent's view into an action event.
    pub fn to_event(&self) -> ActionEvent {
        ActionEvent {
            action: self.last_action.clone().filter(|a| !a.is_empty()),
            success: self.last_action_success,
            object_id: self.last_action_object_id.clone().unwrap_or_default(),
            object_name: self.last_action_object_name.clone().unwrap_or_default(),
            delta: Vec3::new(
                self.last_action_x.unwrap_or_default(),
                self.last_action_y.unwrap_or_default(),
                self.last_action_z.unwrap_or_default(),
            ),
            object: self.acted_object().cloned(),
            objects: self.objects.clone(),
            agent: self.pose(),
        }
    }
}

impl ActionEvent {
    /// Normalize a full metadata record.
    pub fn from_metadata(metadata: &EngineMetadata) -> Result<Self> {
        metadata.primary_agent().map(AgentMetadata::to_event)
    }

    /// Decode and normalize a metadata JSON record.
    pub fn from_metadata_json(json: &str) -> Result<Self> {
        Self::from_metadata(&EngineMetadata::from_json(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PICKUP: &str = r#"{
        "agents": [{
            "lastAction": "PickupObject",
            "lastActionSuccess": true,
            "lastActionObjectId": "Apple|+0.10|+0.90|-1.00",
            "lastActionObjectName": "Apple_1",
            "lastActionZ": 0.0,
            "isStanding": true,
            "sceneName": "FloorPlan302_physics",
            "agent": {
                "position": {"x": 1.0, "y": 0.9, "z": -1.5},
                "rotation": {"x": 0.0, "y": 90.0, "z": 0.0},
                "cameraHorizon": 30.0
            },
            "objects": [
                {"objectId": "Apple|+0.10|+0.90|-1.00", "name": "Apple_1",
                 "position": {"x": 0.1, "y": 0.9, "z": -1.0}, "isPickedUp": true},
                {"objectId": "Fridge|-2.10|+0.00|+1.10", "name": "Fridge_1",
                 "position": {"x": -2.1, "y": 0.0, "z": 1.1}, "isOpen": false}
            ]
        }]
    }"#;

    #[test]
    fn test_normalize_pickup() {
        let event = ActionEvent::from_metadata_json(PICKUP).unwrap();

        assert_eq!(event.action(), Some("PickupObject"));
        assert!(event.success);
        assert_eq!(event.object_name, "Apple_1");
        assert_eq!(event.object_position(), Some(Vec3::new(0.1, 0.9, -1.0)));
        assert_eq!(event.objects.len(), 2);

        let agent = event.agent.unwrap();
        assert_eq!(agent.rotation, 90.0);
        assert_eq!(agent.horizon, 30.0);
        assert!(agent.standing);
    }

    #[test]
    fn test_missing_agent() {
        let err = ActionEvent::from_metadata_json(r#"{"agents": []}"#).unwrap_err();
        assert!(matches!(err, RulesError::MissingAgent));
    }

    #[test]
    fn test_malformed_json() {
        let err = ActionEvent::from_metadata_json("{not json").unwrap_err();
        assert!(matches!(err, RulesError::Metadata(_)));
    }

    #[test]
    fn test_initialization_record() {
        let event = ActionEvent::from_metadata_json(r#"{"agents": [{"objects": []}]}"#).unwrap();
        assert!(event.is_initialization());
        assert!(event.object.is_none());
        assert_eq!(event.delta, Vec3::ZERO);
    }

    #[test]
    fn test_ambiguous_object_is_dropped() {
        let json = r#"{"agents": [{
            "lastAction": "OpenObject",
            "lastActionSuccess": true,
            "lastActionObjectId": "Cabinet|1",
            "objects": [
                {"objectId": "Cabinet|1", "name": "Cabinet_1"},
                {"objectId": "Cabinet|1", "name": "Cabinet_2"}
            ]
        }]}"#;
        let event = ActionEvent::from_metadata_json(json).unwrap();
        assert!(event.object.is_none());
        assert_eq!(event.objects.len(), 2);
    }
}
