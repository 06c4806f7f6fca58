//! Sensor/tool catalog and per-waypoint tool assignments.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::WaypointId;

/// Identifier of a sensor/tool in the catalog.
pub type ToolId = u32;

/// A sensor or tool the vehicle can deploy at a waypoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tool {
    /// Unique identifier for the tool
    pub id: ToolId,
    /// Display name of the tool
    pub name: String,
    /// RGB color used by rendering collaborators
    pub color: [u8; 3],
}

impl Tool {
    /// Create a new tool with the given ID, name, and color.
    pub fn new(id: ToolId, name: &str, color: [u8; 3]) -> Self {
        Self {
            id,
            name: name.to_string(),
            color,
        }
    }
}

/// Default tool catalog for new sessions.
pub fn default_tools() -> Vec<Tool> {
    vec![
        Tool::new(1, "Penetrometer", [100, 180, 100]),
        Tool::new(2, "Acoustic Sensor", [230, 150, 60]),
    ]
}

/// Mapping from waypoint id to the set of tool ids assigned to it.
///
/// Entries are created, overwritten, or bulk-cleared by the editor. Entries
/// for waypoints that no longer exist are tolerated; they simply stop
/// contributing to exports.
#[derive(Debug, Clone, Default)]
pub struct ToolAssignments {
    map: HashMap<WaypointId, Vec<ToolId>>,
}

impl ToolAssignments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tools assigned to a waypoint, empty if untagged.
    pub fn for_waypoint(&self, id: WaypointId) -> &[ToolId] {
        self.map.get(&id).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Replace the assignment for a waypoint.
    pub fn assign(&mut self, id: WaypointId, tools: Vec<ToolId>) {
        self.map.insert(id, tools);
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }
}
