//! Mission data: the intermediate representation for import/export.
//!
//! `MissionData` is the common currency all format converters exchange. It
//! is a pure snapshot of the session's waypoint sequence, tool assignments,
//! and mission metadata; building one never mutates engine state.

use crate::constants::{DEFAULT_AREA_ID, DEFAULT_SURFACE_ID};
use crate::model::{GeoPoint, ToolId};

/// Snapshot of everything a serializer may need.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionData {
    /// Mission name (feeds the structured document's `name`).
    pub name: String,
    /// Operator-supplied description.
    pub description: String,
    /// Deployment area identifier for the structured document.
    pub area_id: u32,
    /// Deployment surface identifier for the structured document.
    pub surface_id: u32,
    /// Waypoints in visit order.
    pub waypoints: Vec<MissionWaypoint>,
}

/// One waypoint in a mission snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionWaypoint {
    pub position: GeoPoint,
    /// True if the waypoint was manually placed rather than generated.
    pub custom: bool,
    /// Tool ids assigned to this waypoint, empty if untagged.
    pub tools: Vec<ToolId>,
}

impl MissionWaypoint {
    pub fn new(position: GeoPoint) -> Self {
        Self {
            position,
            custom: false,
            tools: Vec::new(),
        }
    }

    pub fn with_tools(mut self, tools: Vec<ToolId>) -> Self {
        self.tools = tools;
        self
    }
}

impl MissionData {
    /// Create an empty mission with the given metadata.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            area_id: DEFAULT_AREA_ID,
            surface_id: DEFAULT_SURFACE_ID,
            waypoints: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Count of waypoints carrying at least one tool.
    pub fn tagged_count(&self) -> usize {
        self.waypoints.iter().filter(|w| !w.tools.is_empty()).count()
    }
}
