//! Data models for the fieldgrid engine.

mod boundary;
mod point;
mod tool;
mod waypoint;

pub use boundary::{Boundary, BoundarySource, corner_label};
pub use point::GeoPoint;
pub use tool::{Tool, ToolAssignments, ToolId, default_tools};
pub use waypoint::{Waypoint, WaypointId};
