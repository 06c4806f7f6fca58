//! Fieldgrid - boundary-to-grid GPS waypoint planner
//!
//! Turns a field boundary into an ordered serpentine grid of GPS waypoints
//! for a ground vehicle to visit in sequence, with per-waypoint sensor/tool
//! tagging and export to GeoJSON, CSV, or a structured mission document.

pub mod constants;
pub mod error;
pub mod format;
pub mod geometry;
pub mod interaction;
pub mod model;
pub mod search;
pub mod session;

pub use error::EngineError;
pub use session::{AcquisitionMethod, GridSession, MissionSettings};
