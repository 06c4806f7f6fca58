//! Trait definitions for waypoint format implementations.

use std::path::{Path, PathBuf};

use crate::format::error::FormatError;
use crate::format::mission::MissionData;

/// Trait for waypoint format import/export implementations.
///
/// Each format (GeoJSON, CSV, mission JSON) implements this trait to provide
/// bidirectional conversion between the engine's mission snapshot and the
/// external representation.
pub trait WaypointFormat: Send + Sync {
    /// Unique identifier for this format (e.g., "geojson", "csv", "mission").
    fn id(&self) -> &'static str;

    /// Human-readable name for display.
    fn display_name(&self) -> &'static str;

    /// File extensions this format uses; the first is the canonical one
    /// appended to filenames that lack an extension.
    fn extensions(&self) -> &[&'static str];

    /// Whether this format carries per-waypoint tool assignments.
    fn supports_tools(&self) -> bool;

    /// Serialize a mission to the format's textual representation.
    fn export_to_string(&self, data: &MissionData) -> Result<String, FormatError>;

    /// Serialize a mission and write it to `path`.
    fn export(&self, data: &MissionData, path: &Path) -> Result<ExportResult, FormatError>;

    /// Parse a mission from the format's textual representation.
    fn import_from_str(&self, text: &str) -> Result<MissionData, FormatError>;

    /// Read and parse a mission from `path`.
    fn import(&self, path: &Path) -> Result<MissionData, FormatError>;
}

/// Result of an export operation.
#[derive(Debug, Default)]
pub struct ExportResult {
    /// Number of waypoints exported.
    pub waypoints_exported: usize,

    /// Files created during export.
    pub files_created: Vec<PathBuf>,
}

impl ExportResult {
    pub fn new() -> Self {
        Self::default()
    }
}
