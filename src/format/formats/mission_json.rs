//! Structured mission document implementation.
//!
//! The primary hand-off format for the mission execution service: a JSON
//! document carrying mission metadata and the full waypoint sequence with
//! 1-based ordering, coordinates rounded to six decimal places, and the
//! tool ids assigned to each waypoint.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::format::error::FormatError;
use crate::format::mission::{MissionData, MissionWaypoint};
use crate::format::traits::{ExportResult, WaypointFormat};
use crate::model::{GeoPoint, ToolId};

const WAYPOINT_TYPE: &str = "gps";

/// Round a coordinate to six decimal places (~0.1 m at the equator).
fn round6(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}

#[derive(Debug, Serialize, Deserialize)]
struct MissionDocument {
    name: String,
    description: String,
    #[serde(rename = "backImage")]
    back_image: String,
    configuration: ConfigurationDoc,
    #[serde(rename = "areaId")]
    area_id: u32,
    #[serde(rename = "surfaceId")]
    surface_id: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ConfigurationDoc {
    #[serde(rename = "type")]
    kind: String,
    waypoints: Vec<WaypointDoc>,
}

#[derive(Debug, Serialize, Deserialize)]
struct WaypointDoc {
    id: u32,
    #[serde(rename = "type")]
    kind: String,
    order: u32,
    coordinates: CoordinatesDoc,
    tool_type_id: Vec<ToolId>,
}

#[derive(Debug, Serialize, Deserialize)]
struct CoordinatesDoc {
    latitude: f64,
    longitude: f64,
    altitude: f64,
}

/// Structured mission document (JSON).
///
/// Supports:
/// - Mission name, description, and deployment identifiers
/// - Per-waypoint tool assignments
///
/// Coordinates are rounded on export; use GeoJSON or CSV when full
/// precision matters.
pub struct MissionJsonFormat;

impl WaypointFormat for MissionJsonFormat {
    fn id(&self) -> &'static str {
        "mission"
    }

    fn display_name(&self) -> &'static str {
        "Mission document (JSON)"
    }

    fn extensions(&self) -> &[&'static str] {
        &["json"]
    }

    fn supports_tools(&self) -> bool {
        true
    }

    fn export_to_string(&self, data: &MissionData) -> Result<String, FormatError> {
        let doc = MissionDocument {
            name: data.name.trim().to_string(),
            description: data.description.clone(),
            back_image: String::new(),
            configuration: ConfigurationDoc {
                kind: WAYPOINT_TYPE.to_string(),
                waypoints: data
                    .waypoints
                    .iter()
                    .enumerate()
                    .map(|(i, w)| WaypointDoc {
                        id: (i + 1) as u32,
                        kind: WAYPOINT_TYPE.to_string(),
                        order: (i + 1) as u32,
                        coordinates: CoordinatesDoc {
                            latitude: round6(w.position.lat),
                            longitude: round6(w.position.lng),
                            altitude: 0.0,
                        },
                        tool_type_id: w.tools.clone(),
                    })
                    .collect(),
            },
            area_id: data.area_id,
            surface_id: data.surface_id,
        };
        Ok(serde_json::to_string_pretty(&doc)?)
    }

    fn export(&self, data: &MissionData, path: &Path) -> Result<ExportResult, FormatError> {
        log::info!("Exporting mission document to {:?}", path);

        let text = self.export_to_string(data)?;
        std::fs::write(path, text)?;

        log::info!(
            "Exported {} waypoints ({} tagged)",
            data.len(),
            data.tagged_count()
        );

        Ok(ExportResult {
            waypoints_exported: data.len(),
            files_created: vec![path.to_path_buf()],
        })
    }

    fn import_from_str(&self, text: &str) -> Result<MissionData, FormatError> {
        let doc: MissionDocument = serde_json::from_str(text)?;

        let mut data = MissionData::new(doc.name, doc.description);
        data.area_id = doc.area_id;
        data.surface_id = doc.surface_id;
        data.waypoints = doc
            .configuration
            .waypoints
            .into_iter()
            .map(|w| {
                MissionWaypoint::new(GeoPoint::new(
                    w.coordinates.latitude,
                    w.coordinates.longitude,
                ))
                .with_tools(w.tool_type_id)
            })
            .collect();
        Ok(data)
    }

    fn import(&self, path: &Path) -> Result<MissionData, FormatError> {
        log::info!("Importing mission document from {:?}", path);

        let text = std::fs::read_to_string(path)?;
        let data = self.import_from_str(&text)?;

        log::info!("Imported {} waypoints", data.len());

        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round6() {
        assert_eq!(round6(1.23456789), 1.234568);
        assert_eq!(round6(-0.0000004), -0.0);
        assert_eq!(round6(45.0), 45.0);
    }
}
