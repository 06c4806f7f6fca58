//! GeoJSON format implementation.
//!
//! Waypoints are exported as a `FeatureCollection` of `Point` features with
//! empty properties, one per waypoint, in sequence order. The same shape is
//! accepted on import, which also serves boundary acquisition: a boundary
//! file must contain at least three `Point` features, consumed as
//! `[lng, lat]` corners in file order.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::MIN_BOUNDARY_CORNERS;
use crate::format::error::FormatError;
use crate::format::mission::{MissionData, MissionWaypoint};
use crate::format::traits::{ExportResult, WaypointFormat};
use crate::model::GeoPoint;

const FEATURE_COLLECTION: &str = "FeatureCollection";
const FEATURE: &str = "Feature";
const POINT: &str = "Point";

#[derive(Debug, Serialize, Deserialize)]
struct FeatureCollectionDoc {
    #[serde(rename = "type")]
    kind: String,
    features: Vec<FeatureDoc>,
}

#[derive(Debug, Serialize, Deserialize)]
struct FeatureDoc {
    #[serde(rename = "type")]
    kind: String,
    geometry: GeometryDoc,
    #[serde(default)]
    properties: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeometryDoc {
    #[serde(rename = "type")]
    kind: String,
    /// `[lng, lat]` for Point features; non-Point geometries keep whatever
    /// nesting they came with and are skipped on import.
    coordinates: serde_json::Value,
}

/// Parse the `Point` features of a GeoJSON FeatureCollection, in file order.
///
/// Non-`Point` features are skipped with a warning. This is shared by
/// mission import and boundary acquisition.
fn parse_points(text: &str) -> Result<Vec<GeoPoint>, FormatError> {
    let doc: FeatureCollectionDoc = serde_json::from_str(text)?;
    if doc.kind != FEATURE_COLLECTION {
        return Err(FormatError::invalid_format(format!(
            "expected a FeatureCollection, found '{}'",
            doc.kind
        )));
    }

    let mut points = Vec::with_capacity(doc.features.len());
    for feature in &doc.features {
        if feature.geometry.kind != POINT {
            log::warn!(
                "Skipping non-Point feature of type '{}'",
                feature.geometry.kind
            );
            continue;
        }
        // GeoJSON position order is [lng, lat]; any altitude is ignored.
        let position = feature
            .geometry
            .coordinates
            .as_array()
            .filter(|c| c.len() >= 2)
            .and_then(|c| Some(GeoPoint::new(c[1].as_f64()?, c[0].as_f64()?)));
        match position {
            Some(p) => points.push(p),
            None => {
                return Err(FormatError::invalid_coordinates(
                    "Point feature without a [lng, lat] position".to_string(),
                ));
            }
        }
    }
    Ok(points)
}

/// Parse a boundary file: the `Point` features of a FeatureCollection,
/// requiring at least three of them.
pub fn parse_boundary(text: &str) -> Result<Vec<GeoPoint>, FormatError> {
    let points = parse_points(text)?;
    if points.len() < MIN_BOUNDARY_CORNERS {
        return Err(FormatError::TooFewPoints {
            required: MIN_BOUNDARY_CORNERS,
            found: points.len(),
        });
    }
    Ok(points)
}

/// GeoJSON format.
///
/// Supports:
/// - Point features, one per waypoint, in sequence order
///
/// Does not support:
/// - Tool assignments (carried only by the mission document)
pub struct GeoJsonFormat;

impl WaypointFormat for GeoJsonFormat {
    fn id(&self) -> &'static str {
        "geojson"
    }

    fn display_name(&self) -> &'static str {
        "GeoJSON"
    }

    fn extensions(&self) -> &[&'static str] {
        &["geojson"]
    }

    fn supports_tools(&self) -> bool {
        false
    }

    fn export_to_string(&self, data: &MissionData) -> Result<String, FormatError> {
        let doc = FeatureCollectionDoc {
            kind: FEATURE_COLLECTION.to_string(),
            features: data
                .waypoints
                .iter()
                .map(|w| FeatureDoc {
                    kind: FEATURE.to_string(),
                    geometry: GeometryDoc {
                        kind: POINT.to_string(),
                        coordinates: serde_json::json!([w.position.lng, w.position.lat]),
                    },
                    properties: serde_json::Map::new(),
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&doc)?)
    }

    fn export(&self, data: &MissionData, path: &Path) -> Result<ExportResult, FormatError> {
        log::info!("Exporting GeoJSON waypoints to {:?}", path);

        let text = self.export_to_string(data)?;
        std::fs::write(path, text)?;

        log::info!("Exported {} waypoints", data.len());

        Ok(ExportResult {
            waypoints_exported: data.len(),
            files_created: vec![path.to_path_buf()],
        })
    }

    fn import_from_str(&self, text: &str) -> Result<MissionData, FormatError> {
        let points = parse_points(text)?;
        let mut data = MissionData::new("", "");
        data.waypoints = points.into_iter().map(MissionWaypoint::new).collect();
        Ok(data)
    }

    fn import(&self, path: &Path) -> Result<MissionData, FormatError> {
        log::info!("Importing GeoJSON waypoints from {:?}", path);

        let text = std::fs::read_to_string(path)?;
        let data = self.import_from_str(&text)?;

        log::info!("Imported {} waypoints", data.len());

        Ok(data)
    }
}
