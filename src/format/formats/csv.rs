//! CSV format implementation.
//!
//! One `latitude,longitude` row per waypoint, unrounded, in sequence order.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::format::error::FormatError;
use crate::format::mission::{MissionData, MissionWaypoint};
use crate::format::traits::{ExportResult, WaypointFormat};
use crate::model::GeoPoint;

#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    latitude: f64,
    longitude: f64,
}

/// CSV format.
///
/// Supports:
/// - Raw coordinate rows under a `latitude,longitude` header
///
/// Does not support:
/// - Tool assignments
/// - Mission metadata
pub struct CsvFormat;

impl WaypointFormat for CsvFormat {
    fn id(&self) -> &'static str {
        "csv"
    }

    fn display_name(&self) -> &'static str {
        "CSV"
    }

    fn extensions(&self) -> &[&'static str] {
        &["csv"]
    }

    fn supports_tools(&self) -> bool {
        false
    }

    fn export_to_string(&self, data: &MissionData) -> Result<String, FormatError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for waypoint in &data.waypoints {
            writer.serialize(CsvRow {
                latitude: waypoint.position.lat,
                longitude: waypoint.position.lng,
            })?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| FormatError::invalid_format(format!("CSV flush failed: {e}")))?;
        String::from_utf8(bytes)
            .map_err(|e| FormatError::invalid_format(format!("CSV output not UTF-8: {e}")))
    }

    fn export(&self, data: &MissionData, path: &Path) -> Result<ExportResult, FormatError> {
        log::info!("Exporting CSV waypoints to {:?}", path);

        let text = self.export_to_string(data)?;
        std::fs::write(path, text)?;

        log::info!("Exported {} waypoints", data.len());

        Ok(ExportResult {
            waypoints_exported: data.len(),
            files_created: vec![path.to_path_buf()],
        })
    }

    fn import_from_str(&self, text: &str) -> Result<MissionData, FormatError> {
        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let mut data = MissionData::new("", "");
        for row in reader.deserialize() {
            let row: CsvRow = row?;
            data.waypoints
                .push(MissionWaypoint::new(GeoPoint::new(row.latitude, row.longitude)));
        }
        Ok(data)
    }

    fn import(&self, path: &Path) -> Result<MissionData, FormatError> {
        log::info!("Importing CSV waypoints from {:?}", path);

        let text = std::fs::read_to_string(path)?;
        let data = self.import_from_str(&text)?;

        log::info!("Imported {} waypoints", data.len());

        Ok(data)
    }
}
