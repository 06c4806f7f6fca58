//! Tests for the CSV format.

use crate::format::formats::CsvFormat;
use crate::format::mission::{MissionData, MissionWaypoint};
use crate::format::traits::WaypointFormat;
use crate::model::GeoPoint;

fn create_mission() -> MissionData {
    let mut data = MissionData::new("survey", "");
    data.waypoints
        .push(MissionWaypoint::new(GeoPoint::new(45.50000012345, 9.25)));
    data.waypoints
        .push(MissionWaypoint::new(GeoPoint::new(-3.5, -60.125)));
    data
}

#[test]
fn test_format_metadata() {
    let format = CsvFormat;

    assert_eq!(format.id(), "csv");
    assert!(format.extensions().contains(&"csv"));
    assert!(!format.supports_tools());
}

#[test]
fn test_header_and_row_order() {
    let format = CsvFormat;
    let text = format.export_to_string(&create_mission()).unwrap();
    let mut lines = text.lines();

    assert_eq!(lines.next(), Some("latitude,longitude"));

    let first = lines.next().unwrap();
    assert!(first.starts_with("45.50000012345,"));
    let second = lines.next().unwrap();
    assert!(second.starts_with("-3.5,"));
    assert_eq!(lines.next(), None);
}

#[test]
fn test_coordinates_unrounded() {
    // CSV is the full-precision export; nothing may be rounded.
    let format = CsvFormat;
    let text = format.export_to_string(&create_mission()).unwrap();
    let imported = format.import_from_str(&text).unwrap();

    assert_eq!(imported.waypoints[0].position.lat, 45.50000012345);
    assert_eq!(imported.waypoints[1].position.lng, -60.125);
}

#[test]
fn test_empty_mission_roundtrips_empty() {
    let format = CsvFormat;
    let text = format
        .export_to_string(&MissionData::new("empty", ""))
        .unwrap();

    // The csv writer emits headers lazily; with no rows the output is
    // empty, and importing it yields no waypoints either way.
    let imported = format.import_from_str(&text).unwrap();
    assert!(imported.is_empty());
}

#[test]
fn test_import_rejects_garbage() {
    let format = CsvFormat;
    assert!(
        format
            .import_from_str("latitude,longitude\nnot-a-number,9.0\n")
            .is_err()
    );
}
