//! Tests for the structured mission document.

use crate::format::formats::MissionJsonFormat;
use crate::format::mission::{MissionData, MissionWaypoint};
use crate::format::traits::WaypointFormat;
use crate::model::GeoPoint;

fn create_mission() -> MissionData {
    let mut data = MissionData::new("soil run", "north field");
    data.waypoints.push(
        MissionWaypoint::new(GeoPoint::new(45.12345678, 9.87654321)).with_tools(vec![1, 2]),
    );
    data.waypoints
        .push(MissionWaypoint::new(GeoPoint::new(45.2, 9.8)));
    data
}

#[test]
fn test_format_metadata() {
    let format = MissionJsonFormat;

    assert_eq!(format.id(), "mission");
    assert!(format.extensions().contains(&"json"));
    assert!(format.supports_tools());
}

#[test]
fn test_document_shape() {
    let format = MissionJsonFormat;
    let text = format.export_to_string(&create_mission()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value["name"], "soil run");
    assert_eq!(value["description"], "north field");
    assert_eq!(value["backImage"], "");
    assert_eq!(value["areaId"], 7);
    assert_eq!(value["surfaceId"], 7);
    assert_eq!(value["configuration"]["type"], "gps");

    let waypoints = value["configuration"]["waypoints"].as_array().unwrap();
    assert_eq!(waypoints.len(), 2);

    // 1-based id and order, following sequence position
    assert_eq!(waypoints[0]["id"], 1);
    assert_eq!(waypoints[0]["order"], 1);
    assert_eq!(waypoints[1]["id"], 2);
    assert_eq!(waypoints[1]["order"], 2);

    assert_eq!(waypoints[0]["type"], "gps");
    assert_eq!(waypoints[0]["coordinates"]["altitude"], 0.0);

    // Coordinates rounded to six decimals
    assert_eq!(waypoints[0]["coordinates"]["latitude"], 45.123457);
    assert_eq!(waypoints[0]["coordinates"]["longitude"], 9.876543);

    // Tool ids present, empty array when untagged
    assert_eq!(waypoints[0]["tool_type_id"][0], 1);
    assert_eq!(waypoints[0]["tool_type_id"][1], 2);
    assert!(waypoints[1]["tool_type_id"].as_array().unwrap().is_empty());
}

#[test]
fn test_name_is_trimmed() {
    let format = MissionJsonFormat;
    let mut data = create_mission();
    data.name = "  padded  ".to_string();

    let text = format.export_to_string(&data).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["name"], "padded");
}

#[test]
fn test_import_recovers_tools_and_metadata() {
    let format = MissionJsonFormat;
    let original = create_mission();
    let text = format.export_to_string(&original).unwrap();
    let imported = format.import_from_str(&text).unwrap();

    assert_eq!(imported.name, "soil run");
    assert_eq!(imported.area_id, 7);
    assert_eq!(imported.len(), 2);
    assert_eq!(imported.waypoints[0].tools, vec![1, 2]);
    assert!(imported.waypoints[1].tools.is_empty());
    assert_eq!(imported.tagged_count(), 1);
}
