//! Waypoint format implementations.

mod csv;
mod geojson;
mod mission_json;

#[cfg(test)]
mod tests;

pub use csv::CsvFormat;
pub use geojson::{GeoJsonFormat, parse_boundary};
pub use mission_json::MissionJsonFormat;
