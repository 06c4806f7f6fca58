//! Waypoint import/export formats.
//!
//! Each supported format implements [`WaypointFormat`] and is discovered
//! through the [`FormatRegistry`]. All converters exchange data through the
//! [`MissionData`] intermediate representation and never touch engine state.

mod error;
mod formats;
mod mission;
mod registry;
mod traits;

pub use error::FormatError;
pub use formats::{CsvFormat, GeoJsonFormat, MissionJsonFormat, parse_boundary};
pub use mission::{MissionData, MissionWaypoint};
pub use registry::FormatRegistry;
pub use traits::{ExportResult, WaypointFormat};
