//! Waypoint data model.

use crate::model::GeoPoint;

/// Stable identifier for a waypoint.
///
/// Assigned once at creation from a session-owned counter and never reused,
/// so tool assignments survive deletions and insertions without the
/// index-shift desynchronization a positional key would suffer.
pub type WaypointId = u64;

/// A grid point a vehicle is meant to visit, in sequence order.
///
/// Visit order is the waypoint's position in the session's sequence; the id
/// only names the waypoint for cross-references like tool assignments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    pub id: WaypointId,
    pub position: GeoPoint,
    /// True if manually placed via add mode rather than generated.
    pub custom: bool,
}

impl Waypoint {
    pub fn new(id: WaypointId, position: GeoPoint, custom: bool) -> Self {
        Self {
            id,
            position,
            custom,
        }
    }
}
