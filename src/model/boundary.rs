//! Field boundary data model.
//!
//! A boundary is an ordered list of geographic corner points outlining the
//! working area. Acquisition accepts any count of at least three corners;
//! grid generation additionally requires exactly four (enforced by the
//! session, not here).

use crate::constants::GRID_CORNERS;
use crate::model::GeoPoint;

/// Positional label for a corner: `A` for index 0, `B` for 1, and so on.
///
/// Only meaningful for the first 26 corners; later indices get `?`.
pub fn corner_label(index: usize) -> char {
    if index < 26 {
        (b'A' + index as u8) as char
    } else {
        '?'
    }
}

/// Ordered set of geographic corner points outlining the working area.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Boundary {
    corners: Vec<GeoPoint>,
}

impl Boundary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a boundary from corners in acquisition order.
    pub fn from_corners(corners: Vec<GeoPoint>) -> Self {
        Self { corners }
    }

    pub fn corners(&self) -> &[GeoPoint] {
        &self.corners
    }

    pub fn len(&self) -> usize {
        self.corners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corners.is_empty()
    }

    pub fn clear(&mut self) {
        self.corners.clear();
    }

    /// Whether this boundary can feed grid generation (exactly 4 corners).
    pub fn can_generate(&self) -> bool {
        self.corners.len() == GRID_CORNERS
    }

    /// Corners paired with their positional labels (A, B, C, ...).
    pub fn labeled_corners(&self) -> impl Iterator<Item = (char, GeoPoint)> + '_ {
        self.corners
            .iter()
            .enumerate()
            .map(|(i, &p)| (corner_label(i), p))
    }

    /// Check if a point is inside the boundary polygon (ray casting).
    ///
    /// Treats the corner list as a closed polygon in raw lat/lng space.
    pub fn contains(&self, point: GeoPoint) -> bool {
        if self.corners.len() < 3 {
            return false;
        }

        let (x, y) = (point.lng, point.lat);
        let mut inside = false;
        let mut j = self.corners.len() - 1;
        for i in 0..self.corners.len() {
            let (xi, yi) = (self.corners[i].lng, self.corners[i].lat);
            let (xj, yj) = (self.corners[j].lng, self.corners[j].lat);
            if ((yi > y) != (yj > y)) && (x < (xj - xi) * (y - yi) / (yj - yi) + xi) {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}

/// The corner list that is currently driving projection.
///
/// The committed boundary wins when non-empty; otherwise the in-progress
/// manual pick list is active; otherwise there is no source and projection
/// is undefined. Deciding this in one place keeps every projector call site
/// from re-deriving which list is live.
#[derive(Debug, Clone, Copy)]
pub enum BoundarySource<'a> {
    /// A committed boundary.
    Committed(&'a [GeoPoint]),
    /// Manual picks not yet committed.
    InProgress(&'a [GeoPoint]),
    /// Nothing acquired yet.
    Empty,
}

impl BoundarySource<'_> {
    pub fn points(&self) -> &[GeoPoint] {
        match self {
            BoundarySource::Committed(pts) | BoundarySource::InProgress(pts) => pts,
            BoundarySource::Empty => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points().is_empty()
    }
}
