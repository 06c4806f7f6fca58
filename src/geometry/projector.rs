//! Mapping between geographic coordinates and a fixed-size 2D preview surface.
//!
//! The projection is a plain linear fit of the active boundary source's
//! bounding box onto the surface rectangle, inset by a uniform margin. The
//! vertical axis is inverted: increasing latitude moves upward on screen
//! while surface y grows downward. The inverse mapping exists solely for
//! placing manually-added waypoints from raw surface clicks.

use crate::constants::{PREVIEW_HEIGHT, PREVIEW_MARGIN, PREVIEW_WIDTH};
use crate::model::{BoundarySource, GeoPoint};

/// A position on the preview surface, in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewPoint {
    pub x: f64,
    pub y: f64,
}

/// Geographic bounding box of a point set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl GeoBounds {
    /// Bounding box of a point set, `None` when the set is empty.
    pub fn from_points(points: &[GeoPoint]) -> Option<Self> {
        let first = points.first()?;
        let mut bounds = GeoBounds {
            min_lat: first.lat,
            max_lat: first.lat,
            min_lng: first.lng,
            max_lng: first.lng,
        };
        for p in &points[1..] {
            bounds.min_lat = bounds.min_lat.min(p.lat);
            bounds.max_lat = bounds.max_lat.max(p.lat);
            bounds.min_lng = bounds.min_lng.min(p.lng);
            bounds.max_lng = bounds.max_lng.max(p.lng);
        }
        Some(bounds)
    }

    /// Latitude span, clamped so a degenerate (collinear or single-point)
    /// box never divides by zero downstream.
    pub fn lat_span(&self) -> f64 {
        let span = self.max_lat - self.min_lat;
        if span == 0.0 { 1.0 } else { span }
    }

    /// Longitude span, clamped like [`Self::lat_span`].
    pub fn lng_span(&self) -> f64 {
        let span = self.max_lng - self.min_lng;
        if span == 0.0 { 1.0 } else { span }
    }
}

/// Fixed-size preview surface with a uniform margin on all sides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewSurface {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl Default for PreviewSurface {
    fn default() -> Self {
        Self {
            width: PREVIEW_WIDTH,
            height: PREVIEW_HEIGHT,
            margin: PREVIEW_MARGIN,
        }
    }
}

impl PreviewSurface {
    pub fn new(width: f64, height: f64, margin: f64) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    /// Project a geographic point onto the surface.
    ///
    /// Returns `None` when the boundary source is empty (no frame of
    /// reference exists yet).
    pub fn project(&self, source: BoundarySource<'_>, point: GeoPoint) -> Option<PreviewPoint> {
        let bounds = GeoBounds::from_points(source.points())?;

        let inner_w = self.width - 2.0 * self.margin;
        let inner_h = self.height - 2.0 * self.margin;

        let x = self.margin + (point.lng - bounds.min_lng) / bounds.lng_span() * inner_w;
        let y = self.margin + (bounds.max_lat - point.lat) / bounds.lat_span() * inner_h;

        Some(PreviewPoint { x, y })
    }

    /// Invert a surface position back to geographic coordinates.
    ///
    /// Same source and `None` rule as [`Self::project`]; used only when
    /// placing a manually-added waypoint from a click.
    pub fn unproject(&self, source: BoundarySource<'_>, x: f64, y: f64) -> Option<GeoPoint> {
        let bounds = GeoBounds::from_points(source.points())?;

        let inner_w = self.width - 2.0 * self.margin;
        let inner_h = self.height - 2.0 * self.margin;

        let nx = (x - self.margin) / inner_w;
        let ny = 1.0 - (y - self.margin) / inner_h;

        Some(GeoPoint {
            lat: bounds.min_lat + ny * bounds.lat_span(),
            lng: bounds.min_lng + nx * bounds.lng_span(),
        })
    }
}
