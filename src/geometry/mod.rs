//! Geometry engine: projection, corner ordering, grid interpolation.

mod corners;
mod grid;
mod projector;

pub use corners::{Corner, Traversal, order_corners};
pub use grid::{GridSpec, interpolate_grid};
pub use projector::{GeoBounds, PreviewPoint, PreviewSurface};
