//! Engine-wide constants.

/// Preview surface width in pixels.
pub const PREVIEW_WIDTH: f64 = 600.0;

/// Preview surface height in pixels.
pub const PREVIEW_HEIGHT: f64 = 400.0;

/// Uniform preview margin on all sides, in pixels.
pub const PREVIEW_MARGIN: f64 = 20.0;

/// Minimum corner count accepted by boundary acquisition.
pub const MIN_BOUNDARY_CORNERS: usize = 3;

/// Corner count required for grid generation (and area redefinition).
pub const GRID_CORNERS: usize = 4;

/// Default `areaId` for the structured mission document.
pub const DEFAULT_AREA_ID: u32 = 7;

/// Default `surfaceId` for the structured mission document.
pub const DEFAULT_SURFACE_ID: u32 = 7;

/// Debounce interval for geocode autocomplete, in milliseconds.
pub const SEARCH_DEBOUNCE_MS: u64 = 500;

/// Default mission name for new sessions.
pub const DEFAULT_MISSION_NAME: &str = "My Grid Template";

/// Default mission description for new sessions.
pub const DEFAULT_MISSION_DESCRIPTION: &str = "Template with GPS waypoints.";
