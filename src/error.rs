//! Engine-level error types.
//!
//! Every variant is a recoverable, user-visible validation failure: the
//! triggering operation is a no-op and the session stays in its prior valid
//! state. Nothing here is fatal to the process.

use thiserror::Error;

use crate::format::FormatError;

/// Errors reported by session operations.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Grid generation or area redefinition needs exactly 4 corners
    #[error("boundary needs exactly {expected} corners to generate a grid, found {found}")]
    CornerCount {
        /// Required corner count
        expected: usize,
        /// Corners currently committed
        found: usize,
    },

    /// Manual boundary commit with too few picked points
    #[error("need at least {required} picked points to set a boundary, found {found}")]
    TooFewPicks {
        /// Minimum pick count
        required: usize,
        /// Picks currently collected
        found: usize,
    },

    /// Export requested with an empty waypoint sequence
    #[error("no waypoints to export")]
    NoWaypoints,

    /// Export requested for a format id the registry does not know
    #[error("unknown export format '{0}'")]
    UnknownFormat(String),

    /// Failure in a format serializer or boundary file parser
    #[error(transparent)]
    Format(#[from] FormatError),
}
