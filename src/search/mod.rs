//! Place search for recentering the hosting map widget.
//!
//! Strictly a collaborator of the rendering layer: results recenter the
//! interactive map and never feed the geometry engine.

mod debounce;
mod geocode;

pub use debounce::{SearchDebouncer, SearchTicket};
pub use geocode::{NominatimClient, Place, PlaceSearch, SearchError};
