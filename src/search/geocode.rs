//! Geocoding client for free-text place search.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::GeoPoint;

const DEFAULT_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";
const USER_AGENT: &str = concat!("fieldgrid/", env!("CARGO_PKG_VERSION"));

/// Errors from the place-search collaborator.
///
/// Callers are expected to swallow these: a failed search leaves the
/// suggestion list untouched.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Request or response decoding failure
    #[error("geocode request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// One place suggestion, in endpoint response order.
///
/// The endpoint returns coordinates as strings; [`Place::position`] parses
/// them on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub place_id: u64,
    pub display_name: String,
    pub lat: String,
    pub lon: String,
}

impl Place {
    /// Parse the place's coordinates, `None` when the endpoint sent
    /// something unusable.
    pub fn position(&self) -> Option<GeoPoint> {
        let lat = self.lat.parse().ok()?;
        let lng = self.lon.parse().ok()?;
        Some(GeoPoint::new(lat, lng))
    }
}

/// Free-text place search.
pub trait PlaceSearch {
    /// Search for places matching the query, best match first.
    fn search(&self, query: &str) -> Result<Vec<Place>, SearchError>;
}

/// Nominatim-shaped HTTP geocoder.
pub struct NominatimClient {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl NominatimClient {
    pub fn new() -> Result<Self, SearchError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        })
    }

    /// Point the client at a different endpoint (tests, self-hosted
    /// instances).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

impl PlaceSearch for NominatimClient {
    fn search(&self, query: &str) -> Result<Vec<Place>, SearchError> {
        log::debug!("Geocoding '{}'", query);

        let places: Vec<Place> = self
            .client
            .get(&self.endpoint)
            .query(&[("format", "json"), ("q", query)])
            .send()?
            .error_for_status()?
            .json()?;

        log::debug!("Geocode returned {} suggestions", places.len());
        Ok(places)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_position_parsing() {
        let place = Place {
            place_id: 1,
            display_name: "Somewhere".to_string(),
            lat: "45.5".to_string(),
            lon: "9.25".to_string(),
        };
        assert_eq!(place.position(), Some(GeoPoint::new(45.5, 9.25)));

        let bad = Place {
            place_id: 2,
            display_name: "Nowhere".to_string(),
            lat: "not-a-number".to_string(),
            lon: "9.25".to_string(),
        };
        assert_eq!(bad.position(), None);
    }

    #[test]
    fn test_response_deserialization() {
        let body = r#"[
            {"place_id": 42, "display_name": "Test Field, Somewhere", "lat": "45.5", "lon": "9.25"},
            {"place_id": 43, "display_name": "Other Field", "lat": "-3.5", "lon": "-60.1"}
        ]"#;
        let places: Vec<Place> = serde_json::from_str(body).unwrap();

        assert_eq!(places.len(), 2);
        assert_eq!(places[0].place_id, 42);
        assert_eq!(places[1].position(), Some(GeoPoint::new(-3.5, -60.1)));
    }
}
