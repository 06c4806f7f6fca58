//! Format registry for discovering and accessing waypoint formats.

use std::collections::HashMap;

use crate::format::formats::{CsvFormat, GeoJsonFormat, MissionJsonFormat};
use crate::format::traits::WaypointFormat;

/// Registry of available waypoint formats.
///
/// This provides a central location to discover and access format
/// implementations. All built-in formats are registered automatically on
/// creation.
pub struct FormatRegistry {
    formats: HashMap<&'static str, Box<dyn WaypointFormat>>,
}

impl FormatRegistry {
    /// Create a new registry with all built-in formats registered.
    pub fn new() -> Self {
        let mut registry = Self {
            formats: HashMap::new(),
        };

        // Register all built-in formats
        registry.register(Box::new(GeoJsonFormat));
        registry.register(Box::new(CsvFormat));
        registry.register(Box::new(MissionJsonFormat));

        registry
    }

    /// Register a format implementation.
    pub fn register(&mut self, format: Box<dyn WaypointFormat>) {
        self.formats.insert(format.id(), format);
    }

    /// Get a format by its ID.
    pub fn get(&self, id: &str) -> Option<&dyn WaypointFormat> {
        self.formats.get(id).map(|f| f.as_ref())
    }

    /// Find formats by file extension.
    pub fn by_extension(&self, ext: &str) -> Vec<&dyn WaypointFormat> {
        self.formats
            .values()
            .filter(|f| f.extensions().iter().any(|e| *e == ext))
            .map(|f| f.as_ref())
            .collect()
    }

    /// Get all registered formats.
    pub fn all(&self) -> Vec<&dyn WaypointFormat> {
        self.formats.values().map(|f| f.as_ref()).collect()
    }

    /// Get all format IDs.
    pub fn ids(&self) -> Vec<&'static str> {
        self.formats.keys().copied().collect()
    }

    /// Get formats that carry per-waypoint tool assignments.
    pub fn tool_formats(&self) -> Vec<&dyn WaypointFormat> {
        self.all()
            .into_iter()
            .filter(|f| f.supports_tools())
            .collect()
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_formats() {
        let registry = FormatRegistry::new();

        assert!(registry.get("geojson").is_some());
        assert!(registry.get("csv").is_some());
        assert!(registry.get("mission").is_some());
        assert!(registry.get("kml").is_none());
    }

    #[test]
    fn test_by_extension() {
        let registry = FormatRegistry::new();

        assert!(
            registry
                .by_extension("geojson")
                .iter()
                .any(|f| f.id() == "geojson")
        );
        assert!(registry.by_extension("csv").iter().any(|f| f.id() == "csv"));
        assert!(
            registry
                .by_extension("json")
                .iter()
                .any(|f| f.id() == "mission")
        );
    }

    #[test]
    fn test_tool_formats() {
        let registry = FormatRegistry::new();
        let tool_formats = registry.tool_formats();

        assert!(tool_formats.iter().any(|f| f.id() == "mission"));
        assert!(!tool_formats.iter().any(|f| f.id() == "geojson"));
        assert!(!tool_formats.iter().any(|f| f.id() == "csv"));
    }
}
