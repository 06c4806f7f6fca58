//! Unit tests for waypoint format implementations.
//!
//! These tests verify the correctness of format serialization,
//! deserialization, and round-trip conversions.

mod csv_tests;
mod mission_json_tests;
