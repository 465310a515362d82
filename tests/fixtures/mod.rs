//! Test fixtures for range-planner.
//!
//! Provides realistic test data:
//! - Real California city coordinates for trip endpoints
//! - Supercharger sites along the I-5 / CA-99 corridor

pub mod california_locations;

pub use california_locations::*;
