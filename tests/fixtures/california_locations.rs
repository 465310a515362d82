//! Real California locations for realistic test fixtures.
//!
//! City coordinates for trip endpoints and Supercharger sites along the
//! I-5 / CA-99 corridor between Los Angeles and the Bay Area.

use range_planner::geo::GeoPoint;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

// ============================================================================
// Cities (trip endpoints)
// ============================================================================

pub const LOS_ANGELES: Location = Location::new("Los Angeles", 34.0522, -118.2437);
pub const SAN_FRANCISCO: Location = Location::new("San Francisco", 37.7749, -122.4194);
pub const SACRAMENTO: Location = Location::new("Sacramento", 38.5816, -121.4944);
pub const BAKERSFIELD: Location = Location::new("Bakersfield", 35.3733, -119.0187);

// ============================================================================
// Supercharger sites, south to north
// ============================================================================

pub const SUPERCHARGERS: &[Location] = &[
    Location::new("Tejon Ranch", 34.9870, -118.9462),
    Location::new("Buttonwillow", 35.3989, -119.3951),
    Location::new("Kettleman City", 36.0046, -119.9609),
    Location::new("Harris Ranch", 36.2527, -120.2383),
    Location::new("Firebaugh", 36.8490, -120.4590),
    Location::new("Santa Nella", 37.0990, -121.0120),
    Location::new("Gilroy", 37.0047, -121.5662),
    Location::new("Dublin", 37.7021, -121.9321),
];

// ============================================================================
// Bay Area only (for unreachable scenarios)
// ============================================================================

pub const BAY_AREA_SUPERCHARGERS: &[Location] = &[
    Location::new("Gilroy", 37.0047, -121.5662),
    Location::new("Dublin", 37.7021, -121.9321),
];
