//! Range-anxiety scoring.
//!
//! Combines the consumption model with trip distance and vehicle range
//! to produce a bounded anxiety index and a needs-charging signal.

use serde::{Deserialize, Serialize};

use crate::consumption::{self, VehicleState, WeatherReading};
use crate::error::Result;

/// Charge level below which the report flags a charging stop.
const NEEDS_CHARGING_THRESHOLD_PCT: f64 = 20.0;

/// Trip summary the scorer consumes: total distance and net elevation
/// change, as supplied by the host's routing layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteProfile {
    pub distance_km: f64,
    #[serde(default)]
    pub elevation_change_m: f64,
}

/// Anxiety score plus the factor breakdown it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnxietyReport {
    /// Trip-completion stress score, capped at 100 with no lower clamp.
    pub anxiety_index: f64,
    /// Projected charge after the trip. Deliberately unclamped: a
    /// negative value signals the trip needs more energy than is on
    /// hand.
    pub remaining_charge_pct: f64,
    pub total_consumption_pct: f64,
    pub weather_impact: f64,
    pub load_impact: f64,
    pub terrain_impact: f64,
    pub model_efficiency_factor: f64,
    pub needs_charging: bool,
}

/// Score the range anxiety for a trip.
///
/// Fails with `InvalidInput` on a non-positive battery capacity or max
/// range (guarding the divisions below) and on a negative trip distance.
pub fn score_anxiety(
    vehicle: &VehicleState,
    weather: &WeatherReading,
    route: RouteProfile,
) -> Result<AnxietyReport> {
    let estimate = consumption::estimate_consumption(
        route.distance_km,
        vehicle,
        weather,
        route.elevation_change_m,
    )?;

    // The subtraction treats current_charge_pct and the capacity-scaled
    // consumption as the same unit. Kept as-is so reported numbers match
    // the established model; do not adjust one side without the other.
    let remaining_charge_pct = (vehicle.current_charge_pct - estimate.total_consumption_pct)
        / vehicle.battery_capacity_kwh
        * 100.0;

    Ok(AnxietyReport {
        anxiety_index: anxiety_index(remaining_charge_pct, route.distance_km, vehicle.max_range_km),
        remaining_charge_pct,
        total_consumption_pct: estimate.total_consumption_pct,
        weather_impact: estimate.weather_impact,
        load_impact: estimate.load_impact,
        terrain_impact: estimate.terrain_impact,
        model_efficiency_factor: estimate.model_efficiency,
        needs_charging: remaining_charge_pct < NEEDS_CHARGING_THRESHOLD_PCT,
    })
}

/// Base stress from the projected remaining charge, with surcharges when
/// the charge cannot cover the trip and when it dips below the charging
/// threshold. Capped at 100.
fn anxiety_index(remaining_charge_pct: f64, distance_km: f64, max_range_km: f64) -> f64 {
    let mut index = 100.0 * (1.0 - remaining_charge_pct / 100.0);

    if remaining_charge_pct < (distance_km / max_range_km) * 100.0 {
        index += 30.0;
    }
    if remaining_charge_pct < NEEDS_CHARGING_THRESHOLD_PCT {
        index += 40.0;
    }

    index.min(100.0)
}
