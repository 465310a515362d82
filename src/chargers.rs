//! Charging-station directory types and the nearest-reachable scan.

use std::collections::HashSet;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geo::{self, GeoPoint};

fn default_available() -> bool {
    true
}

/// A fixed geolocated charging point, as supplied by the station
/// directory. Never mutated by the planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargingStation {
    pub id: String,
    pub name: String,
    pub location: GeoPoint,
    /// Whether the directory reports the station as usable right now.
    #[serde(default = "default_available")]
    pub available: bool,
    /// Rated charging power, when the directory supplies it.
    #[serde(default)]
    pub power_kw: Option<f64>,
}

/// Find the reachable station requiring the least charge to get to.
///
/// Scans every available candidate not in `excluded`, computes the
/// charge needed to cover the great-circle hop, and returns the
/// candidate minimizing `(required_pct, id)`. The id in the key makes
/// the minimum unique, so ties resolve to the ascending id and the
/// parallel reduction stays deterministic. Returns `None` when nothing
/// qualifies with `remaining_pct`.
///
/// Station coordinates are assumed valid; `plan_route` validates them
/// before scanning.
pub fn nearest_reachable<'a>(
    from: GeoPoint,
    remaining_pct: f64,
    max_range_km: f64,
    stations: &'a [ChargingStation],
    excluded: &HashSet<&str>,
) -> Option<&'a ChargingStation> {
    stations
        .par_iter()
        .filter(|station| station.available && !excluded.contains(station.id.as_str()))
        .filter_map(|station| {
            let leg_km = geo::haversine_km(from, station.location);
            let required_pct = (leg_km / max_range_km) * 100.0;
            (required_pct <= remaining_pct).then_some((required_pct, station))
        })
        .min_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.id.cmp(&b.1.id)))
        .map(|(_, station)| station)
}

/// Seconds to charge from `current_pct` to `target_pct` at a station's
/// rated power.
pub fn estimate_charge_time_secs(
    current_pct: f64,
    target_pct: f64,
    battery_capacity_kwh: f64,
    power_kw: f64,
) -> Result<f64> {
    if !battery_capacity_kwh.is_finite() || battery_capacity_kwh <= 0.0 {
        return Err(Error::invalid_input(format!(
            "battery_capacity_kwh must be positive, got {battery_capacity_kwh}"
        )));
    }
    if !power_kw.is_finite() || power_kw <= 0.0 {
        return Err(Error::invalid_input(format!(
            "power_kw must be positive, got {power_kw}"
        )));
    }
    if !current_pct.is_finite() || !target_pct.is_finite() || current_pct < 0.0
        || target_pct > 100.0 || target_pct < current_pct
    {
        return Err(Error::invalid_input(format!(
            "charge levels must satisfy 0 <= current ({current_pct}) <= target ({target_pct}) <= 100"
        )));
    }

    let energy_kwh = (target_pct - current_pct) / 100.0 * battery_capacity_kwh;
    Ok(energy_kwh / power_kw * 3600.0)
}
