//! Greedy range-constrained route planner.
//!
//! Plans straight-line great-circle hops from start to destination,
//! inserting charging stops whenever the direct hop exceeds the charge
//! on hand. This is a feasibility search, not a shortest-path optimizer:
//! each stop is the reachable station requiring the least charge, and no
//! station is visited twice.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chargers::{self, ChargingStation};
use crate::error::{Error, Result};
use crate::geo::{self, GeoPoint};

#[derive(Debug, Clone)]
pub struct PlanOptions {
    /// Charge level assumed after every charging stop.
    ///
    /// 100.0 names the recharge-to-full assumption; lower it to model a
    /// partial-charging policy without touching the planning loop. A stop
    /// never drains the battery: arrival charge above the target is kept.
    pub recharge_target_pct: f64,
    /// Assumed average driving speed, used for the duration estimate
    /// only.
    pub average_speed_kmh: f64,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            recharge_target_pct: 100.0,
            average_speed_kmh: 60.0,
        }
    }
}

/// One great-circle hop of a planned route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    pub from: GeoPoint,
    pub to: GeoPoint,
    pub distance_km: f64,
}

/// A feasible route with zero or more charging stops. Immutable once
/// produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    /// Start, stops in visit order, destination.
    pub waypoints: Vec<GeoPoint>,
    pub legs: Vec<RouteLeg>,
    /// Stations actually used, in visit order.
    pub charging_stops: Vec<ChargingStation>,
    pub total_distance_km: f64,
    pub estimated_duration_secs: i32,
    /// Whole-route consumption at nominal range, independent of the
    /// per-leg accounting.
    pub estimated_consumption_pct: f64,
}

/// Plan a route from `start` to `end`, inserting charging stops as
/// needed.
///
/// Returns [`Error::Unreachable`] when no stop sequence can bridge the
/// gap. Each iteration either finishes the route or consumes one
/// previously unvisited station, so the loop is bounded by
/// `stations.len() + 1` iterations.
pub fn plan_route(
    start: GeoPoint,
    end: GeoPoint,
    current_charge_pct: f64,
    max_range_km: f64,
    stations: &[ChargingStation],
    options: PlanOptions,
) -> Result<RoutePlan> {
    validate_request(start, end, current_charge_pct, max_range_km, stations, &options)?;

    let mut waypoints = vec![start];
    let mut legs: Vec<RouteLeg> = Vec::new();
    let mut charging_stops: Vec<ChargingStation> = Vec::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut current_pos = start;
    let mut remaining_pct = current_charge_pct;
    let mut total_distance_km = 0.0;

    for iteration in 0..=stations.len() {
        let direct_km = geo::haversine_km(current_pos, end);
        let required_pct = (direct_km / max_range_km) * 100.0;

        if remaining_pct >= required_pct {
            debug!(iteration, direct_km, "destination reachable, finishing route");
            waypoints.push(end);
            legs.push(RouteLeg {
                from: current_pos,
                to: end,
                distance_km: direct_km,
            });
            total_distance_km += direct_km;

            return Ok(RoutePlan {
                waypoints,
                legs,
                charging_stops,
                total_distance_km,
                estimated_duration_secs: km_to_seconds(
                    total_distance_km,
                    options.average_speed_kmh,
                ),
                estimated_consumption_pct: (total_distance_km / max_range_km) * 100.0,
            });
        }

        let Some(station) = chargers::nearest_reachable(
            current_pos,
            remaining_pct,
            max_range_km,
            stations,
            &visited,
        ) else {
            debug!(iteration, remaining_pct, "no reachable charger, route infeasible");
            return Err(Error::Unreachable { start, goal: end });
        };

        let leg_km = geo::haversine_km(current_pos, station.location);
        debug!(iteration, station = %station.id, leg_km, "inserting charging stop");

        waypoints.push(station.location);
        legs.push(RouteLeg {
            from: current_pos,
            to: station.location,
            distance_km: leg_km,
        });
        total_distance_km += leg_km;

        let arrival_pct = remaining_pct - (leg_km / max_range_km) * 100.0;
        remaining_pct = options.recharge_target_pct.max(arrival_pct);
        current_pos = station.location;
        visited.insert(station.id.as_str());
        charging_stops.push(station.clone());
    }

    // The bound above is exhaustive: every iteration that did not finish
    // consumed an unvisited station.
    Err(Error::Unreachable { start, goal: end })
}

fn validate_request(
    start: GeoPoint,
    end: GeoPoint,
    current_charge_pct: f64,
    max_range_km: f64,
    stations: &[ChargingStation],
    options: &PlanOptions,
) -> Result<()> {
    start.validate()?;
    end.validate()?;
    for station in stations {
        station.location.validate().map_err(|_| {
            Error::invalid_input(format!(
                "station {} has an out-of-range coordinate {}",
                station.id, station.location
            ))
        })?;
    }
    if !max_range_km.is_finite() || max_range_km <= 0.0 {
        return Err(Error::invalid_input(format!(
            "max_range_km must be positive, got {max_range_km}"
        )));
    }
    if !current_charge_pct.is_finite() || !(0.0..=100.0).contains(&current_charge_pct) {
        return Err(Error::invalid_input(format!(
            "current_charge_pct must be within [0, 100], got {current_charge_pct}"
        )));
    }
    if !options.recharge_target_pct.is_finite()
        || !(0.0..=100.0).contains(&options.recharge_target_pct)
    {
        return Err(Error::invalid_input(format!(
            "recharge_target_pct must be within [0, 100], got {}",
            options.recharge_target_pct
        )));
    }
    if !options.average_speed_kmh.is_finite() || options.average_speed_kmh <= 0.0 {
        return Err(Error::invalid_input(format!(
            "average_speed_kmh must be positive, got {}",
            options.average_speed_kmh
        )));
    }
    Ok(())
}

/// Convert distance in km to an estimated travel time in seconds at the
/// assumed speed.
fn km_to_seconds(km: f64, speed_kmh: f64) -> i32 {
    let hours = km / speed_kmh;
    (hours * 3600.0).round() as i32
}
