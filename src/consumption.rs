//! Energy-consumption model.
//!
//! Converts vehicle, weather, load, and terrain inputs into an estimated
//! battery draw for a leg, with the individual adjustment factors broken
//! out so reports can surface them.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};

/// Fixed efficiency multipliers per vehicle model. Unknown models use a
/// neutral 1.0.
const MODEL_EFFICIENCY: &[(&str, f64)] = &[
    ("Model Y", 1.0),
    ("Model 3", 0.95),
    ("Model S", 1.1),
    ("Model X", 1.2),
];

/// Battery, range, and load state reported by the vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleState {
    /// Battery capacity in kilowatt-hours. Must be strictly positive.
    pub battery_capacity_kwh: f64,
    /// State of charge as a percentage of capacity (0-100).
    pub current_charge_pct: f64,
    /// Nominal range on a full charge, in kilometers. Must be strictly
    /// positive.
    pub max_range_km: f64,
    /// Vehicle model name, e.g. "Model Y".
    pub model_type: String,
    pub passenger_count: u32,
    pub cargo_weight_kg: f64,
}

impl VehicleState {
    /// Check the vehicle invariants.
    ///
    /// A zero battery capacity or range is an input error, not a value to
    /// silently guard against at division sites.
    pub fn validate(&self) -> Result<()> {
        if !self.battery_capacity_kwh.is_finite() || self.battery_capacity_kwh <= 0.0 {
            return Err(Error::invalid_input(format!(
                "battery_capacity_kwh must be positive, got {}",
                self.battery_capacity_kwh
            )));
        }
        if !self.max_range_km.is_finite() || self.max_range_km <= 0.0 {
            return Err(Error::invalid_input(format!(
                "max_range_km must be positive, got {}",
                self.max_range_km
            )));
        }
        if !self.current_charge_pct.is_finite() || !(0.0..=100.0).contains(&self.current_charge_pct)
        {
            return Err(Error::invalid_input(format!(
                "current_charge_pct must be within [0, 100], got {}",
                self.current_charge_pct
            )));
        }
        if self.passenger_count < 1 {
            return Err(Error::invalid_input(
                "passenger_count must be at least 1 (the driver)",
            ));
        }
        if !self.cargo_weight_kg.is_finite() || self.cargo_weight_kg < 0.0 {
            return Err(Error::invalid_input(format!(
                "cargo_weight_kg must be non-negative, got {}",
                self.cargo_weight_kg
            )));
        }
        Ok(())
    }
}

fn default_temperature_c() -> f64 {
    20.0
}

fn default_relative_humidity_pct() -> f64 {
    50.0
}

fn default_wind_speed_kmh() -> f64 {
    0.0
}

/// Ambient conditions for a trip.
///
/// Fields missing from an upstream payload take neutral defaults here, at
/// the model boundary; the scoring arithmetic never re-defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    #[serde(default = "default_temperature_c")]
    pub temperature_c: f64,
    #[serde(default = "default_relative_humidity_pct")]
    pub relative_humidity_pct: f64,
    #[serde(default = "default_wind_speed_kmh")]
    pub wind_speed_kmh: f64,
}

impl Default for WeatherReading {
    fn default() -> Self {
        Self {
            temperature_c: default_temperature_c(),
            relative_humidity_pct: default_relative_humidity_pct(),
            wind_speed_kmh: default_wind_speed_kmh(),
        }
    }
}

/// Consumption estimate with its factor breakdown.
///
/// `total_consumption_pct` is unbounded above: a trip longer than the
/// battery can cover produces a value past 100, which signals
/// infeasibility to the caller rather than being an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionEstimate {
    /// Base draw from distance alone, on the capacity-normalized scale.
    pub base_consumption: f64,
    /// Additive weather adjustment (non-negative).
    pub weather_impact: f64,
    /// Additive passenger/cargo adjustment (non-negative).
    pub load_impact: f64,
    /// Additive elevation adjustment (non-negative).
    pub terrain_impact: f64,
    /// Multiplier from the model table.
    pub model_efficiency: f64,
    pub total_consumption_pct: f64,
}

/// Estimate the battery draw for a leg.
///
/// The base draw scales trip distance against nominal range and battery
/// capacity; weather, load, and terrain each apply as `1 + impact`
/// multipliers on top, then the model-efficiency factor.
pub fn estimate_consumption(
    distance_km: f64,
    vehicle: &VehicleState,
    weather: &WeatherReading,
    elevation_change_m: f64,
) -> Result<ConsumptionEstimate> {
    vehicle.validate()?;
    if !distance_km.is_finite() || distance_km < 0.0 {
        return Err(Error::invalid_input(format!(
            "distance_km must be non-negative, got {distance_km}"
        )));
    }
    if !elevation_change_m.is_finite() {
        return Err(Error::invalid_input(format!(
            "elevation_change_m must be finite, got {elevation_change_m}"
        )));
    }

    let base_consumption = (distance_km / vehicle.max_range_km) * vehicle.battery_capacity_kwh;
    let weather_impact = weather_impact(weather);
    let load_impact = load_impact(vehicle.passenger_count, vehicle.cargo_weight_kg);
    let terrain_impact = elevation_change_m.abs() * 0.001;

    let model_factor = match model_efficiency(&vehicle.model_type) {
        Some(factor) => factor,
        None => {
            warn!(model_type = %vehicle.model_type, "unknown vehicle model, using neutral efficiency");
            1.0
        }
    };

    let total_consumption_pct = base_consumption
        * (1.0 + weather_impact)
        * (1.0 + load_impact)
        * (1.0 + terrain_impact)
        * model_factor;

    Ok(ConsumptionEstimate {
        base_consumption,
        weather_impact,
        load_impact,
        terrain_impact,
        model_efficiency: model_factor,
        total_consumption_pct,
    })
}

/// Efficiency multiplier for a known vehicle model.
pub fn model_efficiency(model_type: &str) -> Option<f64> {
    MODEL_EFFICIENCY
        .iter()
        .find(|(name, _)| *name == model_type)
        .map(|(_, factor)| *factor)
}

/// Additive adjustment for ambient conditions.
///
/// Temperature, humidity, and wind each contribute independently.
fn weather_impact(weather: &WeatherReading) -> f64 {
    let mut impact = 0.0;

    if weather.temperature_c < 0.0 {
        impact += 0.30;
    } else if weather.temperature_c < 10.0 {
        impact += 0.20;
    } else if weather.temperature_c > 30.0 {
        impact += 0.15;
    }

    if weather.relative_humidity_pct > 80.0 {
        impact += 0.10;
    }

    if weather.wind_speed_kmh > 20.0 {
        impact += 0.20;
    } else if weather.wind_speed_kmh > 10.0 {
        impact += 0.10;
    }

    impact
}

fn load_impact(passenger_count: u32, cargo_weight_kg: f64) -> f64 {
    (passenger_count as f64 - 1.0) * 0.05 + (cargo_weight_kg / 100.0) * 0.10
}
