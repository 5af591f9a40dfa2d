pub mod chart;
pub mod error;
pub mod interp;
pub mod report;
pub mod units;
pub mod validate;
pub mod wind;

use serde::{Deserialize, Serialize};

use crate::chart::{Chart, PA28_161};
pub use crate::error::TakeoffError;

/// Conditions for one takeoff calculation.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct TakeoffRequest {
    pub pressure_altitude_ft: f64,
    pub temperature_c: f64,
    pub weight_lb: f64,
    /// Positive for headwind, negative for tailwind.
    #[serde(default)]
    pub wind_kt: f64,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct TakeoffResult {
    /// Ground roll plus climb to clear a 50 ft obstacle.
    pub takeoff_distance_ft: f64,
    pub liftoff_speed_kias: f64,
    pub barrier_speed_kias: f64,
}

impl Chart {
    /// Validates `request`, interpolates the zero-wind distance and speeds,
    /// then applies the wind correction.
    pub fn calculate(&self, request: &TakeoffRequest) -> Result<TakeoffResult, TakeoffError> {
        let request = validate::validate_request(self, request)?;
        let base = interp::base_distance(
            self,
            request.pressure_altitude_ft,
            request.temperature_c,
            request.weight_lb,
        )?;
        let distance = wind::apply_wind_correction(self, base, request.wind_kt)?;
        let speeds = interp::speeds(self, request.weight_lb)?;
        Ok(TakeoffResult {
            takeoff_distance_ft: distance,
            liftoff_speed_kias: speeds.liftoff_kias,
            barrier_speed_kias: speeds.barrier_kias,
        })
    }
}

/// Takeoff performance from the built-in PA-28-161 chart.
pub fn calculate_takeoff(request: &TakeoffRequest) -> Result<TakeoffResult, TakeoffError> {
    PA28_161.calculate(request)
}
