use crate::chart::{AxisKind, Chart};
use crate::error::TakeoffError;

/// Distance reduction per `HEADWIND_STEP_KT` of headwind.
pub const HEADWIND_FACTOR_PER_STEP: f64 = 0.10;
pub const HEADWIND_STEP_KT: f64 = 15.0;
/// Distance increase per `TAILWIND_STEP_KT` of tailwind.
pub const TAILWIND_FACTOR_PER_STEP: f64 = 0.10;
pub const TAILWIND_STEP_KT: f64 = 5.0;

fn headwind_factor(breakpoint_kt: f64) -> f64 {
    1.0 - (breakpoint_kt / HEADWIND_STEP_KT) * HEADWIND_FACTOR_PER_STEP
}

fn tailwind_factor(breakpoint_kt: f64) -> f64 {
    1.0 + (breakpoint_kt / TAILWIND_STEP_KT) * TAILWIND_FACTOR_PER_STEP
}

/// Scales a zero-wind distance for a signed wind component
/// (positive headwind, negative tailwind).
///
/// The factor is evaluated at the bracketing wind breakpoints and blended,
/// so winds beyond the chart clamp to the last breakpoint's factor.
pub fn apply_wind_correction(
    chart: &Chart,
    base_distance_ft: f64,
    wind_kt: f64,
) -> Result<f64, TakeoffError> {
    if wind_kt == 0.0 {
        return Ok(base_distance_ft);
    }

    let (kind, magnitude) = if wind_kt > 0.0 {
        (AxisKind::Headwind, wind_kt)
    } else {
        (AxisKind::Tailwind, -wind_kt)
    };
    let factor: fn(f64) -> f64 = match kind {
        AxisKind::Headwind => headwind_factor,
        _ => tailwind_factor,
    };

    let bracket = chart.axis(kind).bracket(magnitude);
    let low = factor(chart.axis_value(kind, bracket.low)?);
    let high = factor(chart.axis_value(kind, bracket.high)?);
    Ok(base_distance_ft * bracket.lerp(low, high))
}
