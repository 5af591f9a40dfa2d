use crate::chart::Chart;
use crate::error::TakeoffError;

/// Liftoff and 50 ft barrier speeds (KIAS) for a weight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Speeds {
    pub liftoff_kias: f64,
    pub barrier_kias: f64,
}

/// Zero-wind distance over a 50 ft barrier, interpolated across the chart.
///
/// Reduction order is weight, then temperature, then altitude. Queries outside
/// an axis clamp to its edge; nothing is extrapolated.
pub fn base_distance(
    chart: &Chart,
    pressure_altitude_ft: f64,
    temperature_c: f64,
    weight_lb: f64,
) -> Result<f64, TakeoffError> {
    let axes = chart.axes();
    let alt = axes.altitude.bracket(pressure_altitude_ft);
    let temp = axes.temperature.bracket(temperature_c);
    let weight = axes.weight.bracket(weight_lb);

    let mut corners = [[0.0_f64; 2]; 2];
    for (i, alt_idx) in [alt.low, alt.high].into_iter().enumerate() {
        for (j, temp_idx) in [temp.low, temp.high].into_iter().enumerate() {
            let light = chart.base_distance(alt_idx, temp_idx, weight.low)?;
            let heavy = chart.base_distance(alt_idx, temp_idx, weight.high)?;
            corners[i][j] = weight.lerp(light, heavy);
        }
    }

    let low_alt = temp.lerp(corners[0][0], corners[0][1]);
    let high_alt = temp.lerp(corners[1][0], corners[1][1]);
    Ok(alt.lerp(low_alt, high_alt))
}

/// Speeds depend on weight only.
pub fn speeds(chart: &Chart, weight_lb: f64) -> Result<Speeds, TakeoffError> {
    let weight = chart.axes().weight.bracket(weight_lb);
    Ok(Speeds {
        liftoff_kias: weight.lerp(
            chart.liftoff_speed(weight.low)?,
            chart.liftoff_speed(weight.high)?,
        ),
        barrier_kias: weight.lerp(
            chart.barrier_speed(weight.low)?,
            chart.barrier_speed(weight.high)?,
        ),
    })
}
