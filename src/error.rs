use thiserror::Error;

use crate::chart::AxisKind;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TakeoffError {
    #[error("pressure altitude ({value:.0} ft) exceeds maximum chart value ({max:.0} ft)")]
    AltitudeOutOfRange { value: f64, max: f64 },
    #[error("temperature ({value:.1}°C) outside chart range ({min:.1}°C to {max:.1}°C)")]
    TemperatureOutOfRange { value: f64, min: f64, max: f64 },
    #[error("weight ({value:.0} lbs) outside chart range ({min:.0} lbs to {max:.0} lbs)")]
    WeightOutOfRange { value: f64, min: f64, max: f64 },
    #[error("headwind component ({value:.0} kts) exceeds maximum chart value ({max:.0} kts)")]
    HeadwindOutOfRange { value: f64, max: f64 },
    /// `value` is the tailwind magnitude, not the signed wind component.
    #[error("tailwind component ({value:.0} kts) exceeds maximum chart value ({max:.0} kts)")]
    TailwindOutOfRange { value: f64, max: f64 },
    #[error("{field} must be a finite number (got {value})")]
    NotFinite { field: &'static str, value: f64 },
    #[error("{axis} index {index} out of range (axis has {len} breakpoints)")]
    IndexOutOfRange {
        axis: AxisKind,
        index: usize,
        len: usize,
    },
}
