use serde::Serialize;

use crate::chart::axis::{Axis, AxisKind};
use crate::error::TakeoffError;

/// Breakpoint axes of a takeoff chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartAxes {
    pub altitude: Axis,
    pub temperature: Axis,
    pub weight: Axis,
    pub headwind: Axis,
    pub tailwind: Axis,
}

/// Zero-wind distances indexed by (altitude, temperature, weight).
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceTable {
    shape: [usize; 3],
    values: Vec<f64>,
}

impl DistanceTable {
    pub fn from_fn(shape: [usize; 3], mut f: impl FnMut(usize, usize, usize) -> f64) -> Self {
        let mut values = Vec::with_capacity(shape.iter().product());
        for alt in 0..shape[0] {
            for temp in 0..shape[1] {
                for weight in 0..shape[2] {
                    values.push(f(alt, temp, weight));
                }
            }
        }
        DistanceTable { shape, values }
    }

    pub fn shape(&self) -> [usize; 3] {
        self.shape
    }

    pub fn get(&self, alt: usize, temp: usize, weight: usize) -> Option<f64> {
        let [n_alt, n_temp, n_weight] = self.shape;
        if alt >= n_alt || temp >= n_temp || weight >= n_weight {
            return None;
        }
        self.values.get((alt * n_temp + temp) * n_weight + weight).copied()
    }
}

/// Inclusive bounds of one axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl From<&Axis> for AxisRange {
    fn from(axis: &Axis) -> Self {
        AxisRange {
            min: axis.min(),
            max: axis.max(),
        }
    }
}

/// The envelope a chart covers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ChartLimits {
    pub pressure_altitude_ft: AxisRange,
    pub temperature_c: AxisRange,
    pub weight_lb: AxisRange,
    pub headwind_kt: AxisRange,
    pub tailwind_kt: AxisRange,
}

/// Immutable digitized performance chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
    axes: ChartAxes,
    distances: DistanceTable,
    liftoff_speeds: Vec<f64>,
    barrier_speeds: Vec<f64>,
}

impl Chart {
    pub fn new(
        axes: ChartAxes,
        distances: DistanceTable,
        liftoff_speeds: Vec<f64>,
        barrier_speeds: Vec<f64>,
    ) -> Self {
        assert_eq!(
            distances.shape(),
            [axes.altitude.len(), axes.temperature.len(), axes.weight.len()],
            "distance table must match altitude x temperature x weight axes"
        );
        assert_eq!(
            liftoff_speeds.len(),
            axes.weight.len(),
            "liftoff speeds must match weight axis"
        );
        assert_eq!(
            barrier_speeds.len(),
            axes.weight.len(),
            "barrier speeds must match weight axis"
        );
        Chart {
            axes,
            distances,
            liftoff_speeds,
            barrier_speeds,
        }
    }

    pub fn axes(&self) -> &ChartAxes {
        &self.axes
    }

    pub fn axis(&self, kind: AxisKind) -> &Axis {
        match kind {
            AxisKind::Altitude => &self.axes.altitude,
            AxisKind::Temperature => &self.axes.temperature,
            AxisKind::Weight => &self.axes.weight,
            AxisKind::Headwind => &self.axes.headwind,
            AxisKind::Tailwind => &self.axes.tailwind,
        }
    }

    pub fn axis_value(&self, kind: AxisKind, index: usize) -> Result<f64, TakeoffError> {
        let axis = self.axis(kind);
        axis.get(index).ok_or(TakeoffError::IndexOutOfRange {
            axis: kind,
            index,
            len: axis.len(),
        })
    }

    /// Tabulated zero-wind distance (ft) at an exact breakpoint combination.
    pub fn base_distance(&self, alt: usize, temp: usize, weight: usize) -> Result<f64, TakeoffError> {
        self.check_index(AxisKind::Altitude, alt)?;
        self.check_index(AxisKind::Temperature, temp)?;
        self.check_index(AxisKind::Weight, weight)?;
        self.distances
            .get(alt, temp, weight)
            .ok_or(TakeoffError::IndexOutOfRange {
                axis: AxisKind::Altitude,
                index: alt,
                len: self.distances.shape()[0],
            })
    }

    pub fn liftoff_speed(&self, weight: usize) -> Result<f64, TakeoffError> {
        self.speed_at(&self.liftoff_speeds, weight)
    }

    pub fn barrier_speed(&self, weight: usize) -> Result<f64, TakeoffError> {
        self.speed_at(&self.barrier_speeds, weight)
    }

    pub fn limits(&self) -> ChartLimits {
        ChartLimits {
            pressure_altitude_ft: (&self.axes.altitude).into(),
            temperature_c: (&self.axes.temperature).into(),
            weight_lb: (&self.axes.weight).into(),
            headwind_kt: (&self.axes.headwind).into(),
            tailwind_kt: (&self.axes.tailwind).into(),
        }
    }

    fn speed_at(&self, speeds: &[f64], weight: usize) -> Result<f64, TakeoffError> {
        speeds
            .get(weight)
            .copied()
            .ok_or(TakeoffError::IndexOutOfRange {
                axis: AxisKind::Weight,
                index: weight,
                len: speeds.len(),
            })
    }

    fn check_index(&self, kind: AxisKind, index: usize) -> Result<(), TakeoffError> {
        self.axis_value(kind, index).map(|_| ())
    }
}
