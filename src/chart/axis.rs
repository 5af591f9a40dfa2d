use std::fmt;

use serde::{Deserialize, Serialize};

use crate::interp::bracket::{find_bracket, Bracket};

/// The five independent dimensions of the takeoff chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisKind {
    Altitude,
    Temperature,
    Weight,
    Headwind,
    Tailwind,
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AxisKind::Altitude => "altitude",
            AxisKind::Temperature => "temperature",
            AxisKind::Weight => "weight",
            AxisKind::Headwind => "headwind",
            AxisKind::Tailwind => "tailwind",
        };
        f.write_str(name)
    }
}

/// Strictly increasing breakpoints along one chart dimension.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Axis {
    breakpoints: Vec<f64>,
}

impl Axis {
    pub fn new(breakpoints: Vec<f64>) -> Self {
        assert!(!breakpoints.is_empty(), "axis needs at least one breakpoint");
        assert!(
            breakpoints.windows(2).all(|pair| pair[0] < pair[1]),
            "axis breakpoints must be strictly increasing"
        );
        Axis { breakpoints }
    }

    pub fn len(&self) -> usize {
        self.breakpoints.len()
    }

    /// Always false; kept for parity with `len`.
    pub fn is_empty(&self) -> bool {
        self.breakpoints.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.breakpoints.get(index).copied()
    }

    pub fn min(&self) -> f64 {
        self.breakpoints[0]
    }

    pub fn max(&self) -> f64 {
        self.breakpoints[self.breakpoints.len() - 1]
    }

    pub fn breakpoints(&self) -> &[f64] {
        &self.breakpoints
    }

    pub fn bracket(&self, value: f64) -> Bracket {
        find_bracket(&self.breakpoints, value)
    }
}
