pub mod axis;
pub mod chart;
pub mod pa28_161;

pub use axis::{Axis, AxisKind};
pub use chart::{AxisRange, Chart, ChartAxes, ChartLimits, DistanceTable};
pub use pa28_161::PA28_161;
