use once_cell::sync::Lazy;

use crate::chart::axis::Axis;
use crate::chart::chart::{Chart, ChartAxes, DistanceTable};

/// PA-28-161 takeoff chart (POH Figure 5-6), built on first use.
pub static PA28_161: Lazy<Chart> = Lazy::new(pa28_161_chart);

const ALTITUDES_FT: [f64; 8] = [0.0, 1000.0, 2000.0, 3000.0, 4000.0, 5000.0, 6000.0, 7000.0];
const TEMPERATURES_C: [f64; 5] = [-40.0, -20.0, 0.0, 20.0, 40.0];
const WEIGHTS_LB: [f64; 5] = [1600.0, 1800.0, 2000.0, 2200.0, 2325.0];
const HEADWINDS_KT: [f64; 4] = [0.0, 5.0, 10.0, 15.0];
const TAILWINDS_KT: [f64; 2] = [0.0, 5.0];

const LIFTOFF_KIAS: [f64; 5] = [42.0, 44.0, 46.0, 48.0, 50.0];
const BARRIER_KIAS: [f64; 5] = [48.0, 50.0, 52.0, 54.0, 55.0];

/// Distance over a 50 ft barrier, no wind, laid out as printed:
/// one block per altitude, one row per weight, one column per temperature.
#[rustfmt::skip]
const DISTANCES_FT: [[[f64; 5]; 5]; 8] = [
    // 0 ft      -40°C   -20°C     0°C    20°C    40°C
    [
        [ 900.0, 1050.0, 1200.0, 1350.0, 1500.0], // 1600 lb
        [1050.0, 1200.0, 1350.0, 1500.0, 1650.0], // 1800 lb
        [1200.0, 1350.0, 1500.0, 1650.0, 1800.0], // 2000 lb
        [1350.0, 1500.0, 1650.0, 1800.0, 1950.0], // 2200 lb
        [1450.0, 1600.0, 1750.0, 1900.0, 2050.0], // 2325 lb
    ],
    // 1000 ft
    [
        [1000.0, 1150.0, 1300.0, 1450.0, 1600.0],
        [1150.0, 1300.0, 1450.0, 1600.0, 1750.0],
        [1300.0, 1450.0, 1600.0, 1750.0, 1900.0],
        [1450.0, 1600.0, 1750.0, 1900.0, 2050.0],
        [1550.0, 1700.0, 1850.0, 2000.0, 2150.0],
    ],
    // 2000 ft
    [
        [1100.0, 1250.0, 1400.0, 1550.0, 1700.0],
        [1250.0, 1400.0, 1550.0, 1700.0, 1850.0],
        [1400.0, 1550.0, 1700.0, 1850.0, 2000.0],
        [1550.0, 1700.0, 1850.0, 2000.0, 2150.0],
        [1650.0, 1800.0, 1950.0, 2100.0, 2250.0],
    ],
    // 3000 ft
    [
        [1200.0, 1350.0, 1500.0, 1650.0, 1800.0],
        [1350.0, 1500.0, 1650.0, 1800.0, 1950.0],
        [1500.0, 1650.0, 1800.0, 1950.0, 2100.0],
        [1650.0, 1800.0, 1950.0, 2100.0, 2250.0],
        [1750.0, 1900.0, 2050.0, 2200.0, 2350.0],
    ],
    // 4000 ft
    [
        [1300.0, 1450.0, 1600.0, 1750.0, 1900.0],
        [1450.0, 1600.0, 1750.0, 1900.0, 2050.0],
        [1600.0, 1750.0, 1900.0, 2050.0, 2200.0],
        [1750.0, 1900.0, 2050.0, 2200.0, 2350.0],
        [1850.0, 2000.0, 2150.0, 2300.0, 2450.0],
    ],
    // 5000 ft
    [
        [1450.0, 1600.0, 1750.0, 1900.0, 2050.0],
        [1600.0, 1750.0, 1900.0, 2050.0, 2200.0],
        [1750.0, 1900.0, 2050.0, 2200.0, 2350.0],
        [1900.0, 2050.0, 2200.0, 2350.0, 2500.0],
        [2000.0, 2150.0, 2300.0, 2450.0, 2600.0],
    ],
    // 6000 ft
    [
        [1600.0, 1750.0, 1900.0, 2050.0, 2200.0],
        [1750.0, 1900.0, 2050.0, 2200.0, 2350.0],
        [1900.0, 2050.0, 2200.0, 2350.0, 2500.0],
        [2050.0, 2200.0, 2350.0, 2500.0, 2650.0],
        [2150.0, 2300.0, 2450.0, 2600.0, 2750.0],
    ],
    // 7000 ft
    [
        [1750.0, 1900.0, 2050.0, 2200.0, 2350.0],
        [1900.0, 2050.0, 2200.0, 2350.0, 2500.0],
        [2050.0, 2200.0, 2350.0, 2500.0, 2650.0],
        [2200.0, 2350.0, 2500.0, 2650.0, 2800.0],
        [2300.0, 2450.0, 2600.0, 2750.0, 2900.0],
    ],
];

/// Printed value for an (altitude, temperature, weight) grid point.
pub fn tabulated_distance(alt: usize, temp: usize, weight: usize) -> f64 {
    DISTANCES_FT[alt][weight][temp]
}

fn pa28_161_chart() -> Chart {
    let axes = ChartAxes {
        altitude: Axis::new(ALTITUDES_FT.to_vec()),
        temperature: Axis::new(TEMPERATURES_C.to_vec()),
        weight: Axis::new(WEIGHTS_LB.to_vec()),
        headwind: Axis::new(HEADWINDS_KT.to_vec()),
        tailwind: Axis::new(TAILWINDS_KT.to_vec()),
    };
    let shape = [ALTITUDES_FT.len(), TEMPERATURES_C.len(), WEIGHTS_LB.len()];
    let distances = DistanceTable::from_fn(shape, tabulated_distance);
    Chart::new(
        axes,
        distances,
        LIFTOFF_KIAS.to_vec(),
        BARRIER_KIAS.to_vec(),
    )
}
