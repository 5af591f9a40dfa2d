use std::fmt::Write;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::units::{celsius_to_fahrenheit, feet_to_meters};
use crate::{TakeoffRequest, TakeoffResult};

const TITLE: &str = "PA-28-161 Cherokee Warrior II Takeoff Performance";

/// Which units the text report leads with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    #[default]
    Imperial,
    Metric,
    Mixed,
}

/// Human-readable summary of a calculation, as printed by the CLI.
pub fn render_report(request: &TakeoffRequest, result: &TakeoffResult, units: UnitSystem) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, request, result, units);
    out
}

fn write_report(
    out: &mut String,
    request: &TakeoffRequest,
    result: &TakeoffResult,
    units: UnitSystem,
) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "{TITLE}")?;
    writeln!(out, "{}", "=".repeat(TITLE.len()))?;
    writeln!(out)?;

    writeln!(out, "Input Parameters:")?;
    writeln!(out, "----------------")?;
    writeln!(out, "Pressure Altitude: {:.0} ft", request.pressure_altitude_ft)?;

    let celsius = request.temperature_c;
    let fahrenheit = celsius_to_fahrenheit(celsius);
    match units {
        UnitSystem::Metric => writeln!(out, "Temperature: {celsius:.1}°C")?,
        UnitSystem::Imperial => writeln!(out, "Temperature: {fahrenheit:.1}°F ({celsius:.1}°C)")?,
        UnitSystem::Mixed => writeln!(out, "Temperature: {celsius:.1}°C ({fahrenheit:.1}°F)")?,
    }

    writeln!(out, "Weight: {:.0} lbs", request.weight_lb)?;
    writeln!(out, "Wind: {}", describe_wind(request.wind_kt))?;
    writeln!(out)?;

    writeln!(out, "Takeoff Performance:")?;
    writeln!(out, "-------------------")?;
    let feet = result.takeoff_distance_ft;
    let meters = feet_to_meters(feet);
    let label = "Takeoff Distance (over 50 ft obstacle)";
    match units {
        UnitSystem::Metric => writeln!(out, "{label}: {meters:.0} m ({feet:.0} ft)")?,
        UnitSystem::Imperial => writeln!(out, "{label}: {feet:.0} ft")?,
        UnitSystem::Mixed => writeln!(out, "{label}: {feet:.0} ft ({meters:.0} m)")?,
    }
    writeln!(out, "Lift-off Speed: {:.0} KIAS", result.liftoff_speed_kias)?;
    writeln!(out, "50 ft Barrier Speed: {:.0} KIAS", result.barrier_speed_kias)?;

    writeln!(out)?;
    writeln!(out, "NOTE: Always verify these calculations against the POH and ensure")?;
    writeln!(out, "      you have adequate runway length with appropriate safety margins.")?;
    Ok(())
}

fn describe_wind(wind_kt: f64) -> String {
    if wind_kt > 0.0 {
        format!("{wind_kt:.0} knots headwind")
    } else if wind_kt < 0.0 {
        format!("{:.0} knots tailwind", -wind_kt)
    } else {
        "No wind".to_string()
    }
}
