use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use log::debug;
use serde::Serialize;
use takeoff_engine::report::{render_report, UnitSystem};
use takeoff_engine::units::fahrenheit_to_celsius;
use takeoff_engine::{calculate_takeoff, TakeoffRequest, TakeoffResult};

#[derive(Parser, Debug)]
#[command(
    name = "takeoff",
    version,
    about = "PA-28-161 Cherokee Warrior II Takeoff Performance Calculator",
    after_help = "Example:\n  takeoff --altitude 1500 --temp-c 25 --weight 2200 --wind 10"
)]
struct Cli {
    /// Pressure altitude in feet
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    altitude: f64,

    /// Temperature in °C
    #[arg(long = "temp-c", default_value_t = 15.0, allow_negative_numbers = true)]
    temp_c: f64,

    /// Temperature in °F (overrides --temp-c if provided)
    #[arg(long = "temp-f", allow_negative_numbers = true)]
    temp_f: Option<f64>,

    /// Aircraft weight in pounds
    #[arg(long, default_value_t = 2325.0)]
    weight: f64,

    /// Wind component in knots (positive for headwind, negative for tailwind)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    wind: f64,

    /// Unit system for display
    #[arg(long, value_enum, default_value_t = UnitSystem::Imperial)]
    units: UnitSystem,

    /// Print the request and result as JSON instead of the text report
    #[arg(long, default_value_t = false)]
    json: bool,
}

impl Cli {
    fn request(&self) -> TakeoffRequest {
        let temperature_c = self
            .temp_f
            .map(fahrenheit_to_celsius)
            .unwrap_or(self.temp_c);
        TakeoffRequest {
            pressure_altitude_ft: self.altitude,
            temperature_c,
            weight_lb: self.weight,
            wind_kt: self.wind,
        }
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    request: &'a TakeoffRequest,
    result: &'a TakeoffResult,
}

fn main() -> Result<()> {
    env_logger::init();

    if std::env::args_os().len() <= 1 {
        Cli::command().print_help()?;
        return Ok(());
    }

    let cli = Cli::parse();
    let request = cli.request();
    debug!("calculating takeoff for {:?}", request);

    let result =
        calculate_takeoff(&request).context("error calculating takeoff performance")?;
    debug!("result {:?}", result);

    if cli.json {
        let output = JsonOutput {
            request: &request,
            result: &result,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", render_report(&request, &result, cli.units));
    }

    Ok(())
}
