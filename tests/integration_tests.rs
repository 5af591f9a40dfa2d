use assert_approx_eq::assert_approx_eq;
use takeoff_engine::chart::PA28_161;
use takeoff_engine::interp::base_distance;
use takeoff_engine::units::fahrenheit_to_celsius;
use takeoff_engine::{calculate_takeoff, TakeoffError, TakeoffRequest};

fn request(alt: f64, temp_c: f64, weight: f64, wind: f64) -> TakeoffRequest {
    TakeoffRequest {
        pressure_altitude_ft: alt,
        temperature_c: temp_c,
        weight_lb: weight,
        wind_kt: wind,
    }
}

#[test]
fn poh_example_at_gross_weight_with_full_headwind() {
    let temp = fahrenheit_to_celsius(80.0);

    let calm = base_distance(&PA28_161, 1500.0, temp, 2325.0).unwrap();
    assert_approx_eq!(calm, 2100.0, 50.0);

    let result = calculate_takeoff(&request(1500.0, temp, 2325.0, 15.0)).unwrap();
    assert_approx_eq!(result.takeoff_distance_ft, calm * 0.9, 1e-6);
    assert_approx_eq!(result.takeoff_distance_ft, 1890.0, 1e-6);
    assert_approx_eq!(result.liftoff_speed_kias, 50.0, 1.0);
    assert_approx_eq!(result.barrier_speed_kias, 55.0, 1.0);
}

#[test]
fn lighter_weight_without_wind() {
    let temp = fahrenheit_to_celsius(80.0);
    let result = calculate_takeoff(&request(1500.0, temp, 2200.0, 0.0)).unwrap();
    assert_approx_eq!(result.takeoff_distance_ft, 2000.0, 1e-6);
    assert_approx_eq!(result.liftoff_speed_kias, 48.0, 1e-9);
    assert_approx_eq!(result.barrier_speed_kias, 54.0, 1e-9);
}

#[test]
fn tailwind_lengthens_the_run() {
    let temp = fahrenheit_to_celsius(80.0);
    let calm = calculate_takeoff(&request(1500.0, temp, 2200.0, 0.0)).unwrap();
    let tail = calculate_takeoff(&request(1500.0, temp, 2200.0, -5.0)).unwrap();
    assert_approx_eq!(tail.takeoff_distance_ft, calm.takeoff_distance_ft * 1.1, 1e-6);
    assert_eq!(tail.liftoff_speed_kias, calm.liftoff_speed_kias);
}

#[test]
fn sea_level_standard_day() {
    let result = calculate_takeoff(&request(0.0, 15.0, 2000.0, 0.0)).unwrap();
    assert_approx_eq!(result.takeoff_distance_ft, 1612.5, 1e-9);
    assert_eq!(result.liftoff_speed_kias, 46.0);
    assert_eq!(result.barrier_speed_kias, 52.0);
}

#[test]
fn high_altitude_cold_day_hits_a_grid_point() {
    let result = calculate_takeoff(&request(6000.0, -20.0, 1800.0, 0.0)).unwrap();
    assert_eq!(result.takeoff_distance_ft, 1900.0);
    assert_eq!(result.liftoff_speed_kias, 44.0);
    assert_eq!(result.barrier_speed_kias, 50.0);
}

#[test]
fn hot_day_above_chart_is_rejected() {
    let err = calculate_takeoff(&request(3000.0, 50.0, 2000.0, 0.0)).unwrap_err();
    assert!(matches!(err, TakeoffError::TemperatureOutOfRange { max, .. } if max == 40.0));
}

#[test]
fn below_sea_level_uses_sea_level_values() {
    let below = calculate_takeoff(&request(-500.0, 20.0, 2000.0, 10.0)).unwrap();
    let sea_level = calculate_takeoff(&request(0.0, 20.0, 2000.0, 10.0)).unwrap();
    assert_eq!(below, sea_level);
}

#[test]
fn excessive_tailwind_is_rejected() {
    let err = calculate_takeoff(&request(3000.0, 20.0, 2000.0, -10.0)).unwrap_err();
    assert_eq!(err, TakeoffError::TailwindOutOfRange { value: 10.0, max: 5.0 });
}

#[test]
fn distance_never_shrinks_as_weight_grows() {
    for alt in [0.0, 1500.0, 3250.0, 7000.0] {
        for temp in [-40.0, -7.5, 26.7, 40.0] {
            for wind in [-5.0, 0.0, 8.0] {
                let mut previous = f64::NEG_INFINITY;
                let mut weight = 1600.0;
                while weight <= 2325.0 {
                    let d = calculate_takeoff(&request(alt, temp, weight, wind))
                        .unwrap()
                        .takeoff_distance_ft;
                    assert!(
                        d >= previous,
                        "distance dropped at {alt} ft, {temp}°C, {weight} lb, {wind} kt"
                    );
                    previous = d;
                    weight += 5.0;
                }
            }
        }
    }
}

#[test]
fn calm_wind_matches_uncorrected_base_distance() {
    for (alt, temp, weight) in [(0.0, 0.0, 1600.0), (2750.0, 12.0, 2111.0), (7000.0, 40.0, 2325.0)] {
        let result = calculate_takeoff(&request(alt, temp, weight, 0.0)).unwrap();
        let base = base_distance(&PA28_161, alt, temp, weight).unwrap();
        assert_eq!(result.takeoff_distance_ft, base);
    }
}
