use crate::chart::Chart;
use crate::error::TakeoffError;
use crate::TakeoffRequest;

/// Checks a request against the chart envelope.
///
/// On success returns the request the engine should use: pressure altitudes
/// below the chart's lowest breakpoint are raised to it (sea level).
pub fn validate_request(
    chart: &Chart,
    request: &TakeoffRequest,
) -> Result<TakeoffRequest, TakeoffError> {
    ensure_finite("pressure altitude", request.pressure_altitude_ft)?;
    ensure_finite("temperature", request.temperature_c)?;
    ensure_finite("weight", request.weight_lb)?;
    ensure_finite("wind component", request.wind_kt)?;

    let limits = chart.limits();

    let altitude = request
        .pressure_altitude_ft
        .max(limits.pressure_altitude_ft.min);
    if altitude > limits.pressure_altitude_ft.max {
        return Err(TakeoffError::AltitudeOutOfRange {
            value: request.pressure_altitude_ft,
            max: limits.pressure_altitude_ft.max,
        });
    }

    let temp = limits.temperature_c;
    if !(temp.min..=temp.max).contains(&request.temperature_c) {
        return Err(TakeoffError::TemperatureOutOfRange {
            value: request.temperature_c,
            min: temp.min,
            max: temp.max,
        });
    }

    let weight = limits.weight_lb;
    if !(weight.min..=weight.max).contains(&request.weight_lb) {
        return Err(TakeoffError::WeightOutOfRange {
            value: request.weight_lb,
            min: weight.min,
            max: weight.max,
        });
    }

    if request.wind_kt > limits.headwind_kt.max {
        return Err(TakeoffError::HeadwindOutOfRange {
            value: request.wind_kt,
            max: limits.headwind_kt.max,
        });
    }
    if -request.wind_kt > limits.tailwind_kt.max {
        return Err(TakeoffError::TailwindOutOfRange {
            value: -request.wind_kt,
            max: limits.tailwind_kt.max,
        });
    }

    Ok(TakeoffRequest {
        pressure_altitude_ft: altitude,
        ..*request
    })
}

fn ensure_finite(field: &'static str, value: f64) -> Result<(), TakeoffError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(TakeoffError::NotFinite { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::PA28_161;

    fn request(alt: f64, temp: f64, weight: f64, wind: f64) -> TakeoffRequest {
        TakeoffRequest {
            pressure_altitude_ft: alt,
            temperature_c: temp,
            weight_lb: weight,
            wind_kt: wind,
        }
    }

    #[test]
    fn accepts_inputs_inside_envelope() {
        let req = request(3000.0, 20.0, 2000.0, 10.0);
        assert_eq!(validate_request(&PA28_161, &req), Ok(req));
    }

    #[test]
    fn accepts_chart_edges() {
        for req in [
            request(7000.0, 40.0, 2325.0, 15.0),
            request(0.0, -40.0, 1600.0, -5.0),
        ] {
            assert!(validate_request(&PA28_161, &req).is_ok(), "{req:?}");
        }
    }

    #[test]
    fn below_sea_level_is_treated_as_sea_level() {
        let got = validate_request(&PA28_161, &request(-500.0, 20.0, 2000.0, 10.0)).unwrap();
        assert_eq!(got.pressure_altitude_ft, 0.0);
        assert_eq!(got.temperature_c, 20.0);
    }

    #[test]
    fn rejects_each_dimension() {
        let cases = [
            (request(8000.0, 20.0, 2000.0, 10.0), "altitude"),
            (request(3000.0, -50.0, 2000.0, 10.0), "temperature"),
            (request(3000.0, 50.0, 2000.0, 10.0), "temperature"),
            (request(3000.0, 20.0, 1500.0, 10.0), "weight"),
            (request(3000.0, 20.0, 2400.0, 10.0), "weight"),
            (request(3000.0, 20.0, 2000.0, 20.0), "headwind"),
            (request(3000.0, 20.0, 2000.0, -10.0), "tailwind"),
        ];
        for (req, field) in cases {
            let err = validate_request(&PA28_161, &req).unwrap_err();
            assert!(err.to_string().contains(field), "{err} should mention {field}");
        }
    }

    #[test]
    fn errors_carry_value_and_bound() {
        let err = validate_request(&PA28_161, &request(3000.0, 50.0, 2000.0, 0.0)).unwrap_err();
        assert_eq!(
            err,
            TakeoffError::TemperatureOutOfRange {
                value: 50.0,
                min: -40.0,
                max: 40.0
            }
        );

        let err = validate_request(&PA28_161, &request(3000.0, 20.0, 2000.0, -10.0)).unwrap_err();
        assert_eq!(err, TakeoffError::TailwindOutOfRange { value: 10.0, max: 5.0 });
    }

    #[test]
    fn rejects_non_finite_values() {
        let err = validate_request(&PA28_161, &request(f64::NAN, 20.0, 2000.0, 0.0)).unwrap_err();
        assert!(matches!(err, TakeoffError::NotFinite { field: "pressure altitude", .. }));
        let err =
            validate_request(&PA28_161, &request(0.0, 20.0, 2000.0, f64::INFINITY)).unwrap_err();
        assert!(matches!(err, TakeoffError::NotFinite { field: "wind component", .. }));
    }
}
