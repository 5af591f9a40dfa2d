pub const METERS_PER_FOOT: f64 = 0.3048;

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn feet_to_meters(feet: f64) -> f64 {
    feet * METERS_PER_FOOT
}

pub fn meters_to_feet(meters: f64) -> f64 {
    meters / METERS_PER_FOOT
}
