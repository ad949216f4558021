//! Distance unit conversions.
//!
//! None of these validate their input: negative values, `NaN` and infinities are scaled like any other number.

use crate::extensions::DistanceConversions;

pub fn km_to_miles(km: f64) -> f64 {
    km.km_to_miles()
}

pub fn miles_to_meters(miles: f64) -> f64 {
    miles.miles_to_meters()
}

pub fn km_to_meters(km: f64) -> f64 {
    km.km_to_meters()
}

pub fn meters_to_km(meters: f64) -> f64 {
    meters.meters_to_km()
}
