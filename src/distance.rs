use crate::domain::Coordinate;
use crate::units::km_to_meters;
use std::f64::consts::PI;

/// Mean radius of the Earth.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

pub fn to_radian(degree: f64) -> f64 {
    degree * PI / 180.0
}

/// Returns the great-circle distance between two coordinates in meters, using the haversine formula.
///
/// Coordinates are not range-checked; out-of-range values still produce a number. `NaN` in, `NaN` out.
pub fn get_distance(origin: impl Into<Coordinate>, destination: impl Into<Coordinate>) -> f64 {
    let origin = origin.into();
    let destination = destination.into();

    let lat1 = to_radian(origin.latitude);
    let lon1 = to_radian(origin.longitude);
    let lat2 = to_radian(destination.latitude);
    let lon2 = to_radian(destination.longitude);

    let delta_lat = lat2 - lat1;
    let delta_lon = lon2 - lon1;

    let a = (delta_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    km_to_meters(c * EARTH_RADIUS_KM)
}
