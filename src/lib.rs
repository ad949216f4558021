//! Distance unit conversions, great-circle distances and a current-location adapter.

pub mod distance;
pub mod domain;
pub mod extensions;
mod geo_location_deserializer;
pub mod location;
pub mod units;

pub use distance::{EARTH_RADIUS_KM, get_distance, to_radian};
pub use location::{LocationError, get_location};
