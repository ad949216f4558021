use std::fmt::{Display, Formatter};

/// A point on the globe in decimal degrees. Construction does not check ranges.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate { latitude, longitude }
    }

    /// Returns the great-circle distance to `other` in meters.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        crate::distance::get_distance(*self, *other)
    }
}

/// `[latitude, longitude]`
impl From<[f64; 2]> for Coordinate {
    fn from([latitude, longitude]: [f64; 2]) -> Self {
        Coordinate { latitude, longitude }
    }
}

/// `(latitude, longitude)`
impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Coordinate { latitude, longitude }
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}
