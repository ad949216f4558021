use crate::domain::Coordinate;
use serde::de::Error;
use serde::{Deserialize, Deserializer};

/// Configured coordinates are range-checked, unlike coordinates handed to the distance functions.
impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        #[serde(untagged)]
        enum Inner {
            Named { latitude: f64, longitude: f64 },
            Pair([f64; 2]),
        }

        let (latitude, longitude) = match Inner::deserialize(deserializer)? {
            Inner::Named { latitude, longitude } => (latitude, longitude),
            Inner::Pair([latitude, longitude]) => (latitude, longitude),
        };

        if !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::custom(format!("invalid location latitude: {}, must be between -90 and 90", latitude)));
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::custom(format!("invalid location longitude: {}, must be between -180 and 180", longitude)));
        }

        Ok(Coordinate { latitude, longitude })
    }
}
