use crate::domain::{PositionError, PositionErrorCode};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum LocationError {
    #[error("Geolocation is unsupported")]
    Unsupported,
    #[error("geolocation request failed: {0}")]
    Platform(#[from] PositionError),
    #[error("geolocation request was dropped without a result")]
    Abandoned,
}

impl LocationError {
    /// Returns the platform's error code, if the platform reported the failure.
    pub fn code(&self) -> Option<PositionErrorCode> {
        match self {
            LocationError::Platform(e) => Some(e.code),
            _ => None,
        }
    }
}
