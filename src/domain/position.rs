use crate::domain::Coordinate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// A position fix as reported by a location source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub coords: PositionCoordinates,
    pub timestamp: DateTime<Utc>,
}

impl Position {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.coords.latitude, self.coords.longitude)
    }
}

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionCoordinates {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: Option<f64>, // In meters
    pub accuracy: f64,         // In meters
    pub altitude_accuracy: Option<f64>,
    pub heading: Option<f64>, // Degrees clockwise from true north
    pub speed: Option<f64>,   // In meters per second
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PositionErrorCode {
    PermissionDenied = 1,
    PositionUnavailable = 2,
    Timeout = 3,
}

impl Display for PositionErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            PositionErrorCode::PermissionDenied => "permission denied",
            PositionErrorCode::PositionUnavailable => "position unavailable",
            PositionErrorCode::Timeout => "timeout",
        };
        write!(f, "{} ({})", text, *self as u8)
    }
}

/// The error a location source reports when it cannot produce a position.
#[derive(Error, Clone, Debug, PartialEq)]
#[error("{code}: {message}")]
pub struct PositionError {
    pub code: PositionErrorCode,
    pub message: String,
}

impl PositionError {
    pub fn new(code: PositionErrorCode, message: impl Into<String>) -> Self {
        PositionError { code, message: message.into() }
    }
}
