mod coordinate;
mod position;

pub use coordinate::Coordinate;
pub use position::{Position, PositionCoordinates, PositionError, PositionErrorCode};
