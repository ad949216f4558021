use crate::domain::{Position, PositionCoordinates, PositionError};
use crate::location::{ErrorCallback, Geolocation, SuccessCallback};
use chrono::Utc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::time::sleep;
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq)]
pub enum StaticOutcome {
    Fix(PositionCoordinates),
    Error(PositionError),
}

/// A location service that answers every request with the same outcome, after `delay`, from a spawned task.
///
/// Outside a tokio runtime requests are dropped unanswered.
#[derive(Clone, Debug)]
pub struct StaticGeolocation {
    outcome: StaticOutcome,
    delay: Duration,
}

impl StaticGeolocation {
    pub fn new(outcome: StaticOutcome, delay: Duration) -> Self {
        StaticGeolocation { outcome, delay }
    }
}

impl Geolocation for StaticGeolocation {
    type Position = Position;

    fn get_current_position(&self, on_success: SuccessCallback<Position>, on_error: ErrorCallback) {
        let Ok(handle) = Handle::try_current() else {
            warn!("⚠️ Dropping position request, no tokio runtime to answer it on");
            return;
        };

        let outcome = self.outcome.clone();
        let delay = self.delay;

        handle.spawn(async move {
            if !delay.is_zero() {
                debug!("Answering position request in {:?}", delay);
                sleep(delay).await;
            }

            match outcome {
                StaticOutcome::Fix(coords) => on_success(Position { coords, timestamp: Utc::now() }),
                StaticOutcome::Error(error) => on_error(error),
            }
        });
    }
}
