use crate::domain::PositionError;
use crate::location::{Completion, Geolocation, LocationError};
use tracing::{debug, instrument, warn};

/// Asks `geolocation` for the current position once and waits for the answer.
///
/// `None` means the host has no location service. The position is returned exactly as the service produced it. No
/// timeout is applied: if the service never answers, neither does this future.
#[instrument(skip_all)]
pub async fn get_location<G>(geolocation: Option<&G>) -> Result<G::Position, LocationError>
where
    G: Geolocation + ?Sized,
{
    let Some(geolocation) = geolocation else {
        warn!("⚠️ Geolocation is unsupported");
        return Err(LocationError::Unsupported);
    };

    debug!("📍 Requesting current position...");
    let (on_success, rx) = Completion::<Result<G::Position, PositionError>>::channel();
    let on_error = on_success.clone();

    geolocation.get_current_position(
        Box::new(move |position| {
            on_success.complete(Ok(position));
        }),
        Box::new(move |error| {
            on_error.complete(Err(error));
        }),
    );

    match rx.await {
        Ok(Ok(position)) => {
            debug!("📍 Requesting current position... OK");
            Ok(position)
        }
        Ok(Err(error)) => {
            warn!(code = %error.code, "⚠️ Requesting current position... failed: {}", error.message);
            Err(LocationError::Platform(error))
        }
        Err(_) => {
            warn!("⚠️ Requesting current position... failed, the location service dropped the request");
            Err(LocationError::Abandoned)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PositionErrorCode;
    use crate::location::{ErrorCallback, StaticGeolocation, SuccessCallback};
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Answers synchronously, from inside `get_current_position`.
    struct Immediate<P: Clone> {
        outcome: Result<P, PositionError>,
        calls: AtomicUsize,
    }

    impl<P: Clone> Immediate<P> {
        fn new(outcome: Result<P, PositionError>) -> Self {
            Immediate {
                outcome,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl<P: Clone + Send + 'static> Geolocation for Immediate<P> {
        type Position = P;

        fn get_current_position(&self, on_success: SuccessCallback<P>, on_error: ErrorCallback) {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.outcome.clone() {
                Ok(position) => on_success(position),
                Err(error) => on_error(error),
            }
        }
    }

    /// Holds on to the callbacks without ever calling them.
    #[derive(Default)]
    struct Silent {
        pending: Mutex<Vec<(SuccessCallback<u32>, ErrorCallback)>>,
    }

    impl Geolocation for Silent {
        type Position = u32;

        fn get_current_position(&self, on_success: SuccessCallback<u32>, on_error: ErrorCallback) {
            self.pending.lock().unwrap().push((on_success, on_error));
        }
    }

    /// Drops both callbacks.
    struct Forgetful;

    impl Geolocation for Forgetful {
        type Position = u32;

        fn get_current_position(&self, _on_success: SuccessCallback<u32>, _on_error: ErrorCallback) {}
    }

    /// Violates the contract by calling both callbacks, error first.
    struct Chatty;

    impl Geolocation for Chatty {
        type Position = u32;

        fn get_current_position(&self, on_success: SuccessCallback<u32>, on_error: ErrorCallback) {
            on_error(PositionError::new(PositionErrorCode::PositionUnavailable, "first"));
            on_success(42);
        }
    }

    #[tokio::test]
    async fn no_location_service_is_unsupported() {
        let result = get_location::<StaticGeolocation>(None).await;

        assert_eq!(result, Err(LocationError::Unsupported));
        assert_eq!(result.unwrap_err().to_string(), "Geolocation is unsupported");
    }

    #[tokio::test]
    async fn resolves_with_the_exact_position() {
        let position = Arc::new(String::from("fix"));
        let geolocation = Immediate::new(Ok(position.clone()));

        let resolved = get_location(Some(&geolocation)).await.unwrap();

        assert!(Arc::ptr_eq(&resolved, &position));
        assert_eq!(geolocation.calls.load(Ordering::SeqCst), 1);
    }

    #[test_log::test(tokio::test)]
    async fn rejects_with_the_platform_error() {
        let platform_error = PositionError::new(PositionErrorCode::PermissionDenied, "User denied Geolocation");
        let geolocation = Immediate::<u32>::new(Err(platform_error.clone()));

        let result = get_location(Some(&geolocation)).await;

        assert_eq!(result, Err(LocationError::Platform(platform_error)));
        assert_eq!(result.unwrap_err().code(), Some(PositionErrorCode::PermissionDenied));
    }

    #[tokio::test]
    async fn dropped_callbacks_are_abandoned() {
        let result = get_location(Some(&Forgetful)).await;

        assert_eq!(result, Err(LocationError::Abandoned));
    }

    #[tokio::test]
    async fn never_answering_leaves_the_request_pending() {
        let geolocation = Silent::default();

        let result = tokio::time::timeout(Duration::from_millis(50), get_location(Some(&geolocation))).await;

        assert!(result.is_err());
        assert_eq!(geolocation.pending.lock().unwrap().len(), 1);
    }

    #[test_log::test(tokio::test)]
    async fn only_the_first_callback_counts() {
        let result = get_location(Some(&Chatty)).await;

        assert_eq!(result.unwrap_err().code(), Some(PositionErrorCode::PositionUnavailable));
    }

    #[tokio::test]
    async fn calls_are_independent() {
        let geolocation = Immediate::new(Ok(7u32));

        let (first, second) = tokio::join!(get_location(Some(&geolocation)), get_location(Some(&geolocation)));

        assert_eq!(first, Ok(7));
        assert_eq!(second, Ok(7));
        assert_eq!(geolocation.calls.load(Ordering::SeqCst), 2);
    }
}
