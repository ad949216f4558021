use crate::domain::PositionError;

pub type SuccessCallback<P> = Box<dyn FnOnce(P) + Send + 'static>;
pub type ErrorCallback = Box<dyn FnOnce(PositionError) + Send + 'static>;

/// The host's location service.
///
/// An implementation must invoke at most one of the two callbacks, at most once. It may do so synchronously, from
/// another thread, much later, or never.
pub trait Geolocation {
    type Position: Send + 'static;

    fn get_current_position(&self, on_success: SuccessCallback<Self::Position>, on_error: ErrorCallback);
}
