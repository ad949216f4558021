mod completion;
mod error;
mod geolocation;
mod get_location;
mod static_geolocation;

pub use completion::Completion;
pub use error::LocationError;
pub use geolocation::{ErrorCallback, Geolocation, SuccessCallback};
pub use get_location::get_location;
pub use static_geolocation::{StaticGeolocation, StaticOutcome};
