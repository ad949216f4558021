use crate::app_config::{AppConfig, Location};
use geomath::domain::Position;
use geomath::get_location;
use geomath::units::{km_to_miles, meters_to_km};
use std::error::Error;
use tokio::time::timeout;
use tracing::{error, info, instrument};

mod app_config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let position = current_position(config.location()).await?;
    info!(accuracy_m = position.coords.accuracy, "✅  Current position is {}", position.coordinate());

    let meters = position.coordinate().distance_to(config.reference());
    let km = meters_to_km(meters);
    info!(
        meters,
        "📏 {} is {:.3} km ({:.3} mi) away from {}",
        position.coordinate(),
        km,
        km_to_miles(km),
        config.reference()
    );

    Ok(())
}

/// Queries the configured location service, giving up after the configured timeout.
#[instrument(skip_all)]
async fn current_position(location: &Location) -> Result<Position, Box<dyn Error>> {
    let geolocation = location.geolocation();
    match timeout(location.timeout(), get_location(geolocation.as_ref())).await {
        Ok(Ok(position)) => Ok(position),
        Ok(Err(e)) => {
            error!("❌ Could not determine the current position: {}", e);
            Err(e.into())
        }
        Err(e) => {
            error!("❌ No position after {:?}", location.timeout());
            Err(e.into())
        }
    }
}
