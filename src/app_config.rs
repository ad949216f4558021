use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment};
use geomath::domain::{Coordinate, PositionCoordinates};
use geomath::location::{StaticGeolocation, StaticOutcome};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    reference: Coordinate,
    location: Location,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_builder(
            Config::builder()
                .add_source(config::File::with_name("config").required(true))
                .add_source(config::File::with_name("config_local").required(false))
                .add_source(environment()),
        )
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: AppConfig = builder.build()?.try_deserialize()?;

        if config.location.source == LocationSource::Static && config.location.position.is_none() {
            return Err(ConfigError::Message("location.position is required for the static location source".to_string()));
        }

        Ok(config)
    }

    pub fn reference(&self) -> &Coordinate {
        &self.reference
    }

    pub fn location(&self) -> &Location {
        &self.location
    }
}

fn environment() -> Environment {
    Environment::with_prefix("GEOMATH").separator("__")
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LocationSource {
    Static,
    None,
}

#[derive(Debug, Deserialize)]
pub struct Location {
    source: LocationSource,
    position: Option<ConfiguredPosition>,
    #[serde(default, with = "humantime_serde")]
    delay: Duration,
    #[serde(with = "humantime_serde")]
    timeout: Duration,
}

impl Location {
    /// Returns the configured location service, or `None` if the host has none.
    pub fn geolocation(&self) -> Option<StaticGeolocation> {
        match self.source {
            LocationSource::None => None,
            LocationSource::Static => self
                .position
                .as_ref()
                .map(|position| StaticGeolocation::new(StaticOutcome::Fix(position.coords()), self.delay)),
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[derive(Debug, Deserialize)]
pub struct ConfiguredPosition {
    coordinate: Coordinate,
    altitude_m: Option<f64>,
    accuracy_m: f64,
}

impl ConfiguredPosition {
    fn coords(&self) -> PositionCoordinates {
        PositionCoordinates {
            latitude: self.coordinate.latitude,
            longitude: self.coordinate.longitude,
            altitude: self.altitude_m,
            accuracy: self.accuracy_m,
            ..Default::default()
        }
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                reference: Coordinate::new(51.5007, 0.1246),
                location: Location {
                    source: LocationSource::Static,
                    position: Some(ConfiguredPosition {
                        coordinate: Coordinate::new(40.6892, 74.0445),
                        altitude_m: None,
                        accuracy_m: 25.0,
                    }),
                    delay: Duration::ZERO,
                    timeout: Duration::from_secs(5),
                },
            },
        }
    }

    pub fn reference(mut self, reference: Coordinate) -> Self {
        self.config.reference = reference;
        self
    }

    pub fn location_source(mut self, source: LocationSource) -> Self {
        self.config.location.source = source;
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.config.location.delay = delay;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.location.timeout = timeout;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
