use thiserror::Error;

use crate::config::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("no position available")]
    Unavailable,
}

/// Terminal analogue of a platform geolocation API: one-shot, best-effort.
/// Injected as a trait so callers can degrade gracefully when no position
/// exists.
pub trait LocationProvider {
    fn current_position(&self) -> Result<Coordinates, LocationError>;
}

/// Coordinates pinned in the user's config file. Both latitude and longitude
/// must be set for a position to be available.
pub struct ConfiguredPosition {
    coords: Option<Coordinates>,
}

impl ConfiguredPosition {
    pub fn from_config(config: &AppConfig) -> Self {
        let coords = match (config.location.latitude, config.location.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates {
                latitude,
                longitude,
            }),
            _ => None,
        };
        Self { coords }
    }
}

impl LocationProvider for ConfiguredPosition {
    fn current_position(&self) -> Result<Coordinates, LocationError> {
        self.coords.ok_or(LocationError::Unavailable)
    }
}
