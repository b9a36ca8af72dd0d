pub mod geocode;
pub mod provider;

pub use geocode::{BigDataCloudGeocoder, GeocodeError, Place, ReverseGeocoder};
pub use provider::{ConfiguredPosition, Coordinates, LocationError, LocationProvider};

use log::warn;

use crate::config::AppConfig;
use crate::models::Location;
use crate::utils::format::format_coords;

/// Resolve the best-effort display location: provider coordinates enriched
/// by reverse geocoding, degrading to raw coordinate labels, and finally to
/// the given default. Never fails; a `Some` advisory means the position was
/// unavailable and the default is in use.
pub fn resolve_location(
    provider: &dyn LocationProvider,
    geocoder: &dyn ReverseGeocoder,
    default: &Location,
) -> (Location, Option<String>) {
    let coords = match provider.current_position() {
        Ok(coords) => coords,
        Err(err) => {
            warn!("geolocation failed: {err}");
            let advisory = format!(
                "Location unavailable. Using default location ({}).",
                default.city
            );
            return (default.clone(), Some(advisory));
        }
    };

    match geocoder.lookup(coords.latitude, coords.longitude) {
        Ok(place) => (
            Location {
                latitude: coords.latitude,
                longitude: coords.longitude,
                city: place.city,
                country: place.country,
            },
            None,
        ),
        Err(err) => {
            warn!("reverse geocoding failed: {err}");
            (coords_only_location(coords), None)
        }
    }
}

/// Startup path shared by the TUI and the CLI: config-backed position and
/// the HTTP geocoder, skipped entirely when auto-locate is off.
pub fn startup_location(config: &AppConfig) -> (Location, Option<String>) {
    let default = config.default_location();
    if !config.location.auto_locate {
        return (default, None);
    }

    let provider = ConfiguredPosition::from_config(config);
    match BigDataCloudGeocoder::new() {
        Ok(geocoder) => resolve_location(&provider, &geocoder, &default),
        Err(err) => {
            warn!("geocoder unavailable: {err}");
            resolve_location(&provider, &UnavailableGeocoder, &default)
        }
    }
}

/// Labels when geocoding cannot be used: coordinates to two decimals,
/// country "Unknown".
fn coords_only_location(coords: Coordinates) -> Location {
    Location::new(
        coords.latitude,
        coords.longitude,
        &format_coords(coords.latitude, coords.longitude),
        "Unknown",
    )
}

/// Stand-in used when the HTTP client cannot even be constructed.
struct UnavailableGeocoder;

impl ReverseGeocoder for UnavailableGeocoder {
    fn lookup(&self, _latitude: f64, _longitude: f64) -> Result<Place, GeocodeError> {
        Err(GeocodeError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedPosition(Coordinates);

    impl LocationProvider for FixedPosition {
        fn current_position(&self) -> Result<Coordinates, LocationError> {
            Ok(self.0)
        }
    }

    struct NoPosition;

    impl LocationProvider for NoPosition {
        fn current_position(&self) -> Result<Coordinates, LocationError> {
            Err(LocationError::Unavailable)
        }
    }

    struct FixedPlace(&'static str, &'static str);

    impl ReverseGeocoder for FixedPlace {
        fn lookup(&self, _: f64, _: f64) -> Result<Place, GeocodeError> {
            Ok(Place {
                city: self.0.to_string(),
                country: self.1.to_string(),
            })
        }
    }

    #[test]
    fn denied_position_falls_back_to_default_with_advisory() {
        let default = Location::default();
        let (location, advisory) =
            resolve_location(&NoPosition, &UnavailableGeocoder, &default);
        assert_eq!(location, default);
        let advisory = advisory.unwrap();
        assert!(advisory.contains("Bangalore"));
    }

    #[test]
    fn geocode_failure_falls_back_to_raw_coordinates() {
        let paris = Coordinates {
            latitude: 48.8566,
            longitude: 2.3522,
        };
        let (location, advisory) =
            resolve_location(&FixedPosition(paris), &UnavailableGeocoder, &Location::default());
        assert!(advisory.is_none());
        assert_eq!(location.city, "48.86, 2.35");
        assert_eq!(location.country, "Unknown");
        assert!((location.latitude - 48.8566).abs() < f64::EPSILON);
    }

    #[test]
    fn successful_lookup_builds_the_full_location() {
        let riyadh = Coordinates {
            latitude: 24.7136,
            longitude: 46.6753,
        };
        let (location, advisory) = resolve_location(
            &FixedPosition(riyadh),
            &FixedPlace("Riyadh", "Saudi Arabia"),
            &Location::default(),
        );
        assert!(advisory.is_none());
        assert_eq!(location.city, "Riyadh");
        assert_eq!(location.country, "Saudi Arabia");
    }
}
