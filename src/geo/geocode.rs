use std::sync::Mutex;
use std::time::{Duration, Instant};

use log::debug;
use serde_json::Value;
use thiserror::Error;

const ENDPOINT: &str = "https://api.bigdatacloud.net/data/reverse-geocode-client";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const CACHE_VALIDITY: Duration = Duration::from_secs(5 * 60);

/// Human-readable labels for a coordinate pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub city: String,
    pub country: String,
}

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("geocoding request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("geocoding service unavailable")]
    Unavailable,
}

/// One-shot reverse geocoding: coordinates in, best-effort labels out.
/// No retry; callers fall back to raw coordinates on failure.
pub trait ReverseGeocoder {
    fn lookup(&self, latitude: f64, longitude: f64) -> Result<Place, GeocodeError>;
}

struct CacheEntry {
    latitude: f64,
    longitude: f64,
    place: Place,
    fetched_at: Instant,
}

/// Reverse geocoding against bigdatacloud's free client endpoint, with a
/// 10 s request timeout and a five-minute single-entry result cache.
pub struct BigDataCloudGeocoder {
    client: reqwest::blocking::Client,
    cache: Mutex<Option<CacheEntry>>,
}

impl BigDataCloudGeocoder {
    pub fn new() -> Result<Self, GeocodeError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            cache: Mutex::new(None),
        })
    }

    fn cached(&self, latitude: f64, longitude: f64) -> Option<Place> {
        let guard = self.cache.lock().ok()?;
        let entry = guard.as_ref()?;
        let same_spot = (entry.latitude - latitude).abs() < 1e-6
            && (entry.longitude - longitude).abs() < 1e-6;
        if same_spot && entry.fetched_at.elapsed() < CACHE_VALIDITY {
            debug!("geocode cache hit for {latitude:.4}, {longitude:.4}");
            return Some(entry.place.clone());
        }
        None
    }

    fn store(&self, latitude: f64, longitude: f64, place: Place) {
        if let Ok(mut guard) = self.cache.lock() {
            *guard = Some(CacheEntry {
                latitude,
                longitude,
                place,
                fetched_at: Instant::now(),
            });
        }
    }
}

impl ReverseGeocoder for BigDataCloudGeocoder {
    fn lookup(&self, latitude: f64, longitude: f64) -> Result<Place, GeocodeError> {
        if let Some(hit) = self.cached(latitude, longitude) {
            return Ok(hit);
        }

        let body: Value = self
            .client
            .get(ENDPOINT)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("localityLanguage", "en".to_string()),
            ])
            .send()?
            .error_for_status()?
            .json()?;

        let city = str_field(&body, "city")
            .or_else(|| str_field(&body, "locality"))
            .unwrap_or_else(|| "Unknown City".to_string());
        let country =
            str_field(&body, "countryName").unwrap_or_else(|| "Unknown Country".to_string());

        let place = Place { city, country };
        self.store(latitude, longitude, place.clone());
        Ok(place)
    }
}

fn str_field(body: &Value, key: &str) -> Option<String> {
    body.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn city_falls_back_to_locality_then_placeholder() {
        let with_city = json!({"city": "Bengaluru", "countryName": "India"});
        assert_eq!(str_field(&with_city, "city").unwrap(), "Bengaluru");

        let locality_only = json!({"city": "", "locality": "Whitefield"});
        assert!(str_field(&locality_only, "city").is_none());
        assert_eq!(str_field(&locality_only, "locality").unwrap(), "Whitefield");

        let empty = json!({});
        assert!(str_field(&empty, "countryName").is_none());
    }

    #[test]
    fn whitespace_fields_are_treated_as_missing() {
        let body = json!({"city": "   "});
        assert!(str_field(&body, "city").is_none());
    }
}
