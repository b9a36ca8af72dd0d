use serde::{Deserialize, Serialize};

/// Where prayer times are computed for. Created once at startup and replaced
/// wholesale when geolocation resolves, never mutated field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    /// Display-only, best-effort.
    pub city: String,
    pub country: String,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64, city: &str, country: &str) -> Self {
        Self {
            latitude,
            longitude,
            city: city.to_string(),
            country: country.to_string(),
        }
    }
}

/// Fallback used when no position is available (Bangalore, India).
impl Default for Location {
    fn default() -> Self {
        Self::new(12.9716, 77.5946, "Bangalore", "India")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_bangalore() {
        let loc = Location::default();
        assert_eq!(loc.city, "Bangalore");
        assert!((loc.latitude - 12.9716).abs() < f64::EPSILON);
        assert!((loc.longitude - 77.5946).abs() < f64::EPSILON);
    }
}
