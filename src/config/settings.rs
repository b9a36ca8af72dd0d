use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, Local, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::models::Location;

fn default_city() -> String {
    "Bangalore".to_string()
}
fn default_country() -> String {
    "India".to_string()
}
fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Coordinates to compute prayer times for. Both must be set to count
    /// as a known position; otherwise the built-in default applies.
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default = "default_city")]
    pub city: String,
    #[serde(default = "default_country")]
    pub country: String,
    /// UTC offset override in minutes (e.g. 330 for IST). The machine's
    /// local offset is used when unset.
    #[serde(default)]
    pub utc_offset_minutes: Option<i32>,
    /// Reverse-geocode the coordinates on startup to refresh the city label.
    #[serde(default = "default_true")]
    pub auto_locate: bool,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            latitude: None,
            longitude: None,
            city: default_city(),
            country: default_country(),
            utc_offset_minutes: None,
            auto_locate: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub location: LocationConfig,
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "emaan").context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Reading {:?}", path))?;
        let config: AppConfig = toml::from_str(&content).context("Parsing config.toml")?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Serializing config")?;
        std::fs::write(path, content).with_context(|| format!("Writing {:?}", path))?;
        Ok(())
    }

    /// The location shown before (or without) geocoding: configured
    /// coordinates when present, the built-in Bangalore default otherwise.
    pub fn default_location(&self) -> Location {
        match (self.location.latitude, self.location.longitude) {
            (Some(latitude), Some(longitude)) => Location {
                latitude,
                longitude,
                city: self.location.city.clone(),
                country: self.location.country.clone(),
            },
            _ => Location::default(),
        }
    }

    /// Current time in the configured UTC offset, or machine-local time.
    pub fn local_now(&self) -> DateTime<FixedOffset> {
        let override_offset = self
            .location
            .utc_offset_minutes
            .and_then(|minutes| FixedOffset::east_opt(minutes * 60));
        match override_offset {
            Some(offset) => Utc::now().with_timezone(&offset),
            None => Local::now().fixed_offset(),
        }
    }

    /// Persist a freshly resolved location into the config fields.
    pub fn remember_location(&mut self, location: &Location) {
        self.location.latitude = Some(location.latitude);
        self.location.longitude = Some(location.longitude);
        self.location.city = location.city.clone();
        self.location.country = location.country.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_bangalore() {
        let config = AppConfig::default();
        assert_eq!(config.location.city, "Bangalore");
        assert!(config.location.auto_locate);
        assert_eq!(config.default_location(), Location::default());
    }

    #[test]
    fn configured_coordinates_override_the_default() {
        let mut config = AppConfig::default();
        config.location.latitude = Some(21.4225);
        config.location.longitude = Some(39.8262);
        config.location.city = "Makkah".to_string();
        let location = config.default_location();
        assert_eq!(location.city, "Makkah");
        assert!((location.longitude - 39.8262).abs() < f64::EPSILON);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.remember_location(&Location::new(3.139, 101.6869, "Kuala Lumpur", "Malaysia"));
        config.location.utc_offset_minutes = Some(480);
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.location.city, "Kuala Lumpur");
        assert_eq!(loaded.location.utc_offset_minutes, Some(480));
        assert_eq!(loaded.default_location().city, "Kuala Lumpur");
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded.location.city, "Bangalore");
    }

    #[test]
    fn offset_override_is_respected_by_local_now() {
        let mut config = AppConfig::default();
        config.location.utc_offset_minutes = Some(330);
        let now = config.local_now();
        assert_eq!(now.offset().local_minus_utc(), 330 * 60);
    }
}
