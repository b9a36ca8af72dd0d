#![allow(dead_code)]
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The five daily prayers in their canonical chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrayerName {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerName {
    pub const ALL: [PrayerName; 5] = [
        PrayerName::Fajr,
        PrayerName::Dhuhr,
        PrayerName::Asr,
        PrayerName::Maghrib,
        PrayerName::Isha,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrayerName::Fajr => "fajr",
            PrayerName::Dhuhr => "dhuhr",
            PrayerName::Asr => "asr",
            PrayerName::Maghrib => "maghrib",
            PrayerName::Isha => "isha",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PrayerName::Fajr => "Fajr",
            PrayerName::Dhuhr => "Dhuhr",
            PrayerName::Asr => "Asr",
            PrayerName::Maghrib => "Maghrib",
            PrayerName::Isha => "Isha",
        }
    }

    /// Offset in fractional hours from local solar noon used by the
    /// simplified estimate.
    pub fn offset_from_noon(&self) -> f64 {
        match self {
            PrayerName::Fajr => -6.5,
            PrayerName::Dhuhr => 0.5,
            PrayerName::Asr => 4.0,
            PrayerName::Maghrib => 6.5,
            PrayerName::Isha => 8.0,
        }
    }
}

impl std::fmt::Display for PrayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PrayerName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fajr" => Ok(PrayerName::Fajr),
            "dhuhr" | "zuhr" | "dhuhur" => Ok(PrayerName::Dhuhr),
            "asr" => Ok(PrayerName::Asr),
            "maghrib" => Ok(PrayerName::Maghrib),
            "isha" => Ok(PrayerName::Isha),
            _ => Err(anyhow::anyhow!("Unknown prayer: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrayerStatus {
    Completed,
    Current,
    Upcoming,
}

impl PrayerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrayerStatus::Completed => "completed",
            PrayerStatus::Current => "current",
            PrayerStatus::Upcoming => "upcoming",
        }
    }
}

/// One row of the daily prayer table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrayerTime {
    pub name: PrayerName,
    /// Wall-clock "HH:MM", derived from `raw_hours`.
    pub time: String,
    /// Fractional hours from midnight; kept for ordering comparisons.
    pub raw_hours: f64,
    pub status: PrayerStatus,
    /// True on exactly one entry: the prayer the countdown points at.
    pub next: bool,
}
