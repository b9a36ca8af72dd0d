pub mod location;
pub mod prayer;

pub use location::Location;
pub use prayer::{PrayerName, PrayerStatus, PrayerTime};
