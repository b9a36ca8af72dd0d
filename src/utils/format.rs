/// Format fractional hours from midnight as zero-padded "HH:MM".
/// Hours and the remainder-derived minutes are both floored, no seconds.
pub fn format_raw_hours(raw: f64) -> String {
    let hours = raw.floor();
    let minutes = ((raw - hours) * 60.0).floor();
    format!("{:02}:{:02}", hours as i64, minutes as i64)
}

/// Countdown string: no leading zeros, literal h/m suffixes, single space.
pub fn format_countdown(hours: i64, minutes: i64) -> String {
    format!("{}h {}m", hours, minutes)
}

/// Coordinates as a display label, two decimal places.
pub fn format_coords(latitude: f64, longitude: f64) -> String {
    format!("{:.2}, {:.2}", latitude, longitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_hours_floor_to_clock_minutes() {
        assert_eq!(format_raw_hours(5.826993), "05:49");
        assert_eq!(format_raw_hours(12.0), "12:00");
        assert_eq!(format_raw_hours(12.5), "12:30");
        assert_eq!(format_raw_hours(0.016), "00:00");
    }

    #[test]
    fn countdown_has_no_leading_zeros() {
        assert_eq!(format_countdown(2, 15), "2h 15m");
        assert_eq!(format_countdown(0, 5), "0h 5m");
        assert_eq!(format_countdown(0, 0), "0h 0m");
        assert_eq!(format_countdown(23, 59), "23h 59m");
    }

    #[test]
    fn coords_round_to_two_decimals() {
        assert_eq!(format_coords(12.9716, 77.5946), "12.97, 77.59");
        assert_eq!(format_coords(-33.8688, 151.2093), "-33.87, 151.21");
    }
}
