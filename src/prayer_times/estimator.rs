use chrono::{DateTime, FixedOffset, Timelike};

use crate::models::{Location, PrayerName, PrayerStatus, PrayerTime};
use crate::utils::format::format_raw_hours;

/// Approximate today's five prayer times for `location` at the instant `at`.
///
/// The UTC offset is taken from `at` itself and is the conventional signed
/// offset east of UTC (IST = +5.5 h). Solar noon is estimated as
/// `12 + offset_hours - longitude/15`; each prayer is a fixed fractional-hour
/// offset from that noon. This is a demonstration-grade approximation, not an
/// almanac calculation; coordinates outside the usual ranges are accepted and
/// still produce a table.
///
/// Pure and deterministic: no I/O, identical inputs give identical output.
/// Always returns exactly five entries in canonical order with exactly one
/// `next == true`.
pub fn compute_prayer_times(location: &Location, at: DateTime<FixedOffset>) -> [PrayerTime; 5] {
    let offset_hours = f64::from(at.offset().local_minus_utc()) / 3600.0;
    let noon = 12.0 + offset_hours - location.longitude / 15.0;

    let current_hour = f64::from(at.hour()) + f64::from(at.minute()) / 60.0;

    let mut prayers = PrayerName::ALL.map(|name| {
        let raw_hours = noon + name.offset_from_noon();
        PrayerTime {
            name,
            time: format_raw_hours(raw_hours),
            raw_hours,
            status: PrayerStatus::Completed,
            next: false,
        }
    });

    // Strict comparison: a prayer counts as passed from its exact minute.
    match prayers.iter().position(|p| p.raw_hours > current_hour) {
        Some(next_idx) => {
            for (idx, prayer) in prayers.iter_mut().enumerate() {
                prayer.status = match idx.cmp(&next_idx) {
                    std::cmp::Ordering::Less => PrayerStatus::Completed,
                    std::cmp::Ordering::Equal => PrayerStatus::Current,
                    std::cmp::Ordering::Greater => PrayerStatus::Upcoming,
                };
                prayer.next = idx == next_idx;
            }
        }
        None => {
            // Every prayer has passed for today. The whole table stays
            // Completed and the pointer wraps to Fajr, now meaning
            // tomorrow's Fajr.
            prayers[0].next = true;
        }
    }

    prayers
}

/// The entry flagged `next == true`; Fajr if the flag is somehow absent.
pub fn next_prayer(prayers: &[PrayerTime; 5]) -> &PrayerTime {
    prayers.iter().find(|p| p.next).unwrap_or(&prayers[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn bangalore() -> Location {
        Location::default()
    }

    /// Longitude 75°E with a +5 h offset puts solar noon at exactly 12.0,
    /// so the table lands on round clock values: 05:30, 12:30, 16:00,
    /// 18:30, 20:00.
    fn aligned_location() -> Location {
        Location::new(20.0, 75.0, "Test", "Test")
    }

    fn at(offset_minutes: i32, hour: u32, minute: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(offset_minutes * 60)
            .unwrap()
            .with_ymd_and_hms(2025, 6, 15, hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn five_entries_in_strictly_increasing_order() {
        let prayers = compute_prayer_times(&bangalore(), at(330, 10, 0));
        assert_eq!(prayers.len(), 5);
        assert_eq!(prayers[0].name, PrayerName::Fajr);
        assert_eq!(prayers[4].name, PrayerName::Isha);
        assert!(prayers.windows(2).all(|w| w[0].raw_hours < w[1].raw_hours));
    }

    #[test]
    fn exactly_one_next_splits_completed_from_upcoming() {
        let prayers = compute_prayer_times(&bangalore(), at(330, 10, 0));
        assert_eq!(prayers.iter().filter(|p| p.next).count(), 1);

        let next_idx = prayers.iter().position(|p| p.next).unwrap();
        for (idx, prayer) in prayers.iter().enumerate() {
            let expected = match idx.cmp(&next_idx) {
                std::cmp::Ordering::Less => PrayerStatus::Completed,
                std::cmp::Ordering::Equal => PrayerStatus::Current,
                std::cmp::Ordering::Greater => PrayerStatus::Upcoming,
            };
            assert_eq!(prayer.status, expected);
        }
    }

    #[test]
    fn identical_inputs_give_identical_output() {
        let a = compute_prayer_times(&bangalore(), at(330, 14, 45));
        let b = compute_prayer_times(&bangalore(), at(330, 14, 45));
        assert_eq!(a, b);
    }

    #[test]
    fn bangalore_mid_morning_has_dhuhr_current() {
        // 2025-06-15 10:00 +05:30: noon ≈ 12.327, Fajr 05:49 has passed,
        // Dhuhr 12:49 has not.
        let prayers = compute_prayer_times(&bangalore(), at(330, 10, 0));
        assert_eq!(prayers[0].time, "05:49");
        assert_eq!(prayers[0].status, PrayerStatus::Completed);
        assert_eq!(prayers[1].name, PrayerName::Dhuhr);
        assert_eq!(prayers[1].time, "12:49");
        assert_eq!(prayers[1].status, PrayerStatus::Current);
        assert!(prayers[1].next);
        assert_eq!(prayers[2].status, PrayerStatus::Upcoming);
    }

    #[test]
    fn after_isha_everything_completed_and_fajr_is_next() {
        // 23:00 is past Isha (20:00 at the aligned location).
        let prayers = compute_prayer_times(&aligned_location(), at(300, 23, 0));
        assert!(prayers.iter().all(|p| p.status == PrayerStatus::Completed));
        assert!(prayers[0].next);
        assert_eq!(prayers.iter().filter(|p| p.next).count(), 1);
    }

    #[test]
    fn exact_prayer_minute_counts_as_passed() {
        // Dhuhr is exactly 12:30 at the aligned location; at 12:30 sharp the
        // strict comparison already points at Asr.
        let prayers = compute_prayer_times(&aligned_location(), at(300, 12, 30));
        assert_eq!(prayers[1].time, "12:30");
        assert_eq!(prayers[1].status, PrayerStatus::Completed);
        assert_eq!(prayers[2].name, PrayerName::Asr);
        assert!(prayers[2].next);
    }

    #[test]
    fn out_of_range_coordinates_still_produce_a_table() {
        let odd = Location::new(95.0, 200.0, "Nowhere", "Nowhere");
        let prayers = compute_prayer_times(&odd, at(0, 12, 0));
        assert_eq!(prayers.len(), 5);
        assert_eq!(prayers.iter().filter(|p| p.next).count(), 1);
    }
}
