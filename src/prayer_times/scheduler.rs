use chrono::{DateTime, Duration, FixedOffset};
use log::debug;

use crate::models::{Location, PrayerName, PrayerStatus, PrayerTime};
use crate::prayer_times::estimator::{compute_prayer_times, next_prayer};
use crate::utils::format::format_countdown;

/// The prayer the countdown points at, with its target resolved to an
/// absolute instant: today's clock time for an in-day prayer, tomorrow's
/// when every prayer has already passed.
#[derive(Debug, Clone, PartialEq)]
pub struct NextPrayer {
    pub name: PrayerName,
    pub time: String,
    pub at: DateTime<FixedOffset>,
}

/// Keeps the slow prayer table and the fast 1 Hz countdown in sync.
///
/// The table only changes when the day, the location, or a prayer boundary
/// changes; the countdown string changes every tick. When a tick finds the
/// clock past the next-prayer target, the scheduler forces a full table
/// refresh instead of emitting a negative countdown.
///
/// All state is replaced wholesale on refresh, never mutated in place.
pub struct CountdownScheduler {
    location: Location,
    prayers: Vec<PrayerTime>,
    next: Option<NextPrayer>,
    countdown: Option<String>,
}

impl CountdownScheduler {
    pub fn new(location: Location) -> Self {
        Self {
            location,
            prayers: Vec::new(),
            next: None,
            countdown: None,
        }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Today's table; empty until the first `refresh`.
    pub fn prayers(&self) -> &[PrayerTime] {
        &self.prayers
    }

    pub fn next(&self) -> Option<&NextPrayer> {
        self.next.as_ref()
    }

    pub fn countdown(&self) -> Option<&str> {
        self.countdown.as_deref()
    }

    /// Replace the location and rebuild the table for it.
    pub fn set_location(&mut self, location: Location, now: DateTime<FixedOffset>) {
        self.location = location;
        self.refresh(now);
    }

    /// Full recompute: new table, new next-prayer pointer, fresh countdown.
    pub fn refresh(&mut self, now: DateTime<FixedOffset>) {
        let table = compute_prayer_times(&self.location, now);

        // No Current entry means every prayer has passed and the pointer
        // wraps to tomorrow's Fajr.
        let wrapped = !table.iter().any(|p| p.status == PrayerStatus::Current);
        let pointer = next_prayer(&table).clone();

        self.next = resolve_target(&pointer.time, now, wrapped).map(|at| NextPrayer {
            name: pointer.name,
            time: pointer.time.clone(),
            at,
        });
        self.prayers = table.to_vec();
        self.countdown = self
            .next
            .as_ref()
            .and_then(|next| countdown_to(next.at, now));

        if let Some(next) = &self.next {
            debug!("prayer table refreshed, next is {} at {}", next.name, next.at);
        }
    }

    /// One 1 Hz tick. Before the first refresh there is nothing to count
    /// down to and the tick does nothing; that is a not-yet-ready state,
    /// not an error.
    pub fn tick(&mut self, now: DateTime<FixedOffset>) {
        let Some(next) = &self.next else { return };

        match countdown_to(next.at, now) {
            Some(remaining) => self.countdown = Some(remaining),
            None => {
                // The second-level clock crossed the prayer boundary before
                // any natural recompute trigger fired; resync eagerly.
                debug!("{} has passed, recomputing prayer table", next.name);
                self.refresh(now);
            }
        }
    }
}

/// "{h}h {m}m" until `target`, or None when the target has been crossed.
/// Zero remaining is still published ("0h 0m"), only a negative gap forces
/// the caller to resync.
fn countdown_to(target: DateTime<FixedOffset>, now: DateTime<FixedOffset>) -> Option<String> {
    let secs = (target - now).num_seconds();
    if secs < 0 {
        return None;
    }
    Some(format_countdown(secs / 3600, (secs % 3600) / 60))
}

/// Turn an "HH:MM" table entry into an absolute instant on `now`'s day
/// (or the day after when `tomorrow` is set), in `now`'s UTC offset.
fn resolve_target(
    hhmm: &str,
    now: DateTime<FixedOffset>,
    tomorrow: bool,
) -> Option<DateTime<FixedOffset>> {
    let (hours, minutes) = parse_hhmm(hhmm)?;

    let mut date = now.date_naive();
    if tomorrow {
        date = date.succ_opt()?;
    }

    // Minute arithmetic from midnight rather than and_hms so that raw hours
    // past 24:00 (possible at extreme longitudes) roll into the next day.
    let naive = date.and_hms_opt(0, 0, 0)? + Duration::minutes(hours * 60 + minutes);
    naive.and_local_timezone(*now.offset()).single()
}

fn parse_hhmm(s: &str) -> Option<(i64, i64)> {
    let (h, m) = s.split_once(':')?;
    Some((h.parse().ok()?, m.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    /// Solar noon lands at exactly 12.0 here, so the table is 05:30, 12:30,
    /// 16:00, 18:30, 20:00.
    fn aligned_location() -> Location {
        Location::new(20.0, 75.0, "Test", "Test")
    }

    fn at(hour: u32, minute: u32, second: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(5 * 3600)
            .unwrap()
            .with_ymd_and_hms(2025, 6, 15, hour, minute, second)
            .unwrap()
    }

    #[test]
    fn tick_before_first_refresh_is_a_noop() {
        let mut scheduler = CountdownScheduler::new(aligned_location());
        scheduler.tick(at(10, 0, 0));
        assert!(scheduler.prayers().is_empty());
        assert!(scheduler.next().is_none());
        assert!(scheduler.countdown().is_none());
    }

    #[test]
    fn countdown_formats_whole_hours_and_minutes() {
        let mut scheduler = CountdownScheduler::new(aligned_location());
        // 10:15 -> Dhuhr 12:30 is 2h 15m away.
        scheduler.refresh(at(10, 15, 0));
        assert_eq!(scheduler.next().unwrap().name, PrayerName::Dhuhr);
        assert_eq!(scheduler.countdown(), Some("2h 15m"));
    }

    #[test]
    fn countdown_at_the_exact_boundary_is_zero_not_a_resync() {
        let mut scheduler = CountdownScheduler::new(aligned_location());
        scheduler.refresh(at(12, 0, 0));
        scheduler.tick(at(12, 30, 0));
        assert_eq!(scheduler.countdown(), Some("0h 0m"));
        assert_eq!(scheduler.next().unwrap().name, PrayerName::Dhuhr);
    }

    #[test]
    fn crossing_the_boundary_forces_a_table_recompute() {
        let mut scheduler = CountdownScheduler::new(aligned_location());
        scheduler.refresh(at(12, 0, 0));
        assert_eq!(scheduler.next().unwrap().name, PrayerName::Dhuhr);

        // One second past Dhuhr: no negative countdown, a fresh table
        // pointing at Asr instead.
        scheduler.tick(at(12, 30, 1));
        assert_eq!(scheduler.next().unwrap().name, PrayerName::Asr);
        assert_eq!(scheduler.countdown(), Some("3h 29m"));
    }

    #[test]
    fn after_isha_the_target_is_tomorrows_fajr() {
        let mut scheduler = CountdownScheduler::new(aligned_location());
        scheduler.refresh(at(21, 0, 0));

        let next = scheduler.next().unwrap();
        assert_eq!(next.name, PrayerName::Fajr);
        assert_eq!(next.at.date_naive().to_string(), "2025-06-16");
        // 21:00 -> 05:30 next day.
        assert_eq!(scheduler.countdown(), Some("8h 30m"));
        assert!(
            scheduler
                .prayers()
                .iter()
                .all(|p| p.status == PrayerStatus::Completed)
        );
    }

    #[test]
    fn set_location_rebuilds_the_table_wholesale() {
        let mut scheduler = CountdownScheduler::new(aligned_location());
        scheduler.refresh(at(10, 0, 0));
        let before = scheduler.prayers().to_vec();

        // 15° further east shifts solar noon a full hour earlier.
        scheduler.set_location(Location::new(20.0, 90.0, "East", "Test"), at(10, 0, 0));
        let after = scheduler.prayers();
        assert_ne!(before, after);
        assert_eq!(after[1].time, "11:30");
    }
}
