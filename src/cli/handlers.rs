use anyhow::Result;

use crate::config::AppConfig;
use crate::geo;
use crate::prayer_times::CountdownScheduler;

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const AMBER: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GREEN: &str = "\x1b[32m";
const EMERALD: &str = "\x1b[38;2;16;150;110m";

// ─── Times ───────────────────────────────────────────────────────────────────

pub fn handle_times(config: &AppConfig) -> Result<()> {
    let (location, advisory) = geo::startup_location(config);
    let now = config.local_now();

    let mut scheduler = CountdownScheduler::new(location);
    scheduler.refresh(now);

    println!();
    println_colored!(
        EMERALD,
        "  Prayer Times — {}, {} ({})",
        scheduler.location().city,
        scheduler.location().country,
        now.format("%Y-%m-%d")
    );
    println!();

    for prayer in scheduler.prayers() {
        let name = prayer.name.display_name();
        if prayer.next {
            println_colored!(AMBER, "  {:<8}  {}  ← next", name, prayer.time);
        } else if prayer.status == crate::models::PrayerStatus::Completed {
            println_colored!(DIM, "  {:<8}  {}  ✓", name, prayer.time);
        } else {
            println_colored!(BOLD, "  {:<8}  {}", name, prayer.time);
        }
    }

    if let (Some(next), Some(countdown)) = (scheduler.next(), scheduler.countdown()) {
        println!();
        println_colored!(AMBER, "  Next: {} in {}", next.name, countdown);
    }

    if let Some(advisory) = advisory {
        println!();
        println_colored!(DIM, "  {}", advisory);
    }
    println!();
    Ok(())
}

// ─── Next ────────────────────────────────────────────────────────────────────

pub fn handle_next(config: &AppConfig) -> Result<()> {
    let (location, _) = geo::startup_location(config);
    let now = config.local_now();

    let mut scheduler = CountdownScheduler::new(location);
    scheduler.refresh(now);

    match (scheduler.next(), scheduler.countdown()) {
        (Some(next), Some(countdown)) => {
            println_colored!(
                BOLD,
                "  {} at {} — in {}",
                next.name,
                next.time,
                countdown
            );
        }
        _ => println_colored!(DIM, "  No prayer data yet"),
    }
    Ok(())
}

// ─── Locate ──────────────────────────────────────────────────────────────────

pub fn handle_locate(config: &mut AppConfig) -> Result<()> {
    let (location, advisory) = geo::startup_location(config);

    match advisory {
        // A fallback position is not worth persisting.
        Some(advisory) => {
            println_colored!(AMBER, "  {}", advisory);
            println_colored!(
                DIM,
                "  Set latitude/longitude in {:?} to pin a position",
                AppConfig::config_path()?
            );
        }
        None => {
            config.remember_location(&location);
            config.save()?;
            println_colored!(
                GREEN,
                "  ✓ Location saved: {}, {} ({:.4}, {:.4})",
                location.city,
                location.country,
                location.latitude,
                location.longitude
            );
        }
    }
    Ok(())
}
