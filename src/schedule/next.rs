/// Next-prayer selection.
///
/// Given the day's six timings and a wall-clock time, finds the first
/// prayer whose time is still ahead. The comparison is strict: a prayer
/// whose time equals the current minute has already begun and counts as
/// passed. When every prayer has passed, the answer wraps to tomorrow's
/// Fajr, reported with today's Fajr string — callers must not read that
/// time as "today".
///
/// # Clock injection
/// `next_prayer_at` accepts a `now: NaiveTime` parameter rather than
/// calling `Local::now()` internally. This makes selection purely
/// deterministic in tests without mocking or time manipulation.

use chrono::{Local, NaiveTime, Timelike};
use std::fmt;

use crate::model::PrayerTimings;

// ---------------------------------------------------------------------------
// Prayer identity
// ---------------------------------------------------------------------------

/// The six daily prayers (Sunrise marks the end of Fajr's window and is
/// carried as a display entry, matching the timings record).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

/// Canonical fixed order the prayers occur in through the day.
pub const PRAYER_ORDER: [Prayer; 6] = [
    Prayer::Fajr,
    Prayer::Sunrise,
    Prayer::Dhuhr,
    Prayer::Asr,
    Prayer::Maghrib,
    Prayer::Isha,
];

impl Prayer {
    pub fn name(self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Sunrise => "Sunrise",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        }
    }

    /// The "HH:MM" string for this prayer in a timings record.
    pub fn timing_in(self, timings: &PrayerTimings) -> &str {
        match self {
            Prayer::Fajr => &timings.fajr,
            Prayer::Sunrise => &timings.sunrise,
            Prayer::Dhuhr => &timings.dhuhr,
            Prayer::Asr => &timings.asr,
            Prayer::Maghrib => &timings.maghrib,
            Prayer::Isha => &timings.isha,
        }
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// The selected next prayer.
#[derive(Debug, Clone, PartialEq)]
pub struct NextPrayer {
    pub prayer: Prayer,
    /// "HH:MM" string taken verbatim from the timings record. When
    /// `tomorrow` is true this is today's Fajr string standing in for
    /// tomorrow's.
    pub time: String,
    /// True when every prayer today has passed and the selection wrapped
    /// to the following day's Fajr.
    pub tomorrow: bool,
}

/// Parses a "HH:MM" string into minutes since midnight.
///
/// Timings are trusted from the source, but a malformed string still
/// surfaces as an error rather than a panic.
pub fn minutes_since_midnight(time: &str) -> Result<u32, String> {
    let (hours_str, minutes_str) = time
        .split_once(':')
        .ok_or_else(|| format!("timing '{}' is not HH:MM", time))?;

    let hours: u32 = hours_str
        .trim()
        .parse()
        .map_err(|_| format!("timing '{}' has a non-numeric hour", time))?;
    let minutes: u32 = minutes_str
        .trim()
        .parse()
        .map_err(|_| format!("timing '{}' has non-numeric minutes", time))?;

    if hours > 23 || minutes > 59 {
        return Err(format!("timing '{}' is out of range", time));
    }

    Ok(hours * 60 + minutes)
}

/// Selects the next prayer relative to an explicit wall-clock time.
///
/// Returns an error only if a timing string in the record is malformed.
pub fn next_prayer_at(timings: &PrayerTimings, now: NaiveTime) -> Result<NextPrayer, String> {
    let now_minutes = now.hour() * 60 + now.minute();

    for prayer in PRAYER_ORDER {
        let time = prayer.timing_in(timings);
        if minutes_since_midnight(time)? > now_minutes {
            return Ok(NextPrayer {
                prayer,
                time: time.to_string(),
                tomorrow: false,
            });
        }
    }

    // At or after Isha: the next prayer is tomorrow's Fajr.
    Ok(NextPrayer {
        prayer: Prayer::Fajr,
        time: timings.fajr.clone(),
        tomorrow: true,
    })
}

/// Convenience wrapper that uses the real current local time.
/// Use `next_prayer_at` in tests to keep them deterministic.
pub fn next_prayer(timings: &PrayerTimings) -> Result<NextPrayer, String> {
    next_prayer_at(timings, Local::now().time())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// The day of timings used across all tests.
    fn sample_timings() -> PrayerTimings {
        PrayerTimings {
            fajr: "05:00".to_string(),
            sunrise: "06:30".to_string(),
            dhuhr: "12:15".to_string(),
            asr: "15:45".to_string(),
            maghrib: "18:20".to_string(),
            isha: "19:50".to_string(),
        }
    }

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    // --- Before the first prayer -------------------------------------------

    #[test]
    fn test_before_fajr_returns_fajr_today() {
        let next = next_prayer_at(&sample_timings(), at(4, 59)).unwrap();
        assert_eq!(next.prayer, Prayer::Fajr);
        assert_eq!(next.time, "05:00");
        assert!(!next.tomorrow);
    }

    #[test]
    fn test_midnight_returns_fajr_today() {
        let next = next_prayer_at(&sample_timings(), at(0, 0)).unwrap();
        assert_eq!(next.prayer, Prayer::Fajr);
        assert!(!next.tomorrow);
    }

    // --- Mid-day selection --------------------------------------------------

    #[test]
    fn test_one_pm_returns_asr() {
        // End-to-end case from the service contract: 13:00 → Asr at 15:45.
        let next = next_prayer_at(&sample_timings(), at(13, 0)).unwrap();
        assert_eq!(next.prayer, Prayer::Asr);
        assert_eq!(next.time, "15:45");
        assert!(!next.tomorrow);
    }

    #[test]
    fn test_between_fajr_and_sunrise_returns_sunrise() {
        let next = next_prayer_at(&sample_timings(), at(5, 30)).unwrap();
        assert_eq!(next.prayer, Prayer::Sunrise);
        assert_eq!(next.time, "06:30");
    }

    // --- Boundary behavior: strict greater-than ------------------------------

    #[test]
    fn test_one_minute_before_each_prayer_returns_that_prayer() {
        let timings = sample_timings();
        for prayer in PRAYER_ORDER {
            let minutes = minutes_since_midnight(prayer.timing_in(&timings)).unwrap();
            let now = at((minutes - 1) / 60, (minutes - 1) % 60);
            let next = next_prayer_at(&timings, now).unwrap();
            assert_eq!(
                next.prayer, prayer,
                "one minute before {} should select it",
                prayer
            );
        }
    }

    #[test]
    fn test_exactly_at_dhuhr_returns_asr() {
        // Exact equality counts as already passed.
        let next = next_prayer_at(&sample_timings(), at(12, 15)).unwrap();
        assert_eq!(next.prayer, Prayer::Asr);
    }

    #[test]
    fn test_one_minute_after_dhuhr_returns_asr() {
        let next = next_prayer_at(&sample_timings(), at(12, 16)).unwrap();
        assert_eq!(next.prayer, Prayer::Asr);
    }

    // --- Wraparound ----------------------------------------------------------

    #[test]
    fn test_exactly_at_isha_wraps_to_tomorrows_fajr() {
        let next = next_prayer_at(&sample_timings(), at(19, 50)).unwrap();
        assert_eq!(next.prayer, Prayer::Fajr);
        assert_eq!(next.time, "05:00", "wraparound reports today's Fajr string");
        assert!(next.tomorrow);
    }

    #[test]
    fn test_late_evening_wraps_to_tomorrows_fajr_never_isha() {
        let next = next_prayer_at(&sample_timings(), at(23, 59)).unwrap();
        assert_eq!(next.prayer, Prayer::Fajr);
        assert!(next.tomorrow);
    }

    // --- Malformed timings ---------------------------------------------------

    #[test]
    fn test_malformed_timing_returns_error() {
        let mut timings = sample_timings();
        timings.dhuhr = "noonish".to_string();
        let result = next_prayer_at(&timings, at(7, 0));
        assert!(result.is_err(), "expected Err for malformed timing, got {:?}", result);
    }

    #[test]
    fn test_out_of_range_timing_returns_error() {
        let mut timings = sample_timings();
        timings.maghrib = "25:70".to_string();
        assert!(next_prayer_at(&timings, at(16, 0)).is_err());
    }

    // --- Parsing helper ------------------------------------------------------

    #[test]
    fn test_minutes_since_midnight() {
        assert_eq!(minutes_since_midnight("00:00"), Ok(0));
        assert_eq!(minutes_since_midnight("05:00"), Ok(300));
        assert_eq!(minutes_since_midnight("23:59"), Ok(1439));
        assert!(minutes_since_midnight("24:00").is_err());
        assert!(minutes_since_midnight("1200").is_err());
        assert!(minutes_since_midnight("").is_err());
    }
}
