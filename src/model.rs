/// Core data types for the prayer times service.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains the serde shapes for the AlAdhan `data` body plus the error
/// type used by the fetch path — no I/O and no ambient reads.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Coordinates
// ---------------------------------------------------------------------------

/// A WGS84 latitude/longitude pair in decimal degrees.
///
/// Produced by `location::resolve_location`, consumed by
/// `ingest::aladhan::fetch_timings`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

// ---------------------------------------------------------------------------
// Timings
// ---------------------------------------------------------------------------

/// The six daily timing values, each a "HH:MM" 24-hour string.
///
/// Ordering across the fields is monotonically increasing through the day
/// under normal astronomical conditions. The service trusts this from the
/// source and does not enforce it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PrayerTimings {
    #[serde(rename = "Fajr")]
    pub fajr: String,
    #[serde(rename = "Sunrise")]
    pub sunrise: String,
    #[serde(rename = "Dhuhr")]
    pub dhuhr: String,
    #[serde(rename = "Asr")]
    pub asr: String,
    #[serde(rename = "Maghrib")]
    pub maghrib: String,
    #[serde(rename = "Isha")]
    pub isha: String,
}

// ---------------------------------------------------------------------------
// Dates and metadata
// ---------------------------------------------------------------------------

/// Hijri month name in Latin and Arabic script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HijriMonth {
    pub en: String,
    pub ar: String,
}

/// Hijri calendar date as reported by the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HijriDate {
    pub date: String,
    pub month: HijriMonth,
    pub year: String,
}

/// The display date for a record: a readable Gregorian string plus the
/// Hijri representation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecordDate {
    pub readable: String,
    pub hijri: HijriDate,
}

/// Metadata echoed back by the API: the coordinate the timings were
/// computed for and the timezone label.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecordMeta {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// One day of prayer timings for one location.
///
/// Created fresh on every fetch, immutable once constructed, discarded when
/// the next fetch completes. Nothing is persisted across invocations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PrayerTimeRecord {
    pub timings: PrayerTimings,
    pub date: RecordDate,
    pub meta: RecordMeta,
}

/// The result of the composed resolve-and-fetch operation.
///
/// `used_fallback` is true when the timings were computed for the fixed
/// fallback coordinate (Mecca) rather than the caller's real position.
/// An irrecoverable fetch yields no outcome at all — partial records are
/// never produced.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome {
    pub record: PrayerTimeRecord,
    pub used_fallback: bool,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when fetching timings from the AlAdhan API.
#[derive(Debug, PartialEq)]
pub enum AladhanError {
    /// The request could not be issued or the transport failed mid-flight.
    RequestFailed(String),
    /// Non-2xx HTTP response from the API.
    HttpError(u16),
    /// The response body could not be deserialized.
    ParseError(String),
    /// The payload arrived but its status code field was not the success
    /// marker, or the `data` body was missing.
    BadPayload(String),
}

impl std::fmt::Display for AladhanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AladhanError::RequestFailed(msg) => write!(f, "Request failed: {}", msg),
            AladhanError::HttpError(code) => write!(f, "HTTP error: {}", code),
            AladhanError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            AladhanError::BadPayload(msg) => write!(f, "Bad payload: {}", msg),
        }
    }
}

impl std::error::Error for AladhanError {}
