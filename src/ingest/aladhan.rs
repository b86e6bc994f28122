/// AlAdhan Timings API Client
///
/// Retrieves the day's prayer timings for a coordinate and calculation
/// method from the AlAdhan public API.
///
/// API Documentation: https://aladhan.com/prayer-times-api
/// Timings endpoint: https://api.aladhan.com/v1/timings/{timestamp}

use chrono::Utc;
use serde::Deserialize;

use crate::methods::CalculationMethod;
use crate::model::{AladhanError, Coordinate, PrayerTimeRecord};

const ALADHAN_BASE_URL: &str = "https://api.aladhan.com";

/// Status code the API reports inside a successful payload.
const PAYLOAD_SUCCESS_CODE: u16 = 200;

// ============================================================================
// AlAdhan API Response Structures
// ============================================================================

/// Top-level envelope of a timings response.
///
/// `code` duplicates the HTTP status inside the body; both are checked.
/// `data` is absent on error payloads.
#[derive(Debug, Deserialize)]
pub struct TimingsEnvelope {
    pub code: u16,
    pub data: Option<PrayerTimeRecord>,
}

// ============================================================================
// API Client Functions
// ============================================================================

/// Builds the timings URL for a coordinate, method, and Unix timestamp.
///
/// The timestamp selects which day the API computes timings for; callers
/// pass "now" to get today's timings in the coordinate's local timezone.
pub fn build_timings_url(coordinate: Coordinate, method: CalculationMethod, timestamp: i64) -> String {
    format!(
        "{}/v1/timings/{}?latitude={}&longitude={}&method={}",
        ALADHAN_BASE_URL,
        timestamp,
        coordinate.latitude,
        coordinate.longitude,
        method.api_code()
    )
}

/// Fetch today's timings for a coordinate.
///
/// # Parameters
/// - `client`: HTTP client
/// - `coordinate`: position to compute timings for
/// - `method`: calculation convention, e.g. `CalculationMethod::Mwl`
///
/// # Returns
/// The parsed record, or an `AladhanError` describing the first failed
/// validation step. Exactly one network call is made per invocation; there
/// is no retry and no timeout beyond what the client itself enforces.
pub fn fetch_timings(
    client: &reqwest::blocking::Client,
    coordinate: Coordinate,
    method: CalculationMethod,
) -> Result<PrayerTimeRecord, AladhanError> {
    fetch_timings_at(client, coordinate, method, Utc::now().timestamp())
}

/// Same as `fetch_timings` with an explicit Unix timestamp, so tests and
/// callers replaying a past day control which day is requested.
pub fn fetch_timings_at(
    client: &reqwest::blocking::Client,
    coordinate: Coordinate,
    method: CalculationMethod,
    timestamp: i64,
) -> Result<PrayerTimeRecord, AladhanError> {
    let url = build_timings_url(coordinate, method, timestamp);

    let response = client
        .get(&url)
        .header("Accept", "application/json")
        .send()
        .map_err(|e| AladhanError::RequestFailed(e.to_string()))?;

    if !response.status().is_success() {
        return Err(AladhanError::HttpError(response.status().as_u16()));
    }

    let envelope: TimingsEnvelope = response
        .json()
        .map_err(|e| AladhanError::ParseError(e.to_string()))?;

    validate_envelope(envelope)
}

/// Checks the payload-level status code and data presence.
///
/// Split from the transport path so the validation rules are testable
/// without a live endpoint.
pub fn validate_envelope(envelope: TimingsEnvelope) -> Result<PrayerTimeRecord, AladhanError> {
    if envelope.code != PAYLOAD_SUCCESS_CODE {
        return Err(AladhanError::BadPayload(format!(
            "payload status code {} is not {}",
            envelope.code, PAYLOAD_SUCCESS_CODE
        )));
    }

    envelope
        .data
        .ok_or_else(|| AladhanError::BadPayload("payload has no data body".to_string()))
}

// ============================================================================
// Tests
// ============================================================================
