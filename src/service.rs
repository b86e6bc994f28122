/// The composed resolve-and-fetch operation.
///
/// One user-initiated refresh is a sequential chain: resolve the location
/// (never fails), then fetch timings for it (may fail). There is no
/// internal parallelism, no retry, and no coordination between concurrent
/// refreshes — the caller's last write wins.

use crate::ingest::aladhan;
use crate::location::{self, LocationProvider};
use crate::logging::{self, DataSource};
use crate::methods::CalculationMethod;
use crate::model::{Coordinate, FetchOutcome};

/// Fetches today's prayer times for the caller's current location, using
/// the fixed Mecca fallback when location resolution degrades.
///
/// Returns `None` when the fetch fails irrecoverably (transport error,
/// non-success status, or a malformed payload). Failures are logged, never
/// propagated — the caller's only signal is the absent outcome, which the
/// presentation layer turns into a retry prompt.
pub fn prayer_times_for_current_location(
    client: &reqwest::blocking::Client,
    provider: &dyn LocationProvider,
    method: CalculationMethod,
) -> Option<FetchOutcome> {
    prayer_times_with_fallback(client, provider, method, location::FALLBACK_COORDINATE)
}

/// Same as `prayer_times_for_current_location` with a caller-supplied
/// fallback coordinate (configuration override).
pub fn prayer_times_with_fallback(
    client: &reqwest::blocking::Client,
    provider: &dyn LocationProvider,
    method: CalculationMethod,
    fallback: Coordinate,
) -> Option<FetchOutcome> {
    let resolved = location::resolve_location_with_fallback(provider, fallback);

    if resolved.used_fallback {
        logging::info(
            DataSource::Geo,
            None,
            "location unavailable, fetching timings for the fallback location",
        );
    }

    match aladhan::fetch_timings(client, resolved.coordinate, method) {
        Ok(record) => Some(FetchOutcome {
            record,
            used_fallback: resolved.used_fallback,
        }),
        Err(e) => {
            logging::log_fetch_failure("timings fetch", &e);
            None
        }
    }
}
