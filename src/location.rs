/// Location resolution with graceful degradation.
///
/// The resolver asks an injected `LocationProvider` for permission and a
/// current position, and substitutes the fixed Mecca coordinate whenever
/// either step fails. It never returns an error — every caller gets a
/// usable coordinate plus a flag saying whether it is the fallback.
///
/// # Provider injection
/// The provider is a trait object rather than a fixed global so tests can
/// drive every branch with stub providers and no real network or sensor
/// access. The production implementation is `IpGeolocator`.

use std::error::Error;
use std::time::Duration;

use crate::model::Coordinate;

// ---------------------------------------------------------------------------
// Provider contract
// ---------------------------------------------------------------------------

/// Outcome of a permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

/// Requested accuracy tier for a position read.
///
/// The service always asks for `Balanced`; the tier is part of the contract
/// so providers with a real accuracy knob can honor it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accuracy {
    Coarse,
    Balanced,
    Precise,
}

/// An external source of device position.
pub trait LocationProvider {
    /// Asks the host for the location capability. Both outcomes are
    /// normal results; transport or host failures are errors.
    fn request_permission(&self) -> Result<Permission, Box<dyn Error>>;

    /// Reads the current position. `budget` bounds how long the read may
    /// take; providers should give up rather than block past it.
    fn current_position(
        &self,
        accuracy: Accuracy,
        budget: Duration,
    ) -> Result<Coordinate, Box<dyn Error>>;
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Default fallback location: Mecca, Saudi Arabia.
pub const FALLBACK_COORDINATE: Coordinate = Coordinate {
    latitude: 21.4225,
    longitude: 39.8262,
};

/// Time budget for a single position read.
const POSITION_BUDGET: Duration = Duration::from_secs(10);

/// A resolved location and whether it came from the fallback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedLocation {
    pub coordinate: Coordinate,
    pub used_fallback: bool,
}

/// Resolves the caller's location, falling back to Mecca on any failure.
///
/// Never fails. Permission denial, permission request errors, and position
/// read errors all degrade to the fallback coordinate with
/// `used_fallback = true`. Both provider calls are idempotent to retry.
pub fn resolve_location(provider: &dyn LocationProvider) -> ResolvedLocation {
    resolve_location_with_fallback(provider, FALLBACK_COORDINATE)
}

/// Same as `resolve_location` but with a caller-supplied fallback, so a
/// configured override can stand in for Mecca.
pub fn resolve_location_with_fallback(
    provider: &dyn LocationProvider,
    fallback: Coordinate,
) -> ResolvedLocation {
    let fell_back = ResolvedLocation {
        coordinate: fallback,
        used_fallback: true,
    };

    match provider.request_permission() {
        Ok(Permission::Granted) => {}
        Ok(Permission::Denied) => {
            crate::logging::log_location_denied();
            return fell_back;
        }
        Err(e) => {
            crate::logging::log_location_failure("permission request", e.as_ref());
            return fell_back;
        }
    }

    match provider.current_position(Accuracy::Balanced, POSITION_BUDGET) {
        Ok(coordinate) => ResolvedLocation {
            coordinate,
            used_fallback: false,
        },
        Err(e) => {
            crate::logging::log_location_failure("position read", e.as_ref());
            fell_back
        }
    }
}

// ---------------------------------------------------------------------------
// IP-based provider
// ---------------------------------------------------------------------------

/// Production provider backed by the ip-api.com JSON endpoint.
///
/// A headless service has no GPS; coarse IP geolocation is the available
/// position source. "Permission" maps to the `auto_location` configuration
/// switch: when the user turns it off, the provider reports `Denied` and
/// the resolver degrades to the fallback without touching the network.
pub struct IpGeolocator {
    client: reqwest::blocking::Client,
    enabled: bool,
}

const GEO_URL: &str = "http://ip-api.com/json/?fields=status,lat,lon";

impl IpGeolocator {
    pub fn new(client: reqwest::blocking::Client, enabled: bool) -> Self {
        Self { client, enabled }
    }
}

impl LocationProvider for IpGeolocator {
    fn request_permission(&self) -> Result<Permission, Box<dyn Error>> {
        if self.enabled {
            Ok(Permission::Granted)
        } else {
            Ok(Permission::Denied)
        }
    }

    fn current_position(
        &self,
        _accuracy: Accuracy,
        budget: Duration,
    ) -> Result<Coordinate, Box<dyn Error>> {
        let response = self.client.get(GEO_URL).timeout(budget).send()?;

        if !response.status().is_success() {
            return Err(format!("geolocation HTTP error: {}", response.status()).into());
        }

        let json: serde_json::Value = response.json()?;

        if json.get("status").and_then(|s| s.as_str()) != Some("success") {
            return Err("geolocation lookup did not succeed".into());
        }

        let latitude = json
            .get("lat")
            .and_then(|v| v.as_f64())
            .ok_or("geolocation response missing lat")?;
        let longitude = json
            .get("lon")
            .and_then(|v| v.as_f64())
            .ok_or("geolocation response missing lon")?;

        Ok(Coordinate { latitude, longitude })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
