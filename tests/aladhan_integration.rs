/// Integration tests against the live AlAdhan and ip-api endpoints.
///
/// These verify that the configured remote sources are reachable and still
/// return payloads our parsers accept.
///
/// Prerequisites:
/// - Internet access to api.aladhan.com and ip-api.com
///
/// The tests are `#[ignore]`d so an offline `cargo test` stays green.
/// Run with: cargo test --test aladhan_integration -- --ignored

use std::time::Duration;

use salat_service::ingest::aladhan;
use salat_service::location::{Accuracy, IpGeolocator, LocationProvider};
use salat_service::methods::CalculationMethod;
use salat_service::model::Coordinate;
use salat_service::schedule::next::minutes_since_midnight;

const MECCA: Coordinate = Coordinate {
    latitude: 21.4225,
    longitude: 39.8262,
};

fn test_client() -> reqwest::blocking::Client {
    reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .expect("client builder should not fail")
}

#[test]
#[ignore]
fn test_live_timings_fetch_for_mecca() {
    let client = test_client();

    let record = aladhan::fetch_timings(&client, MECCA, CalculationMethod::Mwl)
        .expect("live AlAdhan fetch should succeed");

    // Every timing must be a parseable HH:MM value.
    for time in [
        &record.timings.fajr,
        &record.timings.sunrise,
        &record.timings.dhuhr,
        &record.timings.asr,
        &record.timings.maghrib,
        &record.timings.isha,
    ] {
        minutes_since_midnight(time)
            .unwrap_or_else(|e| panic!("live timing '{}' failed to parse: {}", time, e));
    }

    assert!(!record.date.readable.is_empty());
    assert!(!record.date.hijri.year.is_empty());
    assert!(!record.meta.timezone.is_empty());
    assert!((record.meta.latitude - MECCA.latitude).abs() < 0.1);
}

#[test]
#[ignore]
fn test_live_fetch_honors_method_parameter() {
    let client = test_client();

    let mwl = aladhan::fetch_timings(&client, MECCA, CalculationMethod::Mwl)
        .expect("MWL fetch should succeed");
    let jafari = aladhan::fetch_timings(&client, MECCA, CalculationMethod::Jafari)
        .expect("Jafari fetch should succeed");

    // Different conventions compute Fajr from different solar angles, so
    // the two requests should normally disagree on at least one timing.
    assert!(
        mwl.timings.fajr != jafari.timings.fajr || mwl.timings.isha != jafari.timings.isha,
        "MWL and Jafari produced identical Fajr and Isha — method parameter may be ignored"
    );
}

#[test]
#[ignore]
fn test_live_ip_geolocation_returns_plausible_coordinate() {
    let geo = IpGeolocator::new(test_client(), true);

    let position = geo
        .current_position(Accuracy::Balanced, Duration::from_secs(10))
        .expect("live IP geolocation should succeed");

    assert!((-90.0..=90.0).contains(&position.latitude));
    assert!((-180.0..=180.0).contains(&position.longitude));
}

#[test]
#[ignore]
fn test_timed_out_request_yields_request_failed() {
    // A client with a tiny timeout must map the failure to RequestFailed
    // rather than panicking or hanging.
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_millis(200))
        .build()
        .expect("client builder should not fail");

    // fetch_timings always targets the production URL, so the transport
    // failure path is exercised via the tiny timeout.
    let result = aladhan::fetch_timings(&client, MECCA, CalculationMethod::Mwl);
    if let Err(e) = result {
        // Either a timeout (RequestFailed) or, on a fast network, a real
        // response; both are acceptable here.
        assert!(
            matches!(e, salat_service::model::AladhanError::RequestFailed(_)),
            "unexpected error shape: {:?}",
            e
        );
    }
}
