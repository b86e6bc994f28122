/// CLI front end for the prayer times service.
///
/// Thin presentation only: loads config, runs the composed
/// resolve-and-fetch operation once, and prints the day's timings with the
/// next prayer highlighted. All recoverable failures are handled inside
/// the library; the only failure surfaced here is an absent outcome, which
/// becomes a retry hint and a nonzero exit.

use std::process;
use std::time::Duration;

use salat_service::config;
use salat_service::location::IpGeolocator;
use salat_service::logging::{self, DataSource};
use salat_service::model::FetchOutcome;
use salat_service::schedule::format::format_12_hour;
use salat_service::schedule::next::{self, PRAYER_ORDER};
use salat_service::service;

fn main() {
    let config = config::load_config(config::CONFIG_PATH);
    logging::init_logger(config.min_log_level(), config.log_file.as_deref(), false);

    let client = match reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to build HTTP client: {}", e);
            process::exit(1);
        }
    };

    let provider = IpGeolocator::new(client.clone(), config.auto_location);
    let method = config.calculation_method();

    logging::debug(
        DataSource::System,
        None,
        &format!("fetching timings using {}", method),
    );

    match service::prayer_times_with_fallback(
        &client,
        &provider,
        method,
        config.fallback_coordinate(),
    ) {
        Some(outcome) => print_report(&outcome),
        None => {
            eprintln!("Unable to fetch prayer times. Please try again later.");
            process::exit(1);
        }
    }
}

fn print_report(outcome: &FetchOutcome) {
    let record = &outcome.record;
    let hijri = &record.date.hijri;

    println!();
    println!("Prayer Times — {}", record.date.readable);
    println!("{} {} {}", hijri.date, hijri.month.en, hijri.year);
    println!("───────────────────────────────────────");

    if outcome.used_fallback {
        println!("⚠ Location unavailable — showing times for Mecca.");
        println!("  Enable location access for accurate times.");
        println!("───────────────────────────────────────");
    }

    let next = match next::next_prayer(&record.timings) {
        Ok(next) => Some(next),
        Err(e) => {
            logging::warn(
                DataSource::System,
                None,
                &format!("could not determine next prayer: {}", e),
            );
            None
        }
    };

    if let Some(ref next) = next {
        let display = format_12_hour(&next.time).unwrap_or_else(|_| next.time.clone());
        let day = if next.tomorrow { " (tomorrow)" } else { "" };
        println!("Next prayer: {} at {}{}", next.prayer, display, day);
        println!("───────────────────────────────────────");
    }

    for prayer in PRAYER_ORDER {
        let time = prayer.timing_in(&record.timings);
        let display = format_12_hour(time).unwrap_or_else(|_| time.to_string());
        let marker = match next {
            Some(ref n) if !n.tomorrow && n.prayer == prayer => "▸",
            _ => " ",
        };
        println!("  {} {:<8} {:>9}", marker, prayer.name(), display);
    }

    println!("───────────────────────────────────────");
    println!(
        "Lat: {:.4}, Lon: {:.4}  ({})",
        record.meta.latitude, record.meta.longitude, record.meta.timezone
    );
}
