//! Prayer times service core.
//!
//! Resolves a user location (degrading to a fixed Mecca fallback), fetches
//! the day's Islamic prayer timings from the AlAdhan API, and computes the
//! next upcoming prayer relative to the current clock.

pub mod config;
pub mod ingest;
pub mod location;
pub mod logging;
pub mod methods;
pub mod model;
pub mod schedule;
pub mod service;
