/// Service configuration.
///
/// Loaded from a TOML file next to the binary (`./salat.toml`). A missing
/// or unreadable file is not an error — every field has a default, so the
/// service runs usefully with no configuration at all.

use serde::{Deserialize, Serialize};
use std::fs;

use crate::logging::LogLevel;
use crate::methods::CalculationMethod;
use crate::model::Coordinate;

/// Default configuration file path, relative to the working directory.
pub const CONFIG_PATH: &str = "./salat.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Calculation method short name, e.g. "MWL" or "Makkah".
    /// Unknown names fall back to MWL.
    pub method: String,
    /// When false, the location capability reports denied and the service
    /// uses the fallback coordinate without any geolocation request.
    pub auto_location: bool,
    /// Fallback coordinate, used when location resolution fails.
    pub fallback_latitude: f64,
    pub fallback_longitude: f64,
    /// Minimum log level: "debug", "info", "warn", or "error".
    pub log_level: String,
    /// Optional file to append log entries to.
    pub log_file: Option<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            method: "MWL".to_string(),
            auto_location: true,
            // Mecca, same as location::FALLBACK_COORDINATE
            fallback_latitude: 21.4225,
            fallback_longitude: 39.8262,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl ServiceConfig {
    pub fn calculation_method(&self) -> CalculationMethod {
        CalculationMethod::from_name(&self.method).unwrap_or_default()
    }

    pub fn fallback_coordinate(&self) -> Coordinate {
        Coordinate {
            latitude: self.fallback_latitude,
            longitude: self.fallback_longitude,
        }
    }

    pub fn min_log_level(&self) -> LogLevel {
        LogLevel::from_config(&self.log_level)
    }
}

/// Loads configuration from `path`, defaulting on a missing file.
///
/// A file that exists but fails to parse also yields the defaults; the
/// parse error is reported on stderr since the logger is typically not
/// initialized yet at load time.
pub fn load_config(path: &str) -> ServiceConfig {
    match fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Ignoring unparseable config {}: {}", path, e);
                ServiceConfig::default()
            }
        },
        Err(_) => ServiceConfig::default(),
    }
}
