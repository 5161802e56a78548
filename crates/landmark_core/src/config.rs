//! Runtime configuration.
//!
//! # Responsibility
//! - Provide defaults for map bootstrap, list formatting and logging.
//! - Apply `LANDMARKS_*` environment overrides.
//!
//! # Invariants
//! - Blank override values are ignored.
//! - Invalid override values keep the default and log a warning.

use crate::logging::{default_log_level, normalize_level};
use crate::model::landmark::Position;
use crate::view::DEFAULT_COORDINATE_PRECISION;
use log::warn;
use std::path::PathBuf;

pub const ENV_DEFAULT_CENTER: &str = "LANDMARKS_DEFAULT_CENTER";
pub const ENV_DEFAULT_ZOOM: &str = "LANDMARKS_DEFAULT_ZOOM";
pub const ENV_COORD_PRECISION: &str = "LANDMARKS_COORD_PRECISION";
pub const ENV_LOG_LEVEL: &str = "LANDMARKS_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "LANDMARKS_LOG_DIR";

const DEFAULT_CENTER: Position = Position {
    lat: 43.2609,
    lng: -79.9192,
};
const DEFAULT_ZOOM: u8 = 13;
const MAX_ZOOM: u8 = 22;
const MAX_COORDINATE_PRECISION: usize = 12;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Map center used when geolocation is unavailable.
    pub default_center: Position,
    pub default_zoom: u8,
    /// Decimal digits shown for list coordinates.
    pub coordinate_precision: usize,
    pub log_level: &'static str,
    /// Rolling log directory; logging stays off when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_center: DEFAULT_CENTER,
            default_zoom: DEFAULT_ZOOM,
            coordinate_precision: DEFAULT_COORDINATE_PRECISION,
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Defaults overridden by process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden through `lookup`, keyed by the `ENV_*` names.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let value = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };

        if let Some(raw) = value(ENV_DEFAULT_CENTER) {
            match parse_center(&raw) {
                Some(center) => config.default_center = center,
                None => warn_invalid(ENV_DEFAULT_CENTER),
            }
        }
        if let Some(raw) = value(ENV_DEFAULT_ZOOM) {
            match raw.parse::<u8>() {
                Ok(zoom) if zoom <= MAX_ZOOM => config.default_zoom = zoom,
                _ => warn_invalid(ENV_DEFAULT_ZOOM),
            }
        }
        if let Some(raw) = value(ENV_COORD_PRECISION) {
            match raw.parse::<usize>() {
                Ok(precision) if precision <= MAX_COORDINATE_PRECISION => {
                    config.coordinate_precision = precision
                }
                _ => warn_invalid(ENV_COORD_PRECISION),
            }
        }
        if let Some(raw) = value(ENV_LOG_LEVEL) {
            match normalize_level(&raw) {
                Ok(level) => config.log_level = level,
                Err(_) => warn_invalid(ENV_LOG_LEVEL),
            }
        }
        if let Some(raw) = value(ENV_LOG_DIR) {
            config.log_dir = Some(PathBuf::from(raw));
        }

        config
    }
}

fn parse_center(raw: &str) -> Option<Position> {
    let (lat, lng) = raw.split_once(',')?;
    let lat = lat.trim().parse::<f64>().ok()?;
    let lng = lng.trim().parse::<f64>().ok()?;
    Position::new(lat, lng).ok()
}

fn warn_invalid(key: &str) {
    warn!("event=config_override module=config status=skipped key={key} reason=invalid_value");
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ENV_COORD_PRECISION, ENV_DEFAULT_CENTER, ENV_LOG_DIR, ENV_LOG_LEVEL};
    use crate::model::landmark::Position;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_use_five_digit_precision() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config.coordinate_precision, 5);
        assert_eq!(config.default_zoom, 13);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn overrides_are_applied_and_trimmed() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_DEFAULT_CENTER, " 51.5, -0.12 "),
            (ENV_COORD_PRECISION, "3"),
            (ENV_LOG_LEVEL, "WARNING"),
            (ENV_LOG_DIR, "/tmp/landmarks-logs"),
        ]));

        assert_eq!(config.default_center, Position::new(51.5, -0.12).unwrap());
        assert_eq!(config.coordinate_precision, 3);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/landmarks-logs")));
    }

    #[test]
    fn invalid_or_blank_overrides_keep_defaults() {
        let defaults = AppConfig::default();
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_DEFAULT_CENTER, "north pole"),
            (ENV_COORD_PRECISION, "-1"),
            (ENV_LOG_LEVEL, "verbose"),
            (ENV_LOG_DIR, "   "),
        ]));

        assert_eq!(config, defaults);
    }
}
