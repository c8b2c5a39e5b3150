//! Configuration module
//!
//! Settings come from a TOML file. Every section and key is optional and
//! falls back to the defaults below; a missing file means "all defaults".

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::booking::model::DEFAULT_MAX_DURATION_HOURS;
use crate::domain::room::DEFAULT_ROOMS;
use crate::domain::{BookingPolicy, RoomRegistry};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// `<config dir>/room-booking/config.toml`, or `./config.toml` when the
/// platform has no config directory.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .map(|dir| dir.join("room-booking").join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("config.toml"))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub booking: BookingConfig,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seconds to wait for in-flight requests on shutdown
    pub shutdown_timeout: u64,
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            shutdown_timeout: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    /// Bookable rooms, in display order
    pub rooms: Vec<String>,
    pub max_duration_hours: u32,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            rooms: DEFAULT_ROOMS.iter().map(|r| r.to_string()).collect(),
            max_duration_hours: DEFAULT_MAX_DURATION_HOURS as u32,
        }
    }
}

impl BookingConfig {
    pub fn registry(&self) -> RoomRegistry {
        RoomRegistry::new(self.rooms.iter().cloned())
    }

    pub fn policy(&self) -> BookingPolicy {
        BookingPolicy::with_max_hours(i64::from(self.max_duration_hours))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Allowed origins; `"*"` allows any
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    pub level: String,
    /// `text` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

impl AppConfig {
    /// Load from `path`. A file that does not exist yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.booking.max_duration_hours == 0 {
            return Err(ConfigError::Invalid(
                "booking.max_duration_hours must be at least 1".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for room in &self.booking.rooms {
            if room.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "booking.rooms must not contain empty names".to_string(),
                ));
            }
            if !seen.insert(room.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "booking.rooms lists {:?} more than once",
                    room
                )));
            }
        }

        match self.logging.format.to_lowercase().as_str() {
            "text" | "json" => Ok(()),
            other => Err(ConfigError::Invalid(format!(
                "logging.format must be \"text\" or \"json\", got {:?}",
                other
            ))),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_service_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.booking.registry(), RoomRegistry::default());
        assert_eq!(config.booking.policy(), BookingPolicy::default());
        assert_eq!(config.server.address(), "0.0.0.0:8000");
        assert_eq!(config.cors.allowed_origins, vec!["http://localhost:3000"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [booking]
            rooms = ["Lab", "Studio"]

            [server]
            port = 9090
            "#,
        )
        .unwrap();

        assert_eq!(config.booking.rooms, vec!["Lab", "Studio"]);
        assert_eq!(config.booking.max_duration_hours, 3);
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("room-booking-no-such-dir/config.toml");
        assert_eq!(AppConfig::load(&path).unwrap(), AppConfig::default());
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let path = std::env::temp_dir().join(format!(
            "room-booking-malformed-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "[booking\nrooms = 1").unwrap();
        let err = AppConfig::load(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn zero_duration_is_invalid() {
        let mut config = AppConfig::default();
        config.booking.max_duration_hours = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn duplicate_or_blank_rooms_are_invalid() {
        let mut config = AppConfig::default();
        config.booking.rooms = vec!["Lab".into(), "Lab".into()];
        assert!(config.validate().is_err());

        config.booking.rooms = vec!["Lab".into(), "  ".into()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn unknown_log_format_is_invalid() {
        let mut config = AppConfig::default();
        config.logging.format = "xml".into();
        assert!(config.validate().is_err());
        config.logging.format = "JSON".into();
        assert!(config.validate().is_ok());
    }
}
