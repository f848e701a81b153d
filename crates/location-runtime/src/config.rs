//! # Runtime Configuration
//!
//! One TOML document with a section per subsystem, then `GL_*` environment
//! overrides for the deployment-specific values.
//!
//! ```toml
//! [api]
//! base_url = "https://api.example.com"
//! timeout_ms = 10000
//!
//! [storage]
//! cache_path = "./data/location.json"
//!
//! [zones]
//! window_minutes = 60
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use gl_01_address_search::AddressSearchConfig;
use gl_02_address_validation::ValidationConfig;
use gl_03_zone_matching::ZoneMatchingConfig;
use gl_04_location_cache::LocationCacheConfig;
use gl_05_location_sync::SyncConfig;
use gl_06_address_entry::AddressEntryConfig;
use shared_types::Coordinates;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Cannot read config file {path:?}: {message}")]
    Read {
        /// File path
        path: PathBuf,
        /// I/O message
        message: String,
    },

    /// Config file is not valid TOML for [`RuntimeConfig`].
    #[error("Invalid config: {0}")]
    Parse(String),

    /// An override or field holds an unusable value.
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue {
        /// Setting name
        key: String,
        /// Offending value
        value: String,
    },
}

/// Complete runtime configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Remote API.
    pub api: ApiConfig,
    /// Local storage.
    pub storage: StorageConfig,
    /// Device position.
    pub device: DeviceConfig,
    /// Address search (01).
    pub search: AddressSearchConfig,
    /// Address validation (02).
    pub validation: ValidationConfig,
    /// Zone matching (03).
    pub zones: ZoneMatchingConfig,
    /// Location cache (04).
    pub cache: LocationCacheConfig,
    /// Location sync (05).
    pub sync: SyncConfig,
    /// Address entry (06).
    pub entry: AddressEntryConfig,
}

/// Remote API configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to.
    pub base_url: String,
    /// Per-request timeout; expiry is a transport failure.
    pub timeout_ms: u64,
    /// Bearer token for the account endpoints; unset means signed out.
    pub auth_token: Option<String>,
    /// Account identifier reported with the sign-in.
    pub user_id: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_ms: 10_000,
            auth_token: None,
            user_id: None,
        }
    }
}

/// Storage configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// File backing the location cache.
    pub cache_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            cache_path: PathBuf::from("./data/location.json"),
        }
    }
}

/// Fixed device position, for hosts without positioning hardware.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Latitude.
    pub latitude: Option<f64>,
    /// Longitude.
    pub longitude: Option<f64>,
}

impl RuntimeConfig {
    /// Load from `path` (defaults when `None`), then apply the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                Self::from_toml(&text)?
            }
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document; missing sections take their defaults.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply overrides.
    ///
    /// - `GL_API_URL`, `GL_API_TIMEOUT_MS`
    /// - `GL_AUTH_TOKEN`, `GL_USER_ID`
    /// - `GL_CACHE_PATH`
    /// - `GL_DEVICE_LAT`, `GL_DEVICE_LON`
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("GL_API_URL") {
            self.api.base_url = url;
        }
        if let Some(raw) = lookup("GL_API_TIMEOUT_MS") {
            self.api.timeout_ms = parse_value("GL_API_TIMEOUT_MS", &raw)?;
        }
        if let Some(token) = lookup("GL_AUTH_TOKEN") {
            self.api.auth_token = Some(token).filter(|t| !t.trim().is_empty());
        }
        if let Some(user) = lookup("GL_USER_ID") {
            self.api.user_id = Some(user);
        }
        if let Some(path) = lookup("GL_CACHE_PATH") {
            self.storage.cache_path = PathBuf::from(path);
        }
        if let Some(raw) = lookup("GL_DEVICE_LAT") {
            self.device.latitude = Some(parse_value("GL_DEVICE_LAT", &raw)?);
        }
        if let Some(raw) = lookup("GL_DEVICE_LON") {
            self.device.longitude = Some(parse_value("GL_DEVICE_LON", &raw)?);
        }
        Ok(())
    }

    /// Reject values the runtime cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.api.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                key: "api.base_url".into(),
                value: self.api.base_url.clone(),
            });
        }
        if self.api.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                key: "api.timeout_ms".into(),
                value: "0".into(),
            });
        }
        match (self.device.latitude, self.device.longitude) {
            (None, None) => Ok(()),
            (Some(lat), Some(lon)) if Coordinates::new(lat, lon).is_valid() => Ok(()),
            (lat, lon) => Err(ConfigError::InvalidValue {
                key: "device".into(),
                value: format!("{:?}, {:?}", lat, lon),
            }),
        }
    }

    /// Configured device position, if both parts are set.
    pub fn device_position(&self) -> Option<Coordinates> {
        match (self.device.latitude, self.device.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
            _ => None,
        }
    }

    /// Create config for testing, caching under `cache_path`.
    pub fn for_testing(cache_path: impl Into<PathBuf>) -> Self {
        Self {
            storage: StorageConfig {
                cache_path: cache_path.into(),
            },
            api: ApiConfig {
                base_url: "http://127.0.0.1:9".to_string(),
                timeout_ms: 500,
                ..ApiConfig::default()
            },
            ..Self::default()
        }
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = RuntimeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.entry.debounce_ms, 300);
        assert_eq!(config.zones.window_minutes, 60);
        assert_eq!(config.device_position(), None);
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = RuntimeConfig::from_toml(
            r#"
            [api]
            base_url = "https://api.example.com"

            [zones]
            window_minutes = 45
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "https://api.example.com");
        assert_eq!(config.api.timeout_ms, 10_000);
        assert_eq!(config.zones.window_minutes, 45);
        assert!(config.sync.reconcile_on_sign_in);
    }

    #[test]
    fn test_bad_toml() {
        assert!(matches!(
            RuntimeConfig::from_toml("[api\nbase_url = 1"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = RuntimeConfig::default();
        config
            .apply_overrides(lookup_from(&[
                ("GL_API_URL", "https://staging.example.com"),
                ("GL_API_TIMEOUT_MS", "2500"),
                ("GL_AUTH_TOKEN", "tok"),
                ("GL_DEVICE_LAT", "37.7793"),
                ("GL_DEVICE_LON", "-122.4193"),
            ]))
            .unwrap();

        assert_eq!(config.api.base_url, "https://staging.example.com");
        assert_eq!(config.api.timeout_ms, 2500);
        assert_eq!(config.api.auth_token.as_deref(), Some("tok"));
        assert_eq!(
            config.device_position(),
            Some(Coordinates::new(37.7793, -122.4193))
        );
    }

    #[test]
    fn test_blank_token_means_signed_out() {
        let mut config = RuntimeConfig::default();
        config
            .apply_overrides(lookup_from(&[("GL_AUTH_TOKEN", "  ")]))
            .unwrap();
        assert_eq!(config.api.auth_token, None);
    }

    #[test]
    fn test_unparsable_override() {
        let mut config = RuntimeConfig::default();
        let err = config
            .apply_overrides(lookup_from(&[("GL_API_TIMEOUT_MS", "soon")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key, .. } if key == "GL_API_TIMEOUT_MS"));
    }

    #[test]
    fn test_half_device_position_rejected() {
        let mut config = RuntimeConfig::default();
        config.device.latitude = Some(37.0);
        assert!(config.validate().is_err());

        config.device.longitude = Some(-222.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_base_url_scheme_required() {
        let mut config = RuntimeConfig::default();
        config.api.base_url = "api.example.com".into();
        assert!(config.validate().is_err());
    }
}
