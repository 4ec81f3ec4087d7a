use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, time::Duration};

pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Endpoints and HTTP settings for a lookup.
///
/// Example TOML:
/// ```toml
/// forecast_url = "http://localhost:8080/v1/forecast"
/// timeout_secs = 5
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub geocoding_url: String,
    pub forecast_url: String,
    /// Language for place names returned by the geocoder.
    pub language: String,
    /// Per-request timeout, applied to both HTTP calls.
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            geocoding_url: DEFAULT_GEOCODING_URL.to_string(),
            forecast_url: DEFAULT_FORECAST_URL.to_string(),
            language: "en".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Config {
    /// Load config from an explicit TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(contents)?;
        Ok(cfg)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Shared HTTP client for both services.
    pub fn http_client(&self) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.timeout())
            .build()
            .context("Failed to build HTTP client")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_open_meteo() {
        let cfg = Config::default();
        assert_eq!(cfg.geocoding_url, DEFAULT_GEOCODING_URL);
        assert_eq!(cfg.forecast_url, DEFAULT_FORECAST_URL);
        assert_eq!(cfg.language, "en");
        assert_eq!(cfg.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg = Config::from_toml("timeout_secs = 3\nforecast_url = \"http://localhost/f\"\n")
            .expect("valid toml");

        assert_eq!(cfg.timeout_secs, 3);
        assert_eq!(cfg.forecast_url, "http://localhost/f");
        assert_eq!(cfg.geocoding_url, DEFAULT_GEOCODING_URL);
    }

    #[test]
    fn row_limits_are_not_configurable() {
        let cfg = Config::from_toml("hourly_limit = 48\ndaily_limit = 0\n").expect("valid toml");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::from_toml("timeout_secs = \"soon\"").is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Config::load(Path::new("/definitely/not/here/skycast.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
