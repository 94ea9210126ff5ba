//! ferias configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::format::{Item, StrftimeItems};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_API_URL, DEFAULT_DATE_FORMAT, DEFAULT_TIMEOUT_SECS};
use crate::day_key::Clock;
use crate::error::{FeriasError, FeriasResult};

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

/// Configuration at ~/.config/ferias/config.toml
///
/// Every key can also be set through a `FERIAS_`-prefixed environment
/// variable (e.g. `FERIAS_API_URL`), which wins over the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeriasConfig {
    /// Base URL of the vacation service.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Clock used to decide the current day and month.
    #[serde(default)]
    pub clock: Clock,

    /// strftime format for dates shown in listings.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for FeriasConfig {
    fn default() -> Self {
        FeriasConfig {
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
            clock: Clock::default(),
            date_format: default_date_format(),
        }
    }
}

impl FeriasConfig {
    pub fn config_path() -> FeriasResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| FeriasError::Config("Could not determine config directory".into()))?
            .join("ferias");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default path and the environment.
    pub fn load() -> FeriasResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path` (optional) layered with `FERIAS_*` environment variables.
    pub fn load_from(path: &Path) -> FeriasResult<Self> {
        let config: FeriasConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("FERIAS").try_parsing(true))
            .build()
            .map_err(|e| FeriasError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| FeriasError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> FeriasResult<()> {
        url::Url::parse(&self.api_url)
            .map_err(|e| FeriasError::Config(format!("Invalid api_url '{}': {e}", self.api_url)))?;
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(FeriasError::Config(format!(
                "Invalid date_format '{}'",
                self.date_format
            )));
        }
        if self.timeout_secs == 0 {
            return Err(FeriasError::Config("timeout_secs must be greater than 0".into()));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> FeriasResult<()> {
        let contents = format!(
            "\
# ferias configuration

# Vacation service base URL:
# api_url = \"{DEFAULT_API_URL}\"

# Request timeout in seconds:
# timeout_secs = {DEFAULT_TIMEOUT_SECS}

# Which clock decides today's date (\"utc\" or \"local\"):
# clock = \"utc\"

# Date format for listings:
# date_format = \"{DEFAULT_DATE_FORMAT}\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                FeriasError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| FeriasError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = FeriasConfig::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.clock, Clock::Utc);
        assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);
    }

    #[test]
    fn test_file_values_are_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "api_url = \"http://localhost:3000\"\ntimeout_secs = 5\nclock = \"local\"\n",
        )
        .unwrap();

        let config = FeriasConfig::load_from(&path).unwrap();
        assert_eq!(config.api_url, "http://localhost:3000");
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.clock, Clock::Local);
    }

    #[test]
    fn test_default_config_file_loads_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        FeriasConfig::create_default_config(&path).unwrap();

        let config = FeriasConfig::load_from(&path).unwrap();
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_validate_rejects_bad_url_and_zero_timeout() {
        let bad_url = FeriasConfig {
            api_url: "not a url".into(),
            ..FeriasConfig::default()
        };
        assert!(bad_url.validate().is_err());

        let zero = FeriasConfig {
            timeout_secs: 0,
            ..FeriasConfig::default()
        };
        assert!(zero.validate().is_err());

        let bad_format = FeriasConfig {
            date_format: "%d/%m/%Q".into(),
            ..FeriasConfig::default()
        };
        assert!(bad_format.validate().is_err());
    }
}
