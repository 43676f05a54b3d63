use serde::{ Deserialize, Serialize };
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Base URL used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Environment variable that overrides the base URL
pub const BASE_URL_ENV: &str = "FACTWATCH_API_URL";

/// Default interval between poll ticks
pub const DEFAULT_POLL_PERIOD: Duration = Duration::from_millis(15_000);

/// Default number of evidence links shown per verification
pub const DEFAULT_EVIDENCE_PREVIEW: usize = 3;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Poll period must be greater than zero")]
    InvalidPollPeriod,
}

/// On-disk shape of the configuration file. Every field is optional.
#[derive(Debug, Default, Serialize, Deserialize, Clone)]
pub struct ConfigFile {
    /// Base URL of the fact-checking API
    pub base_url: Option<String>,

    /// Poll period in milliseconds
    pub poll_period_ms: Option<u64>,

    /// How many evidence links to show per verification
    pub evidence_preview: Option<usize>,
}

impl ConfigFile {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: ConfigFile = serde_yaml::from_str(&contents)?;
        Ok(config)
    }
}

/// Client configuration, resolved once at startup and handed to each component
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub poll_period: Duration,
    pub evidence_preview: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            poll_period: DEFAULT_POLL_PERIOD,
            evidence_preview: DEFAULT_EVIDENCE_PREVIEW,
        }
    }
}

impl ClientConfig {
    /// Resolve the configuration from an optional file and the process environment.
    ///
    /// Later sources win: defaults, then the file, then `FACTWATCH_API_URL`.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => {
                log::debug!("Loading configuration from {}", path.display());
                Some(ConfigFile::from_file(path)?)
            }
            None => None,
        };
        let env_url = std::env::var(BASE_URL_ENV).ok();
        Self::from_sources(file, env_url)
    }

    /// Merge the given sources over the defaults and validate the result
    pub fn from_sources(
        file: Option<ConfigFile>,
        env_url: Option<String>
    ) -> Result<Self, ConfigError> {
        let mut config = ClientConfig::default();

        if let Some(file) = file {
            if let Some(url) = file.base_url {
                config.base_url = url;
            }
            if let Some(ms) = file.poll_period_ms {
                config.poll_period = Duration::from_millis(ms);
            }
            if let Some(n) = file.evidence_preview {
                config.evidence_preview = n;
            }
        }

        if let Some(url) = env_url.filter(|u| !u.trim().is_empty()) {
            log::debug!("Using API base URL from {}", BASE_URL_ENV);
            config.base_url = url;
        }

        config.validate()?;
        Ok(config)
    }

    /// Replace the base URL, re-validating it
    pub fn with_base_url(mut self, url: impl Into<String>) -> Result<Self, ConfigError> {
        self.base_url = url.into();
        self.validate()?;
        Ok(self)
    }

    /// Replace the poll period, re-validating it
    pub fn with_poll_period(mut self, period: Duration) -> Result<Self, ConfigError> {
        self.poll_period = period;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let parsed = reqwest::Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ConfigError::InvalidBaseUrl {
                url: self.base_url.clone(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }
        if self.poll_period.is_zero() {
            return Err(ConfigError::InvalidPollPeriod);
        }
        Ok(())
    }
}
