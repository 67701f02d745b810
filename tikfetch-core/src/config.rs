use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

use tikfetch_providers::{oembed, tiklydown, tikwm};

use crate::direct::DEFAULT_PROXY_BASE_URL;

/// Plain `PORT` variable honoured on top of the prefixed ones (PaaS convention)
pub const PORT_ENV: &str = "PORT";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served at `/`
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            static_dir: "public".to_string(),
        }
    }
}

/// Third-party endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    pub tiklydown_base_url: String,
    pub tikwm_base_url: String,
    pub oembed_base_url: String,
    /// Account name placed in the oEmbed page URL
    pub oembed_account: String,
    pub proxy_base_url: String,
    pub user_agent: String,
    pub timeout_seconds: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            tiklydown_base_url: tiklydown::DEFAULT_BASE_URL.to_string(),
            tikwm_base_url: tikwm::DEFAULT_BASE_URL.to_string(),
            oembed_base_url: oembed::DEFAULT_BASE_URL.to_string(),
            oembed_account: "tiktok".to_string(),
            proxy_base_url: DEFAULT_PROXY_BASE_URL.to_string(),
            user_agent: tiklydown::DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: 15,
        }
    }
}

impl UpstreamConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    pub file_path: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            file_path: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

/// Absolute `http`/`https` URL with a host
pub(crate) fn is_http_url(value: &str) -> bool {
    Url::parse(value)
        .is_ok_and(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
}

impl Config {
    /// Load configuration from multiple sources with priority:
    /// 1. `PORT` (highest priority, port only)
    /// 2. Environment variables (`TIKFETCH_SERVER__PORT`, ...)
    /// 3. Config file (if provided)
    /// 4. Defaults (lowest priority)
    pub fn load(config_file: Option<&str>) -> Result<Self, ConfigError> {
        Self::build(config_file, std::env::var(PORT_ENV).ok())
    }

    /// Load from environment variables only (for Docker/K8s)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(None)
    }

    /// Load from file path
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        Self::load(Some(path))
    }

    fn build(config_file: Option<&str>, port: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        if let Some(path) = config_file {
            if Path::new(path).exists() {
                builder = builder.add_source(File::with_name(path));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("TIKFETCH")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // An empty PORT counts as unset
        if let Some(port) = port.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
            let port: u16 = port
                .parse()
                .map_err(|e| ConfigError::Message(format!("{PORT_ENV}={port}: {e}")))?;
            builder = builder.set_override("server.port", i64::from(port))?;
        }

        builder.build()?.try_deserialize()
    }

    /// Get HTTP address
    #[must_use]
    pub fn http_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Check for misconfigurations, returning every problem found.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.server.port == 0 {
            errors.push("server.port must be non-zero".to_string());
        }
        if self.server.static_dir.trim().is_empty() {
            errors.push("server.static_dir must not be empty".to_string());
        }

        let upstream = &self.upstream;
        for (name, value) in [
            ("upstream.tiklydown_base_url", &upstream.tiklydown_base_url),
            ("upstream.tikwm_base_url", &upstream.tikwm_base_url),
            ("upstream.oembed_base_url", &upstream.oembed_base_url),
            ("upstream.proxy_base_url", &upstream.proxy_base_url),
        ] {
            if !is_http_url(value) {
                errors.push(format!("{name} must be an http(s) URL, got '{value}'"));
            }
        }
        if upstream.oembed_account.trim().is_empty() {
            errors.push("upstream.oembed_account must not be empty".to_string());
        }
        if upstream.timeout_seconds == 0 {
            errors.push("upstream.timeout_seconds must be greater than 0".to_string());
        }

        if crate::logging::parse_log_level(&self.logging.level).is_err() {
            errors.push(format!("logging.level '{}' is not valid", self.logging.level));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
