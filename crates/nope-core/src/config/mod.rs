//! Configuration data structures.
//!
//! `AppConfig` is plain data: defaults live in [`Default`], and
//! [`AppConfig::from_toml`] overlays whatever the file provides. Range checks
//! belong to the code that consumes a value, not to this module.

use std::path::PathBuf;

pub const DEFAULT_UPSTREAM_URL: &str = "https://api.nope.rs/";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Application configuration DTO
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address the web server binds to
    pub server_host: String,

    /// Web server port
    pub server_port: u16,

    /// Base URL of the Nope API
    pub upstream_url: String,

    /// Per-request timeout for outbound calls, in milliseconds
    pub upstream_timeout_ms: u64,

    /// Proxy endpoint the terminal card fetches from
    pub card_proxy_url: String,

    /// Directory for rolling log files; stderr only when unset
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_HOST.to_string(),
            server_port: DEFAULT_PORT,
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            upstream_timeout_ms: DEFAULT_TIMEOUT_MS,
            card_proxy_url: format!("http://127.0.0.1:{DEFAULT_PORT}/api/nope"),
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Create AppConfig from a TOML value, keeping defaults for missing keys.
    ///
    /// # Errors
    ///
    /// Returns an error when a present key has the wrong type or the port
    /// does not fit in a `u16`.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(host) = str_at(toml_value, "server", "host")? {
            config.server_host = host;
        }
        if let Some(port) = int_at(toml_value, "server", "port")? {
            config.server_port = u16::try_from(port)
                .map_err(|_| anyhow::anyhow!("server.port out of range: {port}"))?;
        }
        if let Some(url) = str_at(toml_value, "upstream", "url")? {
            config.upstream_url = url;
        }
        if let Some(timeout) = int_at(toml_value, "upstream", "timeout_ms")? {
            config.upstream_timeout_ms = u64::try_from(timeout)
                .map_err(|_| anyhow::anyhow!("upstream.timeout_ms must be positive: {timeout}"))?;
        }
        if let Some(url) = str_at(toml_value, "card", "proxy_url")? {
            config.card_proxy_url = url;
        }
        if let Some(dir) = str_at(toml_value, "logging", "dir")? {
            config.log_dir = Some(PathBuf::from(dir));
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn str_at(value: &toml::Value, section: &str, key: &str) -> anyhow::Result<Option<String>> {
    match value.get(section).and_then(|s| s.get(key)) {
        None => Ok(None),
        Some(v) => v
            .as_str()
            .map(|s| Some(s.to_string()))
            .ok_or_else(|| anyhow::anyhow!("{section}.{key} must be a string")),
    }
}

fn int_at(value: &toml::Value, section: &str, key: &str) -> anyhow::Result<Option<i64>> {
    match value.get(section).and_then(|s| s.get(key)) {
        None => Ok(None),
        Some(v) => v
            .as_integer()
            .map(Some)
            .ok_or_else(|| anyhow::anyhow!("{section}.{key} must be an integer")),
    }
}
