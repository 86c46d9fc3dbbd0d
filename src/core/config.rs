//! Configuration management for the MCP server.
//!
//! The configuration is read once from the environment in `main` and then
//! shared read-only (`Arc<Config>`) with the API client, the usage tracker
//! and the transport.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};

/// Default upstream API base URL.
pub const DEFAULT_API_URL: &str = "https://mining-api.startmining.io";

/// Default public API key (rate limited, read-only).
pub const DEFAULT_PUBLIC_KEY: &str = "sm_mcp_public_2026_xKj8mNpL4qRsT9wV2yHz";

/// Path of the usage tracking endpoint, relative to the API base URL.
pub const TRACK_PATH: &str = "/v1/mcp/track";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Upstream market-data API configuration.
    pub api: ApiConfig,

    /// Usage analytics configuration.
    pub analytics: AnalyticsConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server, also sent with usage events.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Upstream API endpoint and credentials.
#[derive(Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every tool path is appended to.
    pub base_url: String,

    /// Value of the `X-API-Key` header. `None` sends no header.
    pub api_key: Option<String>,
}

/// Custom Debug implementation to redact the key from logs.
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Usage analytics configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Whether tool calls are reported to the tracking endpoint.
    pub enabled: bool,

    /// Explicit tracking URL. Defaults to `{api.base_url}/v1/mcp/track`.
    pub endpoint: Option<String>,
}

impl ApiConfig {
    /// Whether requests go out with the shared public key.
    pub fn uses_public_key(&self) -> bool {
        self.api_key.as_deref() == Some(DEFAULT_PUBLIC_KEY)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            api_key: Some(DEFAULT_PUBLIC_KEY.to_string()),
        }
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "startmining-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            api: ApiConfig::default(),
            analytics: AnalyticsConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Upstream settings use the `STARTMINING_` prefix, server and transport
    /// settings the `MCP_` prefix. Empty values count as unset.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Some(name) = non_empty_var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Some(level) = non_empty_var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(timestamps) = non_empty_var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = parse_flag(&timestamps);
        }

        config.transport = TransportConfig::from_env();

        if let Some(base_url) = non_empty_var("STARTMINING_API_URL") {
            config.api.base_url = base_url;
        }

        if let Some(api_key) = non_empty_var("STARTMINING_API_KEY") {
            config.api.api_key = Some(api_key);
        }

        if let Some(enabled) = non_empty_var("STARTMINING_ANALYTICS") {
            config.analytics.enabled = parse_flag(&enabled);
        }

        if let Some(endpoint) = non_empty_var("STARTMINING_TRACK_URL") {
            config.analytics.endpoint = Some(endpoint);
        }

        config
    }

    /// Resolved tracking URL, or `None` when analytics are disabled.
    pub fn track_url(&self) -> Option<String> {
        if !self.analytics.enabled {
            return None;
        }
        Some(match &self.analytics.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => format!("{}{}", self.api.base_url.trim_end_matches('/'), TRACK_PATH),
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn parse_flag(value: &str) -> bool {
    !matches!(value.to_lowercase().as_str(), "false" | "0" | "no" | "off")
}
