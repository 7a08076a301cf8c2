//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the site.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::routing::header_rule::{DEFAULT_MATCHER, PROJECT_ID, PROJECT_ID_HEADER};

/// Root configuration for the site server.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Request size limits.
    pub limits: LimitsConfig,

    /// Edge header rule for the integrations subtree.
    pub integrations: EdgeRuleConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,

    /// Connection establishment timeout towards the upstream in seconds.
    pub connect_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            request_secs: 30,
            connect_secs: 5,
        }
    }
}

/// Request size limits.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum body size in bytes.
    pub max_body_size: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_body_size: 2 * 1024 * 1024, // 2MB
        }
    }
}

/// Edge header rule configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct EdgeRuleConfig {
    /// Path pattern selecting annotated requests.
    pub matcher: String,

    /// Header inserted into matching requests.
    pub header_name: String,

    /// Value of the inserted header.
    pub header_value: String,

    /// Upstream that receives matched requests (e.g., "http://127.0.0.1:4000").
    /// Without one, matched requests continue to the local router.
    pub upstream: Option<String>,
}

impl Default for EdgeRuleConfig {
    fn default() -> Self {
        Self {
            matcher: DEFAULT_MATCHER.to_string(),
            header_name: PROJECT_ID_HEADER.to_string(),
            header_value: PROJECT_ID.to_string(),
            upstream: None,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.integrations.matcher, "/integrations/:path*");
        assert_eq!(config.integrations.header_name, "x-createxyz-project-id");
        assert_eq!(
            config.integrations.header_value,
            "1cf18f4a-35f7-4675-8e66-97a673c3ac19"
        );
        assert!(config.integrations.upstream.is_none());
    }

    #[test]
    fn test_partial_config() {
        let config: SiteConfig = toml::from_str(
            r#"
            [listener]
            bind_address = "127.0.0.1:3000"

            [integrations]
            upstream = "http://127.0.0.1:4000"
            "#,
        )
        .unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:3000");
        assert_eq!(
            config.integrations.upstream.as_deref(),
            Some("http://127.0.0.1:4000")
        );
        assert_eq!(config.integrations.matcher, DEFAULT_MATCHER);
        assert_eq!(config.timeouts.request_secs, 30);
    }
}
