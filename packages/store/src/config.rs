//! # Client configuration — `financio.toml`
//!
//! Where the app finds its two external collaborators: the REST gateway and
//! the identity provider. Compiled-in defaults point at a local dev stack;
//! native targets may override them with a `financio.toml` in the platform
//! config directory. The web build always uses the defaults baked in at
//! compile time.
//!
//! ```toml
//! [gateway]
//! base_url = "http://localhost:8000"
//! timeout_secs = 100
//!
//! [identity]
//! base_url = "http://localhost:9099"
//! ```

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancioConfig {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub identity: IdentityConfig,
}

/// REST gateway settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_gateway_url")]
    pub base_url: String,
    /// Fixed client-side request timeout. A hung request aborts and surfaces
    /// as a generic network failure.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Identity provider settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IdentityConfig {
    #[serde(default = "default_identity_url")]
    pub base_url: String,
}

fn default_gateway_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    100
}

fn default_identity_url() -> String {
    "http://localhost:9099".to_string()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: default_gateway_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            base_url: default_identity_url(),
        }
    }
}

impl FinancioConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "financio.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load the effective configuration for this platform.
    pub fn load() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            let path = dirs::config_dir()
                .unwrap_or_else(|| std::path::PathBuf::from("."))
                .join("financio")
                .join(Self::filename());
            if let Ok(raw) = std::fs::read_to_string(&path) {
                match Self::from_toml(&raw) {
                    Ok(config) => return config,
                    Err(e) => tracing::warn!("ignoring invalid {}: {e}", Self::filename()),
                }
            }
        }
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_the_default_config() {
        let config = FinancioConfig::from_toml("").unwrap();
        assert_eq!(config, FinancioConfig::default());
        assert_eq!(config.gateway.timeout_secs, 100);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config = FinancioConfig::from_toml(
            r#"
            [gateway]
            base_url = "https://api.example.com"
            "#,
        )
        .unwrap();
        assert_eq!(config.gateway.base_url, "https://api.example.com");
        assert_eq!(config.gateway.timeout_secs, 100);
        assert_eq!(config.identity, IdentityConfig::default());
    }

    #[test]
    fn round_trips_through_toml() {
        let mut config = FinancioConfig::default();
        config.gateway.timeout_secs = 30;
        let raw = config.to_toml().unwrap();
        assert_eq!(FinancioConfig::from_toml(&raw).unwrap(), config);
    }
}
