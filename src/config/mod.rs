// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for the Kasplex client
//!
//! The client needs very little: which network to talk to and which API
//! version segment to put in front of every path. A request timeout, a base
//! URL override (for local indexers and mocks) and body-size logging are
//! available for callers that need them.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use kasplex::{KasplexConfig, Network};
//!
//! let config = KasplexConfig::new(Network::Mainnet);
//! assert_eq!(config.base_url(), "https://api.kasplex.org");
//! assert_eq!(config.api_version(), "v1");
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use kasplex::{KasplexConfigBuilder, Network};
//! use std::time::Duration;
//!
//! let config = KasplexConfigBuilder::new(Network::Testnet)
//!     .api_version("v2")
//!     .timeout(Duration::from_secs(10))
//!     .build();
//!
//! assert_eq!(config.base_url(), "https://tn10api.kasplex.org");
//! assert_eq!(config.api_version(), "v2");
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub mod constants;

use constants::{DEFAULT_API_VERSION, MAINNET_URL, TESTNET_URL};

/// Kaspa network served by a Kasplex indexer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Network {
    /// Production network
    #[default]
    Mainnet,
    /// Test network (testnet-10)
    Testnet,
}

impl Network {
    /// Fixed base URL of the indexer for this network
    pub const fn base_url(self) -> &'static str {
        match self {
            Network::Mainnet => MAINNET_URL,
            Network::Testnet => TESTNET_URL,
        }
    }

    /// Lowercase name of the network
    pub const fn as_str(self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown network name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown network '{0}' (expected mainnet or testnet)")]
pub struct UnknownNetwork(pub String);

impl FromStr for Network {
    type Err = UnknownNetwork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" | "production" => Ok(Network::Mainnet),
            "testnet" | "test" => Ok(Network::Testnet),
            _ => Err(UnknownNetwork(s.to_string())),
        }
    }
}

/// Configuration for a [`KasplexClient`](crate::KasplexClient)
///
/// All fields are read-only once the client is built. Use
/// [`KasplexConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KasplexConfig {
    /// Network whose indexer is queried
    pub network: Network,

    /// API version path segment
    /// Default: "v1"
    pub api_version: String,

    /// Replaces the network's base URL when set
    pub base_url_override: Option<String>,

    /// Timeout applied by the HTTP transport to each request
    /// Default: None (whatever the transport does)
    pub timeout: Option<Duration>,

    /// Log response body sizes at DEBUG level
    pub log_bodies: bool,
}

impl Default for KasplexConfig {
    fn default() -> Self {
        Self::new(Network::default())
    }
}

impl KasplexConfig {
    /// Create a config for `network` with the default API version
    pub fn new(network: Network) -> Self {
        Self {
            network,
            api_version: DEFAULT_API_VERSION.to_string(),
            base_url_override: None,
            timeout: None,
            log_bodies: false,
        }
    }

    /// Base URL every request path is appended to
    ///
    /// Returns the override if one is configured, otherwise the fixed URL of
    /// the network.
    pub fn base_url(&self) -> &str {
        self.base_url_override
            .as_deref()
            .unwrap_or_else(|| self.network.base_url())
    }

    /// API version path segment
    pub fn api_version(&self) -> &str {
        &self.api_version
    }
}

/// Fluent builder for [`KasplexConfig`]
#[derive(Debug, Clone)]
pub struct KasplexConfigBuilder {
    config: KasplexConfig,
}

impl KasplexConfigBuilder {
    /// Start from the defaults for `network`
    pub fn new(network: Network) -> Self {
        Self {
            config: KasplexConfig::new(network),
        }
    }

    /// Set the API version segment
    ///
    /// An empty string keeps the default version.
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        let version = version.into();
        if !version.is_empty() {
            self.config.api_version = version;
        }
        self
    }

    /// Point the client at a different indexer, e.g. a local instance
    ///
    /// Trailing slashes are stripped so paths join cleanly.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.config.base_url_override = Some(url.trim_end_matches('/').to_string());
        self
    }

    /// Set the per-request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Log response body sizes
    pub fn log_bodies(mut self, enabled: bool) -> Self {
        self.config.log_bodies = enabled;
        self
    }

    pub fn build(self) -> KasplexConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_base_urls() {
        assert_eq!(Network::Mainnet.base_url(), "https://api.kasplex.org");
        assert_eq!(Network::Testnet.base_url(), "https://tn10api.kasplex.org");
    }

    #[test]
    fn test_network_from_str() {
        assert_eq!("mainnet".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!("Production".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!(" testnet ".parse::<Network>().unwrap(), Network::Testnet);
        assert_eq!("test".parse::<Network>().unwrap(), Network::Testnet);

        let err = "devnet".parse::<Network>().unwrap_err();
        assert_eq!(err, UnknownNetwork("devnet".to_string()));
    }

    #[test]
    fn test_network_display_round_trips() {
        for network in [Network::Mainnet, Network::Testnet] {
            assert_eq!(network.to_string().parse::<Network>().unwrap(), network);
        }
    }

    #[test]
    fn test_config_defaults() {
        let config = KasplexConfig::default();
        assert_eq!(config.network, Network::Mainnet);
        assert_eq!(config.api_version(), "v1");
        assert_eq!(config.base_url(), MAINNET_URL);
        assert!(config.timeout.is_none());
        assert!(!config.log_bodies);
    }

    #[test]
    fn test_builder_overrides() {
        let config = KasplexConfigBuilder::new(Network::Testnet)
            .api_version("v2")
            .base_url("http://localhost:8080/")
            .timeout(Duration::from_secs(5))
            .log_bodies(true)
            .build();

        assert_eq!(config.network, Network::Testnet);
        assert_eq!(config.api_version(), "v2");
        assert_eq!(config.base_url(), "http://localhost:8080");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert!(config.log_bodies);
    }

    #[test]
    fn test_empty_api_version_keeps_default() {
        let config = KasplexConfigBuilder::new(Network::Mainnet)
            .api_version("")
            .build();
        assert_eq!(config.api_version(), DEFAULT_API_VERSION);
    }
}
