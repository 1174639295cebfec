// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Well-known endpoints and protocol constants
//!
//! This module centralizes the fixed values of the Kasplex indexer API so they
//! can be found in one place instead of being scattered through the client.

/// Base URL of the Kasplex indexer on Kaspa mainnet
pub const MAINNET_URL: &str = "https://api.kasplex.org";

/// Base URL of the Kasplex indexer on Kaspa testnet-10
pub const TESTNET_URL: &str = "https://tn10api.kasplex.org";

/// API version segment used when none is configured
pub const DEFAULT_API_VERSION: &str = "v1";

/// Envelope `message` value the service returns on success
pub const SUCCESS_MESSAGE: &str = "successful";

/// Protocol tag carried by every KRC-20 operation record
pub const KRC20_PROTOCOL: &str = "KRC-20";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_https_without_trailing_slash() {
        for url in [MAINNET_URL, TESTNET_URL] {
            assert!(url.starts_with("https://"));
            assert!(!url.ends_with('/'));
        }
    }
}
