// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the kasplex client.
//!
//! Module-specific errors ([`TransportError`], [`TransformError`]) describe
//! one failure source each. [`KasplexError`] is what every client operation
//! returns; the module errors convert into it via `From`, so `?` propagates
//! them naturally.
//!
//! Every error is terminal at this layer. Nothing is retried or recovered, and
//! an operation either returns a fully rescaled envelope or exactly one error.
//!
//! # Examples
//!
//! ```rust,no_run
//! use kasplex::{KasplexClient, KasplexError, Network};
//!
//! # async fn example() {
//! let client = KasplexClient::new(Network::Mainnet);
//!
//! match client.get_token_info("NACHO").await {
//!     Ok(token) => println!("max supply: {}", token.result.max),
//!     Err(KasplexError::Transport(e)) if e.status() == Some(404) => {
//!         eprintln!("token not found");
//!     }
//!     Err(KasplexError::Service { message }) => {
//!         eprintln!("indexer refused the query: {message}");
//!     }
//!     Err(e) => eprintln!("Other error: {e}"),
//! }
//! # }
//! ```

mod transform;
mod transport;

pub use transform::TransformError;
pub use transport::TransportError;

/// Unified error type for all client operations.
#[derive(Debug, thiserror::Error)]
pub enum KasplexError {
    /// The HTTP layer failed or returned a non-2xx status.
    #[error("HTTP error: {0}")]
    Transport(#[from] TransportError),

    /// The envelope parsed but its `message` was not `"successful"`.
    #[error("Kasplex service error: {message}")]
    Service {
        /// The message returned by the service, verbatim
        message: String,
    },

    /// A single-item endpoint returned no result, or the transform was
    /// handed nothing to work on.
    #[error("cannot transform empty object")]
    EmptyResult,

    /// An amount or exponent in the payload was not numeric.
    #[error("Rescaling failed: {0}")]
    Transform(#[from] TransformError),

    /// The body was not the expected JSON envelope.
    #[error("Failed to decode response from {url}")]
    Decode {
        /// URL that was requested
        url: String,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL could not be parsed.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl KasplexError {
    /// Create a `Service` error from the envelope's message.
    pub fn service(message: impl Into<String>) -> Self {
        KasplexError::Service {
            message: message.into(),
        }
    }

    /// Create a `Decode` error for a response from `url`.
    pub fn decode(url: impl Into<String>, source: serde_json::Error) -> Self {
        KasplexError::Decode {
            url: url.into(),
            source,
        }
    }

    /// HTTP status code carried by a transport error, if any.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            KasplexError::Transport(e) => e.status(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_message() {
        assert_eq!(
            KasplexError::EmptyResult.to_string(),
            "cannot transform empty object"
        );
    }

    #[test]
    fn test_transport_error_converts() {
        fn fails() -> Result<(), KasplexError> {
            Err(TransportError::Status {
                status: 404,
                url: "https://api.kasplex.org/v1/krc20/op/1".to_string(),
            })?;
            Ok(())
        }

        let err = fails().unwrap_err();
        assert_eq!(err.http_status(), Some(404));
        assert!(matches!(err, KasplexError::Transport(_)));
    }

    #[test]
    fn test_service_error_keeps_message() {
        let err = KasplexError::service("tick not found");
        assert_eq!(err.to_string(), "Kasplex service error: tick not found");
        assert_eq!(err.http_status(), None);
    }

    #[test]
    fn test_transform_error_converts() {
        let err: KasplexError = TransformError::invalid_decimals("eight").into();
        assert_eq!(
            err.to_string(),
            "Rescaling failed: Decimal exponent is not an integer: 'eight'"
        );
    }
}
