// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Errors raised by the HTTP transport.

/// Errors that can occur while performing an HTTP GET against the indexer.
///
/// A transport error is raised before any attempt is made to parse the
/// response body, so it never says anything about the payload.
///
/// # Examples
///
/// ```rust
/// use kasplex::TransportError;
///
/// let error = TransportError::Status {
///     status: 404,
///     url: "https://api.kasplex.org/v1/krc20/token/NOPE".to_string(),
/// };
/// assert_eq!(error.status(), Some(404));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The server answered with a non-2xx status code.
    #[error("HTTP request to {url} failed with status {status}")]
    Status {
        /// HTTP status code returned by the server
        status: u16,
        /// URL that was requested
        url: String,
    },

    /// The request could not be sent or no response was received.
    ///
    /// Covers connection failures, TLS errors and timeouts.
    #[error("HTTP request to {url} failed")]
    Request {
        /// URL that was requested
        url: String,
        /// The underlying transport error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The response arrived but its body could not be read.
    #[error("Failed to read response body from {url} (status {status})")]
    Body {
        /// URL that was requested
        url: String,
        /// HTTP status code of the response whose body failed
        status: u16,
        /// The underlying transport error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The HTTP client itself could not be constructed.
    #[error("Failed to build HTTP client")]
    ClientBuild {
        /// The underlying error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl TransportError {
    /// HTTP status code, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } | TransportError::Body { status, .. } => {
                Some(*status)
            }
            TransportError::Request { .. } | TransportError::ClientBuild { .. } => None,
        }
    }

    /// Helper to create a `Request` error from any error type.
    pub fn request_failed(
        url: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        TransportError::Request {
            url: url.into(),
            source: Box::new(source),
        }
    }

    /// Helper to create a `ClientBuild` error from any error type.
    pub fn client_build_failed(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        TransportError::ClientBuild {
            source: Box::new(source),
        }
    }

    /// Helper to create a `Body` error from any error type.
    pub fn body_failed(
        url: impl Into<String>,
        status: u16,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        TransportError::Body {
            url: url.into(),
            status,
            source: Box::new(source),
        }
    }
}
