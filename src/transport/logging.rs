// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Tower-based logging layer for HTTP transports.
//!
//! This module implements a logging wrapper that uses `tracing` to record
//! request/response information for debugging and observability.

use std::time::Instant;

use async_trait::async_trait;
use tower::Layer;
use tracing::{debug, warn, Instrument};
use url::Url;

use super::{HttpResponse, HttpTransport};
use crate::errors::TransportError;

/// A Tower layer that adds logging/tracing to HTTP requests.
///
/// Each GET runs inside an `http_get` span carrying the URL and, once the
/// response is in, its status and duration.
///
/// # Example
///
/// ```rust
/// use kasplex::transport::{LoggingLayer, ReqwestTransport};
/// use tower::Layer;
///
/// let transport = LoggingLayer::new()
///     .with_body_logging()
///     .layer(ReqwestTransport::new());
/// ```
#[derive(Clone, Debug, Default)]
pub struct LoggingLayer {
    /// Whether to log response body sizes
    log_bodies: bool,
}

impl LoggingLayer {
    /// Creates a new logging layer with default settings.
    ///
    /// By default, only timing, status and errors are logged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables logging of response body sizes.
    pub fn with_body_logging(mut self) -> Self {
        self.log_bodies = true;
        self
    }
}

impl<T> Layer<T> for LoggingLayer {
    type Service = LoggingTransport<T>;

    fn layer(&self, inner: T) -> Self::Service {
        LoggingTransport {
            inner,
            log_bodies: self.log_bodies,
        }
    }
}

/// A transport that logs every request it forwards to `inner`.
#[derive(Clone, Debug)]
pub struct LoggingTransport<T> {
    inner: T,
    log_bodies: bool,
}

impl<T> LoggingTransport<T> {
    pub fn inner(&self) -> &T {
        &self.inner
    }
}

#[async_trait]
impl<T: HttpTransport> HttpTransport for LoggingTransport<T> {
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        let span = tracing::debug_span!(
            "http_get",
            url = %url,
            status = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
        );

        async {
            let start = Instant::now();
            debug!("HTTP request: GET {url}");

            let result = self.inner.get(url).await;
            let duration = start.elapsed();
            let span = tracing::Span::current();
            span.record("duration_ms", duration.as_millis() as u64);

            match &result {
                Ok(response) => {
                    span.record("status", response.status);
                    if self.log_bodies {
                        debug!(
                            status = response.status,
                            body_bytes = response.body.len(),
                            duration_ms = %duration.as_millis(),
                            "HTTP response"
                        );
                    } else {
                        debug!(
                            status = response.status,
                            duration_ms = %duration.as_millis(),
                            "HTTP response"
                        );
                    }
                }
                Err(e) => {
                    warn!(
                        error = %e,
                        duration_ms = %duration.as_millis(),
                        "HTTP error: GET {url}"
                    );
                }
            }

            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(u16);

    #[async_trait]
    impl HttpTransport for Fixed {
        async fn get(&self, _url: &Url) -> Result<HttpResponse, TransportError> {
            Ok(HttpResponse::new(self.0, "{}"))
        }
    }

    #[test]
    fn test_logging_layer_default() {
        let layer = LoggingLayer::new();
        assert!(!layer.log_bodies);
    }

    #[test]
    fn test_logging_layer_with_body_logging() {
        let layer = LoggingLayer::new().with_body_logging();
        assert!(layer.log_bodies);
        assert!(layer.layer(()).log_bodies);
    }

    #[tokio::test]
    async fn test_logging_transport_forwards_response() {
        let transport = LoggingLayer::new().layer(Fixed(418));
        let url = Url::parse("https://api.kasplex.org/v1/krc20/tokenlist").unwrap();

        let response = transport.get(&url).await.unwrap();
        assert_eq!(response, HttpResponse::new(418, "{}"));
        assert_eq!(transport.inner().0, 418);
    }
}
