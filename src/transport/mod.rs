// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP transport used by the client.
//!
//! The client only needs one capability: perform a GET and hand back the
//! status code and raw body. [`HttpTransport`] is that seam. The default
//! implementation is [`ReqwestTransport`]; tests and embedders can plug in
//! their own.
//!
//! # Logging
//!
//! [`LoggingLayer`] is a Tower [`Layer`](tower::Layer) that wraps any
//! transport and records each request with `tracing`:
//!
//! ```rust
//! use kasplex::transport::{LoggingLayer, ReqwestTransport};
//! use tower::Layer;
//!
//! let transport = LoggingLayer::new().layer(ReqwestTransport::new());
//! ```
//!
//! No retry or rate limiting layer is provided. Each call is one round trip
//! and retry policy belongs to the caller.

use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use crate::errors::TransportError;

mod http;
mod logging;

pub use http::ReqwestTransport;
pub use logging::{LoggingLayer, LoggingTransport};

/// Status and raw body of an HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs HTTP GET requests on behalf of the client
///
/// Implementations must be shareable across tasks: the client issues
/// concurrent requests through one transport without any locking.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// GET `url` and return the response, whatever its status
    ///
    /// Return `Err` only when no response was obtained at all.
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError>;
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for Arc<T> {
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        (**self).get(url).await
    }
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for Box<T> {
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        (**self).get(url).await
    }
}
