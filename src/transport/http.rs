// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! reqwest-backed transport

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use super::{HttpResponse, HttpTransport};
use crate::errors::TransportError;

/// [`HttpTransport`] backed by a shared [`reqwest::Client`]
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a transport whose requests time out after `timeout`
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(TransportError::client_build_failed)?;
        Ok(Self { client })
    }

    /// Reuse an existing client, e.g. one shared with the rest of an application
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| TransportError::request_failed(url.as_str(), e))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::body_failed(url.as_str(), status, e))?;

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}
