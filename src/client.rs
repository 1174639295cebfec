// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Kasplex KRC-20 query client
//!
//! [`KasplexClient`] exposes the six read-only endpoints of the indexer. Each
//! call is a single GET round trip:
//!
//! 1. Build the URL (`{base}/{version}/krc20/...`, optional query parameters
//!    only when set)
//! 2. Fail with [`KasplexError::Transport`] on a non-2xx status, before the
//!    body is looked at
//! 3. Parse the JSON envelope and fail with [`KasplexError::Service`] unless
//!    its `message` is `"successful"`
//! 4. Rescale every result record (see [`crate::Rescale`]) and return the
//!    envelope, cursors untouched
//!
//! The client holds no mutable state, so one instance can serve any number of
//! concurrent calls. Nothing is cached or retried.
//!
//! # Example
//!
//! ```rust,no_run
//! use kasplex::{KasplexClient, Network, PageParams};
//!
//! # async fn example() -> Result<(), kasplex::KasplexError> {
//! let client = KasplexClient::new(Network::Mainnet);
//!
//! let token = client.get_token_info("NACHO").await?;
//! println!("{} minted of {}", token.result.minted, token.result.max);
//!
//! let page = client.get_token_list(&PageParams::default()).await?;
//! if let Some(cursor) = page.next {
//!     let _next_page = client.get_token_list(&PageParams::next(cursor)).await?;
//! }
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tower::Layer;
use tracing::{debug, warn, Instrument};
use url::{ParseError, Url};

use crate::config::constants::SUCCESS_MESSAGE;
use crate::config::{KasplexConfig, KasplexConfigBuilder, Network};
use crate::errors::{KasplexError, TransportError};
use crate::rescale::{rescale_all, rescale_first, Rescale};
use crate::spans;
use crate::transport::{HttpTransport, LoggingLayer, ReqwestTransport};
use crate::types::{
    AddressBalance, Operation, Page, RawAddressBalance, RawOperation, RawTokenInfo,
    RawTokenListEntry, Response, TokenInfo, TokenListEntry,
};

/// Pagination cursors for list endpoints
///
/// Cursors are opaque; pass back the `next`/`prev` of a previous [`Page`].
/// Unset or empty cursors are left out of the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageParams {
    pub next: Option<String>,
    pub prev: Option<String>,
}

impl PageParams {
    /// Request the page after `cursor`
    pub fn next(cursor: impl Into<String>) -> Self {
        Self {
            next: Some(cursor.into()),
            prev: None,
        }
    }

    /// Request the page before `cursor`
    pub fn prev(cursor: impl Into<String>) -> Self {
        Self {
            next: None,
            prev: Some(cursor.into()),
        }
    }
}

/// Cursors and filters for [`KasplexClient::get_op_list`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpListParams {
    pub next: Option<String>,
    pub prev: Option<String>,
    /// Only operations involving this address
    pub address: Option<String>,
    /// Only operations on this ticker
    pub tick: Option<String>,
}

impl OpListParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_next(mut self, cursor: impl Into<String>) -> Self {
        self.next = Some(cursor.into());
        self
    }

    pub fn with_prev(mut self, cursor: impl Into<String>) -> Self {
        self.prev = Some(cursor.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_tick(mut self, tick: impl Into<String>) -> Self {
        self.tick = Some(tick.into());
        self
    }
}

/// Envelope as it comes off the wire, before the result is typed.
///
/// The result stays untyped until the message has been checked, so an error
/// envelope with an unexpected `result` still reports the service's message.
#[derive(Debug, Deserialize)]
struct WireEnvelope {
    message: String,
    #[serde(default)]
    result: serde_json::Value,
    #[serde(default)]
    next: Option<String>,
    #[serde(default)]
    prev: Option<String>,
}

impl WireEnvelope {
    fn into_records<R: DeserializeOwned>(
        self,
        url: &Url,
    ) -> Result<(String, Vec<R>, Option<String>, Option<String>), KasplexError> {
        let records = if self.result.is_null() {
            Vec::new()
        } else {
            serde_json::from_value(self.result)
                .map_err(|e| KasplexError::decode(url.as_str(), e))?
        };
        Ok((self.message, records, self.next, self.prev))
    }
}

/// Client for the Kasplex KRC-20 indexer API
///
/// Cheap to clone; clones share the underlying transport.
#[derive(Clone)]
pub struct KasplexClient {
    config: KasplexConfig,
    transport: Arc<dyn HttpTransport>,
}

impl fmt::Debug for KasplexClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KasplexClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl KasplexClient {
    /// Create a client for `network` with API version "v1"
    pub fn new(network: Network) -> Self {
        Self::with_api_version(network, "")
    }

    /// Create a client for `network` using a specific API version segment
    ///
    /// An empty version falls back to "v1".
    pub fn with_api_version(network: Network, api_version: impl Into<String>) -> Self {
        let config = KasplexConfigBuilder::new(network)
            .api_version(api_version)
            .build();
        let transport = LoggingLayer::new().layer(ReqwestTransport::new());
        Self::with_transport(config, transport)
    }

    /// Create a client from a full configuration
    ///
    /// # Errors
    ///
    /// Fails only if the HTTP client cannot be built with the configured
    /// timeout.
    pub fn from_config(config: KasplexConfig) -> Result<Self, KasplexError> {
        let http = match config.timeout {
            Some(timeout) => ReqwestTransport::with_timeout(timeout)?,
            None => ReqwestTransport::new(),
        };
        let layer = if config.log_bodies {
            LoggingLayer::new().with_body_logging()
        } else {
            LoggingLayer::new()
        };
        Ok(Self::with_transport(config, layer.layer(http)))
    }

    /// Create a client that sends its requests through `transport`
    pub fn with_transport(config: KasplexConfig, transport: impl HttpTransport + 'static) -> Self {
        Self {
            config,
            transport: Arc::new(transport),
        }
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    pub fn api_version(&self) -> &str {
        self.config.api_version()
    }

    pub fn network(&self) -> Network {
        self.config.network
    }

    pub fn config(&self) -> &KasplexConfig {
        &self.config
    }

    /// Details of one token, including its largest holders
    ///
    /// `GET /{ver}/krc20/token/{tick}`
    pub async fn get_token_info(&self, tick: &str) -> Result<Response<TokenInfo>, KasplexError> {
        async {
            let url = self.endpoint(&["krc20", "token", tick], &[])?;
            self.fetch_one::<RawTokenInfo>(url).await
        }
        .instrument(spans::get_token_info(tick))
        .await
    }

    /// One page of all deployed tokens
    ///
    /// `GET /{ver}/krc20/tokenlist?next=&prev=`
    pub async fn get_token_list(
        &self,
        params: &PageParams,
    ) -> Result<Page<TokenListEntry>, KasplexError> {
        let next = params.next.as_deref();
        let prev = params.prev.as_deref();
        async {
            let url = self.endpoint(&["krc20", "tokenlist"], &[("next", next), ("prev", prev)])?;
            self.fetch_page::<RawTokenListEntry>(url).await
        }
        .instrument(spans::get_token_list(next, prev))
        .await
    }

    /// One page of the token balances held by `address`
    ///
    /// `GET /{ver}/krc20/address/{address}/tokenlist?next=&prev=`
    pub async fn get_token_list_of_address(
        &self,
        address: &str,
        params: &PageParams,
    ) -> Result<Page<AddressBalance>, KasplexError> {
        let next = params.next.as_deref();
        let prev = params.prev.as_deref();
        async {
            let url = self.endpoint(
                &["krc20", "address", address, "tokenlist"],
                &[("next", next), ("prev", prev)],
            )?;
            self.fetch_page::<RawAddressBalance>(url).await
        }
        .instrument(spans::get_token_list_of_address(address, next, prev))
        .await
    }

    /// Balance of one token held by `address`
    ///
    /// `GET /{ver}/krc20/address/{address}/token/{tick}`
    pub async fn get_token_balance_of_address(
        &self,
        address: &str,
        tick: &str,
    ) -> Result<Response<AddressBalance>, KasplexError> {
        async {
            let url = self.endpoint(&["krc20", "address", address, "token", tick], &[])?;
            self.fetch_one::<RawAddressBalance>(url).await
        }
        .instrument(spans::get_token_balance_of_address(address, tick))
        .await
    }

    /// One page of operations, optionally filtered by address and ticker
    ///
    /// `GET /{ver}/krc20/oplist?next=&prev=&address=&tick=`
    pub async fn get_op_list(
        &self,
        params: &OpListParams,
    ) -> Result<Page<Operation>, KasplexError> {
        let next = params.next.as_deref();
        let prev = params.prev.as_deref();
        let address = params.address.as_deref();
        let tick = params.tick.as_deref();
        async {
            let url = self.endpoint(
                &["krc20", "oplist"],
                &[
                    ("next", next),
                    ("prev", prev),
                    ("address", address),
                    ("tick", tick),
                ],
            )?;
            self.fetch_page::<RawOperation>(url).await
        }
        .instrument(spans::get_op_list(next, prev, address, tick))
        .await
    }

    /// Details of one operation
    ///
    /// `GET /{ver}/krc20/op/{operation_id}`
    pub async fn get_op_details(
        &self,
        operation_id: &str,
    ) -> Result<Response<Operation>, KasplexError> {
        async {
            let url = self.endpoint(&["krc20", "op", operation_id], &[])?;
            self.fetch_one::<RawOperation>(url).await
        }
        .instrument(spans::get_op_details(operation_id))
        .await
    }

    /// Build `{base}/{version}/{path...}` plus the query parameters that are
    /// set and non-empty. Path segments are percent-encoded individually.
    fn endpoint(&self, path: &[&str], query: &[(&str, Option<&str>)]) -> Result<Url, KasplexError> {
        let mut url = Url::parse(self.config.base_url())?;

        url.path_segments_mut()
            .map_err(|()| KasplexError::InvalidUrl(ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .push(self.config.api_version())
            .extend(path);

        let present: Vec<(&str, &str)> = query
            .iter()
            .filter_map(|&(key, value)| value.filter(|v| !v.is_empty()).map(|v| (key, v)))
            .collect();
        // query_pairs_mut() leaves a bare '?' behind even when nothing is appended
        if !present.is_empty() {
            url.query_pairs_mut().extend_pairs(present);
        }

        Ok(url)
    }

    async fn fetch(&self, url: &Url) -> Result<WireEnvelope, KasplexError> {
        let response = self.transport.get(url).await?;

        if !response.is_success() {
            return Err(TransportError::Status {
                status: response.status,
                url: url.to_string(),
            }
            .into());
        }

        let envelope: WireEnvelope = serde_json::from_slice(&response.body)
            .map_err(|e| KasplexError::decode(url.as_str(), e))?;

        if envelope.message != SUCCESS_MESSAGE {
            warn!(message = %envelope.message, url = %url, "Kasplex service returned an error");
            return Err(KasplexError::service(envelope.message));
        }

        Ok(envelope)
    }

    async fn fetch_one<R>(&self, url: Url) -> Result<Response<R::Output>, KasplexError>
    where
        R: Rescale + DeserializeOwned,
    {
        let (message, records, _, _) = self.fetch(&url).await?.into_records::<R>(&url)?;
        if records.len() > 1 {
            debug!(
                count = records.len(),
                "Single-item endpoint returned extra records, using the first"
            );
        }
        let result = rescale_first(records)?;
        Ok(Response { message, result })
    }

    async fn fetch_page<R>(&self, url: Url) -> Result<Page<R::Output>, KasplexError>
    where
        R: Rescale + DeserializeOwned,
    {
        let (message, records, next, prev) = self.fetch(&url).await?.into_records::<R>(&url)?;
        debug!(count = records.len(), has_next = next.is_some(), "Fetched page");
        let result = rescale_all(records)?;
        Ok(Page {
            message,
            result,
            next,
            prev,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(config: KasplexConfig) -> KasplexClient {
        KasplexClient::with_transport(config, ReqwestTransport::new())
    }

    #[test]
    fn test_new_selects_network_url() {
        let mainnet = KasplexClient::new(Network::Mainnet);
        assert_eq!(mainnet.base_url(), "https://api.kasplex.org");
        assert_eq!(mainnet.api_version(), "v1");

        let testnet = KasplexClient::new(Network::Testnet);
        assert_eq!(testnet.base_url(), "https://tn10api.kasplex.org");
        assert_eq!(testnet.network(), Network::Testnet);
    }

    #[test]
    fn test_with_api_version() {
        let client = KasplexClient::with_api_version(Network::Mainnet, "v2");
        assert_eq!(client.api_version(), "v2");
    }

    #[test]
    fn test_endpoint_path() {
        let client = client(KasplexConfig::new(Network::Mainnet));
        let url = client.endpoint(&["krc20", "token", "NACHO"], &[]).unwrap();
        assert_eq!(url.as_str(), "https://api.kasplex.org/v1/krc20/token/NACHO");
    }

    #[test]
    fn test_endpoint_omits_absent_and_empty_params() {
        let client = client(KasplexConfig::new(Network::Testnet));
        let url = client
            .endpoint(
                &["krc20", "oplist"],
                &[("next", Some("abc")), ("prev", None), ("tick", Some(""))],
            )
            .unwrap();
        assert_eq!(url.as_str(), "https://tn10api.kasplex.org/v1/krc20/oplist?next=abc");

        let url = client
            .endpoint(&["krc20", "tokenlist"], &[("next", None), ("prev", Some(""))])
            .unwrap();
        assert_eq!(url.as_str(), "https://tn10api.kasplex.org/v1/krc20/tokenlist");
        assert!(url.query().is_none());
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let client = client(KasplexConfig::new(Network::Mainnet));
        let url = client.endpoint(&["krc20", "token", "A/B C"], &[]).unwrap();
        assert_eq!(url.as_str(), "https://api.kasplex.org/v1/krc20/token/A%2FB%20C");
    }

    #[test]
    fn test_endpoint_with_base_url_override() {
        let config = KasplexConfigBuilder::new(Network::Mainnet)
            .base_url("http://localhost:8080/indexer/")
            .build();
        let client = client(config);
        let url = client.endpoint(&["krc20", "op", "42"], &[]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/indexer/v1/krc20/op/42");
    }

    #[test]
    fn test_endpoint_invalid_base_url() {
        let config = KasplexConfigBuilder::new(Network::Mainnet)
            .base_url("not a url")
            .build();
        let err = client(config).endpoint(&["krc20"], &[]).unwrap_err();
        assert!(matches!(err, KasplexError::InvalidUrl(_)));
    }

    #[test]
    fn test_wire_envelope_null_result_is_empty() {
        let url = Url::parse("https://api.kasplex.org/v1/krc20/op/1").unwrap();
        let envelope: WireEnvelope =
            serde_json::from_str(r#"{"message":"successful","result":null}"#).unwrap();
        let (_, records, next, prev) = envelope.into_records::<RawOperation>(&url).unwrap();
        assert!(records.is_empty());
        assert!(next.is_none() && prev.is_none());
    }

    #[test]
    fn test_op_list_params_builder() {
        let params = OpListParams::new()
            .with_address("kaspa:qaddr")
            .with_tick("NACHO")
            .with_next("n1");
        assert_eq!(params.address.as_deref(), Some("kaspa:qaddr"));
        assert_eq!(params.tick.as_deref(), Some("NACHO"));
        assert_eq!(params.next.as_deref(), Some("n1"));
        assert!(params.prev.is_none());
    }

    #[test]
    fn test_client_is_send_sync_clone() {
        fn assert_traits<T: Send + Sync + Clone>() {}
        assert_traits::<KasplexClient>();
    }
}
