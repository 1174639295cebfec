// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for kasplex integration tests
//!
//! Provides a mock transport and response fixtures so the client can be
//! exercised without talking to a real indexer.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use kasplex::transport::{HttpResponse, HttpTransport};
use kasplex::{KasplexClient, KasplexConfig, Network, TransportError};
use url::Url;

/// Mock HttpTransport for testing KasplexClient logic
///
/// Answers every GET with a canned response, chosen by URL path, and records
/// each requested URL.
///
/// # Example
///
/// ```rust,ignore
/// let mock = MockTransport::with_default(HttpResponse::new(404, "not found"))
///     .with_route("/v1/krc20/tokenlist", HttpResponse::new(200, token_list_body()));
///
/// let client = KasplexClient::with_transport(config, mock.clone());
/// ```
#[derive(Clone)]
pub struct MockTransport {
    routes: Vec<(String, HttpResponse)>,
    default: Option<HttpResponse>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockTransport {
    /// Answer every request with `response`
    pub fn with_default(response: HttpResponse) -> Self {
        Self {
            routes: Vec::new(),
            default: Some(response),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Answer every request with a 200 and `body`
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self::with_default(HttpResponse::new(200, body))
    }

    /// Fail every request as if the host were unreachable
    pub fn unreachable() -> Self {
        Self {
            routes: Vec::new(),
            default: None,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Answer requests whose path equals `path` with `response`
    pub fn with_route(mut self, path: &str, response: HttpResponse) -> Self {
        self.routes.push((path.to_string(), response));
        self
    }

    /// URLs requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<Url> {
        self.requests()
            .last()
            .map(|url| Url::parse(url).unwrap())
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(url.to_string());

        if let Some((_, response)) = self.routes.iter().find(|(path, _)| path == url.path()) {
            return Ok(response.clone());
        }

        match &self.default {
            Some(response) => Ok(response.clone()),
            None => Err(TransportError::request_failed(
                url.as_str(),
                std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused"),
            )),
        }
    }
}

/// Client on mainnet backed by `mock`
pub fn mock_client(mock: &MockTransport) -> KasplexClient {
    KasplexClient::with_transport(KasplexConfig::new(Network::Mainnet), mock.clone())
}

pub fn envelope(result: serde_json::Value) -> String {
    serde_json::json!({ "message": "successful", "result": result }).to_string()
}

pub fn page(result: serde_json::Value, next: Option<&str>, prev: Option<&str>) -> String {
    serde_json::json!({
        "message": "successful",
        "result": result,
        "next": next,
        "prev": prev,
    })
    .to_string()
}

pub fn token_info_json() -> serde_json::Value {
    serde_json::json!({
        "tick": "ABC",
        "max": "100000000000",
        "lim": "100000000",
        "pre": "2500000000",
        "to": "kaspa:qdeployer",
        "dec": "8",
        "minted": "123456789012345678",
        "opScoreAdd": "868614510008",
        "opScoreMod": "880221330002",
        "state": "deployed",
        "hashRev": "0a9d2b6e4b1c",
        "mtsAdd": "1720104620137",
        "holderTotal": "2",
        "transferTotal": "10",
        "mintTotal": "20",
        "holder": [
            {"address": "kaspa:qholder1", "amount": "60000000000"},
            {"address": "kaspa:qholder2", "amount": "1"}
        ]
    })
}

pub fn token_list_entry_json(tick: &str, dec: &str, max: &str) -> serde_json::Value {
    serde_json::json!({
        "tick": tick,
        "max": max,
        "lim": "100000000000",
        "pre": "0",
        "to": "",
        "dec": dec,
        "minted": "0",
        "opScoreAdd": "1",
        "opScoreMod": "2",
        "state": "deployed",
        "hashRev": "ff",
        "mtsAdd": "1720104620137"
    })
}

pub fn balance_json(tick: &str, balance: &str, dec: &str) -> serde_json::Value {
    serde_json::json!({
        "tick": tick,
        "balance": balance,
        "locked": "0",
        "dec": dec,
        "opScoreMod": "912345670001"
    })
}

pub fn operation_json(hash: &str, op: &str, amt: &str) -> serde_json::Value {
    serde_json::json!({
        "p": "KRC-20",
        "op": op,
        "tick": "ABC",
        "dec": "8",
        "amt": amt,
        "from": "kaspa:qfrom",
        "to": "kaspa:qto",
        "opScore": "868614510008",
        "hashRev": hash,
        "feeRev": "100000000",
        "txAccept": "1",
        "opAccept": "1",
        "opError": "",
        "mtsAdd": "1720104620137",
        "mtsMod": "1720104621000"
    })
}
