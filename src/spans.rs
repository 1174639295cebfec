// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for client operations.
//!
//! Telemetry is kept out of the query logic: every public operation has a
//! span helper here, and the operation attaches its future to that span.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub async fn my_operation(&self, param: &str) -> Result<T, KasplexError> {
//!     async move {
//!         // Query logic here
//!     }
//!     .instrument(spans::my_operation(param))
//!     .await
//! }
//! ```

use tracing::Span;

/// Create span for fetching the metadata and top holders of one token.
///
/// Parent: None (root span for this operation)
/// Children: http_get span of the logging transport
#[inline]
pub(crate) fn get_token_info(tick: &str) -> Span {
    tracing::info_span!("kasplex.get_token_info", tick = %tick)
}

/// Create span for fetching one page of the global token list.
///
/// Parent: None (root span for this operation)
/// Children: http_get span of the logging transport
#[inline]
pub(crate) fn get_token_list(next: Option<&str>, prev: Option<&str>) -> Span {
    tracing::info_span!("kasplex.get_token_list", next = ?next, prev = ?prev)
}

/// Create span for fetching one page of the token balances held by an address.
///
/// Parent: None (root span for this operation)
/// Children: http_get span of the logging transport
#[inline]
pub(crate) fn get_token_list_of_address(
    address: &str,
    next: Option<&str>,
    prev: Option<&str>,
) -> Span {
    tracing::info_span!(
        "kasplex.get_token_list_of_address",
        address = %address,
        next = ?next,
        prev = ?prev,
    )
}

/// Create span for fetching an address's balance of a single token.
///
/// Parent: None (root span for this operation)
/// Children: http_get span of the logging transport
#[inline]
pub(crate) fn get_token_balance_of_address(address: &str, tick: &str) -> Span {
    tracing::info_span!(
        "kasplex.get_token_balance_of_address",
        address = %address,
        tick = %tick,
    )
}

/// Create span for fetching one page of operations, optionally filtered.
///
/// Parent: None (root span for this operation)
/// Children: http_get span of the logging transport
#[inline]
pub(crate) fn get_op_list(
    next: Option<&str>,
    prev: Option<&str>,
    address: Option<&str>,
    tick: Option<&str>,
) -> Span {
    tracing::info_span!(
        "kasplex.get_op_list",
        next = ?next,
        prev = ?prev,
        address = ?address,
        tick = ?tick,
    )
}

/// Create span for fetching the details of a single operation.
///
/// Parent: None (root span for this operation)
/// Children: http_get span of the logging transport
#[inline]
pub(crate) fn get_op_details(operation_id: &str) -> Span {
    tracing::info_span!("kasplex.get_op_details", operation_id = %operation_id)
}
