// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token metadata records

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{millis_to_datetime, RawAmount};

/// Deployment state of a token in the token list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenState {
    /// Deployed and still mintable
    Deployed,
    /// Fully minted
    Finished,
}

/// An address holding a token, nested in [`TokenInfo`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolderEntry<A = BigDecimal> {
    pub address: String,
    pub amount: A,
}

/// Full metadata of one KRC-20 token, as returned by `/krc20/token/{tick}`
///
/// `A` is the amount representation: [`RawAmount`] straight off the wire,
/// [`BigDecimal`] once rescaled by `dec`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo<A = BigDecimal> {
    pub tick: String,
    /// Maximum supply
    pub max: A,
    /// Mint limit per operation
    pub lim: A,
    /// Premined amount
    pub pre: A,
    /// Recipient of the premine
    pub to: String,
    /// Decimal exponent, never rescaled
    pub dec: String,
    /// Amount minted so far
    pub minted: A,
    pub op_score_add: String,
    pub op_score_mod: String,
    pub state: String,
    /// Hash of the transaction that last changed the token
    pub hash_rev: String,
    pub mts_add: String,
    pub holder_total: String,
    pub transfer_total: String,
    pub mint_total: String,
    /// Largest holders, in the order the indexer ranks them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holder: Option<Vec<HolderEntry<A>>>,
}

/// One row of the paginated `/krc20/tokenlist` endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenListEntry<A = BigDecimal> {
    pub tick: String,
    pub max: A,
    pub lim: A,
    pub pre: A,
    pub to: String,
    pub dec: String,
    pub minted: A,
    pub op_score_add: String,
    pub op_score_mod: String,
    pub state: TokenState,
    pub hash_rev: String,
    pub mts_add: String,
    /// Holder count, when the indexer includes it in list rows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holder_total: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_total: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mint_total: Option<String>,
}

impl<A> TokenInfo<A> {
    /// When the token was deployed
    pub fn deployed_at(&self) -> Option<DateTime<Utc>> {
        millis_to_datetime(&self.mts_add)
    }
}

impl<A> TokenListEntry<A> {
    /// When the token was deployed
    pub fn deployed_at(&self) -> Option<DateTime<Utc>> {
        millis_to_datetime(&self.mts_add)
    }

    pub fn is_finished(&self) -> bool {
        self.state == TokenState::Finished
    }
}

/// Raw token metadata, amounts as received
pub type RawTokenInfo = TokenInfo<RawAmount>;

/// Raw token list row, amounts as received
pub type RawTokenListEntry = TokenListEntry<RawAmount>;
