// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! KRC-20 operation records (deploy, mint, transfer, ...)

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{millis_to_datetime, RawAmount};
use crate::config::constants::KRC20_PROTOCOL;

/// A single KRC-20 operation, from `/krc20/oplist` or `/krc20/op/{id}`
///
/// Which amount fields are present depends on the operation kind: a deploy
/// carries `max`, `lim` and `pre`, a mint or transfer carries `amt`. Absent
/// fields stay absent after rescaling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation<A = BigDecimal> {
    /// Protocol tag, always "KRC-20"
    #[serde(rename = "p")]
    pub protocol: String,
    /// Operation kind ("deploy", "mint", "transfer", ...)
    pub op: String,
    pub tick: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<A>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lim: Option<A>,
    pub dec: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre: Option<A>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amt: Option<A>,
    pub from: String,
    pub to: String,
    pub op_score: String,
    pub hash_rev: String,
    pub fee_rev: String,
    pub tx_accept: String,
    pub op_accept: String,
    pub op_error: String,
    pub mts_add: String,
    pub mts_mod: String,
}

/// Raw operation, amounts as received
pub type RawOperation = Operation<RawAmount>;

impl<A> Operation<A> {
    pub fn is_krc20(&self) -> bool {
        self.protocol == KRC20_PROTOCOL
    }

    /// Whether the indexer applied the operation
    ///
    /// The transaction can be accepted by the network while the operation
    /// itself is rejected (`opAccept` = "-1", reason in `opError`).
    pub fn is_accepted(&self) -> bool {
        self.op_accept == "1"
    }

    pub fn added_at(&self) -> Option<DateTime<Utc>> {
        millis_to_datetime(&self.mts_add)
    }

    pub fn modified_at(&self) -> Option<DateTime<Utc>> {
        millis_to_datetime(&self.mts_mod)
    }
}
