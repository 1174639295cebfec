// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Decimal rescaling of raw indexer records
//!
//! The indexer reports every amount as an integer string in the token's
//! smallest unit, next to the token's `dec` exponent. This module turns those
//! into exact human-readable values: `raw / 10^dec`, computed on
//! [`BigDecimal`] so 18+ digit supplies keep every digit.
//!
//! Only the amount-like fields are touched:
//!
//! | Record             | Rescaled fields                              |
//! |--------------------|----------------------------------------------|
//! | [`TokenInfo`]      | `max`, `lim`, `pre`, `minted`, `holder[].amount` |
//! | [`TokenListEntry`] | `max`, `lim`, `pre`, `minted`                |
//! | [`AddressBalance`] | `balance`, `locked`                          |
//! | [`Operation`]      | `max`, `lim`, `pre`, `amt` (when present)    |
//!
//! Every other field, `dec` included, is moved across unchanged. Each record
//! is rescaled with its own `dec`; holder entries use the parent token's.
//!
//! Rescaling is meant to run exactly once on raw service output. Running it
//! again on already rescaled values divides a second time.

use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::errors::{KasplexError, TransformError};
use crate::types::{
    AddressBalance, HolderEntry, Operation, RawAddressBalance, RawAmount, RawOperation,
    RawTokenInfo, RawTokenListEntry, TokenDecimals, TokenInfo, TokenListEntry,
};

/// A raw indexer record that can be rescaled into its human-readable form
pub trait Rescale: Sized {
    /// The same record shape with amounts as [`BigDecimal`]
    type Output;

    /// Rescale every amount-like field by the record's own `dec`
    fn rescale(self) -> Result<Self::Output, TransformError>;
}

/// Divide a raw amount by `10^decimals` without losing precision
///
/// Implemented as a shift of the decimal scale, so the result is exact and
/// keeps one fractional digit per decimal: `"100000000000"` at 8 decimals
/// becomes `1000.00000000`.
///
/// # Examples
///
/// ```
/// use kasplex::{rescale_amount, TokenDecimals};
///
/// let value = rescale_amount("max", "123456789012345678", TokenDecimals::KAS).unwrap();
/// assert_eq!(value.to_string(), "1234567890.12345678");
/// ```
pub fn rescale_amount(
    field: &'static str,
    raw: &str,
    decimals: TokenDecimals,
) -> Result<BigDecimal, TransformError> {
    let value =
        BigDecimal::from_str(raw.trim()).map_err(|_| TransformError::invalid_amount(field, raw))?;
    let (digits, scale) = value.as_bigint_and_exponent();
    let scale = scale
        .checked_add(decimals.as_i64())
        .ok_or_else(|| TransformError::invalid_decimals(decimals.as_i64().to_string()))?;
    Ok(BigDecimal::new(digits, scale))
}

// Operation amount fields are only present for the operation kinds that use them.
fn rescale_optional(
    field: &'static str,
    raw: Option<RawAmount>,
    decimals: TokenDecimals,
) -> Result<Option<BigDecimal>, TransformError> {
    raw.map(|value| rescale_amount(field, &value, decimals))
        .transpose()
}

fn rescale_holders(
    holders: Option<Vec<HolderEntry<RawAmount>>>,
    decimals: TokenDecimals,
) -> Result<Option<Vec<HolderEntry>>, TransformError> {
    holders
        .map(|entries| {
            entries
                .into_iter()
                .map(|entry| {
                    Ok(HolderEntry {
                        amount: rescale_amount("holder.amount", &entry.amount, decimals)?,
                        address: entry.address,
                    })
                })
                .collect()
        })
        .transpose()
}

impl Rescale for RawTokenInfo {
    type Output = TokenInfo;

    fn rescale(self) -> Result<TokenInfo, TransformError> {
        let decimals = TokenDecimals::parse(&self.dec)?;
        Ok(TokenInfo {
            max: rescale_amount("max", &self.max, decimals)?,
            lim: rescale_amount("lim", &self.lim, decimals)?,
            pre: rescale_amount("pre", &self.pre, decimals)?,
            minted: rescale_amount("minted", &self.minted, decimals)?,
            holder: rescale_holders(self.holder, decimals)?,
            tick: self.tick,
            to: self.to,
            dec: self.dec,
            op_score_add: self.op_score_add,
            op_score_mod: self.op_score_mod,
            state: self.state,
            hash_rev: self.hash_rev,
            mts_add: self.mts_add,
            holder_total: self.holder_total,
            transfer_total: self.transfer_total,
            mint_total: self.mint_total,
        })
    }
}

impl Rescale for RawTokenListEntry {
    type Output = TokenListEntry;

    fn rescale(self) -> Result<TokenListEntry, TransformError> {
        let decimals = TokenDecimals::parse(&self.dec)?;
        Ok(TokenListEntry {
            max: rescale_amount("max", &self.max, decimals)?,
            lim: rescale_amount("lim", &self.lim, decimals)?,
            pre: rescale_amount("pre", &self.pre, decimals)?,
            minted: rescale_amount("minted", &self.minted, decimals)?,
            tick: self.tick,
            to: self.to,
            dec: self.dec,
            op_score_add: self.op_score_add,
            op_score_mod: self.op_score_mod,
            state: self.state,
            hash_rev: self.hash_rev,
            mts_add: self.mts_add,
            holder_total: self.holder_total,
            transfer_total: self.transfer_total,
            mint_total: self.mint_total,
        })
    }
}

impl Rescale for RawAddressBalance {
    type Output = AddressBalance;

    fn rescale(self) -> Result<AddressBalance, TransformError> {
        let decimals = TokenDecimals::parse(&self.dec)?;
        Ok(AddressBalance {
            balance: rescale_amount("balance", &self.balance, decimals)?,
            locked: rescale_amount("locked", &self.locked, decimals)?,
            tick: self.tick,
            dec: self.dec,
            op_score_mod: self.op_score_mod,
        })
    }
}

impl Rescale for RawOperation {
    type Output = Operation;

    fn rescale(self) -> Result<Operation, TransformError> {
        let decimals = TokenDecimals::parse(&self.dec)?;
        Ok(Operation {
            max: rescale_optional("max", self.max, decimals)?,
            lim: rescale_optional("lim", self.lim, decimals)?,
            pre: rescale_optional("pre", self.pre, decimals)?,
            amt: rescale_optional("amt", self.amt, decimals)?,
            protocol: self.protocol,
            op: self.op,
            tick: self.tick,
            dec: self.dec,
            from: self.from,
            to: self.to,
            op_score: self.op_score,
            hash_rev: self.hash_rev,
            fee_rev: self.fee_rev,
            tx_accept: self.tx_accept,
            op_accept: self.op_accept,
            op_error: self.op_error,
            mts_add: self.mts_add,
            mts_mod: self.mts_mod,
        })
    }
}

/// Rescale a record that may be missing
///
/// # Errors
///
/// [`KasplexError::EmptyResult`] if `record` is `None`.
pub fn transform<R: Rescale>(record: Option<R>) -> Result<R::Output, KasplexError> {
    let record = record.ok_or(KasplexError::EmptyResult)?;
    Ok(record.rescale()?)
}

/// Rescale element 0 of a single-item result
///
/// Point lookups come back wrapped in a one-element array. Extra elements are
/// ignored.
pub fn rescale_first<R: Rescale>(records: Vec<R>) -> Result<R::Output, KasplexError> {
    transform(records.into_iter().next())
}

/// Rescale every record of a page, preserving order
pub fn rescale_all<R: Rescale>(records: Vec<R>) -> Result<Vec<R::Output>, TransformError> {
    records.into_iter().map(Rescale::rescale).collect()
}
