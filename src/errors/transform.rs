// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for decimal rescaling of indexer records.

/// Errors that can occur while rescaling raw integer amounts.
///
/// The indexer sends every amount as a decimal string together with the
/// token's `dec` exponent. If either cannot be read as a number the record is
/// rejected instead of being passed on with a made-up value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    /// An amount-like field did not hold a decimal number.
    #[error("Field '{field}' is not a decimal number: '{value}'")]
    InvalidAmount {
        /// Wire name of the field (e.g. "balance", "holder.amount")
        field: &'static str,
        /// The raw value as received
        value: String,
    },

    /// The record's `dec` field was not an integer exponent.
    #[error("Decimal exponent is not an integer: '{value}'")]
    InvalidDecimals {
        /// The raw `dec` value as received
        value: String,
    },
}

impl TransformError {
    pub fn invalid_amount(field: &'static str, value: impl Into<String>) -> Self {
        TransformError::InvalidAmount {
            field,
            value: value.into(),
        }
    }

    pub fn invalid_decimals(value: impl Into<String>) -> Self {
        TransformError::InvalidDecimals {
            value: value.into(),
        }
    }
}
