// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token decimal exponent type

use crate::errors::TransformError;

/// KRC-20 token decimal exponent
///
/// Raw amounts are integers in the token's smallest unit; dividing by
/// `10^decimals` gives the human-readable value. KRC-20 deployments default to
/// 8 decimals, the same as KAS itself.
///
/// The indexer sends the exponent as a string in each record's `dec` field.
/// That string is kept as-is on the record; this type only exists while an
/// amount is being rescaled.
///
/// # Examples
///
/// ```
/// use kasplex::TokenDecimals;
///
/// let decimals = TokenDecimals::parse("8").unwrap();
/// assert_eq!(decimals, TokenDecimals::KAS);
/// assert!(TokenDecimals::parse("8.5").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenDecimals(i64);

impl TokenDecimals {
    /// Default KRC-20 decimals, shared with the native KAS token (8)
    pub const KAS: Self = Self(8);

    pub const fn new(decimals: i64) -> Self {
        Self(decimals)
    }

    /// Parse the `dec` field of an indexer record
    ///
    /// Surrounding whitespace is ignored. Anything that is not an integer is
    /// rejected.
    pub fn parse(dec: &str) -> Result<Self, TransformError> {
        dec.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| TransformError::invalid_decimals(dec))
    }

    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for TokenDecimals {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TokenDecimals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} decimals", self.0)
    }
}
