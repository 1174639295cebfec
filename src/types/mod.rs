// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Records returned by the Kasplex indexer
//!
//! Every record type is generic over how amounts are represented:
//!
//! ```text
//! TokenInfo<RawAmount>   (wire strings, integer in smallest unit)
//!     |
//!     | rescale() using the record's own `dec`
//!     ↓
//! TokenInfo<BigDecimal>  (exact human-readable value)
//! ```
//!
//! The default parameter is [`BigDecimal`](bigdecimal::BigDecimal), so
//! `TokenInfo` on its own names the rescaled form callers receive.

mod balance;
mod decimals;
mod envelope;
mod operation;
mod token;

use chrono::{DateTime, Utc};

pub use balance::{AddressBalance, RawAddressBalance};
pub use decimals::TokenDecimals;
pub use envelope::{Page, Response};
pub use operation::{Operation, RawOperation};
pub use token::{
    HolderEntry, RawTokenInfo, RawTokenListEntry, TokenInfo, TokenListEntry, TokenState,
};

/// An amount exactly as the indexer sends it
pub type RawAmount = String;

/// `mtsAdd`/`mtsMod` are millisecond Unix timestamps sent as strings.
pub(crate) fn millis_to_datetime(millis: &str) -> Option<DateTime<Utc>> {
    millis
        .parse::<i64>()
        .ok()
        .and_then(DateTime::from_timestamp_millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millis_to_datetime() {
        let dt = millis_to_datetime("0").unwrap();
        assert_eq!(dt.timestamp(), 0);
        assert!(millis_to_datetime("").is_none());
        assert!(millis_to_datetime("soon").is_none());
    }
}
