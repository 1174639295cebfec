// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Per-address token balances

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use super::RawAmount;

/// Balance of one token held by one address
///
/// Returned by `/krc20/address/{address}/token/{tick}` and, one row per
/// token, by `/krc20/address/{address}/tokenlist`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressBalance<A = BigDecimal> {
    pub tick: String,
    /// Spendable balance
    pub balance: A,
    /// Amount locked in pending operations
    pub locked: A,
    pub dec: String,
    pub op_score_mod: String,
}

/// Raw balance, amounts as received
pub type RawAddressBalance = AddressBalance<RawAmount>;

impl AddressBalance {
    /// Spendable plus locked
    pub fn total(&self) -> BigDecimal {
        &self.balance + &self.locked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_wire_names() {
        let json = r#"{
            "tick": "KASPER",
            "balance": "150000000",
            "locked": "0",
            "dec": "8",
            "opScoreMod": "912345670001"
        }"#;
        let balance: RawAddressBalance = serde_json::from_str(json).unwrap();
        assert_eq!(balance.balance, "150000000");
        assert_eq!(balance.op_score_mod, "912345670001");
    }

    #[test]
    fn test_total() {
        let balance = AddressBalance {
            tick: "KASPER".to_string(),
            balance: BigDecimal::from_str("1.50000000").unwrap(),
            locked: BigDecimal::from_str("0.25000000").unwrap(),
            dec: "8".to_string(),
            op_score_mod: "1".to_string(),
        };
        assert_eq!(balance.total(), BigDecimal::from_str("1.75").unwrap());
    }
}
