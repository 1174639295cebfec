// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Async client for the Kasplex KRC-20 indexer API.
//!
//! Queries token metadata, per-address balances and operation history, and
//! rescales the integer amounts the indexer reports into exact decimal values
//! using each record's own `dec` exponent.

mod client;
pub mod config;
mod errors;
mod rescale;
mod spans;
pub mod transport;
mod types;

pub use bigdecimal::BigDecimal;
pub use client::*;
pub use config::{KasplexConfig, KasplexConfigBuilder, Network, UnknownNetwork};
pub use errors::*;
pub use rescale::*;
pub use types::*;
