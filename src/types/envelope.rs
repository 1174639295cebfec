// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Response envelopes returned by every endpoint

use serde::{Deserialize, Serialize};

/// Envelope of a single-item endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response<T> {
    /// Always "successful" once returned by the client
    pub message: String,
    pub result: T,
}

/// Envelope of a paginated list endpoint
///
/// `next` and `prev` are opaque cursors; pass them back unchanged in
/// [`PageParams`](crate::PageParams) to fetch the adjacent page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub message: String,
    pub result: Vec<T>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.next.as_deref().is_some_and(|c| !c.is_empty())
    }

    pub fn has_prev(&self) -> bool {
        self.prev.as_deref().is_some_and(|c| !c.is_empty())
    }
}
