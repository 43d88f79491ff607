// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use serde::{Deserialize, Serialize};
use url::Url;

/// Request to inspect a single URL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectRequest {
    /// The website address to inspect; a missing scheme is tolerated
    pub url: String,
}

/// Error body returned for every failed inspection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable description of the fault
    pub error: String,
}

/// A fetched target page, owned by one pipeline invocation
#[derive(Debug, Clone)]
pub struct FetchedDocument {
    /// The normalized URL the page was fetched from
    pub source_url: Url,
    /// The raw response body
    pub raw_body: String,
    /// The HTTP status code as returned; non-2xx is not a failure
    pub status_code: u16,
}
