// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Error types for the inspection pipeline.

use thiserror::Error;

/// A fault anywhere in the inspection pipeline.
///
/// Every variant renders to the single `error` string the API returns; the
/// taxonomy stays visible to tests instead of relying on ad-hoc string
/// coercion at the failure site.
#[derive(Error, Debug)]
pub enum InspectError {
    /// The target page did not respond within the fetch bound.
    #[error("page fetch timed out after 10 seconds")]
    FetchTimeout,

    /// Transport-level fault on the page fetch or an auxiliary probe.
    /// The underlying description is forwarded verbatim.
    #[error("{0}")]
    FetchFailure(String),

    /// The analyzer could not be set up for the fetched markup.
    #[error("{0}")]
    ParseFailure(String),
}
