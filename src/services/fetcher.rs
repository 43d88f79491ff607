// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Fetching the target page.

use crate::error::InspectError;
use crate::models::inspection::FetchedDocument;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Bound on the target-page fetch; probes use the client default instead.
pub const PAGE_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// GET the normalized URL and return its body and status.
///
/// A non-2xx status is not a failure: analysis proceeds on whatever body the
/// server returned. Exceeding the fetch bound maps to `FetchTimeout`; any
/// other transport fault maps to `FetchFailure` with the underlying
/// description forwarded verbatim.
pub async fn fetch_page(client: &Client, url: &Url) -> Result<FetchedDocument, InspectError> {
    fetch_page_bounded(client, url, PAGE_FETCH_TIMEOUT).await
}

async fn fetch_page_bounded(
    client: &Client,
    url: &Url,
    bound: Duration,
) -> Result<FetchedDocument, InspectError> {
    let response = client
        .get(url.clone())
        .timeout(bound)
        .send()
        .await
        .map_err(classify_fetch_error)?;

    let status_code = response.status().as_u16();
    let raw_body = response.text().await.map_err(classify_fetch_error)?;

    Ok(FetchedDocument {
        source_url: url.clone(),
        raw_body,
        status_code,
    })
}

fn classify_fetch_error(err: reqwest::Error) -> InspectError {
    if err.is_timeout() {
        InspectError::FetchTimeout
    } else {
        InspectError::FetchFailure(err.to_string())
    }
}
