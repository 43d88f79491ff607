// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! The inspection pipeline: normalize, fetch, probe, analyze, assemble.

use crate::error::InspectError;
use crate::models::report::SeoReport;
use crate::services::analyzer::{analyze_markup, PageSignals};
use crate::services::fetcher::fetch_page;
use crate::services::normalize::ensure_scheme;
use crate::services::probe::{probe_well_known, ProbeResults};
use reqwest::Client;
use tracing::debug;
use url::Url;

/// Run one full inspection of the given raw address.
///
/// This is the single failure boundary: any fault at any stage surfaces as
/// one `InspectError`, never a crash, and every call yields exactly one of
/// a report or an error. A parse error on the normalized address counts as
/// a fetch failure, matching the normalizer's no-validation contract.
pub async fn inspect(client: &Client, raw_address: &str) -> Result<SeoReport, InspectError> {
    let normalized = ensure_scheme(raw_address);
    let url =
        Url::parse(&normalized).map_err(|e| InspectError::FetchFailure(e.to_string()))?;

    let document = fetch_page(client, &url).await?;
    debug!(url = %url, status = document.status_code, "fetched target page");

    let probes = probe_well_known(client, &url).await?;
    let signals = analyze_markup(&document.raw_body)?;

    Ok(assemble_report(&url, probes, signals))
}

/// Compose probe and markup signals into the final report. Every field is
/// independently sourced, so there is nothing to merge or reconcile.
pub fn assemble_report(url: &Url, probes: ProbeResults, signals: PageSignals) -> SeoReport {
    SeoReport {
        robots_txt_found: probes.robots_txt_found,
        sitemap_xml_found: probes.sitemap_xml_found,
        images_without_alt: signals.images_without_alt,
        canonical_tag: signals.canonical_tag,
        https: url.scheme() == "https",
        mobile_friendly: signals.mobile_friendly,
        open_graph_tags: signals.open_graph_tags,
        twitter_card_tags: signals.twitter_card_tags,
        semantic_html_usage: signals.semantic_html_usage,
    }
}
