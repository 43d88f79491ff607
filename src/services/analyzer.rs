// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Signal extraction from fetched markup.
//!
//! Everything here is pure: the fetched body goes in, the extracted signals
//! come out, and no network access happens. Malformed markup never faults
//! the analyzer — the parser degrades gracefully and missing structure reads
//! as "not found".

use crate::error::InspectError;
use crate::models::report::{SemanticHtmlUsage, CANONICAL_NOT_FOUND};
use scraper::{Html, Selector};
use std::collections::HashMap;

/// Signals extracted from one page's markup
#[derive(Debug, Clone)]
pub struct PageSignals {
    pub images_without_alt: Vec<Option<String>>,
    pub canonical_tag: String,
    pub mobile_friendly: bool,
    pub open_graph_tags: HashMap<String, Option<String>>,
    pub twitter_card_tags: HashMap<String, Option<String>>,
    pub semantic_html_usage: SemanticHtmlUsage,
}

/// Parse the raw body and extract every on-page signal.
pub fn analyze_markup(html: &str) -> Result<PageSignals, InspectError> {
    let document = Html::parse_document(html);

    Ok(PageSignals {
        images_without_alt: images_without_alt(&document)?,
        canonical_tag: canonical_tag(&document)?,
        mobile_friendly: has_viewport_meta(&document)?,
        open_graph_tags: prefixed_meta_tags(&document, "property", "og:")?,
        twitter_card_tags: prefixed_meta_tags(&document, "name", "twitter:")?,
        semantic_html_usage: semantic_usage(&document)?,
    })
}

fn selector(css: &str) -> Result<Selector, InspectError> {
    Selector::parse(css).map_err(|e| InspectError::ParseFailure(e.to_string()))
}

/// Collect `src` values of images missing an `alt` attribute, in document
/// order. An empty-string `alt` counts as present; a missing `src` yields a
/// null entry rather than dropping the image.
fn images_without_alt(document: &Html) -> Result<Vec<Option<String>>, InspectError> {
    let images = selector("img")?;

    Ok(document
        .select(&images)
        .filter(|img| img.value().attr("alt").is_none())
        .map(|img| img.value().attr("src").map(str::to_string))
        .collect())
}

/// The `href` of the first canonical link declaration, or the sentinel.
///
/// A canonical element without an `href` also degrades to the sentinel
/// instead of faulting the inspection.
fn canonical_tag(document: &Html) -> Result<String, InspectError> {
    let canonical = selector(r#"link[rel="canonical"]"#)?;

    Ok(document
        .select(&canonical)
        .next()
        .and_then(|link| link.value().attr("href"))
        .map(str::to_string)
        .unwrap_or_else(|| CANONICAL_NOT_FOUND.to_string()))
}

fn has_viewport_meta(document: &Html) -> Result<bool, InspectError> {
    let viewport = selector(r#"meta[name="viewport"]"#)?;

    Ok(document.select(&viewport).next().is_some())
}

/// Build a tag map from `meta` elements whose key attribute starts with the
/// given prefix. The key is the attribute's literal value (prefix included),
/// the value is the element's `content` (absent → null). Iteration is in
/// document order, so a duplicate key keeps the last content seen.
fn prefixed_meta_tags(
    document: &Html,
    key_attr: &str,
    prefix: &str,
) -> Result<HashMap<String, Option<String>>, InspectError> {
    let metas = selector("meta")?;

    let mut tags = HashMap::new();
    for element in document.select(&metas) {
        let Some(key) = element.value().attr(key_attr) else {
            continue;
        };
        if key.starts_with(prefix) {
            tags.insert(
                key.to_string(),
                element.value().attr("content").map(str::to_string),
            );
        }
    }
    Ok(tags)
}

fn semantic_usage(document: &Html) -> Result<SemanticHtmlUsage, InspectError> {
    let exists = |tag: &str| -> Result<bool, InspectError> {
        Ok(document.select(&selector(tag)?).next().is_some())
    };

    Ok(SemanticHtmlUsage {
        header: exists("header")?,
        nav: exists("nav")?,
        main: exists("main")?,
        article: exists("article")?,
        section: exists("section")?,
        footer: exists("footer")?,
        aside: exists("aside")?,
    })
}
