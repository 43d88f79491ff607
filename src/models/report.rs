// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sentinel reported when no canonical link declaration exists
pub const CANONICAL_NOT_FOUND: &str = "Not Found";

/// Result of inspecting one page
///
/// Field names are the wire format, exact and case-sensitive. Constructed
/// once per request and immutable once returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeoReport {
    /// Whether `/robots.txt` at the site origin answered 200
    pub robots_txt_found: bool,
    /// Whether `/sitemap.xml` at the site origin answered 200
    pub sitemap_xml_found: bool,
    /// `src` values of images lacking an `alt` attribute, in document order.
    /// An entry is null when the image also lacks a `src` attribute.
    pub images_without_alt: Vec<Option<String>>,
    /// `href` of the first `link[rel=canonical]`, or the "Not Found" sentinel
    pub canonical_tag: String,
    /// Whether the normalized URL uses the `https` scheme
    pub https: bool,
    /// Whether any `meta[name=viewport]` element exists
    pub mobile_friendly: bool,
    /// Open Graph tags: full `property` value (e.g. `og:title`) to `content`.
    /// Duplicate properties keep the last content seen in document order.
    pub open_graph_tags: HashMap<String, Option<String>>,
    /// Twitter Card tags: full `name` value (e.g. `twitter:card`) to `content`
    pub twitter_card_tags: HashMap<String, Option<String>>,
    /// Presence of structural semantic elements
    pub semantic_html_usage: SemanticHtmlUsage,
}

/// Whether at least one of each structural semantic element exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticHtmlUsage {
    pub header: bool,
    pub nav: bool,
    pub main: bool,
    pub article: bool,
    pub section: bool,
    pub footer: bool,
    pub aside: bool,
}
