// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Existence probes for well-known site resources.

use crate::error::InspectError;
use reqwest::{Client, StatusCode};
use url::Url;

/// Outcome of probing the site's well-known auxiliary files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeResults {
    pub robots_txt_found: bool,
    pub sitemap_xml_found: bool,
}

/// Probe `/robots.txt` and `/sitemap.xml` at the URL's origin.
///
/// The root-relative join discards any path component on the inspected URL,
/// so a deep page and the site root probe the same two addresses. The probes
/// run concurrently and inherit the client's default timeout. A transport
/// fault on either aborts the whole inspection; contents are never read.
pub async fn probe_well_known(client: &Client, base: &Url) -> Result<ProbeResults, InspectError> {
    let (robots_txt_found, sitemap_xml_found) = tokio::try_join!(
        resource_exists(client, base, "/robots.txt"),
        resource_exists(client, base, "/sitemap.xml"),
    )?;

    Ok(ProbeResults {
        robots_txt_found,
        sitemap_xml_found,
    })
}

/// GET a root-relative resource and report whether it answered exactly 200.
async fn resource_exists(client: &Client, base: &Url, name: &str) -> Result<bool, InspectError> {
    let target = base
        .join(name)
        .map_err(|e| InspectError::FetchFailure(e.to_string()))?;

    let response = client
        .get(target)
        .send()
        .await
        .map_err(|e| InspectError::FetchFailure(e.to_string()))?;

    Ok(response.status() == StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mock_site(robots_status: u16, sitemap_status: u16) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/robots.txt"))
            .respond_with(ResponseTemplate::new(robots_status))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/sitemap.xml"))
            .respond_with(ResponseTemplate::new(sitemap_status))
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn test_reports_each_resource_independently() {
        let server = mock_site(200, 404).await;
        let base = Url::parse(&server.uri()).unwrap();

        let results = probe_well_known(&Client::new(), &base).await.unwrap();
        assert!(results.robots_txt_found);
        assert!(!results.sitemap_xml_found);
    }

    #[tokio::test]
    async fn test_only_exact_200_counts_as_found() {
        // Redirects and server errors are not "found"
        let server = mock_site(301, 500).await;
        let base = Url::parse(&server.uri()).unwrap();

        let client = Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap();
        let results = probe_well_known(&client, &base).await.unwrap();
        assert!(!results.robots_txt_found);
        assert!(!results.sitemap_xml_found);
    }

    #[tokio::test]
    async fn test_probes_resolve_against_origin_not_path() {
        let server = mock_site(200, 200).await;
        let base = Url::parse(&format!("{}/deep/nested/page.html", server.uri())).unwrap();

        let results = probe_well_known(&Client::new(), &base).await.unwrap();
        assert!(results.robots_txt_found);
        assert!(results.sitemap_xml_found);
    }

    #[tokio::test]
    async fn test_probe_transport_fault_aborts() {
        let base = Url::parse("http://127.0.0.1:1/").unwrap();

        let err = probe_well_known(&Client::new(), &base).await.unwrap_err();
        assert!(matches!(err, InspectError::FetchFailure(_)));
    }
}
