//! HTTP implementation of [`RegistryClient`]

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_TYPE;

use super::RegistryClient;
use super::parse::{parse_package_json, parse_search_html, parse_search_json};
use crate::domain::{PackageRecord, Requirement};
use crate::error::{
    Result, invalid_package_name, registry_parse_failed, registry_timeout, registry_unavailable,
};

/// Blocking HTTP client for a PyPI-compatible registry
#[derive(Clone)]
pub struct HttpRegistryClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl std::fmt::Debug for HttpRegistryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpRegistryClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl HttpRegistryClient {
    /// Create a client for the registry at `base_url`; each request is
    /// bounded by `timeout`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("pipdeck/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| registry_unavailable(&base_url, e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `url`, returning the body of a success response
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<(String, bool)> {
        tracing::debug!(url, ?query, "registry request");
        let mut request = self.client.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request.send().map_err(|e| self.request_error(url, &e))?;

        let status = response.status();
        tracing::debug!(url, %status, "registry response");
        if !status.is_success() {
            return Err(registry_unavailable(url, format!("HTTP {status}")));
        }

        let is_json = is_json(&response);
        let body = response.text().map_err(|e| self.request_error(url, &e))?;
        Ok((body, is_json))
    }

    fn request_error(&self, url: &str, err: &reqwest::Error) -> crate::error::PipdeckError {
        if err.is_timeout() {
            registry_timeout(url, self.timeout)
        } else {
            registry_unavailable(url, err.to_string())
        }
    }
}

impl RegistryClient for HttpRegistryClient {
    fn search(&self, query: &str) -> Result<Vec<PackageRecord>> {
        let url = format!("{}/search/", self.base_url);
        let (body, is_json) = self.get(&url, &[("q", query)])?;

        let parsed = if is_json || looks_like_json(&body) {
            parse_search_json(&body)
        } else {
            parse_search_html(&body)
        };
        parsed.map_err(|reason| registry_parse_failed(&url, reason))
    }

    fn fetch(&self, name: &str) -> Result<PackageRecord> {
        let requirement = Requirement::parse(name)?;
        if requirement.name() != requirement.as_str() {
            return Err(invalid_package_name(name));
        }

        let url = format!("{}/pypi/{}/json", self.base_url, requirement.name());
        let (body, _) = self.get(&url, &[])?;
        parse_package_json(&body).map_err(|reason| registry_parse_failed(&url, reason))
    }
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.contains("json"))
}

fn looks_like_json(body: &str) -> bool {
    matches!(body.trim_start().chars().next(), Some('[' | '{'))
}
