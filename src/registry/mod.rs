//! Remote package registry access
//!
//! [`RegistryClient`] is the seam; [`HttpRegistryClient`] talks to a
//! PyPI-compatible registry over blocking HTTP. Failures are returned to the
//! caller immediately, nothing is retried here.

mod http;
mod parse;

pub use http::HttpRegistryClient;
pub use parse::{parse_package_json, parse_search_html, parse_search_json};

use crate::domain::PackageRecord;
use crate::error::Result;

/// Lookups against a package registry
pub trait RegistryClient: Send + Sync {
    /// Records the registry returns for `query`, in the registry's own order
    fn search(&self, query: &str) -> Result<Vec<PackageRecord>>;

    /// Latest published metadata for exactly `name`
    fn fetch(&self, name: &str) -> Result<PackageRecord>;
}
