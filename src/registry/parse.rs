//! Registry response decoding
//!
//! Search results come back as the registry's HTML results page (or, from
//! registries that offer it, a JSON document). Package details come from the
//! JSON API at `/pypi/<name>/json`.

use scraper::{ElementRef, Html, Selector};
use serde::Deserialize;

use crate::domain::PackageRecord;

const SNIPPET: &str = ".package-snippet";
const SNIPPET_NAME: &str = ".package-snippet__name";
const SNIPPET_VERSION: &str = ".package-snippet__version";
const SNIPPET_DESCRIPTION: &str = ".package-snippet__description";

/// Decode an HTML search results page. A page without result snippets is an
/// empty result, not an error.
pub fn parse_search_html(html: &str) -> Result<Vec<PackageRecord>, String> {
    let document = Html::parse_document(html);
    let snippet = selector(SNIPPET)?;
    let name = selector(SNIPPET_NAME)?;
    let version = selector(SNIPPET_VERSION)?;
    let description = selector(SNIPPET_DESCRIPTION)?;

    document
        .select(&snippet)
        .enumerate()
        .map(|(index, element)| {
            let name = first_text(element, &name)
                .ok_or_else(|| format!("result {index} has no package name"))?;
            let version = first_text(element, &version)
                .ok_or_else(|| format!("result {index} ({name}) has no version"))?;
            let summary = first_text(element, &description);

            PackageRecord::new(name, version)
                .map(|record| record.with_summary(summary))
                .map_err(|e| e.to_string())
        })
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SearchJson {
    Wrapped { results: Vec<SearchHit> },
    Bare(Vec<SearchHit>),
}

#[derive(Deserialize)]
struct SearchHit {
    name: String,
    version: String,
    #[serde(default, alias = "description")]
    summary: Option<String>,
}

/// Decode a JSON search response: either `[{name, version, summary}]` or
/// `{"results": [...]}`
pub fn parse_search_json(body: &str) -> Result<Vec<PackageRecord>, String> {
    let hits = match serde_json::from_str::<SearchJson>(body).map_err(|e| e.to_string())? {
        SearchJson::Wrapped { results } => results,
        SearchJson::Bare(results) => results,
    };

    hits.into_iter()
        .map(|hit| {
            PackageRecord::new(hit.name, hit.version)
                .map(|record| record.with_summary(hit.summary))
                .map_err(|e| e.to_string())
        })
        .collect()
}

#[derive(Deserialize)]
struct PackageJson {
    info: PackageInfo,
}

#[derive(Deserialize)]
struct PackageInfo {
    name: String,
    version: String,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    license: Option<String>,
}

/// Decode a `/pypi/<name>/json` document
pub fn parse_package_json(body: &str) -> Result<PackageRecord, String> {
    let PackageJson { info } = serde_json::from_str(body).map_err(|e| e.to_string())?;

    PackageRecord::new(info.name, info.version)
        .map(|record| {
            record
                .with_summary(info.summary)
                .with_author(info.author)
                .with_license(info.license.map(first_line))
        })
        .map_err(|e| e.to_string())
}

fn selector(css: &str) -> Result<Selector, String> {
    Selector::parse(css).map_err(|e| format!("invalid selector {css}: {e}"))
}

fn first_text(element: ElementRef<'_>, selector: &Selector) -> Option<String> {
    element
        .select(selector)
        .next()
        .map(|node| node.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Some packages paste the whole license text into the field
fn first_line(text: String) -> String {
    text.lines().next().unwrap_or_default().trim().to_string()
}
