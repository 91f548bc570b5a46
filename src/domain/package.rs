//! Package metadata records
//!
//! A [`PackageRecord`] is produced either by the remote registry or by the
//! local inventory scanner and never changes after construction.

use serde::Serialize;

use crate::error::{Result, invalid_package_name};

/// Metadata for one package, remote or installed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageRecord {
    name: String,
    version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    license: Option<String>,
}

impl PackageRecord {
    /// Create a record. Fails when `name` is empty after trimming.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Result<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(invalid_package_name(name));
        }

        Ok(Self {
            name,
            version: version.into().trim().to_string(),
            summary: None,
            author: None,
            license: None,
        })
    }

    #[must_use]
    pub fn with_summary(mut self, summary: Option<String>) -> Self {
        self.summary = non_blank(summary);
        self
    }

    #[must_use]
    pub fn with_author(mut self, author: Option<String>) -> Self {
        self.author = non_blank(author);
        self
    }

    #[must_use]
    pub fn with_license(mut self, license: Option<String>) -> Self {
        self.license = non_blank(license);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn license(&self) -> Option<&str> {
        self.license.as_deref()
    }

    /// Identity comparison used for matching and uninstall decisions.
    ///
    /// Case-insensitive, and `-`, `_` and `.` are interchangeable the way pip
    /// treats distribution names.
    pub fn is_named(&self, other: &str) -> bool {
        normalize_name(&self.name) == normalize_name(other)
    }
}

/// Normalize a distribution name: lowercase, runs of `-`, `_`, `.` become `-`
pub fn normalize_name(name: &str) -> String {
    let mut normalized = String::with_capacity(name.len());
    let mut in_separator = false;

    for ch in name.trim().chars() {
        if matches!(ch, '-' | '_' | '.') {
            if !in_separator {
                normalized.push('-');
            }
            in_separator = true;
        } else {
            normalized.extend(ch.to_lowercase());
            in_separator = false;
        }
    }

    normalized
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && v != "UNKNOWN")
}
