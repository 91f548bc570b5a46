//! Core metadata parsing (`METADATA` / `PKG-INFO`)
//!
//! Both files are RFC 822 style headers followed by an optional body. Only
//! the header block is read; continuation lines are ignored.

use crate::domain::PackageRecord;

/// Header fields pipdeck cares about
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CoreMetadata {
    pub name: Option<String>,
    pub version: Option<String>,
    pub summary: Option<String>,
    pub author: Option<String>,
    pub license: Option<String>,
}

impl CoreMetadata {
    pub fn parse(content: &str) -> Self {
        let mut metadata = Self::default();

        for line in content.lines() {
            if line.trim().is_empty() {
                break;
            }
            if line.starts_with(char::is_whitespace) {
                continue;
            }
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };

            let value = value.trim();
            let slot = match key.trim().to_ascii_lowercase().as_str() {
                "name" => &mut metadata.name,
                "version" => &mut metadata.version,
                "summary" => &mut metadata.summary,
                "author" => &mut metadata.author,
                "license" => &mut metadata.license,
                _ => continue,
            };
            if slot.is_none() && !value.is_empty() {
                *slot = Some(value.to_string());
            }
        }

        metadata
    }

    /// Build a record, falling back to `fallback_version` when the header
    /// has none. `None` when the metadata carries no usable name.
    pub fn into_record(self, fallback_version: Option<&str>) -> Option<PackageRecord> {
        let name = self.name?;
        let version = self
            .version
            .or_else(|| fallback_version.map(String::from))
            .unwrap_or_default();

        PackageRecord::new(name, version).ok().map(|record| {
            record
                .with_summary(self.summary)
                .with_author(self.author)
                .with_license(self.license)
        })
    }
}

/// Version embedded in a `name-version.dist-info` style directory name
pub fn version_from_dir_name(stem: &str) -> Option<&str> {
    stem.split_once('-')
        .map(|(_, rest)| rest.split('-').next().unwrap_or(rest))
        .filter(|version| !version.is_empty())
}
