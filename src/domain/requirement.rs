//! Requirement specifiers
//!
//! A requirement is the text handed to pip (`requests`, `Flask[async]>=3`,
//! `numpy==1.26.*`). The leading distribution name is extracted so the
//! installer can probe importability before invoking pip.

use std::fmt;

use crate::error::{Result, invalid_package_name};

/// Characters that end the distribution name inside a specifier
const NAME_TERMINATORS: &[char] = &['[', '<', '>', '=', '!', '~', ';', '@', '(', ','];

/// One requirement specifier, read verbatim (trimmed) from input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    raw: String,
    name: String,
}

impl Requirement {
    /// Parse a specifier. Fails when no distribution name precedes the
    /// version constraint.
    pub fn parse(input: &str) -> Result<Self> {
        let raw = input.trim();
        let name = raw
            .split(|c: char| c.is_whitespace() || NAME_TERMINATORS.contains(&c))
            .next()
            .unwrap_or_default();

        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(invalid_package_name(raw));
        }

        Ok(Self {
            raw: raw.to_string(),
            name: name.to_string(),
        })
    }

    /// The specifier as given, passed to pip unchanged
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Distribution name without extras or version constraints
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Module name used for the import probe
    pub fn import_name(&self) -> String {
        self.name.replace('-', "_")
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
