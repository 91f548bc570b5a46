//! Configuration for pipdeck
//!
//! Settings are resolved in this order, later sources winning:
//! built-in defaults, `config.yaml`, `PIPDECK_*` environment variables,
//! then command-line flags (applied by the caller).
//!
//! The config file lives at `<platform config dir>/pipdeck/config.yaml`
//! and can be relocated with `PIPDECK_CONFIG` or `--config`; a relocated
//! file must exist.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PipdeckError, Result, config_parse_failed, config_read_failed};

/// Config directory name under the platform config directory
const CONFIG_DIR: &str = "pipdeck";

/// Config file name
pub const CONFIG_FILE: &str = "config.yaml";

pub const ENV_CONFIG: &str = "PIPDECK_CONFIG";
pub const ENV_PYTHON: &str = "PIPDECK_PYTHON";
pub const ENV_REGISTRY: &str = "PIPDECK_REGISTRY";
pub const ENV_TIMEOUT: &str = "PIPDECK_TIMEOUT";

pub const DEFAULT_REGISTRY_URL: &str = "https://pypi.org";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const ZERO_TIMEOUT: &str = "timeout must be at least 1 second";
pub const DEFAULT_PAGE_SIZE: usize = 15;

/// How many search results to show at once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPageSize", into = "String")]
pub enum PageSize {
    Limited(usize),
    All,
}

impl PageSize {
    /// Truncate a result list to this page size
    pub fn apply<T>(self, items: &[T]) -> &[T] {
        match self {
            PageSize::Limited(n) => &items[..n.min(items.len())],
            PageSize::All => items,
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::Limited(DEFAULT_PAGE_SIZE)
    }
}

impl FromStr for PageSize {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(PageSize::All);
        }
        match s.parse::<usize>() {
            Ok(0) | Err(_) => Err(format!(
                "invalid page size '{s}': expected a positive number or 'all'"
            )),
            Ok(n) => Ok(PageSize::Limited(n)),
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSize::Limited(n) => write!(f, "{n}"),
            PageSize::All => f.write_str("all"),
        }
    }
}

impl From<PageSize> for String {
    fn from(size: PageSize) -> Self {
        size.to_string()
    }
}

/// YAML accepts both `results_per_page: 25` and `results_per_page: all`
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPageSize {
    Count(usize),
    Word(String),
}

impl TryFrom<RawPageSize> for PageSize {
    type Error = String;

    fn try_from(raw: RawPageSize) -> std::result::Result<Self, Self::Error> {
        match raw {
            RawPageSize::Count(n) => n.to_string().parse(),
            RawPageSize::Word(word) => word.parse(),
        }
    }
}

/// Resolved pipdeck settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Interpreter whose environment is managed
    pub python: PathBuf,

    /// Registry base URL (no trailing slash needed)
    pub registry_url: String,

    /// Bounded wait for registry requests, in seconds
    pub timeout_secs: u64,

    /// Search results shown per page
    pub results_per_page: PageSize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            python: default_python(),
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            results_per_page: PageSize::default(),
        }
    }
}

impl Settings {
    /// Load settings from the config file (if any) and the environment.
    ///
    /// `explicit_path` takes precedence over `PIPDECK_CONFIG` and the
    /// platform default. A file named by either must exist; a missing file
    /// at the platform default location yields defaults.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let explicit = explicit_path
            .map(Path::to_path_buf)
            .or_else(|| non_empty_env(ENV_CONFIG).map(PathBuf::from));

        let mut settings = match explicit {
            Some(path) => Self::from_existing_file(&path)?,
            None => match default_config_path() {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };
        settings.apply_env()?;

        tracing::debug!(?settings, "resolved settings");
        Ok(settings)
    }

    /// Read settings from a YAML file. A missing file yields defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| config_read_failed(path.display().to_string(), e.to_string()))?;
        Self::from_yaml(&content).map_err(|e| match e {
            PipdeckError::ConfigParseFailed { reason, .. } => {
                config_parse_failed(path.display().to_string(), reason)
            }
            other => other,
        })
    }

    /// Read settings from a YAML file that must exist
    pub fn from_existing_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(config_read_failed(
                path.display().to_string(),
                "file not found",
            ));
        }
        Self::from_file(path)
    }

    /// Parse settings from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings: Self = serde_yaml::from_str(yaml)?;
        if settings.timeout_secs == 0 {
            return Err(config_parse_failed("unknown", ZERO_TIMEOUT));
        }
        Ok(settings)
    }

    /// Override fields from `PIPDECK_*` environment variables
    pub fn apply_env(&mut self) -> Result<()> {
        if let Some(python) = non_empty_env(ENV_PYTHON) {
            self.python = PathBuf::from(python);
        }
        if let Some(registry) = non_empty_env(ENV_REGISTRY) {
            self.registry_url = registry;
        }
        if let Some(timeout) = non_empty_env(ENV_TIMEOUT) {
            let timeout: u64 = timeout
                .trim()
                .parse()
                .map_err(|e: std::num::ParseIntError| config_parse_failed(ENV_TIMEOUT, e.to_string()))?;
            if timeout == 0 {
                return Err(config_parse_failed(ENV_TIMEOUT, ZERO_TIMEOUT));
            }
            self.timeout_secs = timeout;
        }
        Ok(())
    }

    /// Registry base URL without a trailing slash
    pub fn registry_base(&self) -> &str {
        self.registry_url.trim_end_matches('/')
    }
}

/// Get the config file path
///
/// Uses the platform's standard config location (e.g. XDG on Linux,
/// Library/Application Support on macOS) with a `pipdeck` subdirectory.
/// Can be overridden with the `PIPDECK_CONFIG` environment variable.
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = non_empty_env(ENV_CONFIG) {
        return Some(PathBuf::from(path));
    }
    default_config_path()
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(CONFIG_DIR).join(CONFIG_FILE))
}

fn default_python() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from("python")
    } else {
        PathBuf::from("python3")
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
