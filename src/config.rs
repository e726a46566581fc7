// src/config.rs

//! Client configuration.
//!
//! The backend base address is the only deployment-specific value. It comes
//! from the command line, then the environment (both handled by clap), then
//! an optional `config.toml` in the platform config directory, then defaults.

use crate::error::{Result, ScanError};
use crate::logging::project_directory;
use lazy_static::lazy_static;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
const CONFIG_FILE: &str = "config.toml";

lazy_static! {
    static ref DEFAULT_BASE: Url =
        parse_base_url(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid absolute URL");
}

/// Resolved settings the client runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend root. Always ends with `/` so endpoint joins keep any path prefix.
    pub base_url: Url,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE.clone(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Absolute URL of a backend endpoint such as `api/scan`.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }
}

/// File-based configuration matching `config.toml`.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

/// Values that override the file, typically from clap.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Default location of the configuration file, if the platform has one.
pub fn default_config_path() -> Option<PathBuf> {
    project_directory().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Builds the effective configuration.
///
/// A missing config file is not an error. An unreadable or invalid one is
/// logged and ignored so a broken file never prevents scanning with explicit
/// flags.
pub fn load_config(path: Option<&Path>, overrides: Overrides) -> Result<ClientConfig> {
    let file = path.map(read_file_config).unwrap_or_default();
    resolve(file, overrides)
}

fn read_file_config(path: &Path) -> FileConfig {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "No config file, using defaults.");
            return FileConfig::default();
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Config file unreadable, ignoring it.");
            return FileConfig::default();
        }
    };
    match toml::from_str(&content) {
        Ok(file) => {
            info!(path = %path.display(), "Loaded config file.");
            file
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Config file invalid, ignoring it.");
            FileConfig::default()
        }
    }
}

fn resolve(file: FileConfig, overrides: Overrides) -> Result<ClientConfig> {
    let mut config = ClientConfig::default();

    if let Some(base) = overrides.base_url.or(file.base_url) {
        config.base_url = parse_base_url(&base)?;
    }
    if let Some(secs) = overrides.timeout_secs.or(file.timeout_secs) {
        config.timeout = Duration::from_secs(secs.max(1));
    }

    debug!(base_url = %config.base_url, timeout_secs = config.timeout.as_secs(), "Resolved client config.");
    Ok(config)
}

/// Parses a backend address, normalising it to a directory-style URL.
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim())?;
    if url.cannot_be_a_base() {
        return Err(ScanError::InvalidBaseUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}
