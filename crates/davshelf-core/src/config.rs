//! Application configuration.
//!
//! The top-level [`Config`] is deserialized from TOML and then overlaid with
//! environment variables. Every section defaults sensibly so an empty file is
//! valid, and every upstream value is optional: missing WebDAV settings
//! switch the listing to fixture data and a missing TMDB key disables
//! metadata lookups.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::player::{PlayerRegistry, DEFAULT_PLAYER};

// ---------------------------------------------------------------------------
// Environment keys
// ---------------------------------------------------------------------------

pub const ENV_WEBDAV_URL: &str = "RD_WEBDAV_URL";
pub const ENV_WEBDAV_USERNAME: &str = "RD_WEBDAV_USERNAME";
pub const ENV_WEBDAV_PASSWORD: &str = "RD_WEBDAV_PASSWORD";
pub const ENV_TMDB_API_KEY: &str = "TMDB_API_KEY";
pub const ENV_HOST: &str = "DAVSHELF_HOST";
pub const ENV_PORT: &str = "DAVSHELF_PORT";

const DEFAULT_CONFIG_PATHS: [&str; 4] = [
    "./davshelf.toml",
    "./config.toml",
    "~/.config/davshelf/config.toml",
    "/etc/davshelf/config.toml",
];

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub webdav: WebdavConfig,
    pub tmdb: TmdbConfig,
}

impl Config {
    /// Deserialize a `Config` from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| Error::Config(format!("config parse error: {e}")))
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read config file {}: {e}", path.display()))
        })?;
        Self::from_toml(&contents)
    }

    /// Load from `custom_path` if given, otherwise from the first default
    /// location that exists, otherwise return defaults.
    ///
    /// An explicit path that cannot be loaded is an error; missing default
    /// files are not.
    pub fn load_or_default(custom_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = custom_path {
            return Self::load(path);
        }

        for path_str in DEFAULT_CONFIG_PATHS {
            let expanded = shellexpand::tilde(path_str);
            let path = Path::new(expanded.as_ref());
            if path.exists() {
                tracing::info!("Loading config from {}", path.display());
                return Self::load(path);
            }
        }

        tracing::debug!("No config file found; using defaults");
        Ok(Self::default())
    }

    /// Overlay values from the process environment.
    pub fn apply_process_env(&mut self) {
        self.apply_env(|key| std::env::var(key).ok());
    }

    /// Overlay values produced by `lookup`. Empty values are ignored so an
    /// exported-but-blank variable does not clobber the file.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(url) = get(ENV_WEBDAV_URL) {
            self.webdav.url = Some(url);
        }
        if let Some(username) = get(ENV_WEBDAV_USERNAME) {
            self.webdav.username = Some(username);
        }
        if let Some(password) = get(ENV_WEBDAV_PASSWORD) {
            self.webdav.password = Some(password);
        }
        if let Some(key) = get(ENV_TMDB_API_KEY) {
            self.tmdb.api_key = Some(key);
        }
        if let Some(host) = get(ENV_HOST) {
            self.server.host = host;
        }
        if let Some(port) = get(ENV_PORT) {
            match port.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => tracing::warn!("Ignoring invalid {ENV_PORT} value: {port:?}"),
            }
        }
    }

    /// Return a list of validation warnings (non-fatal issues).
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.server.port == 0 {
            warnings.push("server.port is 0; a random port will be assigned".into());
        }

        if !PlayerRegistry::standard().contains(&self.server.default_player) {
            warnings.push(format!(
                "server.default_player '{}' is not a known player; using '{DEFAULT_PLAYER}'",
                self.server.default_player
            ));
        }

        let set = [
            self.webdav.endpoint().is_some(),
            non_empty(&self.webdav.username).is_some(),
            non_empty(&self.webdav.password).is_some(),
        ];
        let count = set.iter().filter(|s| **s).count();
        if count > 0 && count < set.len() {
            warnings.push(
                "webdav.url, webdav.username and webdav.password must all be set for live listing; \
                 serving fixture data"
                    .into(),
            );
        }

        if let Some(url) = self.webdav.endpoint() {
            if !url.contains("://") {
                warnings.push(format!("webdav.url '{url}' has no scheme"));
            } else if url.starts_with("http://") && self.webdav.credentials().is_some() {
                warnings.push(
                    "webdav.url uses plain http; credentials embedded in play links are sent unencrypted"
                        .into(),
                );
            }
        }

        if self.webdav.timeout_secs == 0 || self.tmdb.timeout_secs == 0 {
            warnings.push("a timeout of 0 seconds disables the request bound".into());
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Player used when the request does not pick a known one.
    pub default_player: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            default_player: DEFAULT_PLAYER.to_string(),
        }
    }
}

/// WebDAV endpoint and credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebdavConfig {
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub timeout_secs: u64,
    /// JSON list of `{name, path}` records served when live listing fails.
    pub fixture_path: PathBuf,
}

impl Default for WebdavConfig {
    fn default() -> Self {
        Self {
            url: None,
            username: None,
            password: None,
            timeout_secs: 15,
            fixture_path: PathBuf::from("sample_data/sample_files.json"),
        }
    }
}

impl WebdavConfig {
    /// The endpoint base address, if configured and non-empty.
    pub fn endpoint(&self) -> Option<&str> {
        non_empty(&self.url)
    }

    /// Username and password, only when both are configured and non-empty.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        Some((non_empty(&self.username)?, non_empty(&self.password)?))
    }

    /// True when endpoint and both credentials are present.
    pub fn is_live(&self) -> bool {
        self.endpoint().is_some() && self.credentials().is_some()
    }
}

/// TMDB search settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TmdbConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub language: String,
    pub timeout_secs: u64,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.themoviedb.org/3".to_string(),
            language: "en-US".to_string(),
            timeout_secs: 15,
        }
    }
}

impl TmdbConfig {
    /// The API key, if configured and non-empty.
    pub fn api_key(&self) -> Option<&str> {
        non_empty(&self.api_key)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
