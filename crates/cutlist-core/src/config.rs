//! Application configuration types.
//!
//! The top-level [`Config`] is deserialized from TOML and then overlaid with
//! environment variables. Every section defaults sensibly, so an empty file
//! is valid; only the TMDB credential has no usable default.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable carrying the TMDB v3 API key.
pub const API_KEY_ENV: &str = "TMDB_API_KEY";

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub tmdb: TmdbConfig,
}

impl Config {
    /// Deserialize a `Config` from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| Error::Config(format!("config parse error: {e}")))
    }

    /// Overlay values from the environment.
    ///
    /// `lookup` is usually `|k| std::env::var(k).ok()`; tests pass a map
    /// instead of mutating the process environment. Unparseable numeric
    /// values are reported as [`Error::Config`].
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_ENV) {
            self.tmdb.api_key = Some(key);
        }
        if let Some(url) = lookup("TMDB_BASE_URL") {
            self.tmdb.base_url = url;
        }
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("PORT '{port}' is not a valid port")))?;
        }
        Ok(())
    }

    /// The TMDB credential, or [`Error::Config`] when it is absent or blank.
    pub fn api_key(&self) -> Result<&str> {
        match self.tmdb.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(Error::Config(format!(
                "{API_KEY_ENV} is not defined in the environment variables"
            ))),
        }
    }

    /// Return a list of validation warnings (non-fatal issues).
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.server.port == 0 {
            warnings.push("server.port is 0; a random port will be assigned".into());
        }

        if self.api_key().is_err() {
            warnings.push(format!("tmdb.api_key is not set (set {API_KEY_ENV})"));
        }

        if !self.tmdb.base_url.starts_with("http://") && !self.tmdb.base_url.starts_with("https://") {
            warnings.push(format!(
                "tmdb.base_url '{}' is not an http(s) URL",
                self.tmdb.base_url
            ));
        }

        if self.tmdb.max_concurrent_credits == Some(0) {
            warnings.push("tmdb.max_concurrent_credits is 0; treating as unbounded".into());
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
        }
    }
}

/// Upstream TMDB settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TmdbConfig {
    /// v3 API key. Usually supplied via `TMDB_API_KEY`.
    pub api_key: Option<String>,
    pub base_url: String,
    /// Per-request timeout in seconds. `0` (the default) waits indefinitely.
    pub request_timeout_secs: u64,
    /// Cap on concurrent credits lookups per discovery page. `None` (the
    /// default) fans out to every movie on the page at once.
    pub max_concurrent_credits: Option<usize>,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.themoviedb.org/3".into(),
            request_timeout_secs: 0,
            max_concurrent_credits: None,
        }
    }
}
