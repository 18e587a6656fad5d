//! TMDB (The Movie Database) catalog.
//!
//! Implements [`MovieCatalog`] against the TMDB v3 REST API:
//!
//! - `GET /discover/movie` for a page of movies released in a given year,
//!   most popular first, in US English.
//! - `GET /movie/{id}/credits` for the crew of a single movie.
//!
//! There is no rate limiting or retry; a failed request is reported once.

use std::time::Duration;

use async_trait::async_trait;
use cutlist_core::config::Config;
use cutlist_core::{CrewMember, DiscoverQuery, DiscoveredMovie, Error, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::metadata::provider::MovieCatalog;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const LANGUAGE: &str = "en-US";
const SORT_BY: &str = "popularity.desc";

// ---------------------------------------------------------------------------
// TMDB API response types (private)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct TmdbDiscoverResponse {
    results: Vec<DiscoveredMovie>,
}

#[derive(Debug, Deserialize)]
struct TmdbCreditsResponse {
    crew: Vec<CrewMember>,
}

// ---------------------------------------------------------------------------
// Provider implementation
// ---------------------------------------------------------------------------

/// TMDB movie catalog.
///
/// # Examples
///
/// ```no_run
/// use cutlist::metadata::providers::TmdbProvider;
///
/// let provider = TmdbProvider::new("your-api-key", "https://api.themoviedb.org/3", None)?;
/// # Ok::<(), cutlist_core::Error>(())
/// ```
pub struct TmdbProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl TmdbProvider {
    /// Create a provider talking to `base_url` (no trailing slash needed).
    ///
    /// `timeout` bounds each request end to end; `None` waits indefinitely.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Build a provider from application config.
    ///
    /// Fails with [`Error::Config`] when no API key is configured.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.api_key()?;
        let timeout = match config.tmdb.request_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };
        Self::new(api_key, config.tmdb.base_url.as_str(), timeout)
    }

    /// GET `path` with the API key plus `extra_params`, decoding the JSON body.
    async fn get<T: DeserializeOwned>(&self, path: &str, extra_params: &[(&str, &str)]) -> Result<T> {
        let resource = path.trim_start_matches('/');
        let url = format!("{}{path}", self.base_url);

        let mut params: Vec<(&str, &str)> = vec![("api_key", self.api_key.as_str())];
        params.extend_from_slice(extra_params);

        debug!(resource, "TMDB request");

        // `without_url` keeps the api_key query parameter out of error text.
        let resp = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| Error::upstream(resource, e.without_url()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::UpstreamStatus {
                resource: resource.to_string(),
                status: status.as_u16(),
            });
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| Error::upstream(resource, e.without_url()))?;

        serde_json::from_slice(&body).map_err(|e| Error::decode(resource, e))
    }
}

#[async_trait]
impl MovieCatalog for TmdbProvider {
    fn name(&self) -> &'static str {
        "tmdb"
    }

    async fn discover_movies(&self, query: &DiscoverQuery) -> Result<Vec<DiscoveredMovie>> {
        let page = query.page.to_string();
        let year = query.year.to_string();
        let params = [
            ("language", LANGUAGE),
            ("sort_by", SORT_BY),
            ("page", page.as_str()),
            ("primary_release_year", year.as_str()),
        ];

        let body: TmdbDiscoverResponse = self.get("/discover/movie", &params).await?;
        debug!(year = %query.year, page = query.page, count = body.results.len(), "TMDB discover");
        Ok(body.results)
    }

    async fn movie_credits(&self, movie_id: u64) -> Result<Vec<CrewMember>> {
        let body: TmdbCreditsResponse = self.get(&format!("/movie/{movie_id}/credits"), &[]).await?;
        Ok(body.crew)
    }
}
