//! Year discovery and per-movie fan-out.
//!
//! The [`MovieService`] fetches one discovery page for a year, then enriches
//! every movie on it concurrently through the configured [`FanOut`]. Only the
//! discovery call can fail; enrichment absorbs its own errors.

use std::sync::Arc;

use cutlist_core::config::Config;
use cutlist_core::{DiscoverQuery, EnrichedMovie, ReleaseYear, Result};
use tracing::{error, info};

use super::enrichment::enrich_movie;
use super::fan_out::FanOut;
use super::provider::MovieCatalog;
use super::providers::TmdbProvider;

/// Entry point for "movies released in a year, with their editors".
///
/// Cheap to clone; the catalog is shared behind an `Arc`.
#[derive(Clone)]
pub struct MovieService {
    catalog: Arc<dyn MovieCatalog>,
    fan_out: FanOut,
}

impl MovieService {
    /// Create a service over `catalog` with unbounded fan-out.
    pub fn new(catalog: Arc<dyn MovieCatalog>) -> Self {
        Self {
            catalog,
            fan_out: FanOut::unbounded(),
        }
    }

    /// Replace the fan-out policy used for credits lookups.
    pub fn with_fan_out(mut self, fan_out: FanOut) -> Self {
        self.fan_out = fan_out;
        self
    }

    /// Build a TMDB-backed service from application config.
    ///
    /// # Errors
    ///
    /// Returns [`cutlist_core::Error::Config`] when no API key is configured.
    pub fn from_config(config: &Config) -> Result<Self> {
        let provider = TmdbProvider::from_config(config)?;
        Ok(Self::new(Arc::new(provider))
            .with_fan_out(FanOut::from_limit(config.tmdb.max_concurrent_credits)))
    }

    pub fn catalog_name(&self) -> &'static str {
        self.catalog.name()
    }

    /// Movies whose primary release is in `year`, most popular first, each
    /// with its editors. `page` defaults to 1.
    ///
    /// The result has one entry per discovered movie, in discovery order.
    ///
    /// # Errors
    ///
    /// Returns the discovery call's error unchanged; no partial result is
    /// produced. Credits failures never surface here.
    pub async fn movies_by_year(
        &self,
        year: impl Into<ReleaseYear>,
        page: Option<u32>,
    ) -> Result<Vec<EnrichedMovie>> {
        let query = DiscoverQuery::new(year, page);

        let discovered = self.catalog.discover_movies(&query).await.map_err(|e| {
            error!(
                year = %query.year,
                page = query.page,
                catalog = self.catalog.name(),
                error = %e,
                "Error fetching movies"
            );
            e
        })?;

        let count = discovered.len();
        let catalog = self.catalog.as_ref();
        let movies = self
            .fan_out
            .map(discovered, |movie| enrich_movie(catalog, movie))
            .await;

        info!(year = %query.year, page = query.page, count, "Enriched discovery page");
        Ok(movies)
    }
}
