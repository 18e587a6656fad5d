//! Trait definition for movie catalogs.
//!
//! This module defines the [`MovieCatalog`] trait that upstream metadata
//! backends implement. The enrichment pipeline only talks to this trait, so
//! tests can swap the network for an in-memory double.

use async_trait::async_trait;
use cutlist_core::{CrewMember, DiscoverQuery, DiscoveredMovie, Result};

/// Async trait that all movie catalogs must implement.
///
/// Catalogs are shared across concurrent enrichment tasks behind an `Arc`,
/// so implementations must be `Send + Sync`.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Short, lowercase identifier for this catalog (e.g. `"tmdb"`).
    fn name(&self) -> &'static str;

    /// Fetch one page of movies whose primary release falls in `query.year`,
    /// most popular first.
    async fn discover_movies(&self, query: &DiscoverQuery) -> Result<Vec<DiscoveredMovie>>;

    /// Fetch the crew list for `movie_id`, in upstream order.
    async fn movie_credits(&self, movie_id: u64) -> Result<Vec<CrewMember>>;
}
