//! Shared test harness for integration tests.
//!
//! Provides [`StubCatalog`], an in-memory [`MovieCatalog`], and
//! [`TestHarness`], which starts the Axum router on a random port for
//! HTTP-level testing.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use cutlist::metadata::{MovieCatalog, MovieService};
use cutlist::server::{create_router, AppContext};
use cutlist_core::{CrewMember, DiscoverQuery, DiscoveredMovie, Error, Result};
use parking_lot::Mutex;

/// In-memory catalog with scripted discovery and credits responses.
///
/// Discovery fails when no movies were scripted. Credits fail for ids
/// without a scripted crew.
#[derive(Default)]
pub struct StubCatalog {
    movies: Option<Vec<DiscoveredMovie>>,
    credits: HashMap<u64, Vec<CrewMember>>,
    pub queries: Mutex<Vec<DiscoverQuery>>,
}

impl StubCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discovery succeeds with an empty page.
    pub fn with_no_movies(mut self) -> Self {
        self.movies = Some(Vec::new());
        self
    }

    pub fn with_movie(mut self, movie: DiscoveredMovie) -> Self {
        self.movies.get_or_insert_with(Vec::new).push(movie);
        self
    }

    pub fn with_credits(mut self, movie_id: u64, crew: Vec<CrewMember>) -> Self {
        self.credits.insert(movie_id, crew);
        self
    }
}

#[async_trait]
impl MovieCatalog for StubCatalog {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn discover_movies(&self, query: &DiscoverQuery) -> Result<Vec<DiscoveredMovie>> {
        self.queries.lock().push(*query);
        self.movies
            .clone()
            .ok_or_else(|| Error::upstream("discover/movie", "API Error"))
    }

    async fn movie_credits(&self, movie_id: u64) -> Result<Vec<CrewMember>> {
        self.credits
            .get(&movie_id)
            .cloned()
            .ok_or_else(|| Error::upstream(format!("movie/{movie_id}/credits"), "Credits API Error"))
    }
}

pub fn movie(id: u64, title: &str, release_date: &str, vote_average: f64) -> DiscoveredMovie {
    DiscoveredMovie {
        id,
        title: title.to_string(),
        release_date: Some(release_date.to_string()),
        vote_average,
    }
}

pub fn crew(known_for: &str, name: &str) -> CrewMember {
    CrewMember {
        department: Some(known_for.to_string()),
        known_for_department: Some(known_for.to_string()),
        name: Some(name.to_string()),
    }
}

/// Test harness wrapping a running server backed by a [`StubCatalog`].
pub struct TestHarness {
    pub catalog: Arc<StubCatalog>,
    pub addr: SocketAddr,
}

impl TestHarness {
    /// Start an Axum server on a random port backed by `catalog`.
    pub async fn with_server(catalog: StubCatalog) -> Self {
        let catalog = Arc::new(catalog);
        let movies = MovieService::new(catalog.clone());
        let app = create_router(AppContext::new(movies));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind random port");
        let addr = listener.local_addr().expect("failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Self { catalog, addr }
    }

    pub fn url(&self, path_and_query: &str) -> String {
        format!("http://{}{}", self.addr, path_and_query)
    }
}
