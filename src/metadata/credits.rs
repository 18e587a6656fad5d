//! Editor lookup for a single movie.

use cutlist_core::CrewMember;
use tracing::warn;

use super::provider::MovieCatalog;

/// Names of the crew members known for editing, in upstream order.
///
/// An editor row without a name is skipped; other rows are never inspected.
pub fn editors_from_crew(crew: Vec<CrewMember>) -> Vec<String> {
    crew.into_iter()
        .filter(CrewMember::is_editor)
        .filter_map(|member| member.name)
        .collect()
}

/// Fetch the editors of `movie_id`.
///
/// Never fails: any catalog error is logged and yields an empty list, so one
/// movie's missing credits cannot sink a whole discovery page. Callers cannot
/// tell "lookup failed" from "no editors".
pub async fn fetch_editors(catalog: &dyn MovieCatalog, movie_id: u64) -> Vec<String> {
    match catalog.movie_credits(movie_id).await {
        Ok(crew) => editors_from_crew(crew),
        Err(e) => {
            warn!(
                movie_id,
                catalog = catalog.name(),
                error = %e,
                "Failed to fetch credits; continuing without editors"
            );
            Vec::new()
        }
    }
}
