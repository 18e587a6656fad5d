//! Per-movie enrichment: long-form release date plus editor names.

use chrono::NaiveDate;
use cutlist_core::{DiscoveredMovie, EnrichedMovie};
use tracing::debug;

use super::credits::fetch_editors;
use super::provider::MovieCatalog;

/// Format an ISO `YYYY-MM-DD` date as long US English, e.g. "January 1, 2019".
///
/// The date is treated as a plain calendar date, so the host time zone can
/// never move it to a neighbouring day. Input that is not a calendar date
/// (TMDB sends `""` for unreleased titles) is returned unchanged; an absent
/// date becomes `""`.
pub fn format_release_date(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(e) => {
            debug!(release_date = raw, error = %e, "Release date is not an ISO date; passing through");
            raw.to_string()
        }
    }
}

/// Attach editors and a readable release date to `movie`.
///
/// Infallible: credit lookup failures surface as an empty editor list.
pub async fn enrich_movie(catalog: &dyn MovieCatalog, movie: DiscoveredMovie) -> EnrichedMovie {
    let editors = fetch_editors(catalog, movie.id).await;

    EnrichedMovie {
        release_date: format_release_date(movie.release_date.as_deref()),
        title: movie.title,
        vote_average: movie.vote_average,
        editors,
    }
}
