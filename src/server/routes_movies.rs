use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use chrono::{Datelike, Utc};
use cutlist_core::{EnrichedMovie, Error, ReleaseYear};
use serde::Deserialize;

use crate::server::error::AppError;
use crate::server::AppContext;

const FETCH_FAILED: &str = "An error occurred while fetching movies";

pub fn movie_routes() -> Router<AppContext> {
    Router::new().route("/movies", get(list_movies))
}

#[derive(Debug, Deserialize)]
struct MoviesQuery {
    year: Option<String>,
    page: Option<String>,
}

async fn list_movies(
    State(ctx): State<AppContext>,
    query: Result<Query<MoviesQuery>, QueryRejection>,
) -> Result<Json<Vec<EnrichedMovie>>, AppError> {
    let Query(params) = query.map_err(|e| Error::Validation(e.body_text()))?;

    let year = parse_year(params.year.as_deref(), Utc::now().year())?;
    let page = parse_page(params.page.as_deref())?;

    let movies = ctx
        .movies
        .movies_by_year(year, page)
        .await
        .map_err(|e| AppError::new(e).with_public_message(FETCH_FAILED))?;

    Ok(Json(movies))
}

/// Validate the `year` query parameter: present, an integer once trimmed,
/// and not after `current_year`.
fn parse_year(raw: Option<&str>, current_year: i32) -> Result<ReleaseYear, Error> {
    let raw = raw.ok_or_else(|| {
        Error::Validation("Year parameter is required and must be a string".into())
    })?;

    let invalid =
        || Error::Validation(format!("Year must be a valid year and not more than {current_year}"));

    let year: ReleaseYear = raw.parse().map_err(|_| invalid())?;
    if year.get() > current_year {
        return Err(invalid());
    }
    Ok(year)
}

/// Validate the optional `page` query parameter (1-based).
fn parse_page(raw: Option<&str>) -> Result<Option<u32>, Error> {
    match raw {
        None => Ok(None),
        Some(raw) => match raw.trim().parse::<u32>() {
            Ok(page) if page >= 1 => Ok(Some(page)),
            _ => Err(Error::Validation("Page must be a positive integer".into())),
        },
    }
}
