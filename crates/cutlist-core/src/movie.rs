//! Movie records exchanged with the upstream catalog and returned to clients.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Department label that marks a crew member as an editor.
pub const EDITING_DEPARTMENT: &str = "Editing";

// ---------------------------------------------------------------------------
// Upstream records
// ---------------------------------------------------------------------------

/// One entry of a discovery result page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveredMovie {
    pub id: u64,
    pub title: String,
    /// ISO calendar date (`YYYY-MM-DD`). TMDB sends an empty string, `null`,
    /// or nothing at all for unreleased titles.
    #[serde(default)]
    pub release_date: Option<String>,
    pub vote_average: f64,
}

/// One crew credit of a movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewMember {
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub known_for_department: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl CrewMember {
    /// `true` when the person is known for editing work.
    pub fn is_editor(&self) -> bool {
        self.known_for_department.as_deref() == Some(EDITING_DEPARTMENT)
    }
}

// ---------------------------------------------------------------------------
// Output record
// ---------------------------------------------------------------------------

/// A discovered movie with a human-readable release date and its editors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedMovie {
    pub title: String,
    /// Long US form, e.g. "January 1, 2019".
    pub release_date: String,
    pub vote_average: f64,
    /// Editor names in upstream crew order. Empty when unknown.
    pub editors: Vec<String>,
}

// ---------------------------------------------------------------------------
// Query types
// ---------------------------------------------------------------------------

/// Primary release year filter.
///
/// Built from an integer or parsed from a numeric string, so callers holding
/// either representation can drive a discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReleaseYear(i32);

impl ReleaseYear {
    pub fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for ReleaseYear {
    fn from(year: i32) -> Self {
        Self(year)
    }
}

impl FromStr for ReleaseYear {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<i32>()
            .map(Self)
            .map_err(|_| Error::Validation(format!("'{s}' is not a valid year")))
    }
}

impl fmt::Display for ReleaseYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parameters for a single discovery page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscoverQuery {
    pub year: ReleaseYear,
    /// 1-based page number.
    pub page: u32,
}

impl DiscoverQuery {
    pub const FIRST_PAGE: u32 = 1;

    /// Query for `year`, defaulting to the first page when `page` is `None`.
    pub fn new(year: impl Into<ReleaseYear>, page: Option<u32>) -> Self {
        Self {
            year: year.into(),
            page: page.unwrap_or(Self::FIRST_PAGE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_from_string_and_number_agree() {
        let parsed: ReleaseYear = "2019".parse().unwrap();
        assert_eq!(parsed, ReleaseYear::from(2019));
        assert_eq!(" 2019 ".parse::<ReleaseYear>().unwrap().get(), 2019);
    }

    #[test]
    fn year_rejects_non_numeric() {
        let err = "nineteen".parse::<ReleaseYear>().unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!("".parse::<ReleaseYear>().is_err());
        assert!("2019.5".parse::<ReleaseYear>().is_err());
    }

    #[test]
    fn query_page_defaults_to_one() {
        let q = DiscoverQuery::new(2019, None);
        assert_eq!(q.page, 1);
        assert_eq!(q.year.to_string(), "2019");

        let q = DiscoverQuery::new(2001, Some(3));
        assert_eq!(q.page, 3);
    }

    #[test]
    fn crew_member_editor_match_is_exact() {
        let editor: CrewMember = serde_json::from_value(serde_json::json!({
            "known_for_department": "Editing",
            "name": "Thelma Schoonmaker"
        }))
        .unwrap();
        assert!(editor.is_editor());

        let lower: CrewMember = serde_json::from_value(serde_json::json!({
            "known_for_department": "editing",
            "name": "Someone"
        }))
        .unwrap();
        assert!(!lower.is_editor());

        let null_dept: CrewMember = serde_json::from_value(serde_json::json!({
            "department": "Editing",
            "known_for_department": null,
            "name": "Nobody"
        }))
        .unwrap();
        assert!(!null_dept.is_editor());
    }

    #[test]
    fn discovered_movie_tolerates_missing_or_null_release_date() {
        let missing: DiscoveredMovie = serde_json::from_value(serde_json::json!({
            "id": 7,
            "title": "Untitled",
            "vote_average": 0.0,
            "popularity": 12.5
        }))
        .unwrap();
        assert_eq!(missing.release_date, None);

        let null: DiscoveredMovie = serde_json::from_value(serde_json::json!({
            "id": 8,
            "title": "Also Untitled",
            "release_date": null,
            "vote_average": 0.0
        }))
        .unwrap();
        assert_eq!(null.release_date, None);
    }

    #[test]
    fn crew_member_tolerates_null_name() {
        let crew: Vec<CrewMember> = serde_json::from_value(serde_json::json!([
            {"known_for_department": "Editing", "name": "Ed"},
            {"known_for_department": "Sound", "name": null},
            {"known_for_department": "Sound"}
        ]))
        .unwrap();
        assert_eq!(crew[0].name.as_deref(), Some("Ed"));
        assert_eq!(crew[1].name, None);
        assert_eq!(crew[2].name, None);
    }

    #[test]
    fn enriched_movie_serializes_with_expected_keys() {
        let movie = EnrichedMovie {
            title: "Test Movie".into(),
            release_date: "January 1, 2019".into(),
            vote_average: 8.5,
            editors: vec!["Editor 1".into()],
        };
        let json = serde_json::to_value(&movie).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "Test Movie",
                "release_date": "January 1, 2019",
                "vote_average": 8.5,
                "editors": ["Editor 1"]
            })
        );
    }
}
