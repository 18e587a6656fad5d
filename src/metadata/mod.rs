//! Movie metadata lookup and enrichment.
//!
//! # Module layout
//!
//! - [`provider`] -- The [`MovieCatalog`] trait upstream backends implement.
//! - [`providers`] -- Concrete catalogs (TMDB).
//! - [`credits`] -- Editor extraction from a movie's crew.
//! - [`enrichment`] -- Release-date formatting and per-movie enrichment.
//! - [`fan_out`] -- Order-preserving concurrent map.
//! - [`discovery`] -- [`MovieService`], the year discovery orchestrator.

pub mod credits;
pub mod discovery;
pub mod enrichment;
pub mod fan_out;
pub mod provider;
pub mod providers;

pub use discovery::MovieService;
pub use fan_out::FanOut;
pub use provider::MovieCatalog;
