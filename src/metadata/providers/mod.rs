//! Concrete movie catalog implementations.
//!
//! Each submodule wraps a single external API and implements the
//! [`MovieCatalog`](super::MovieCatalog) trait.

pub mod tmdb;

pub use tmdb::TmdbProvider;
