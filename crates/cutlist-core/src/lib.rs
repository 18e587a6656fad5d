//! cutlist-core: shared errors, configuration, and movie records.
//!
//! This crate is the foundational dependency for the `cutlist` service,
//! providing a unified error type, the application configuration, and the
//! records exchanged with the upstream movie catalog.

pub mod config;
pub mod error;
pub mod movie;

// Re-export the most commonly used items at the crate root.
pub use error::{Error, Result};
pub use movie::*;
