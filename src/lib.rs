//! Cutlist - movies released in a year, with their editors
//!
//! This library crate exposes the core functionality for integration testing.

pub mod config;
pub mod metadata;
pub mod server;
