//! # Taskboard Shared Library
//!
//! This crate contains the data layer shared by the Taskboard API server:
//! connection pooling, migrations, models, and the slug helper.
//!
//! ## Module Organization
//!
//! - `db`: Connection pool and migration runner
//! - `models`: Database models and their CRUD operations
//! - `slug`: URL-safe slug derivation

pub mod db;
pub mod models;
pub mod slug;

/// Current version of the Taskboard shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
