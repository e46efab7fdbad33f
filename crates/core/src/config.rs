//! Catalog configuration loaded from environment variables.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Env var holding the number of movies to pre-allocate room for.
pub const MOVIE_CAPACITY_VAR: &str = "CATALOG_MOVIE_CAPACITY";

/// Env var holding the number of actors to pre-allocate room for.
pub const ACTOR_CAPACITY_VAR: &str = "CATALOG_ACTOR_CAPACITY";

/// Sizing hints for a [`Catalog`](crate::Catalog).
///
/// Capacities only pre-size the internal maps; the catalog grows past them
/// as needed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Expected number of released movies (default: `0`).
    pub movie_capacity: usize,
    /// Expected number of credited actors (default: `0`).
    pub actor_capacity: usize,
}

impl CatalogConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default |
    /// |--------------------------|---------|
    /// | `CATALOG_MOVIE_CAPACITY` | `0`     |
    /// | `CATALOG_ACTOR_CAPACITY` | `0`     |
    pub fn from_env() -> CoreResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    ///
    /// A missing variable falls back to its default. A present but
    /// unparseable value is a [`CoreError::Validation`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> CoreResult<Self> {
        let movie_capacity = parse_capacity(&lookup, MOVIE_CAPACITY_VAR)?;
        let actor_capacity = parse_capacity(&lookup, ACTOR_CAPACITY_VAR)?;

        Ok(Self {
            movie_capacity,
            actor_capacity,
        })
    }
}

fn parse_capacity(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> CoreResult<usize> {
    match lookup(name) {
        None => Ok(0),
        Some(raw) => raw.trim().parse().map_err(|_| {
            CoreError::Validation(format!(
                "{name} must be a non-negative integer, got '{raw}'"
            ))
        }),
    }
}
