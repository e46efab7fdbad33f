//! Key types stored in the catalog.
//!
//! [`Movie`] and [`Actor`] are opaque identifiers. The catalog only relies on
//! their equality, hashing and ordering; any string is a valid key.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Movie
// ---------------------------------------------------------------------------

/// A movie, identified by its title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Movie(String);

impl Movie {
    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    /// The title this movie is keyed by.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Movie {
    fn from(title: &str) -> Self {
        Self::new(title)
    }
}

impl From<String> for Movie {
    fn from(title: String) -> Self {
        Self(title)
    }
}

// ---------------------------------------------------------------------------
// Actor
// ---------------------------------------------------------------------------

/// An actor, identified by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Actor(String);

impl Actor {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Actor {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Actor {
    fn from(name: String) -> Self {
        Self(name)
    }
}
