//! `imdb-core` -- an in-memory index of which actors appear in which movies.
//!
//! The [`Catalog`] answers lookups in both directions (cast of a movie,
//! credits of an actor) and keeps the two views consistent under every
//! mutation.

pub mod catalog;
pub mod config;
pub mod error;
pub mod types;

pub use catalog::Catalog;
pub use config::CatalogConfig;
pub use error::{CoreError, CoreResult};
pub use types::{Actor, Movie};
