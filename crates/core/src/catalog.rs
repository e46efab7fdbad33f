//! Bidirectional movie/actor index.
//!
//! [`Catalog`] keeps two mirrored maps, movie to cast and actor to credits,
//! and updates them together so that every credit is visible from both
//! sides. Actors with no remaining credits are dropped; movies stay until
//! explicitly removed, even with an empty cast.
//!
//! Every getter hands back an owned copy of the requested set. Callers can
//! mutate what they receive without touching the catalog.

use std::collections::{HashMap, HashSet};

use crate::config::CatalogConfig;
use crate::error::{CoreError, CoreResult};
use crate::types::{Actor, Movie};

/// Stores which actors are credited in which movies, queryable both ways.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    movies_to_actors: HashMap<Movie, HashSet<Actor>>,
    actors_to_movies: HashMap<Actor, HashSet<Movie>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty catalog with its maps pre-sized from `config`.
    pub fn with_config(config: &CatalogConfig) -> Self {
        Self {
            movies_to_actors: HashMap::with_capacity(config.movie_capacity),
            actors_to_movies: HashMap::with_capacity(config.actor_capacity),
        }
    }

    /* ----------------------------------------------------------------------
    Mutation
    ---------------------------------------------------------------------- */

    /// Release `movie` with exactly the given cast.
    ///
    /// Re-releasing a movie replaces its cast: credits from the previous
    /// release are removed first, so actors dropped from the cast lose this
    /// movie (and leave the catalog if it was their last credit).
    pub fn release_movie(&mut self, movie: Movie, actors: impl IntoIterator<Item = Actor>) {
        let cast: HashSet<Actor> = actors.into_iter().collect();
        let previous_cast = self.unlink_movie(&movie).map(|old| old.len());

        for actor in &cast {
            self.actors_to_movies
                .entry(actor.clone())
                .or_default()
                .insert(movie.clone());
        }

        tracing::debug!(
            movie = %movie,
            cast_size = cast.len(),
            previous_cast = ?previous_cast,
            "Released movie",
        );
        self.movies_to_actors.insert(movie, cast);
    }

    /// Remove `movie` and all of its credits.
    ///
    /// Returns `false` without changing anything if the movie was not
    /// released.
    pub fn remove_movie(&mut self, movie: &Movie) -> bool {
        match self.unlink_movie(movie) {
            Some(cast) => {
                tracing::debug!(movie = %movie, cast_size = cast.len(), "Removed movie");
                true
            }
            None => false,
        }
    }

    /// Credit `actor` in `movie`, releasing the movie if it is new.
    ///
    /// Tagging a pair that already exists changes nothing.
    pub fn tag_actor_in_movie(&mut self, movie: Movie, actor: Actor) {
        let added = self
            .movies_to_actors
            .entry(movie.clone())
            .or_default()
            .insert(actor.clone());

        if added {
            tracing::debug!(movie = %movie, actor = %actor, "Tagged actor in movie");
        }
        self.actors_to_movies.entry(actor).or_default().insert(movie);
    }

    /// Detach `movie` from both maps, returning its cast if it was released.
    ///
    /// Actors whose last credit was this movie are dropped.
    fn unlink_movie(&mut self, movie: &Movie) -> Option<HashSet<Actor>> {
        let cast = self.movies_to_actors.remove(movie)?;

        let mut orphaned_actors = 0usize;
        for actor in &cast {
            if let Some(credits) = self.actors_to_movies.get_mut(actor) {
                credits.remove(movie);
                if credits.is_empty() {
                    self.actors_to_movies.remove(actor);
                    orphaned_actors += 1;
                }
            }
        }

        tracing::trace!(movie = %movie, orphaned_actors, "Unlinked movie credits");
        Some(cast)
    }

    /* ----------------------------------------------------------------------
    Queries
    ---------------------------------------------------------------------- */

    /// Actors credited in `movie`.
    ///
    /// Unlike [`get_movies_for_actor`](Self::get_movies_for_actor), asking
    /// about a movie that is not released is an error: movies must be
    /// released before they are queried.
    pub fn get_actors_in_movie(&self, movie: &Movie) -> CoreResult<HashSet<Actor>> {
        match self.movies_to_actors.get(movie) {
            Some(cast) => Ok(cast.clone()),
            None => {
                tracing::trace!(movie = %movie, "Movie not found in catalog");
                Err(CoreError::NotFound {
                    entity: "movie",
                    key: movie.to_string(),
                })
            }
        }
    }

    /// Movies `actor` is credited in; empty for unknown actors.
    pub fn get_movies_for_actor(&self, actor: &Actor) -> HashSet<Movie> {
        self.actors_to_movies
            .get(actor)
            .cloned()
            .unwrap_or_default()
    }

    /// Every actor with at least one credit.
    pub fn get_all_actors_in_imdb(&self) -> HashSet<Actor> {
        self.actors_to_movies.keys().cloned().collect()
    }

    /// Every released movie, including movies with an empty cast.
    pub fn get_all_movies_in_imdb(&self) -> HashSet<Movie> {
        self.movies_to_actors.keys().cloned().collect()
    }

    /// Total number of (movie, actor) credits.
    ///
    /// If there are 2 movies, one with 1 actor and one with 6, this is 7.
    pub fn get_total_num_credits(&self) -> usize {
        self.actors_to_movies.values().map(HashSet::len).sum()
    }

    pub fn is_released(&self, movie: &Movie) -> bool {
        self.movies_to_actors.contains_key(movie)
    }

    pub fn movie_count(&self) -> usize {
        self.movies_to_actors.len()
    }

    pub fn actor_count(&self) -> usize {
        self.actors_to_movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies_to_actors.is_empty()
    }
}
