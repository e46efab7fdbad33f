//! End-to-end catalog scenarios through the public API.

use std::collections::HashSet;

use assert_matches::assert_matches;
use imdb_core::{Actor, Catalog, CoreError, Movie};

fn actors(names: &[&str]) -> HashSet<Actor> {
    names.iter().copied().map(Actor::new).collect()
}

fn movies(titles: &[&str]) -> HashSet<Movie> {
    titles.iter().copied().map(Movie::new).collect()
}

// ---------------------------------------------------------------------------
// Scenario A: release then query both directions
// ---------------------------------------------------------------------------

#[test]
fn release_is_visible_from_movie_and_actor() {
    let mut catalog = Catalog::new();
    catalog.release_movie(Movie::new("Inception"), actors(&["DiCaprio", "Page"]));

    assert_eq!(
        catalog.get_actors_in_movie(&Movie::new("Inception")).unwrap(),
        actors(&["DiCaprio", "Page"])
    );
    assert_eq!(
        catalog.get_movies_for_actor(&Actor::new("DiCaprio")),
        movies(&["Inception"])
    );
}

// ---------------------------------------------------------------------------
// Scenario B: unknown keys on an empty catalog
// ---------------------------------------------------------------------------

/// Unknown actors yield an empty set; unknown movies are an error.
#[test]
fn unknown_actor_is_empty_but_unknown_movie_fails() {
    let catalog = Catalog::new();

    assert!(catalog.get_movies_for_actor(&Actor::new("Unknown")).is_empty());
    assert_matches!(
        catalog.get_actors_in_movie(&Movie::new("Unknown")),
        Err(CoreError::NotFound { entity: "movie", .. })
    );
}

// ---------------------------------------------------------------------------
// Scenario C: tagging extends an existing cast
// ---------------------------------------------------------------------------

#[test]
fn tag_adds_to_released_cast() {
    let mut catalog = Catalog::new();
    catalog.release_movie(Movie::new("M"), actors(&["A"]));
    catalog.tag_actor_in_movie(Movie::new("M"), Actor::new("B"));

    assert_eq!(
        catalog.get_actors_in_movie(&Movie::new("M")).unwrap(),
        actors(&["A", "B"])
    );
}

// ---------------------------------------------------------------------------
// Scenario D: removal reports presence and clears orphaned actors
// ---------------------------------------------------------------------------

#[test]
fn remove_twice_then_no_actors_left() {
    let mut catalog = Catalog::new();
    catalog.release_movie(Movie::new("M"), actors(&["A", "B"]));

    assert!(catalog.remove_movie(&Movie::new("M")));
    assert!(!catalog.remove_movie(&Movie::new("M")));
    assert!(catalog.get_all_actors_in_imdb().is_empty());
    assert_eq!(catalog.get_total_num_credits(), 0);
}

// ---------------------------------------------------------------------------
// Scenario E: removal keeps an actor's other credits
// ---------------------------------------------------------------------------

#[test]
fn remove_one_of_two_credits() {
    let mut catalog = Catalog::new();
    catalog.tag_actor_in_movie(Movie::new("M1"), Actor::new("A"));
    catalog.tag_actor_in_movie(Movie::new("M2"), Actor::new("A"));
    catalog.remove_movie(&Movie::new("M1"));

    assert_eq!(catalog.get_movies_for_actor(&Actor::new("A")), movies(&["M2"]));
}

// ---------------------------------------------------------------------------
// Re-release replaces the whole cast
// ---------------------------------------------------------------------------

/// Actors dropped from a re-released movie lose that credit, and leave the
/// catalog when it was their only one.
#[test]
fn rerelease_with_new_cast_unlinks_dropped_actors() {
    let mut catalog = Catalog::new();
    catalog.release_movie(Movie::new("Dune"), actors(&["MacLachlan", "Sting"]));
    catalog.release_movie(Movie::new("Dune"), actors(&["Chalamet", "Zendaya"]));

    assert_eq!(
        catalog.get_actors_in_movie(&Movie::new("Dune")).unwrap(),
        actors(&["Chalamet", "Zendaya"])
    );
    assert!(catalog.get_movies_for_actor(&Actor::new("Sting")).is_empty());
    assert_eq!(
        catalog.get_all_actors_in_imdb(),
        actors(&["Chalamet", "Zendaya"])
    );
    assert_eq!(catalog.get_total_num_credits(), 2);
}

/// A removed movie is indistinguishable from one never released.
#[test]
fn removed_movie_reports_not_found() {
    let mut catalog = Catalog::new();
    catalog.release_movie(Movie::new("Heat"), actors(&["Pacino"]));
    catalog.remove_movie(&Movie::new("Heat"));

    let removed = catalog.get_actors_in_movie(&Movie::new("Heat")).unwrap_err();
    let never = catalog.get_actors_in_movie(&Movie::new("Ronin")).unwrap_err();
    assert_matches!(removed, CoreError::NotFound { entity: "movie", .. });
    assert_matches!(never, CoreError::NotFound { entity: "movie", .. });
    assert!(!catalog.is_released(&Movie::new("Heat")));
    assert!(catalog.get_all_movies_in_imdb().is_empty());
}
