//! Filter to keep only movies in the user's preferred genre.
//!
//! The preferred genre is the one that appears most often on the user's
//! watched list (see `stats::get_most_watched_genre`).

use crate::stats::get_most_watched_genre;
use crate::traits::Filter;
use profile::{Movie, Profile};

/// Keeps movies whose genre is the user's most watched genre.
///
/// ## Algorithm
/// 1. Compute the user's most watched genre
/// 2. If the user has watched nothing there is no preference, so nothing
///    is kept
/// 3. Otherwise keep movies with exactly that genre
pub struct GenrePreferenceFilter;

impl Filter for GenrePreferenceFilter {
    fn name(&self) -> &str {
        "GenrePreferenceFilter"
    }

    fn apply(&self, movies: Vec<Movie>, profile: &Profile) -> Vec<Movie> {
        let Some(genre) = get_most_watched_genre(profile) else {
            return Vec::new();
        };

        movies
            .into_iter()
            .filter(|movie| movie.genre == genre)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, genre: &str) -> Movie {
        Movie::create(title, genre, 4.0).unwrap()
    }

    #[test]
    fn test_genre_preference_filter() {
        let mut profile = Profile::new();
        profile
            .add_to_watched(movie("W1", "Action"))
            .add_to_watched(movie("W2", "Drama"))
            .add_to_watched(movie("W3", "Action"));

        let movies = vec![
            movie("A", "Action"), // should match
            movie("B", "Drama"),  // should NOT match
            movie("C", "Action"), // should match
        ];

        let filtered = GenrePreferenceFilter.apply(movies, &profile);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].title, "A");
        assert_eq!(filtered[1].title, "C");
    }

    #[test]
    fn test_no_watched_history() {
        let filtered = GenrePreferenceFilter.apply(vec![movie("A", "Action")], &Profile::new());
        assert!(filtered.is_empty());
    }
}
