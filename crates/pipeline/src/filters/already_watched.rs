//! Filter to remove movies the user has already watched.
//!
//! There's no point in recommending a movie the user has already seen,
//! so this is the first filter of every friend-based query.

use crate::traits::Filter;
use profile::{Movie, Profile};

/// Removes movies whose title is on the user's watched list.
///
/// ## Algorithm
/// Builds the set of watched titles once per call for O(1) lookups.
pub struct AlreadyWatchedFilter;

impl Filter for AlreadyWatchedFilter {
    fn name(&self) -> &str {
        "AlreadyWatchedFilter"
    }

    fn apply(&self, movies: Vec<Movie>, profile: &Profile) -> Vec<Movie> {
        let watched = profile.watched_titles();
        movies
            .into_iter()
            .filter(|movie| !watched.contains(movie.title.as_str()))
            .collect()
    }
}
