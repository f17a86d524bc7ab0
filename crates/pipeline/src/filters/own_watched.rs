//! Filter to keep only movies the user has watched themselves.
//!
//! The counterpart of `AlreadyWatchedFilter`: used on the favorites list,
//! where a favorite only counts if it is also on the watched list.

use crate::traits::Filter;
use profile::{Movie, Profile};

/// Keeps movies whose title is on the user's watched list.
pub struct OwnWatchedFilter;

impl Filter for OwnWatchedFilter {
    fn name(&self) -> &str {
        "OwnWatchedFilter"
    }

    fn apply(&self, movies: Vec<Movie>, profile: &Profile) -> Vec<Movie> {
        let watched = profile.watched_titles();
        movies
            .into_iter()
            .filter(|movie| watched.contains(movie.title.as_str()))
            .collect()
    }
}
