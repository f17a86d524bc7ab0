//! Filter to remove movies any friend has watched.

use crate::traits::Filter;
use profile::{Movie, Profile};

/// Removes movies whose title appears on any friend's watched list.
///
/// Only direct friends are consulted; their own friends are never read.
pub struct WatchedByFriendsFilter;

impl Filter for WatchedByFriendsFilter {
    fn name(&self) -> &str {
        "WatchedByFriendsFilter"
    }

    fn apply(&self, movies: Vec<Movie>, profile: &Profile) -> Vec<Movie> {
        let friends_watched = profile.friends_watched_titles();
        movies
            .into_iter()
            .filter(|movie| !friends_watched.contains(movie.title.as_str()))
            .collect()
    }
}
