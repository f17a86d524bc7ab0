//! Watch-state transitions.
//!
//! These are the only operations that mutate a profile. Each one works in
//! place and hands back the same profile so calls can be chained.

use crate::types::{Movie, Profile};
use tracing::debug;

impl Profile {
    /// Append a movie to the watched list. Duplicates are not checked.
    pub fn add_to_watched(&mut self, movie: Movie) -> &mut Self {
        self.watched.push(movie);
        self
    }

    /// Append a movie to the watchlist. Duplicates are not checked.
    pub fn add_to_watchlist(&mut self, movie: Movie) -> &mut Self {
        self.watchlist.push(movie);
        self
    }

    /// Move a movie from the watchlist to the end of the watched list.
    ///
    /// Only the first watchlist entry with a matching title is moved. If the
    /// title is not on the watchlist the profile is left untouched.
    pub fn watch_movie(&mut self, title: &str) -> &mut Self {
        match self.watchlist.iter().position(|movie| movie.title == title) {
            Some(idx) => {
                let movie = self.watchlist.remove(idx);
                self.add_to_watched(movie)
            }
            None => {
                debug!(title, "title not on watchlist, nothing to move");
                self
            }
        }
    }
}
