//! Core domain types for a viewing profile.
//!
//! This module defines the data structures every other crate works on:
//! - `Movie`: a value type identified by its title
//! - `MovieDraft`: a movie whose fields may be absent, validated into a `Movie`
//! - `Profile`: one person's watched list, watchlist, favorites,
//!   subscriptions and friends
//!
//! A user and their friends share the `Profile` type. Only a friend's
//! `watched` list is ever read by the recommendation queries.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};

// =============================================================================
// Type Aliases
// =============================================================================

/// Identifier of the subscription service that carries a movie
pub type Host = String;

// =============================================================================
// Validation
// =============================================================================

/// Predicate used to reject blank movie fields.
///
/// An empty string, a zero rating and an absent value are all treated as
/// blank. Any other value (including negative ratings and NaN) is accepted.
pub trait EmptyOrZero {
    fn is_empty_or_zero(&self) -> bool;
}

impl EmptyOrZero for str {
    fn is_empty_or_zero(&self) -> bool {
        self.is_empty()
    }
}

impl EmptyOrZero for String {
    fn is_empty_or_zero(&self) -> bool {
        self.is_empty()
    }
}

impl EmptyOrZero for f64 {
    fn is_empty_or_zero(&self) -> bool {
        // -0.0 compares equal to 0.0
        *self == 0.0
    }
}

impl<T: EmptyOrZero> EmptyOrZero for Option<T> {
    fn is_empty_or_zero(&self) -> bool {
        match self {
            Some(value) => value.is_empty_or_zero(),
            None => true,
        }
    }
}

// =============================================================================
// Movie-related Types
// =============================================================================

/// A movie on one of the profile's lists.
///
/// Two movies are the same movie when their titles are equal; genre,
/// rating and host play no part in identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub genre: String,
    pub rating: f64,
    /// Subscription service carrying the movie.
    ///
    /// Only recommendable movies (those on a friend's watched list) need
    /// one; a movie without a host is never available to stream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<Host>,
}

impl Movie {
    /// Validate and build a movie. Returns `None` if any field is blank.
    pub fn create(title: &str, genre: &str, rating: f64) -> Option<Self> {
        MovieDraft {
            title: Some(title.to_string()),
            genre: Some(genre.to_string()),
            rating: Some(rating),
            host: None,
        }
        .build()
    }

    /// Attach the subscription service that carries this movie
    pub fn with_host(mut self, host: impl Into<Host>) -> Self {
        self.host = Some(host.into());
        self
    }
}

/// Build a movie from a title, genre and rating.
///
/// Returns `None` when the title or genre is empty or the rating is zero;
/// callers must check for it before using the movie.
pub fn create_movie(title: &str, genre: &str, rating: f64) -> Option<Movie> {
    Movie::create(title, genre, rating)
}

/// A movie whose fields may be missing, as found in a loosely typed document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieDraft {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub host: Option<Host>,
}

impl MovieDraft {
    /// Turn the draft into a `Movie`.
    ///
    /// Absent, empty and zero fields are all rejected the same way. An empty
    /// host is kept as no host at all.
    pub fn build(self) -> Option<Movie> {
        if self.title.is_empty_or_zero()
            || self.genre.is_empty_or_zero()
            || self.rating.is_empty_or_zero()
        {
            return None;
        }

        Some(Movie {
            title: self.title?,
            genre: self.genre?,
            rating: self.rating?,
            host: self.host.filter(|host| !host.is_empty()),
        })
    }
}

// =============================================================================
// Profile
// =============================================================================

/// One person's movie activity.
///
/// The caller owns every profile, including the friends nested inside it.
/// Mutating operations (see `watch.rs`) work in place on the lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Profile {
    pub watched: Vec<Movie>,
    pub watchlist: Vec<Movie>,
    pub favorites: Vec<Movie>,
    pub subscriptions: BTreeSet<Host>,
    pub friends: Vec<Profile>,
}

impl Profile {
    /// Creates a new, empty Profile
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a friend whose watched list feeds the recommendation queries
    pub fn add_friend(&mut self, friend: Profile) -> &mut Self {
        self.friends.push(friend);
        self
    }

    /// Subscribe to a streaming service
    pub fn add_subscription(&mut self, host: impl Into<Host>) -> &mut Self {
        self.subscriptions.insert(host.into());
        self
    }

    /// Append a movie to the favorites list
    pub fn add_to_favorites(&mut self, movie: Movie) -> &mut Self {
        self.favorites.push(movie);
        self
    }

    /// Titles on this profile's watched list.
    ///
    /// Rebuilt on every call so it always reflects the current list.
    pub fn watched_titles(&self) -> HashSet<&str> {
        self.watched.iter().map(|movie| movie.title.as_str()).collect()
    }

    /// Titles watched by any friend (one level deep).
    pub fn friends_watched_titles(&self) -> HashSet<&str> {
        self.friends
            .iter()
            .flat_map(|friend| friend.watched.iter())
            .map(|movie| movie.title.as_str())
            .collect()
    }

    /// Every movie the friends have watched, one entry per title.
    ///
    /// ## Algorithm
    /// Friends are scanned in order, and each friend's watched list in order.
    /// A title keeps the position where it was first seen, but a later movie
    /// with the same title replaces the stored movie.
    pub fn friends_watched(&self) -> Vec<Movie> {
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut movies: Vec<Movie> = Vec::new();

        for movie in self.friends.iter().flat_map(|friend| friend.watched.iter()) {
            match positions.get(movie.title.as_str()) {
                Some(&idx) => movies[idx] = movie.clone(),
                None => {
                    positions.insert(movie.title.as_str(), movies.len());
                    movies.push(movie.clone());
                }
            }
        }

        movies
    }
}
