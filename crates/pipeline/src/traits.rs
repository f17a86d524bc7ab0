//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to a list of movies.

use profile::{Movie, Profile};

/// Core trait for filtering movies.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - Filters take ownership of the Vec<Movie> and return a filtered Vec
/// - Filters keep the relative order of the movies they are given
/// - The profile is read-only context; filters never change it
/// - Any title set a filter needs is rebuilt on every call
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a list of movies.
    ///
    /// # Arguments
    /// * `movies` - The movies to filter (takes ownership)
    /// * `profile` - The user's profile, including their friends
    fn apply(&self, movies: Vec<Movie>, profile: &Profile) -> Vec<Movie>;
}
