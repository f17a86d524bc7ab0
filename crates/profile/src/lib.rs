//! # Profile Crate
//!
//! This crate holds the data a viewing profile is made of and the
//! operations that change it.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, MovieDraft, Profile) and the
//!   blank-field predicate used to validate movies
//! - **watch**: In-place watch-state transitions (watchlist to watched)
//! - **parser**: Read and write profile documents as JSON
//! - **error**: Error types for profile loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use profile::{create_movie, Profile};
//!
//! let mut user = Profile::new();
//! if let Some(movie) = create_movie("Inception", "Sci-Fi", 9.0) {
//!     user.add_to_watchlist(movie);
//! }
//! user.watch_movie("Inception");
//!
//! assert_eq!(user.watched.len(), 1);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod watch;

// Re-export commonly used types for convenience
pub use error::{ProfileError, Result};
pub use types::{
    // Type aliases
    Host,
    // Core types
    Movie,
    MovieDraft,
    Profile,
    // Validation
    EmptyOrZero,
    create_movie,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_creation() {
        let profile = Profile::new();

        assert!(profile.watched.is_empty());
        assert!(profile.watchlist.is_empty());
        assert!(profile.favorites.is_empty());
        assert!(profile.subscriptions.is_empty());
        assert!(profile.friends.is_empty());
    }

    #[test]
    fn test_watchlist_flow() {
        let mut profile = Profile::new();

        let movie = create_movie("Inception", "Sci-Fi", 9.0).unwrap();
        profile.add_to_watchlist(movie.clone());
        profile.watch_movie("Inception");

        assert_eq!(profile.watched, vec![movie]);
        assert!(profile.watchlist.is_empty());
    }

    #[test]
    fn test_unknown_title_queries() {
        let mut profile = Profile::new();
        profile.watch_movie("Missing");

        // Absence is a no-op, not an error
        assert_eq!(profile, Profile::new());
    }
}
