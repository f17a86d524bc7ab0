//! Recommendation engine for a user and their friends.
//!
//! This crate provides:
//! - Filter trait and implementations for narrowing a list of movies
//! - FilterPipeline for composing filters
//! - Aggregate statistics over the watched list
//! - The recommendation queries, each built from a source list and a pipeline
//!
//! ## Architecture
//! Every query runs in the same stages:
//! 1. Pick a source list (the user's watched list, the user's favorites, or
//!    the friends' watched movies deduplicated by title)
//! 2. Filters remove movies (already watched, watched by friends, not
//!    streamable, wrong genre)
//! 3. The survivors are returned in source order
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{get_available_recs, get_most_watched_genre};
//! use profile::Profile;
//!
//! let profile = Profile::load_from_file(Path::new("data/sample_profile.json"))?;
//!
//! let genre = get_most_watched_genre(&profile);
//! let recs = get_available_recs(&profile);
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod stats;
pub mod recommend;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use stats::{get_most_watched_genre, get_watched_avg_rating, most_frequent};
pub use recommend::{
    get_available_recs, get_friends_unique_watched, get_new_rec_by_genre, get_rec_from_favorites,
    get_unique_watched,
};
