//! Filter implementations for the recommendation pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod already_watched;
pub mod genre_preference;
pub mod own_watched;
pub mod subscription;
pub mod watched_by_friends;

// Re-export for convenience
pub use already_watched::AlreadyWatchedFilter;
pub use genre_preference::GenrePreferenceFilter;
pub use own_watched::OwnWatchedFilter;
pub use subscription::SubscriptionFilter;
pub use watched_by_friends::WatchedByFriendsFilter;
