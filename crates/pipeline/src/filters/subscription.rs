//! Filter to keep only movies the user can stream.
//!
//! A movie is streamable when its host is one of the user's
//! subscriptions. Movies without a host are never streamable.

use crate::traits::Filter;
use profile::{Movie, Profile};

/// Keeps movies hosted on one of the user's subscriptions.
pub struct SubscriptionFilter;

impl Filter for SubscriptionFilter {
    fn name(&self) -> &str {
        "SubscriptionFilter"
    }

    fn apply(&self, movies: Vec<Movie>, profile: &Profile) -> Vec<Movie> {
        movies
            .into_iter()
            .filter(|movie| {
                movie
                    .host
                    .as_ref()
                    .is_some_and(|host| profile.subscriptions.contains(host))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str) -> Movie {
        Movie::create(title, "Horror", 4.0).unwrap()
    }

    #[test]
    fn test_subscription_filter() {
        let mut profile = Profile::new();
        profile.add_subscription("netflix").add_subscription("hulu");

        let movies = vec![
            movie("A").with_host("netflix"),
            movie("B").with_host("disney+"),
            movie("C").with_host("hulu"),
            movie("D"), // no host
        ];

        let filtered = SubscriptionFilter.apply(movies, &profile);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].title, "A");
        assert_eq!(filtered[1].title, "C");
    }

    #[test]
    fn test_no_subscriptions() {
        let filtered = SubscriptionFilter.apply(vec![movie("A").with_host("netflix")], &Profile::new());
        assert!(filtered.is_empty());
    }
}
