//! Recommendation queries over a user and their friends.
//!
//! Every query is a pure function of the profile: it clones the source list
//! it starts from, runs it through a `FilterPipeline`, and returns the
//! survivors in their original order. Nothing is cached between calls.
//!
//! ## Sources and filters
//!
//! | Query                          | Source                      | Filters                                              |
//! |--------------------------------|-----------------------------|------------------------------------------------------|
//! | `get_unique_watched`           | user's watched list         | WatchedByFriends                                     |
//! | `get_friends_unique_watched`   | `Profile::friends_watched`  | AlreadyWatched                                       |
//! | `get_available_recs`           | `Profile::friends_watched`  | AlreadyWatched, Subscription                         |
//! | `get_new_rec_by_genre`         | `Profile::friends_watched`  | AlreadyWatched, GenrePreference                      |
//! | `get_rec_from_favorites`       | user's favorites            | OwnWatched, WatchedByFriends                         |

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{
    AlreadyWatchedFilter, GenrePreferenceFilter, OwnWatchedFilter, SubscriptionFilter,
    WatchedByFriendsFilter,
};
use profile::{Movie, Profile};
use tracing::instrument;

/// Pipeline shared by every query that starts from the friends' movies
fn friends_unique_pipeline() -> FilterPipeline {
    FilterPipeline::new().add_filter(AlreadyWatchedFilter)
}

/// Movies the user watched that no friend has watched.
///
/// Keeps the watched order. Duplicate titles on the watched list are all
/// kept if no friend has watched them.
#[instrument(skip_all, fields(watched = profile.watched.len(), friends = profile.friends.len()))]
pub fn get_unique_watched(profile: &Profile) -> Vec<Movie> {
    FilterPipeline::new()
        .add_filter(WatchedByFriendsFilter)
        .apply(profile.watched.clone(), profile)
}

/// Movies at least one friend watched and the user has not.
///
/// One movie per title. When several friends watched the same title, the
/// movie from the last of them is kept, at the position where the title
/// first appeared.
#[instrument(skip_all, fields(watched = profile.watched.len(), friends = profile.friends.len()))]
pub fn get_friends_unique_watched(profile: &Profile) -> Vec<Movie> {
    friends_unique_pipeline().apply(profile.friends_watched(), profile)
}

/// Friends' unique movies the user can stream on one of their subscriptions.
#[instrument(skip_all, fields(subscriptions = profile.subscriptions.len()))]
pub fn get_available_recs(profile: &Profile) -> Vec<Movie> {
    friends_unique_pipeline()
        .add_filter(SubscriptionFilter)
        .apply(profile.friends_watched(), profile)
}

/// Friends' unique movies in the user's most watched genre.
///
/// Empty when the user has watched nothing.
#[instrument(skip_all, fields(watched = profile.watched.len()))]
pub fn get_new_rec_by_genre(profile: &Profile) -> Vec<Movie> {
    if profile.watched.is_empty() {
        return Vec::new();
    }
    friends_unique_pipeline()
        .add_filter(GenrePreferenceFilter)
        .apply(profile.friends_watched(), profile)
}

/// Favorites whose title is one of the user's unique watched titles.
///
/// A favorite qualifies when the user has watched it and no friend has.
/// Despite the name this does not look at what friends could watch next:
/// it recommends the user's own favorites that their friends have missed.
#[instrument(skip_all, fields(favorites = profile.favorites.len()))]
pub fn get_rec_from_favorites(profile: &Profile) -> Vec<Movie> {
    FilterPipeline::new()
        .add_filter(OwnWatchedFilter)
        .add_filter(WatchedByFriendsFilter)
        .apply(profile.favorites.clone(), profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, genre: &str, rating: f64) -> Movie {
        Movie::create(title, genre, rating).unwrap()
    }

    fn titles(movies: &[Movie]) -> Vec<&str> {
        movies.iter().map(|m| m.title.as_str()).collect()
    }

    fn friend(movies: Vec<Movie>) -> Profile {
        Profile {
            watched: movies,
            ..Profile::default()
        }
    }

    #[test]
    fn test_unique_watched() {
        let mut user = Profile::new();
        user.add_to_watched(movie("A", "Drama", 4.0))
            .add_to_watched(movie("B", "Drama", 4.0))
            .add_to_watched(movie("C", "Drama", 4.0))
            .add_friend(friend(vec![movie("B", "Comedy", 1.0)]));

        assert_eq!(titles(&get_unique_watched(&user)), vec!["A", "C"]);
    }

    #[test]
    fn test_unique_watched_keeps_duplicates() {
        let mut user = Profile::new();
        user.add_to_watched(movie("A", "Drama", 4.0))
            .add_to_watched(movie("A", "Drama", 5.0));

        assert_eq!(get_unique_watched(&user).len(), 2);
    }

    #[test]
    fn test_friends_unique_watched_excludes_user_titles() {
        let mut user = Profile::new();
        user.add_to_watched(movie("A", "Drama", 4.0))
            .add_friend(friend(vec![movie("A", "Drama", 4.0), movie("B", "Drama", 4.0)]))
            .add_friend(friend(vec![movie("C", "Drama", 4.0)]));

        assert_eq!(titles(&get_friends_unique_watched(&user)), vec!["B", "C"]);
    }

    #[test]
    fn test_friends_unique_watched_dedup_keeps_last_movie() {
        let first = movie("T", "Drama", 1.0).with_host("netflix");
        let second = movie("T", "Drama", 2.0).with_host("hulu");

        let mut user = Profile::new();
        user.add_friend(friend(vec![first, movie("U", "Drama", 3.0)]))
            .add_friend(friend(vec![second.clone()]));

        let recs = get_friends_unique_watched(&user);
        assert_eq!(titles(&recs), vec!["T", "U"]);
        assert_eq!(recs[0], second);
    }

    #[test]
    fn test_available_recs() {
        let f1 = movie("F1", "Horror", 3.0).with_host("X");

        let mut user = Profile::new();
        user.add_friend(friend(vec![f1.clone()]));
        assert!(get_available_recs(&user).is_empty());

        user.add_subscription("X");
        assert_eq!(get_available_recs(&user), vec![f1]);
    }

    #[test]
    fn test_available_recs_uses_surviving_host() {
        // The kept movie is the second friend's, hosted where the user has no account
        let mut user = Profile::new();
        user.add_subscription("netflix")
            .add_friend(friend(vec![movie("T", "Drama", 1.0).with_host("netflix")]))
            .add_friend(friend(vec![movie("T", "Drama", 1.0).with_host("hulu")]));

        assert!(get_available_recs(&user).is_empty());
    }

    #[test]
    fn test_new_rec_by_genre() {
        let mut user = Profile::new();
        user.add_to_watched(movie("W1", "Horror", 4.0))
            .add_to_watched(movie("W2", "Comedy", 4.0))
            .add_to_watched(movie("W3", "Horror", 4.0))
            .add_friend(friend(vec![
                movie("H1", "Horror", 4.0),
                movie("C1", "Comedy", 4.0),
                movie("W1", "Horror", 4.0),
                movie("H2", "Horror", 4.0),
            ]));

        assert_eq!(titles(&get_new_rec_by_genre(&user)), vec!["H1", "H2"]);
    }

    #[test]
    fn test_new_rec_by_genre_uses_surviving_genre() {
        // The kept "T" is the second friend's Comedy entry, not the Horror one
        let mut user = Profile::new();
        user.add_to_watched(movie("W1", "Horror", 4.0))
            .add_to_watched(movie("W2", "Horror", 4.0))
            .add_friend(friend(vec![movie("T", "Horror", 3.0)]))
            .add_friend(friend(vec![movie("T", "Comedy", 3.0)]));

        assert!(get_new_rec_by_genre(&user).is_empty());
    }

    #[test]
    fn test_new_rec_by_genre_no_history() {
        let mut user = Profile::new();
        user.add_friend(friend(vec![movie("H1", "Horror", 4.0)]));

        assert!(get_new_rec_by_genre(&user).is_empty());
    }

    #[test]
    fn test_rec_from_favorites() {
        let mut user = Profile::new();
        user.add_to_watched(movie("A", "Drama", 4.0))
            .add_to_watched(movie("B", "Drama", 4.0))
            .add_to_favorites(movie("A", "Drama", 4.0))
            .add_to_favorites(movie("B", "Drama", 4.0))
            .add_to_favorites(movie("Z", "Drama", 4.0))
            .add_friend(friend(vec![movie("B", "Drama", 4.0)]));

        // "Z" was never watched by the user, "B" was watched by a friend
        assert_eq!(titles(&get_rec_from_favorites(&user)), vec!["A"]);
    }

    #[test]
    fn test_rec_from_favorites_matches_unique_watched_titles() {
        let mut user = Profile::new();
        user.add_to_watched(movie("A", "Drama", 4.0))
            .add_to_watched(movie("C", "Drama", 4.0))
            .add_to_favorites(movie("C", "Comedy", 9.0))
            .add_to_favorites(movie("D", "Drama", 4.0))
            .add_to_favorites(movie("A", "Drama", 4.0))
            .add_friend(friend(vec![movie("D", "Drama", 4.0)]));

        let unique_titles: Vec<String> = get_unique_watched(&user)
            .into_iter()
            .map(|m| m.title)
            .collect();
        let expected: Vec<Movie> = user
            .favorites
            .iter()
            .filter(|m| unique_titles.contains(&m.title))
            .cloned()
            .collect();

        assert_eq!(get_rec_from_favorites(&user), expected);
        // Favorites order is kept, and the favorite's own fields are returned
        assert_eq!(titles(&expected), vec!["C", "A"]);
        assert_eq!(expected[0].genre, "Comedy");
    }

    #[test]
    fn test_queries_do_not_mutate() {
        let mut user = Profile::new();
        user.add_to_watched(movie("A", "Drama", 4.0))
            .add_to_favorites(movie("A", "Drama", 4.0))
            .add_subscription("X")
            .add_friend(friend(vec![movie("F", "Drama", 4.0).with_host("X")]));
        let snapshot = user.clone();

        get_unique_watched(&user);
        get_friends_unique_watched(&user);
        get_available_recs(&user);
        get_new_rec_by_genre(&user);
        get_rec_from_favorites(&user);

        assert_eq!(user, snapshot);
    }
}
