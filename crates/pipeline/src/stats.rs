//! Aggregate statistics over a user's watched list.
//!
//! ## Learning Note
//! Genre ties must resolve the same way on every run. Iterating a HashMap
//! gives no order guarantee, so `most_frequent` counts into a list of
//! `(key, count)` pairs kept in first-occurrence order instead.

use profile::Profile;

/// Average rating over the watched list, or exactly `0.0` when it is empty
pub fn get_watched_avg_rating(profile: &Profile) -> f64 {
    if profile.watched.is_empty() {
        return 0.0;
    }
    let total: f64 = profile.watched.iter().map(|movie| movie.rating).sum();
    total / profile.watched.len() as f64
}

/// The genre that appears most often on the watched list.
///
/// Returns `None` when nothing has been watched. Ties go to the genre that
/// was watched first.
pub fn get_most_watched_genre(profile: &Profile) -> Option<&str> {
    if profile.watched.is_empty() {
        return None;
    }
    most_frequent(profile.watched.iter().map(|movie| movie.genre.as_str()))
}

/// Return the most frequent item.
///
/// ## Algorithm
/// 1. Scan items left to right, counting into `(key, count)` pairs; a key is
///    appended the first time it is seen
/// 2. Walk the pairs in that order and keep a key only if its count is
///    strictly greater than the best so far
///
/// So among tied keys the one inserted first wins. Returns `None` for an
/// empty input.
pub fn most_frequent<T, I>(items: I) -> Option<T>
where
    I: IntoIterator<Item = T>,
    T: PartialEq,
{
    let mut counts: Vec<(T, usize)> = Vec::new();
    for item in items {
        match counts.iter_mut().find(|(key, _)| *key == item) {
            Some((_, count)) => *count += 1,
            None => counts.push((item, 1)),
        }
    }

    let mut best: Option<(T, usize)> = None;
    for (key, count) in counts {
        if best.as_ref().is_none_or(|(_, best_count)| count > *best_count) {
            best = Some((key, count));
        }
    }
    best.map(|(key, _)| key)
}
