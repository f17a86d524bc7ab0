//! JSON reader and writer for profile documents.
//!
//! A document has the same shape as `Profile`, with every field optional:
//!
//! ```json
//! {
//!   "watched": [{ "title": "Alien", "genre": "Horror", "rating": 8.4 }],
//!   "subscriptions": ["netflix"],
//!   "friends": [{ "watched": [{ "title": "Heat", "genre": "Crime", "rating": 8.3, "host": "hulu" }] }]
//! }
//! ```
//!
//! Movie entries are read as `MovieDraft`s and validated one by one, so a
//! blank or missing field is reported with the list and position it came
//! from instead of a generic decode error.

use crate::error::{ProfileError, Result};
use crate::types::{Host, Movie, MovieDraft, Profile};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::info;

/// Raw document shape, before movie validation
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProfileDocument {
    watched: Vec<MovieDraft>,
    watchlist: Vec<MovieDraft>,
    favorites: Vec<MovieDraft>,
    subscriptions: BTreeSet<Host>,
    friends: Vec<ProfileDocument>,
}

impl ProfileDocument {
    /// Validate every movie and build the profile.
    ///
    /// `prefix` is prepended to list names in errors (`friends[0].` for the
    /// first friend, empty for the user).
    fn into_profile(self, prefix: &str) -> Result<Profile> {
        let friends = self
            .friends
            .into_iter()
            .enumerate()
            .map(|(idx, friend)| friend.into_profile(&format!("{prefix}friends[{idx}].")))
            .collect::<Result<Vec<Profile>>>()?;

        Ok(Profile {
            watched: build_movies(self.watched, &format!("{prefix}watched"))?,
            watchlist: build_movies(self.watchlist, &format!("{prefix}watchlist"))?,
            favorites: build_movies(self.favorites, &format!("{prefix}favorites"))?,
            subscriptions: self.subscriptions,
            friends,
        })
    }
}

fn build_movies(drafts: Vec<MovieDraft>, list: &str) -> Result<Vec<Movie>> {
    drafts
        .into_iter()
        .enumerate()
        .map(|(index, draft)| {
            draft.build().ok_or_else(|| ProfileError::InvalidMovie {
                list: list.to_string(),
                index,
            })
        })
        .collect()
}

impl Profile {
    /// Parse a profile from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: ProfileDocument = serde_json::from_str(json)?;
        document.into_profile("")
    }

    /// Load a profile from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ProfileError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let json = fs::read_to_string(path)?;
        let profile = Self::from_json_str(&json)?;

        info!(
            path = %path.display(),
            watched = profile.watched.len(),
            watchlist = profile.watchlist.len(),
            friends = profile.friends.len(),
            "loaded profile"
        );
        Ok(profile)
    }

    /// Render the profile as indented JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
