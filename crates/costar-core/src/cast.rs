// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Cast relation: bidirectional actor↔movie membership derived from input
//! records.
//!
//! The relation is populated once during the load phase and read-only
//! afterwards; every traversal and connectivity query reads it without
//! mutation. Both mappings are `BTreeMap`s so key enumeration (and therefore
//! node index assignment) is deterministic across runs.
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use thiserror::Error;

/// Separator joining a movie title to its 4-digit release year inside a
/// movie key (`TITLE#@YEAR`).
pub const YEAR_SEPARATOR: &str = "#@";

/// Error returned when a movie key cannot yield a release year.
///
/// A malformed key indicates a corrupt cast relation rather than a bad
/// query, so callers treat this as fatal for the operation; it is never
/// silently coerced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// The key has no `#@` separator.
    #[error("movie key `{0}` is missing the `#@` separator")]
    MissingSeparator(String),
    /// The text after the separator is not a 4-digit year.
    #[error("movie key `{0}` does not end in a 4-digit year")]
    InvalidYear(String),
}

/// A movie identified by title and release year, encoded `TITLE#@YEAR`.
///
/// The trailing 4 characters after the separator must parse as a year; see
/// [`MovieKey::year`]. Keys sort lexicographically, which keeps every
/// mapping keyed by movie deterministic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MovieKey(String);

impl MovieKey {
    /// Assembles a key from a title and the raw year column of a record.
    ///
    /// The year text is embedded as-is; validation happens lazily in
    /// [`MovieKey::year`] so that unweighted traversals over listings with a
    /// few corrupt years still work, exactly like weighted ones fail.
    #[must_use]
    pub fn new(title: &str, year: &str) -> Self {
        Self(format!("{title}{YEAR_SEPARATOR}{year}"))
    }

    /// Wraps an already-encoded `TITLE#@YEAR` string.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The encoded form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decodes the release year from the last separator onward.
    ///
    /// # Errors
    ///
    /// [`KeyError::MissingSeparator`] when the key has no `#@`, and
    /// [`KeyError::InvalidYear`] when the trailing text is not exactly four
    /// ASCII digits.
    pub fn year(&self) -> Result<u16, KeyError> {
        let pos = self
            .0
            .rfind(YEAR_SEPARATOR)
            .ok_or_else(|| KeyError::MissingSeparator(self.0.clone()))?;
        let digits = &self.0[pos + YEAR_SEPARATOR.len()..];
        if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(KeyError::InvalidYear(self.0.clone()));
        }
        digits
            .parse()
            .map_err(|_| KeyError::InvalidYear(self.0.clone()))
    }
}

impl fmt::Display for MovieKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MovieKey {
    fn from(raw: &str) -> Self {
        Self::from_raw(raw)
    }
}

/// The bidirectional actor↔movie membership data.
///
/// Two mappings built together from the same input pass:
///
/// - `movies_of`: actor name → movies they appear in, input order,
///   duplicates kept when the input repeats a pairing;
/// - `actors_in`: movie key → its cast list, input order.
#[derive(Debug, Clone, Default)]
pub struct CastRelation {
    movies_of: BTreeMap<String, Vec<MovieKey>>,
    actors_in: BTreeMap<MovieKey, Vec<String>>,
}

impl CastRelation {
    /// Creates an empty relation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one `(actor, movie)` appearance in both mappings.
    pub fn record(&mut self, actor: &str, movie: MovieKey) {
        self.movies_of
            .entry(actor.to_owned())
            .or_default()
            .push(movie.clone());
        self.actors_in.entry(movie).or_default().push(actor.to_owned());
    }

    /// Number of distinct actor names.
    #[must_use]
    pub fn actor_count(&self) -> usize {
        self.movies_of.len()
    }

    /// Number of distinct movie keys.
    #[must_use]
    pub fn movie_count(&self) -> usize {
        self.actors_in.len()
    }

    /// Actor names in mapping order.
    ///
    /// This is the enumeration that assigns global node indices, so its
    /// order must stay stable for the life of any graph built from the
    /// relation (`BTreeMap` keys: lexicographic).
    pub fn actors(&self) -> impl Iterator<Item = &str> {
        self.movies_of.keys().map(String::as_str)
    }

    /// Movies the actor appears in, input order. Empty for unknown names.
    #[must_use]
    pub fn movies_of(&self, actor: &str) -> &[MovieKey] {
        self.movies_of.get(actor).map_or(&[], Vec::as_slice)
    }

    /// Cast list of a movie, input order. Empty for unknown keys.
    #[must_use]
    pub fn actors_in(&self, movie: &MovieKey) -> &[String] {
        self.actors_in.get(movie).map_or(&[], Vec::as_slice)
    }

    /// All `(movie, cast list)` entries in key order.
    pub fn iter_movies(&self) -> impl Iterator<Item = (&MovieKey, &[String])> {
        self.actors_in
            .iter()
            .map(|(movie, members)| (movie, members.as_slice()))
    }

    /// Number of distinct co-stars the actor has appeared with, self
    /// excluded. Unknown names count 0.
    #[must_use]
    pub fn costar_count(&self, actor: &str) -> usize {
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        for movie in self.movies_of(actor) {
            for member in self.actors_in(movie) {
                seen.insert(member.as_str());
            }
        }
        // The actor is always a member of their own movies; deduct self.
        if seen.is_empty() {
            0
        } else {
            seen.len() - 1
        }
    }

    /// Distinct release years across all movies, ascending.
    ///
    /// # Errors
    ///
    /// Propagates the first [`KeyError`] from a malformed movie key.
    pub fn release_years(&self) -> Result<BTreeSet<u16>, KeyError> {
        self.actors_in.keys().map(MovieKey::year).collect()
    }
}
