// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Line-oriented loaders for cast listings, query pairs, and name lists.
//!
//! Every input starts with a single header line, which is read and ignored.
//! Records with the wrong column count are skipped (logged, never fatal); a
//! stream that fails before reaching end-of-input aborts the whole load,
//! distinguishable from a clean EOF.
use std::io::BufRead;

use thiserror::Error;
use tracing::{debug, warn};

use crate::cast::{CastRelation, MovieKey};

/// Error returned when a loader's underlying stream fails.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The stream ended abnormally before end-of-input.
    #[error("read failed before end of input")]
    Io(#[from] std::io::Error),
}

/// Parses tab-delimited `(actor, movie title, release year)` records into a
/// cast relation.
///
/// The movie key is assembled as `title#@year` without decoding the year;
/// validation happens where the year is actually needed.
///
/// # Errors
///
/// [`LoadError::Io`] when the stream fails mid-read.
pub fn read_cast<R: BufRead>(reader: R) -> Result<CastRelation, LoadError> {
    let mut cast = CastRelation::new();
    let mut skipped = 0_usize;
    for line in skip_header(reader)? {
        let line = line?;
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 3 {
            skipped += 1;
            warn!("skipping cast record without exactly 3 columns: `{line}`");
            continue;
        }
        cast.record(fields[0], MovieKey::new(fields[1], fields[2]));
    }
    debug!(
        actors = cast.actor_count(),
        movies = cast.movie_count(),
        skipped,
        "cast listing loaded"
    );
    Ok(cast)
}

/// Parses tab-delimited `(name1, name2)` query pairs, in input order.
///
/// # Errors
///
/// [`LoadError::Io`] when the stream fails mid-read.
pub fn read_pairs<R: BufRead>(reader: R) -> Result<Vec<(String, String)>, LoadError> {
    let mut pairs = Vec::new();
    for line in skip_header(reader)? {
        let line = line?;
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 2 {
            warn!("skipping query pair without exactly 2 columns: `{line}`");
            continue;
        }
        pairs.push((fields[0].to_owned(), fields[1].to_owned()));
    }
    Ok(pairs)
}

/// Reads one actor name per line, in input order.
///
/// # Errors
///
/// [`LoadError::Io`] when the stream fails mid-read.
pub fn read_names<R: BufRead>(reader: R) -> Result<Vec<String>, LoadError> {
    skip_header(reader)?
        .map(|line| line.map_err(LoadError::from))
        .collect()
}

/// Consumes the fixed header line, returning the remaining line iterator.
fn skip_header<R: BufRead>(reader: R) -> Result<impl Iterator<Item = std::io::Result<String>>, LoadError> {
    let mut lines = reader.lines();
    if let Some(header) = lines.next() {
        header?;
    }
    Ok(lines)
}
