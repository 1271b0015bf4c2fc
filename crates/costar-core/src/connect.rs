// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Incremental earliest-connection-year engine.
//!
//! Iterates the distinct movie years in ascending order and accumulates
//! state across year-steps: edges (BFS variant) or unions (Union-Find
//! variant) from earlier years are never discarded within one query, which
//! is what makes the earliest connecting year monotonic. The two variants
//! are independent algorithms that must return identical answers for
//! identical inputs.
use std::collections::BTreeMap;

use tracing::debug;

use crate::cast::{CastRelation, KeyError, MovieKey};
use crate::dset::DisjointSet;
use crate::graph::{ActorGraph, EdgeMode, QueryError};
use crate::traverse::Scratch;

/// Sentinel year reported for pairs that never connect.
pub const NO_CONNECTION_YEAR: u16 = 9999;

/// Which earliest-connection algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectAlgorithm {
    /// Cumulative per-year edge construction plus reachability BFS.
    Bfs,
    /// Cumulative per-year unions over a disjoint-set array.
    UnionFind,
}

/// Earliest-connection-year engine, composed over an edge-less graph.
///
/// The graph arena and name↔index bijection are built once; adjacency and
/// the disjoint-set array are rebuilt per query by the chosen algorithm.
#[derive(Debug, Clone)]
pub struct ConnectEngine {
    cast: CastRelation,
    graph: ActorGraph,
    movies_by_year: BTreeMap<u16, Vec<MovieKey>>,
    dset: DisjointSet,
    scratch: Scratch,
}

impl ConnectEngine {
    /// Builds the engine, indexing movies by release year.
    ///
    /// # Errors
    ///
    /// Propagates a [`KeyError`] from any malformed movie key: year
    /// decoding is what orders the whole computation, so a corrupt key is
    /// fatal here.
    pub fn new(cast: CastRelation) -> Result<Self, KeyError> {
        let graph = ActorGraph::build(&cast, EdgeMode::Unweighted, false)?;
        let mut movies_by_year: BTreeMap<u16, Vec<MovieKey>> = BTreeMap::new();
        for (movie, _) in cast.iter_movies() {
            movies_by_year
                .entry(movie.year()?)
                .or_default()
                .push(movie.clone());
        }
        let nodes = graph.node_count();
        debug!(
            actors = nodes,
            years = movies_by_year.len(),
            "connectivity engine ready"
        );
        Ok(Self {
            cast,
            graph,
            movies_by_year,
            dset: DisjointSet::new(nodes),
            scratch: Scratch::new(nodes),
        })
    }

    /// The underlying graph, exposed so callers can pre-validate query
    /// pairs through name↔index resolution.
    #[must_use]
    pub fn graph(&self) -> &ActorGraph {
        &self.graph
    }

    /// Earliest release year by which two actors become transitively
    /// connected, or `None` when no year connects them.
    ///
    /// # Errors
    ///
    /// [`QueryError::UnknownActor`] when either name has no node; callers
    /// report the sentinel for that pair and keep going.
    pub fn earliest_connection_year(
        &mut self,
        from: &str,
        to: &str,
        algorithm: ConnectAlgorithm,
    ) -> Result<Option<u16>, QueryError> {
        let from = self.graph.resolve(from)?;
        let to = self.graph.resolve(to)?;
        Ok(self.earliest_connection_between(from, to, algorithm))
    }

    /// Index-addressed variant of [`ConnectEngine::earliest_connection_year`].
    pub fn earliest_connection_between(
        &mut self,
        from: u32,
        to: u32,
        algorithm: ConnectAlgorithm,
    ) -> Option<u16> {
        // Per-query setup; within the query, state accumulates across years.
        match algorithm {
            ConnectAlgorithm::Bfs => self.graph.clear_edges(),
            ConnectAlgorithm::UnionFind => self.dset.reset(self.graph.node_count()),
        }

        let Self {
            cast,
            graph,
            movies_by_year,
            dset,
            scratch,
        } = self;

        for (&year, movies) in movies_by_year.iter() {
            match algorithm {
                ConnectAlgorithm::Bfs => {
                    for movie in movies {
                        graph.link_costars(cast, movie);
                    }
                    if reachable(graph, scratch, from, to) {
                        return Some(year);
                    }
                }
                ConnectAlgorithm::UnionFind => {
                    for movie in movies {
                        union_costars(graph, dset, cast, movie);
                    }
                    if dset.connected(from, to) {
                        return Some(year);
                    }
                }
            }
        }
        None
    }
}

/// Unites every pair of co-stars of `movie`.
fn union_costars(
    graph: &ActorGraph,
    dset: &mut DisjointSet,
    cast: &CastRelation,
    movie: &MovieKey,
) {
    let members = cast.actors_in(movie);
    for first in members {
        for second in members {
            if first == second {
                continue;
            }
            let (Some(a), Some(b)) = (graph.index_of(first), graph.index_of(second)) else {
                debug_assert!(false, "cast member of `{movie}` has no node index");
                continue;
            };
            dset.union(a, b);
        }
    }
}

/// Unweighted reachability BFS over the current cumulative adjacency.
///
/// Early-exits the instant the target leaves the frontier; scratch state is
/// reset before returning either way.
fn reachable(graph: &ActorGraph, scratch: &mut Scratch, from: u32, to: u32) -> bool {
    let found = scratch.bfs_reach(graph, from, to);
    scratch.reset();
    found
}
