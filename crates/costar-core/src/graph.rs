// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Actor co-appearance graph: an arena of nodes addressed by stable index.
//!
//! Nodes are never individually freed; the whole arena is dropped with the
//! graph. Adjacency lives inline in a per-node `BTreeMap` keyed by neighbor
//! index, which guarantees at most one edge per ordered index pair and a
//! deterministic neighbor visitation order.
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

use crate::cast::{CastRelation, KeyError, MovieKey};

/// Reference year of the recency-weight formula: a movie released in
/// `WEIGHT_BASE_YEAR` costs 1, each year earlier costs 1 more.
const WEIGHT_BASE_YEAR: i64 = 2015;

/// Error returned when a query references a name absent from the cast
/// relation.
///
/// This is a per-pair condition: callers report a sentinel result for the
/// offending pair and keep processing the batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// No node exists for this actor name.
    #[error("failed to locate node `{0}`")]
    UnknownActor(String),
}

/// Edge construction policy, selected per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeMode {
    /// Every shared movie costs 1 hop.
    Unweighted,
    /// Recent movies cost less: `1 + (2015 - year)`, biasing shortest paths
    /// toward recent collaborations.
    Weighted,
}

impl EdgeMode {
    /// Candidate weight contributed by `movie` under this policy.
    ///
    /// Unweighted edges never look at the year, so listings with corrupt
    /// year columns still support unweighted traversal.
    fn weight_for(self, movie: &MovieKey) -> Result<i64, KeyError> {
        match self {
            Self::Unweighted => Ok(1),
            Self::Weighted => Ok(1 + (WEIGHT_BASE_YEAR - i64::from(movie.year()?))),
        }
    }
}

/// A co-appearance edge, labeled with the single movie chosen to represent
/// it under the run's dedup policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// Traversal cost of crossing this edge.
    pub weight: i64,
    /// The movie reported when this edge appears on a reconstructed path.
    pub movie: MovieKey,
}

/// A vertex of the co-appearance graph: one per distinct actor name.
///
/// The node's global index is its position in the graph arena; only the
/// adjacency is stored here. Traversal scratch state (distance, predecessor,
/// finalized) lives in the traversal engine, not on the node.
#[derive(Debug, Clone, Default)]
pub struct Node {
    adjacency: BTreeMap<u32, Edge>,
}

impl Node {
    /// The edge toward `neighbor`, when one exists.
    #[must_use]
    pub fn edge_to(&self, neighbor: u32) -> Option<&Edge> {
        self.adjacency.get(&neighbor)
    }

    /// All `(neighbor index, edge)` entries in ascending index order.
    pub fn neighbors(&self) -> impl Iterator<Item = (u32, &Edge)> {
        self.adjacency.iter().map(|(&index, edge)| (index, edge))
    }

    /// Number of distinct neighbors.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.adjacency.len()
    }
}

/// Indexed collection of actor nodes plus the name↔index bijection.
///
/// Indices are assigned exactly once at construction by enumerating the cast
/// relation's actor names in mapping order, and stay stable for the life of
/// the graph. Adjacency may be cleared and rebuilt repeatedly (connectivity
/// engine) or built once and left intact (path engine).
#[derive(Debug, Clone)]
pub struct ActorGraph {
    mode: EdgeMode,
    nodes: Vec<Node>,
    index_of: FxHashMap<String, u32>,
    name_at: Vec<String>,
}

impl ActorGraph {
    /// Builds the node arena from the cast relation, deriving adjacency iff
    /// `create_edges` is set.
    ///
    /// # Errors
    ///
    /// Propagates a [`KeyError`] from weighted edge derivation over a
    /// malformed movie key.
    pub fn build(
        cast: &CastRelation,
        mode: EdgeMode,
        create_edges: bool,
    ) -> Result<Self, KeyError> {
        let mut index_of = FxHashMap::default();
        let mut name_at = Vec::with_capacity(cast.actor_count());
        for (index, name) in cast.actors().enumerate() {
            index_of.insert(name.to_owned(), index as u32);
            name_at.push(name.to_owned());
        }

        let mut graph = Self {
            mode,
            nodes: vec![Node::default(); name_at.len()],
            index_of,
            name_at,
        };

        if create_edges {
            for index in 0..graph.nodes.len() {
                let adjacency = graph.derive_neighbors(cast, &graph.name_at[index])?;
                graph.nodes[index].adjacency = adjacency;
            }
        }

        debug!(
            actors = graph.nodes.len(),
            edges = graph.edge_count(),
            ?mode,
            "actor graph built"
        );
        Ok(graph)
    }

    /// Computes one actor's adjacency from the cast relation.
    ///
    /// Edge-merge policy on rediscovering a neighbor: unweighted keeps the
    /// first edge; weighted replaces only on strictly smaller weight, so on
    /// a weight tie the previously stored movie stays. This rule decides
    /// which single movie is reported on a multi-movie edge.
    fn derive_neighbors(
        &self,
        cast: &CastRelation,
        actor: &str,
    ) -> Result<BTreeMap<u32, Edge>, KeyError> {
        let mut adjacency = BTreeMap::new();
        for movie in cast.movies_of(actor) {
            let weight = self.mode.weight_for(movie)?;
            for costar in cast.actors_in(movie) {
                if costar == actor {
                    continue;
                }
                let Some(&neighbor) = self.index_of.get(costar.as_str()) else {
                    // Every cast member was enumerated at index assignment.
                    debug_assert!(false, "co-star `{costar}` has no node index");
                    continue;
                };
                match adjacency.entry(neighbor) {
                    Entry::Vacant(slot) => {
                        slot.insert(Edge {
                            weight,
                            movie: movie.clone(),
                        });
                    }
                    Entry::Occupied(mut slot) => {
                        if self.mode == EdgeMode::Weighted && weight < slot.get().weight {
                            slot.insert(Edge {
                                weight,
                                movie: movie.clone(),
                            });
                        }
                    }
                }
            }
        }
        Ok(adjacency)
    }

    /// Inserts mirrored weight-1 edges between every pair of co-stars of
    /// `movie`, keeping any edge already present.
    ///
    /// Used by the incremental connectivity engine, where edge existence is
    /// what matters and duplicates across year-steps are tolerated by
    /// construction (first movie in wins).
    pub fn link_costars(&mut self, cast: &CastRelation, movie: &MovieKey) {
        let members = cast.actors_in(movie);
        for first in members {
            for second in members {
                if first == second {
                    continue;
                }
                let (Some(&a), Some(&b)) = (
                    self.index_of.get(first.as_str()),
                    self.index_of.get(second.as_str()),
                ) else {
                    debug_assert!(false, "cast member of `{movie}` has no node index");
                    continue;
                };
                self.nodes[a as usize]
                    .adjacency
                    .entry(b)
                    .or_insert_with(|| Edge {
                        weight: 1,
                        movie: movie.clone(),
                    });
                self.nodes[b as usize]
                    .adjacency
                    .entry(a)
                    .or_insert_with(|| Edge {
                        weight: 1,
                        movie: movie.clone(),
                    });
            }
        }
    }

    /// Clears every node's adjacency, leaving the arena and the name↔index
    /// bijection intact.
    pub fn clear_edges(&mut self) {
        for node in &mut self.nodes {
            node.adjacency.clear();
        }
    }

    /// The edge construction policy this graph was built with.
    #[must_use]
    pub fn mode(&self) -> EdgeMode {
        self.mode
    }

    /// Number of nodes in the arena.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of directed adjacency entries.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(Node::degree).sum()
    }

    /// The node at `index`.
    #[must_use]
    pub fn node(&self, index: u32) -> &Node {
        &self.nodes[index as usize]
    }

    /// Resolves an actor name to its global index.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<u32> {
        self.index_of.get(name).copied()
    }

    /// The actor name at a global index.
    #[must_use]
    pub fn name_at(&self, index: u32) -> &str {
        &self.name_at[index as usize]
    }

    /// Resolves an actor name, surfacing the per-pair error callers report
    /// as a sentinel result.
    ///
    /// # Errors
    ///
    /// [`QueryError::UnknownActor`] when the name is absent.
    pub fn resolve(&self, name: &str) -> Result<u32, QueryError> {
        self.index_of(name)
            .ok_or_else(|| QueryError::UnknownActor(name.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]
    use super::*;

    fn cast(records: &[(&str, &str)]) -> CastRelation {
        let mut cast = CastRelation::new();
        for &(actor, movie) in records {
            cast.record(actor, MovieKey::from_raw(movie));
        }
        cast
    }

    #[test]
    fn indices_follow_mapping_order() {
        let cast = cast(&[("C", "M#@2000"), ("A", "M#@2000"), ("B", "M#@2000")]);
        let graph = ActorGraph::build(&cast, EdgeMode::Unweighted, false)
            .expect("unweighted build cannot fail");
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.index_of("A"), Some(0));
        assert_eq!(graph.index_of("B"), Some(1));
        assert_eq!(graph.index_of("C"), Some(2));
        assert_eq!(graph.name_at(2), "C");
        assert_eq!(graph.edge_count(), 0, "no edges requested");
    }

    #[test]
    fn edges_are_mirrored() {
        let cast = cast(&[("A", "M#@2000"), ("B", "M#@2000")]);
        let graph =
            ActorGraph::build(&cast, EdgeMode::Unweighted, true).expect("build should succeed");
        let (a, b) = (0, 1);
        assert_eq!(
            graph.node(a).edge_to(b).map(|e| e.movie.as_str()),
            Some("M#@2000")
        );
        assert_eq!(
            graph.node(b).edge_to(a).map(|e| e.movie.as_str()),
            Some("M#@2000")
        );
    }

    #[test]
    fn unweighted_dedup_keeps_first_discovered_movie() {
        // A's movie list orders EARLY before LATE; the first discovery wins.
        let cast = cast(&[
            ("A", "EARLY#@1990"),
            ("B", "EARLY#@1990"),
            ("A", "LATE#@2014"),
            ("B", "LATE#@2014"),
        ]);
        let graph =
            ActorGraph::build(&cast, EdgeMode::Unweighted, true).expect("build should succeed");
        let edge = graph.node(0).edge_to(1).expect("edge must exist");
        assert_eq!(edge.movie.as_str(), "EARLY#@1990");
        assert_eq!(edge.weight, 1);
    }

    #[test]
    fn weighted_dedup_replaces_on_strict_improvement() {
        let cast = cast(&[
            ("A", "EARLY#@1990"),
            ("B", "EARLY#@1990"),
            ("A", "LATE#@2014"),
            ("B", "LATE#@2014"),
        ]);
        let graph =
            ActorGraph::build(&cast, EdgeMode::Weighted, true).expect("build should succeed");
        let edge = graph.node(0).edge_to(1).expect("edge must exist");
        assert_eq!(edge.movie.as_str(), "LATE#@2014");
        assert_eq!(edge.weight, 1 + (2015 - 2014));
    }

    #[test]
    fn weighted_dedup_keeps_stored_movie_on_tie() {
        // Same year, same weight: no replacement on equal weight.
        let cast = cast(&[
            ("A", "FIRST#@2000"),
            ("B", "FIRST#@2000"),
            ("A", "SECOND#@2000"),
            ("B", "SECOND#@2000"),
        ]);
        let graph =
            ActorGraph::build(&cast, EdgeMode::Weighted, true).expect("build should succeed");
        let edge = graph.node(0).edge_to(1).expect("edge must exist");
        assert_eq!(edge.movie.as_str(), "FIRST#@2000");
    }

    #[test]
    fn weighted_build_fails_on_corrupt_key() {
        let cast = cast(&[("A", "NO YEAR"), ("B", "NO YEAR")]);
        assert!(ActorGraph::build(&cast, EdgeMode::Weighted, true).is_err());
        // The unweighted policy never decodes the year.
        assert!(ActorGraph::build(&cast, EdgeMode::Unweighted, true).is_ok());
    }

    #[test]
    fn link_costars_keeps_existing_edges() {
        let cast = cast(&[
            ("A", "ONE#@2000"),
            ("B", "ONE#@2000"),
            ("A", "TWO#@2001"),
            ("B", "TWO#@2001"),
        ]);
        let mut graph =
            ActorGraph::build(&cast, EdgeMode::Unweighted, false).expect("build should succeed");
        let one = MovieKey::from_raw("ONE#@2000");
        let two = MovieKey::from_raw("TWO#@2001");
        graph.link_costars(&cast, &one);
        graph.link_costars(&cast, &two);
        let edge = graph.node(0).edge_to(1).expect("edge must exist");
        assert_eq!(edge.movie, one, "first linked movie stays on the edge");

        graph.clear_edges();
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.node_count(), 2, "arena survives edge clearing");
    }

    #[test]
    fn resolve_reports_unknown_names() {
        let cast = cast(&[("A", "M#@2000")]);
        let graph =
            ActorGraph::build(&cast, EdgeMode::Unweighted, false).expect("build should succeed");
        assert_eq!(graph.resolve("A"), Ok(0));
        assert_eq!(
            graph.resolve("Z"),
            Err(QueryError::UnknownActor("Z".into()))
        );
    }
}
