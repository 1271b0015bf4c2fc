// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Single-pair shortest-path traversals with path reconstruction.
//!
//! Two traversal modes over a fully-edged graph, selected per run by the
//! graph's edge policy: BFS for unweighted edges, lazy-deletion Dijkstra for
//! weighted ones. Scratch state (distance, predecessor, finalized) is reused
//! across queries and reset through a touched-list after each one, so one
//! pair's artifacts never leak into the next.
use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::cast::{CastRelation, KeyError, MovieKey};
use crate::graph::{ActorGraph, EdgeMode, QueryError};

/// Reusable per-query traversal state, indexed by node.
///
/// Allocated once per engine; `reset` restores only the entries touched by
/// the last query.
#[derive(Debug, Clone)]
pub(crate) struct Scratch {
    distance: Vec<i64>,
    predecessor: Vec<Option<u32>>,
    finalized: Vec<bool>,
    touched: Vec<u32>,
}

impl Scratch {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            distance: vec![i64::MAX; len],
            predecessor: vec![None; len],
            finalized: vec![false; len],
            touched: Vec::new(),
        }
    }

    fn touch(&mut self, index: u32) {
        self.touched.push(index);
    }

    /// Restores defaults for every node touched since the last reset.
    pub(crate) fn reset(&mut self) {
        while let Some(index) = self.touched.pop() {
            let index = index as usize;
            self.distance[index] = i64::MAX;
            self.predecessor[index] = None;
            self.finalized[index] = false;
        }
    }

    /// Level-order expansion with strict-improvement relaxation
    /// (`distance + 1 < distance[neighbor]`), recording predecessors.
    ///
    /// With implicit unit weights a node is final the first time it leaves
    /// the frontier, so the search stops the instant the target is dequeued.
    /// The caller is responsible for resetting the scratch afterwards.
    pub(crate) fn bfs_reach(&mut self, graph: &ActorGraph, from: u32, to: u32) -> bool {
        let mut frontier = VecDeque::new();
        self.distance[from as usize] = 0;
        self.touch(from);
        frontier.push_back(from);

        while let Some(current) = frontier.pop_front() {
            if current == to {
                return true;
            }
            let distance = self.distance[current as usize];
            for (neighbor, _) in graph.node(current).neighbors() {
                if distance + 1 < self.distance[neighbor as usize] {
                    self.distance[neighbor as usize] = distance + 1;
                    self.predecessor[neighbor as usize] = Some(current);
                    self.touch(neighbor);
                    frontier.push_back(neighbor);
                }
            }
        }
        false
    }
}

/// A reconstructed source→target path.
///
/// `actors` holds node indices from source to target inclusive; `movies[i]`
/// labels the edge between `actors[i]` and `actors[i + 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRecord {
    actors: Vec<u32>,
    movies: Vec<MovieKey>,
}

impl PathRecord {
    /// Node indices along the path, source first.
    #[must_use]
    pub fn actors(&self) -> &[u32] {
        &self.actors
    }

    /// Movie labels along the path, one per edge.
    #[must_use]
    pub fn movies(&self) -> &[MovieKey] {
        &self.movies
    }

    /// Number of edges crossed.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.movies.len()
    }

    /// Renders `(actorA)--[movieKey]-->(actorB)--...(actorZ)`; a self-path
    /// renders as the single-node form `(actor)`.
    #[must_use]
    pub fn format(&self, graph: &ActorGraph) -> String {
        let mut out = String::new();
        for (position, &actor) in self.actors.iter().enumerate() {
            if let Some(movie) = position.checked_sub(1).and_then(|i| self.movies.get(i)) {
                out.push_str("--[");
                out.push_str(movie.as_str());
                out.push_str("]-->");
            }
            out.push('(');
            out.push_str(graph.name_at(actor));
            out.push(')');
        }
        out
    }
}

/// Single-pair shortest-path engine over a fully-edged actor graph.
#[derive(Debug, Clone)]
pub struct PathFinder {
    graph: ActorGraph,
    scratch: Scratch,
}

impl PathFinder {
    /// Builds a fully-edged graph under `mode` and readies query scratch.
    ///
    /// # Errors
    ///
    /// Propagates a [`KeyError`] from weighted edge derivation.
    pub fn new(cast: &CastRelation, mode: EdgeMode) -> Result<Self, KeyError> {
        let graph = ActorGraph::build(cast, mode, true)?;
        let scratch = Scratch::new(graph.node_count());
        Ok(Self { graph, scratch })
    }

    /// The underlying graph, exposed so callers can pre-validate query
    /// pairs through name↔index resolution.
    #[must_use]
    pub fn graph(&self) -> &ActorGraph {
        &self.graph
    }

    /// Shortest path between two actor names.
    ///
    /// Returns `Ok(None)` when the pair is not connected, which is a normal
    /// result, never an error.
    ///
    /// # Errors
    ///
    /// [`QueryError::UnknownActor`] when either name has no node.
    pub fn shortest_path(
        &mut self,
        from: &str,
        to: &str,
    ) -> Result<Option<PathRecord>, QueryError> {
        let from = self.graph.resolve(from)?;
        let to = self.graph.resolve(to)?;
        Ok(self.shortest_path_between(from, to))
    }

    /// Shortest path between two node indices, dispatching on the graph's
    /// edge policy. Scratch state is reset before returning, reachable or
    /// not.
    pub fn shortest_path_between(&mut self, from: u32, to: u32) -> Option<PathRecord> {
        let reached = match self.graph.mode() {
            EdgeMode::Unweighted => self.scratch.bfs_reach(&self.graph, from, to),
            EdgeMode::Weighted => self.dijkstra(from, to),
        };
        let record = reached.then(|| self.reconstruct(from, to));
        self.scratch.reset();
        record
    }

    /// Lazy-deletion Dijkstra: no decrease-key, duplicate heap entries, and
    /// stale pops skipped via the finalized flag. Stops the instant the
    /// target is popped non-stale.
    fn dijkstra(&mut self, from: u32, to: u32) -> bool {
        let mut frontier: BinaryHeap<Reverse<(i64, u32)>> = BinaryHeap::new();
        self.scratch.distance[from as usize] = 0;
        self.scratch.touch(from);
        frontier.push(Reverse((0, from)));

        while let Some(Reverse((distance, current))) = frontier.pop() {
            if self.scratch.finalized[current as usize] {
                continue; // stale duplicate entry
            }
            if current == to {
                return true;
            }
            self.scratch.finalized[current as usize] = true;
            for (neighbor, edge) in self.graph.node(current).neighbors() {
                let cost = distance + edge.weight;
                if cost < self.scratch.distance[neighbor as usize] {
                    self.scratch.distance[neighbor as usize] = cost;
                    self.scratch.predecessor[neighbor as usize] = Some(current);
                    self.scratch.touch(neighbor);
                    frontier.push(Reverse((cost, neighbor)));
                }
            }
        }
        false
    }

    /// Walks predecessors target→source and reverses into source→target
    /// order.
    ///
    /// The movie label for each step is read from the *later* node's
    /// adjacency entry for its predecessor, matching the direction the edge
    /// was relaxed through.
    fn reconstruct(&self, from: u32, to: u32) -> PathRecord {
        let mut actors = vec![to];
        let mut movies = Vec::new();
        let mut current = to;
        while current != from {
            let Some(previous) = self.scratch.predecessor[current as usize] else {
                debug_assert!(false, "reached target lost its predecessor chain");
                break;
            };
            match self.graph.node(current).edge_to(previous) {
                Some(edge) => movies.push(edge.movie.clone()),
                None => debug_assert!(false, "mirrored adjacency lost the edge back to `{previous}`"),
            }
            actors.push(previous);
            current = previous;
        }
        actors.reverse();
        movies.reverse();
        PathRecord { actors, movies }
    }
}
