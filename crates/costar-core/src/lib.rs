// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! costar-core: actor co-appearance graph engine.
//!
//! Builds a bipartite actor–movie relation from a cast listing and answers
//! two query families over the induced co-appearance graph: single-pair
//! shortest paths (unweighted BFS or recency-weighted Dijkstra, with full
//! path reconstruction) and earliest-connection years (incremental BFS and
//! incremental Union-Find, which must agree).
//!
//! Everything is single-threaded, synchronous, and deterministic: mappings
//! with observable iteration order are `BTreeMap`s, node indices are
//! assigned once and stay stable for the life of a graph, and traversal
//! scratch state is reset between queries.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]

mod cast;
mod connect;
mod dset;
mod graph;
/// Line-oriented input loaders (cast listings, query pairs, name lists).
pub mod load;
/// Report writing (fixed header + ordered result lines).
pub mod report;
mod traverse;

/// Cast relation, movie-key encoding, and year extraction.
pub use cast::{CastRelation, KeyError, MovieKey, YEAR_SEPARATOR};
/// Earliest-connection-year engine and its algorithm selector.
pub use connect::{ConnectAlgorithm, ConnectEngine, NO_CONNECTION_YEAR};
/// Disjoint-set array used by the Union-Find connectivity variant.
pub use dset::DisjointSet;
/// Graph arena, edge policies, and name↔index resolution.
pub use graph::{ActorGraph, Edge, EdgeMode, Node, QueryError};
/// Loader error type.
pub use load::LoadError;
/// Shortest-path engine and reconstructed paths.
pub use traverse::{PathFinder, PathRecord};
