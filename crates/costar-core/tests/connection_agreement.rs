// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Property check: the BFS-based and Union-Find-based earliest-connection
//! algorithms return identical answers for identical inputs. This is the
//! defining correctness property of the connectivity engine.
#![allow(clippy::expect_used, clippy::unwrap_used)]

use costar_core::{CastRelation, ConnectAlgorithm, ConnectEngine, MovieKey};
use proptest::prelude::*;

const ACTOR_POOL: u8 = 6;

/// Arbitrary small cast relations: (actor id, movie id, release year)
/// appearance records. Movie identity includes the year, so colliding movie
/// ids across years are simply distinct movies.
fn records() -> impl Strategy<Value = Vec<(u8, u8, u16)>> {
    prop::collection::vec(
        (0..ACTOR_POOL, 0_u8..8, 1990_u16..2000),
        1..48,
    )
}

proptest! {
    #[test]
    fn bfs_and_union_find_agree_on_every_pair(records in records()) {
        let mut cast = CastRelation::new();
        for &(actor, movie, year) in &records {
            cast.record(
                &format!("A{actor}"),
                MovieKey::from_raw(format!("M{movie}#@{year}")),
            );
        }
        let mut engine = ConnectEngine::new(cast).expect("generated keys are valid");

        for from in 0..ACTOR_POOL {
            for to in 0..ACTOR_POOL {
                let from = format!("A{from}");
                let to = format!("A{to}");
                let bfs = engine.earliest_connection_year(&from, &to, ConnectAlgorithm::Bfs);
                let ufind =
                    engine.earliest_connection_year(&from, &to, ConnectAlgorithm::UnionFind);
                prop_assert_eq!(&bfs, &ufind, "{} - {}", from, to);
            }
        }
    }
}
