// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! End-to-end runs of the pathfinder binary over a temp-dir fixture.
#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CAST: &str = "Actor/Actress\tMovie\tYear\n\
                    A\tM1\t2000\n\
                    B\tM1\t2000\n\
                    B\tM2\t2010\n\
                    C\tM2\t2010\n";

const PAIRS: &str = "Actor1\tActor2\n\
                     A\tC\n\
                     A\tGhost\n";

fn fixture(dir: &TempDir) -> (PathBuf, PathBuf, PathBuf) {
    let casts = dir.path().join("casts.tsv");
    let pairs = dir.path().join("pairs.tsv");
    let out = dir.path().join("out.txt");
    fs::write(&casts, CAST).expect("fixture write");
    fs::write(&pairs, PAIRS).expect("fixture write");
    (casts, pairs, out)
}

#[test]
fn unweighted_run_reports_the_path_and_skips_unresolved_pairs() {
    let dir = TempDir::new().expect("temp dir");
    let (casts, pairs, out) = fixture(&dir);

    Command::cargo_bin("pathfinder")
        .expect("binary is built")
        .arg(&casts)
        .arg("u")
        .arg(&pairs)
        .arg(&out)
        .assert()
        .success();

    // The unresolved A-Ghost pair produces no report line.
    let report = fs::read_to_string(&out).expect("report exists");
    assert_eq!(
        report,
        "(actor)--[movie#@year]-->(actor)--...\n\
         (A)--[M1#@2000]-->(B)--[M2#@2010]-->(C)\n"
    );
}

#[test]
fn weighted_run_reports_the_recency_weighted_path() {
    let dir = TempDir::new().expect("temp dir");
    let (casts, pairs, out) = fixture(&dir);

    Command::cargo_bin("pathfinder")
        .expect("binary is built")
        .arg(&casts)
        .arg("w")
        .arg(&pairs)
        .arg(&out)
        .assert()
        .success();

    let report = fs::read_to_string(&out).expect("report exists");
    assert_eq!(
        report,
        "(actor)--[movie#@year]-->(actor)--...\n\
         (A)--[M1#@2000]-->(B)--[M2#@2010]-->(C)\n"
    );
}

#[test]
fn missing_cast_file_fails_with_context() {
    let dir = TempDir::new().expect("temp dir");
    let (_, pairs, out) = fixture(&dir);

    Command::cargo_bin("pathfinder")
        .expect("binary is built")
        .arg(dir.path().join("nope.tsv"))
        .arg("u")
        .arg(&pairs)
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open"));
}
