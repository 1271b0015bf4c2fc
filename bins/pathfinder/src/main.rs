// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Pathfinder CLI
//!
//! Loads a tab-delimited cast listing, builds the fully-edged co-appearance
//! graph under the chosen edge policy, and reports the shortest path for
//! each queried actor pair. Unreachable and unresolved pairs produce no
//! report line.
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use costar_core::{load, report, EdgeMode, PathFinder};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Tab-delimited cast listing: actor, movie title, release year.
    casts: PathBuf,
    /// Edge policy: `u` for unweighted hops, `w` for recency weights.
    #[arg(value_enum)]
    mode: Mode,
    /// Tab-delimited actor-name pairs to connect.
    pairs: PathBuf,
    /// Report output path.
    out: PathBuf,
}

/// Edge construction policy, spelled the way the report consumers expect.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Every shared movie costs one hop (BFS).
    #[value(name = "u")]
    Unweighted,
    /// Recent movies cost less: `1 + (2015 - year)` (Dijkstra).
    #[value(name = "w")]
    Weighted,
}

impl From<Mode> for EdgeMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Unweighted => Self::Unweighted,
            Mode::Weighted => Self::Weighted,
        }
    }
}

fn open(path: &Path) -> Result<BufReader<File>> {
    Ok(BufReader::new(File::open(path).with_context(|| {
        format!("failed to open {}", path.display())
    })?))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();
    let started = Instant::now();

    let cast = load::read_cast(open(&args.casts)?)
        .with_context(|| format!("failed to read {}", args.casts.display()))?;
    info!(
        actors = cast.actor_count(),
        movies = cast.movie_count(),
        "cast listing loaded"
    );
    let mut finder = PathFinder::new(&cast, args.mode.into())?;
    let pairs = load::read_pairs(open(&args.pairs)?)
        .with_context(|| format!("failed to read {}", args.pairs.display()))?;

    let mut lines = Vec::new();
    for (from, to) in pairs {
        info!("computing path for ({from}) -> ({to})");
        let source = finder.graph().index_of(&from);
        let target = finder.graph().index_of(&to);
        let (Some(source), Some(target)) = (source, target) else {
            for (name, index) in [(&from, source), (&to, target)] {
                if index.is_none() {
                    warn!("failure to locate node `{name}`");
                }
            }
            continue;
        };
        match finder.shortest_path_between(source, target) {
            Some(path) => lines.push(path.format(finder.graph())),
            None => warn!("no path connects ({from}) to ({to})"),
        }
    }

    report::write_report_file(&args.out, report::PATH_REPORT_HEADER, &lines)
        .with_context(|| format!("failed to write {}", args.out.display()))?;
    info!("time taken: {:.3}s", started.elapsed().as_secs_f64());
    Ok(())
}
